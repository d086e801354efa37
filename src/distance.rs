use crate::cell::Cell;

/// Levenshtein distance over arbitrary comparable tokens.
///
/// Unit cost for insertion, deletion and substitution; tokens only ever
/// compare by equality. Working memory is one row of the shorter operand.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let n = short.len();

    let mut previous: Vec<usize> = (0..=n).collect();
    let mut current = vec![0usize; n + 1];

    for (i, long_tok) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_tok) in short.iter().enumerate() {
            let insert = previous[j + 1] + 1;
            let delete = current[j] + 1;
            let change = previous[j] + usize::from(short_tok != long_tok);
            current[j + 1] = insert.min(delete).min(change);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[n]
}

/// Edit distance between two cell sequences.
pub fn distance(a: &[Cell], b: &[Cell]) -> usize {
    edit_distance(a, b)
}
