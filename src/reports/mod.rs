use braille_autocorrect::api::SuggestionReport;
use braille_autocorrect::cell::Cell as BrailleCell;
use braille_autocorrect::error::BaResult;
use braille_autocorrect::lexicon::EncodedWord;
use braille_autocorrect::symbols::{letter_dots, letter_keys, letters};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn dot_numbers(cell: &BrailleCell) -> String {
    match cell.dots() {
        Some(dots) => dots.iter().map(|d| d.number().to_string()).collect(),
        None => "-".to_string(),
    }
}

pub fn print_input_summary(report: &SuggestionReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Token").add_attribute(Attribute::Bold),
        Cell::new("Cell"),
        Cell::new("Dots"),
        Cell::new("Letter").fg(Color::Cyan),
    ]);

    for (token, cell) in report.tokens.iter().zip(&report.cells) {
        let letter = cell
            .letter()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(vec![
            Cell::new(token),
            Cell::new(cell.as_str()),
            Cell::new(dot_numbers(cell)),
            Cell::new(letter)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("\nInput: {}", report.decoded);
    println!("{}", table);
}

pub fn print_suggestions(report: &SuggestionReport) {
    if report.suggestions.is_empty() {
        println!("\nNo suggestions.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Green),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, s) in report.suggestions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&s.word),
            Cell::new(s.distance).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);

    println!("\nSuggestions:");
    for s in &report.suggestions {
        println!("  - {}", s);
    }
}

pub fn print_encodings(rows: &[(String, BaResult<EncodedWord>)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Cells"),
        Cell::new("Dots"),
    ]);

    for (word, res) in rows {
        match res {
            Ok(cells) => {
                let keys: Vec<&str> = cells.iter().map(BrailleCell::as_str).collect();
                let dots: Vec<String> = cells.iter().map(dot_numbers).collect();
                table.add_row(vec![
                    Cell::new(word).add_attribute(Attribute::Bold),
                    Cell::new(keys.join(" ")),
                    Cell::new(dots.join(" ")),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(word).add_attribute(Attribute::Bold),
                    Cell::new(e.to_string()).fg(Color::Red),
                    Cell::new("-"),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn print_letter_table() -> BaResult<()> {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Dots"),
    ]);

    for letter in letters() {
        let keys: String = letter_keys(letter)?.iter().map(|k| k.as_char()).collect();
        let dots: String = letter_dots(letter)?
            .iter()
            .map(|d| d.number().to_string())
            .collect();
        table.add_row(vec![
            Cell::new(letter).set_alignment(CellAlignment::Center),
            Cell::new(keys),
            Cell::new(dots),
        ]);
    }
    println!("\n{}", table);
    Ok(())
}
