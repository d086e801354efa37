pub mod api;
pub mod cell;
pub mod config;
pub mod distance;
pub mod error;
pub mod lexicon;
pub mod ranker;
pub mod symbols;
// cmd and reports are binary modules (declared in main.rs).
