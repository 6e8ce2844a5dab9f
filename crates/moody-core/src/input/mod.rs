//! Readers for the trusted local input files: `Config.txt` plus one data
//! file per measurement line. All failures here are fatal; no partial
//! survey is ever handed to the pipeline.

pub mod config;
pub mod readings;

/// True for lines the input files treat as non-data: blank lines and
/// `#` comments.
fn is_skippable(line: &str) -> bool {
    let head = line.trim_start();
    head.is_empty() || head.starts_with('#')
}
