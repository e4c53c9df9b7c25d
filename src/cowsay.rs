use concat_string::concat_string;
use log::debug;

use crate::utils::normalize;

/// Delimiters for one balloon row: (left, right).
fn delimiters(row: usize, count: usize) -> (&'static str, &'static str) {
    match (row, count) {
        (_, 1) => ("<", ">"),
        (0, _) => ("/", "\\"),
        (r, c) if r == c - 1 => ("\\", "/"),
        _ => ("|", "|"),
    }
}

/// Draw the balloon around lines that are already padded to `max_width`.
///
/// One line gets `< >` delimiters, more than one get `/ \` on top, `\ /` at the
/// bottom and `| |` in between. No lines at all draws an empty one-row balloon.
pub fn build_balloon<S: AsRef<str>>(lines: &[S], max_width: usize) -> String {
    let blank = " ".repeat(max_width);
    let rows: Vec<&str> = if lines.is_empty() {
        vec![blank.as_str()]
    } else {
        lines.iter().map(|line| line.as_ref()).collect()
    };

    let mut o = String::with_capacity((max_width + 5) * (rows.len() + 2));
    o.push(' ');
    o.push_str("_".repeat(max_width + 2).as_str());
    o.push('\n');
    for (i, line) in rows.iter().enumerate() {
        let (left, right) = delimiters(i, rows.len());
        o.push_str(&concat_string!(left, " ", line, " ", right, "\n"));
    }
    o.push(' ');
    o.push_str("-".repeat(max_width + 2).as_str());
    o
}

/// Normalize raw input lines and wrap them in a balloon.
pub fn gen_bubble<S: AsRef<str>>(lines: &[S]) -> String {
    let (lines, max_width) = normalize(lines);
    debug!("balloon: {} lines, width {}", lines.len(), max_width);
    build_balloon(&lines, max_width)
}
