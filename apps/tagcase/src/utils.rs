//! Colored stderr prefixes for user-facing notes and errors.

use owo_colors::OwoColorize;

fn prefix(label: &str, color: bool, paint: fn(&str) -> String) -> String {
    if color {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix(color: bool) -> String {
    prefix("error:", color, |s| s.red().bold().to_string())
}

pub fn warning_prefix(color: bool) -> String {
    prefix("warning:", color, |s| s.yellow().bold().to_string())
}

pub fn note_prefix(color: bool) -> String {
    prefix("note:", color, |s| s.blue().bold().to_string())
}
