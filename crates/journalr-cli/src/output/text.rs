//! Text and table output formatting for entries.

use std::io::{self, IsTerminal};

use chrono::{DateTime, Local, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use journalr_core::Entry;

use crate::helpers::OutputFormat;

const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Longest body excerpt shown in a table cell.
const TABLE_TEXT_MAX: usize = 60;

/// Entry date in the local timezone, for display.
pub fn display_date(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format(DISPLAY_DATE_FORMAT)
        .to_string()
}

/// `<local date>\t<id>\t<tags>` header line.
pub fn entry_header(entry: &Entry) -> String {
    format!(
        "{}\t{}\t{}",
        display_date(&entry.entry_date),
        entry.id,
        entry.tags.join(", ")
    )
}

/// Plain rendering: dim header line, body, blank line.
pub fn render_entry(entry: &Entry, color: bool) -> String {
    let header = entry_header(entry);
    if color {
        format!("{}\n{}\n", header.dimmed(), entry.text)
    } else {
        format!("{}\n{}\n", header, entry.text)
    }
}

pub fn print_entry(entry: &Entry) {
    println!("{}", render_entry(entry, color_enabled()));
}

pub fn entries_table(entries: &[Entry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["DATE", "ID", "TAGS", "TEXT"]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(display_date(&entry.entry_date)),
            Cell::new(&entry.id),
            Cell::new(entry.tags.join(", ")),
            Cell::new(summary(&entry.text, TABLE_TEXT_MAX)),
        ]);
    }

    table.to_string()
}

/// Print a list of entries in the requested format (plain by default).
pub fn print_entry_list(entries: &[Entry], format: Option<OutputFormat>) {
    match format.unwrap_or(OutputFormat::Plain) {
        OutputFormat::Plain => {
            let color = color_enabled();
            for entry in entries {
                println!("{}", render_entry(entry, color));
            }
        }
        OutputFormat::Table => println!("{}", entries_table(entries)),
    }
}

/// First line of `text`, cut to `max` characters.
fn summary(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= max {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Colors only on a terminal, and never when NO_COLOR is set or TERM=dumb.
fn color_enabled() -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let dumb = std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false);
    io::stdout().is_terminal() && !no_color && !dumb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> Entry {
        Entry::new(
            "amber-falcon-42",
            "hello\nsecond line",
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        )
        .with_tags(vec!["x".to_string(), "y".to_string()])
    }

    #[test]
    fn test_header_layout() {
        let header = entry_header(&entry());
        let parts: Vec<&str> = header.split('\t').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], "amber-falcon-42");
        assert_eq!(parts[2], "x, y");
    }

    #[test]
    fn test_plain_render_without_color() {
        let rendered = render_entry(&entry(), false);
        assert!(rendered.ends_with("\tamber-falcon-42\tx, y\nhello\nsecond line\n"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_plain_render_with_color_dims_header() {
        let rendered = render_entry(&entry(), true);
        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("hello"));
    }

    #[test]
    fn test_table_contains_rows() {
        let table = entries_table(&[entry()]);
        assert!(table.contains("amber-falcon-42"));
        assert!(table.contains("TAGS"));
        assert!(!table.contains("second line"));
    }

    #[test]
    fn test_summary_truncates() {
        assert_eq!(summary("short", 10), "short");
        assert_eq!(summary("abcdefghijkl", 8), "abcde...");
    }
}
