use chrono::Local;

use journalr_core::{EntryQuery, JournalStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::{parse_output_format, require_date_span};
use crate::output::{entries_json, print_entry_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let mut query = EntryQuery::new();
    if let Some(ref phrase) = args.datetime {
        let span = require_date_span(phrase, &Local::now())?;
        query = query.range(span.start, span.end);
    }
    if let Some(count) = args.count {
        query = query.count(count);
    }

    let store = ctx.open_store()?;
    let mut entries = store.list_entries(&query)?;

    // Tag filtering happens after the store has applied range and count.
    if let Some(ref tag) = args.tag {
        entries.retain(|entry| entry.has_tag(tag));
    }

    if args.json {
        let output = serde_json::to_string_pretty(&entries_json(&entries))?;
        println!("{}", output);
        return Ok(());
    }

    if entries.is_empty() {
        if !ctx.quiet() {
            println!("No entries found");
        }
        return Ok(());
    }

    print_entry_list(&entries, format);
    Ok(())
}
