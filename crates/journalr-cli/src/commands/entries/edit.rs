use chrono::Local;

use journalr_core::JournalStore;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{parse_tag_list, read_optional_body, require_date_span};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let entry_date = match args.datetime.as_deref() {
        Some(phrase) => Some(require_date_span(phrase, &Local::now())?.start),
        None => None,
    };
    let body = read_optional_body(args.body.clone())?;

    let store = ctx.open_store()?;
    let Some(mut entry) = store.get_entry(&args.id)? else {
        if !ctx.quiet() {
            println!("Entry not found");
        }
        return Ok(());
    };

    if let Some(text) = body {
        entry.text = text;
    }
    if let Some(date) = entry_date {
        entry.entry_date = date;
    }
    if let Some(ref tags) = args.tags {
        entry.tags = parse_tag_list(tags);
    }

    let updated = store.update_entry(&entry)?;
    if !ctx.quiet() {
        println!("{}", if updated { "Updated" } else { "Update failed" });
    }
    Ok(())
}
