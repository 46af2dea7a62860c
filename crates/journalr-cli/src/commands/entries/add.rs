use chrono::Local;
use log::warn;

use journalr_core::{generate_id, Entry, JournalError, JournalStore};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_tag_list, read_entry_body, require_date_span};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let phrase = args.datetime.as_deref().unwrap_or("");
    let entry_date = require_date_span(phrase, &Local::now())?.start;
    let body = read_entry_body(args.body.clone())?;
    let tags = args
        .tags
        .as_deref()
        .map(parse_tag_list)
        .unwrap_or_default();

    let store = ctx.open_store()?;
    let id = generate_id(&ctx.word_source()?)?;
    let entry = Entry::new(id, body, entry_date).with_tags(tags);

    let added = match store.add_entry(&entry) {
        Ok(added) => added,
        Err(JournalError::DuplicateId(id)) => {
            warn!("event=entry_add module=cli status=duplicate id={}", id);
            false
        }
        Err(err) => return Err(err.into()),
    };

    if !added {
        println!("Failed to add entry");
    } else if ctx.quiet() {
        println!("{}", entry.id);
    } else {
        println!("Added entry: {}", entry.id);
    }
    Ok(())
}
