use journalr_core::JournalStore;

use crate::app::AppContext;
use crate::cli::TagArgs;
use crate::helpers::parse_tag_list;

pub fn handle_tag(ctx: &AppContext, args: &TagArgs) -> anyhow::Result<()> {
    let tags = parse_tag_list(&args.tags);
    let store = ctx.open_store()?;

    let tagged = match args.id {
        Some(ref id) => store.tag_entry(id, &tags)?,
        None => store.tag_recent(args.count, &tags)?,
    };

    if !ctx.quiet() {
        println!("{}", if tagged { "Tagged" } else { "Tag failed" });
    }
    Ok(())
}
