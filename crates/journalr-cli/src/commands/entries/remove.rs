use journalr_core::JournalStore;

use crate::app::AppContext;
use crate::cli::RemoveArgs;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let deleted = match args.id {
        Some(ref id) => store.remove_entry(id)?,
        None => store.remove_recent(args.count)?,
    };

    if !ctx.quiet() {
        println!("{}", if deleted { "Deleted" } else { "Delete failed" });
    }
    Ok(())
}
