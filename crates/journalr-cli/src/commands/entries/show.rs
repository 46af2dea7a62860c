use journalr_core::JournalStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let Some(entry) = store.get_entry(&args.id)? else {
        if !ctx.quiet() {
            println!("Entry not found");
        }
        return Ok(());
    };

    if args.json {
        let output = serde_json::to_string_pretty(&entry_json(&entry))?;
        println!("{}", output);
    } else {
        print_entry(&entry);
    }
    Ok(())
}
