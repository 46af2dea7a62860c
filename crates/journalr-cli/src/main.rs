//! Journalr CLI - a small personal journal for the command line
//!
//! Entries are short dated notes with tags, kept in a local SQLite file.
//! This binary maps verbs onto the `journalr-core` store.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;
use log::debug;

use journalr_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, misc};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            cli_error.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    let _logger = init_logging(&ctx.log_level()?)?;

    let result = dispatch(ctx, cli);
    if let Err(ref e) = result {
        debug!("event=command module=cli status=error error={:#}", e);
    }
    result
}

fn dispatch(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            entries::handle_edit(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            entries::handle_remove(ctx, args)?;
        }
        Some(Commands::Tag(args)) => {
            entries::handle_tag(ctx, args)?;
        }
        Some(Commands::Date(args)) => {
            misc::handle_date(args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Journalr v{}", VERSION);
            println!("\nQuickstart:");
            println!("  journalr add --body \"Hello\" --tags first");
            println!("  journalr ls -n 5");
            println!("  journalr ls -d \"last week\"");
            println!("  journalr tag -t idea");
            println!("  journalr rm -i <id>");
            println!("\nRun `journalr --help` for full usage.");
        }
    }

    Ok(())
}
