use chrono::Local;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs, DateArgs};
use crate::helpers::{interpret_date_phrase, DateSpan};
use crate::output::display_date;

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "journalr", &mut std::io::stdout());
    Ok(())
}

/// Print how a phrase resolves. An unknown phrase is reported, not an error.
pub fn handle_date(args: &DateArgs) -> anyhow::Result<()> {
    let phrase = args.datetime.as_deref().unwrap_or("");
    match interpret_date_phrase(phrase, &Local::now()) {
        Some(span) => println!("{}", describe_span(&span)),
        None => println!("Parse failed"),
    }
    Ok(())
}

fn describe_span(span: &DateSpan) -> String {
    if span.is_instant() {
        display_date(&span.start)
    } else {
        format!("{} .. {}", display_date(&span.start), display_date(&span.end))
    }
}
