use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use journalr_core::VERSION;

/// Journalr - a small personal journal for the command line
#[derive(Parser)]
#[command(name = "journalr")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(long, global = true, env = "JOURNALR_PATH", value_name = "PATH")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry body (otherwise read from piped stdin)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Comma-separated tags, e.g. "work,ideas"
    #[arg(short, long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// When the entry happened, e.g. "yesterday" or "2024-01-01 09:30"
    #[arg(short = 'd', long, value_name = "PHRASE")]
    pub datetime: Option<String>,
}

/// Arguments for the `ls` command
#[derive(Args)]
pub struct ListArgs {
    /// Show at most this many entries
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Only entries inside this period, e.g. "last week" or "7d"
    #[arg(short = 'd', long, value_name = "PHRASE")]
    pub datetime: Option<String>,

    /// Only entries carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (plain, table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID, e.g. amber-falcon-42
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replacement body (otherwise read from piped stdin, or kept)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Replacement tags, comma separated
    #[arg(short, long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Replacement entry date
    #[arg(short = 'd', long, value_name = "PHRASE")]
    pub datetime: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Remove the entry with this ID
    #[arg(short, long)]
    pub id: Option<String>,

    /// Remove this many of the most recent entries
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "id")]
    pub count: usize,
}

/// Arguments for the `tag` command
#[derive(Args)]
pub struct TagArgs {
    /// Tag the entry with this ID
    #[arg(short, long)]
    pub id: Option<String>,

    /// Tag this many of the most recent entries
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "id")]
    pub count: usize,

    /// Comma-separated tags to add
    #[arg(short, long, value_name = "TAGS")]
    pub tags: String,
}

/// Arguments for the `date` command
#[derive(Args)]
pub struct DateArgs {
    /// Phrase to interpret (defaults to now)
    #[arg(short = 'd', long, value_name = "PHRASE")]
    pub datetime: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an entry
    Add(AddArgs),

    /// List entries, newest first
    #[command(name = "ls", visible_alias = "list")]
    List(ListArgs),

    /// Show a single entry by ID
    Show(ShowArgs),

    /// Change an entry's body, tags or date
    Edit(EditArgs),

    /// Remove an entry by ID, or the most recent entries
    #[command(name = "rm", visible_alias = "remove")]
    Remove(RemoveArgs),

    /// Add tags to an entry by ID, or to the most recent entries
    Tag(TagArgs),

    /// Show how a date phrase is interpreted
    Date(DateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command needs the config file (store path, word list).
    pub fn reads_config(&self) -> bool {
        !matches!(self, Commands::Date(_) | Commands::Completions(_))
    }
}
