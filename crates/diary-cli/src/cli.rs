use clap::{Args, Parser, Subcommand, ValueEnum};

use diary_core::VERSION;

/// Diary - a password-protected personal diary for the command line
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the diary files
    #[arg(short, long, global = true, env = "DIARY_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Account to act on
    #[arg(short, long, global = true, env = "DIARY_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `register` command
#[derive(Args)]
pub struct RegisterArgs {
    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry text (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to look for (case-insensitive)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(value_name = "PATH")]
    pub destination: String,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Pdf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new diary account
    Register(RegisterArgs),

    /// Add a new entry stamped with the current time
    Add(AddArgs),

    /// Show all entries in creation order
    List(ListArgs),

    /// Show entries containing a keyword
    Search(SearchArgs),

    /// Write all entries to a file
    Export(ExportArgs),
}
