use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codemap",
    version,
    about = "Codemap - structural index and convention digest for a source tree",
    long_about = "Codemap maintains a lightweight index of a project's modules (exported \
symbols and import targets), infers the codebase's naming and organizational conventions, \
and keeps a compact digest under .codemap/ for humans and LLM prompts alike."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one file-mutation trigger from stdin
    #[command(about = "Read a JSON trigger payload from stdin and update the map; always exits 0")]
    Hook(HookArgs),

    /// Index a whole source tree in one pass
    #[command(about = "Walk a project tree and index every source file")]
    Scan(ScanArgs),

    /// Print the current digest
    #[command(about = "Regenerate and print the codebase digest")]
    Summary(SummaryArgs),
}

#[derive(Parser, Debug)]
pub struct HookArgs {
    /// Project root the map lives under (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Project root to scan (defaults to the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Project root the map lives under (defaults to the current directory)
    pub path: Option<PathBuf>,
}
