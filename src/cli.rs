use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seoscore",
    version,
    about = "SEO content quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a content file (or stdin) against target keywords
    Analyze(AnalyzeCommand),
    /// Score a JSON request and print the Markdown report
    Request(RequestCommand),
    /// Score every draft in a directory
    Batch(BatchCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Content file, or `-` for stdin
    pub input: PathBuf,
    /// Target keyword (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,
    #[arg(long)]
    pub min_words: Option<usize>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Write the report to this file or directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Exit with code 2 when the score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,
}

#[derive(Args)]
pub struct RequestCommand {
    /// JSON request file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,
    #[arg(long)]
    pub min_words: Option<usize>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 2 when any draft scores below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,
}
