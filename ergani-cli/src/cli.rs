//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ergani_client::DocumentKind;
use std::path::PathBuf;

/// Document kind accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DocumentArg {
    /// Clock-in / clock-out declarations
    WorkCard,
    /// Overtime declarations
    Overtime,
    /// Daily work schedules
    DailySchedule,
    /// Weekly work schedules
    WeeklySchedule,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::WorkCard => DocumentKind::WorkCard,
            DocumentArg::Overtime => DocumentKind::Overtime,
            DocumentArg::DailySchedule => DocumentKind::DailySchedule,
            DocumentArg::WeeklySchedule => DocumentKind::WeeklySchedule,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check credentials by authenticating once
    Auth,
    /// Submit a JSON file of batches
    Submit {
        /// Kind of document in the file
        #[arg(value_enum)]
        kind: DocumentArg,
        /// JSON array of batches
        file: PathBuf,
    },
    /// Print the wire payload of a JSON file of batches without sending it
    Encode {
        /// Kind of document in the file
        #[arg(value_enum)]
        kind: DocumentArg,
        /// JSON array of batches
        file: PathBuf,
    },
}

/// Ergani declaration submitter
#[derive(Parser, Debug)]
#[command(name = "ergani", about = "Submit labor declarations to Ergani", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Ergani username (defaults to $ERGANI_USERNAME)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// API root (defaults to $ERGANI_BASE_URL, then the trial environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode - only print protocol numbers
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
