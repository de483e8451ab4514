// NOTE: Command Organization Rationale
//
// Why namespaced subcommands for documents (doc new/list/select/delete/show)
// but flat verbs for the writing surface (append, revise, mode, status,
// watch, export)?
// - Document management is a coherent namespace; grouping it keeps --help
//   discoverable
// - The writing-surface verbs are the ones typed dozens of times a session
//   and earn top-level names

mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "draftlock")]
#[command(about = "Draft without a delete key: edits unlock after a cooling-off timer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $DRAFTLOCK_PATH, then the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
