use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage documents")]
    Doc {
        #[command(subcommand)]
        command: DocCommand,
    },

    #[command(about = "Append text to the active document (stdin when no argument)")]
    Append {
        /// Text to append; read from stdin when omitted
        text: Option<String>,

        /// Append a newline before the text
        #[arg(long)]
        newline: bool,
    },

    #[command(about = "Replace the active document's content (edit mode only)")]
    Revise {
        /// Replacement text; read from stdin when omitted
        text: Option<String>,
    },

    #[command(about = "Switch the active document's mode")]
    Mode {
        #[command(subcommand)]
        command: ModeCommand,
    },

    #[command(about = "Show the active document's mode, lock state and counters")]
    Status,

    #[command(about = "Watch the active document's countdown live")]
    Watch {
        /// Override the configured tick interval
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    #[command(about = "Export all documents as JSON")]
    Export {
        /// Output path (defaults to draftlock-export-YYYYMMDD.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DocCommand {
    #[command(about = "Create a new document and make it active")]
    New {
        /// Initial content
        content: Option<String>,
    },

    #[command(about = "List documents, most recently created first")]
    List {
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    #[command(about = "Make a document active (accepts a unique id prefix)")]
    Select {
        /// Document id or unique prefix
        id: String,
    },

    #[command(about = "Delete a document (accepts a unique id prefix)")]
    Delete {
        /// Document id or unique prefix
        id: String,
    },

    #[command(about = "Print a document's content (active document by default)")]
    Show {
        /// Document id or unique prefix
        id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ModeCommand {
    #[command(about = "Enter edit mode (requires the confirmation ritual; denied while locked)")]
    Edit {
        /// Supply the confirmation phrase non-interactively
        #[arg(long)]
        confirm: Option<String>,
    },

    #[command(about = "Return to write mode (never restarts the lock)")]
    Write,
}
