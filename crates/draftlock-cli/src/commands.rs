use super::args::{Cli, Commands, DocCommand, ModeCommand};
use super::handlers;
use anyhow::Result;
use draftlock_runtime::{Draftlock, resolve_workspace_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let mut workspace = Draftlock::open(data_dir)?;

    match command {
        Commands::Doc { command } => match command {
            DocCommand::New { content } => {
                handlers::doc_new::handle(&mut workspace, content.as_deref(), cli.format)
            }
            DocCommand::List { limit } => {
                handlers::doc_list::handle(&mut workspace, limit, cli.format)
            }
            DocCommand::Select { id } => handlers::doc_select::handle(&mut workspace, &id),
            DocCommand::Delete { id } => handlers::doc_delete::handle(&mut workspace, &id),
            DocCommand::Show { id } => handlers::doc_show::handle(&workspace, id.as_deref()),
        },

        Commands::Append { text, newline } => {
            handlers::append::handle(&mut workspace, text.as_deref(), newline)
        }

        Commands::Revise { text } => handlers::revise::handle(&mut workspace, text.as_deref()),

        Commands::Mode { command } => match command {
            ModeCommand::Edit { confirm } => {
                handlers::mode_edit::handle(&mut workspace, confirm.as_deref())
            }
            ModeCommand::Write => handlers::mode_write::handle(&mut workspace),
        },

        Commands::Status => handlers::status::handle(&mut workspace, cli.format),

        Commands::Watch { interval_ms } => {
            handlers::watch::handle(workspace, interval_ms, cli.format)
        }

        Commands::Export { output } => handlers::export::handle(&workspace, output),
    }
}

fn show_guidance(data_dir: &Path) {
    println!("draftlock - draft without a delete key\n");
    println!("Data directory: {}\n", data_dir.display());
    println!("Quick commands:");
    println!("  draftlock doc new \"First line\"   # Start a draft (write lock armed)");
    println!("  draftlock append \"more words\"    # Add to the active draft");
    println!("  draftlock status                 # Mode, lock state, remaining time");
    println!("  draftlock watch                  # Live countdown");
    println!("  draftlock mode edit              # Unlock revision (after the timer)");
    println!("\nFor more commands:");
    println!("  draftlock --help");
}
