use crate::presentation::formatters::format_remaining;
use crate::presentation::presenters::present_watch_event;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use crossterm::event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draftlock_runtime::{Draftlock, LockTicker, TickerEvent};
use is_terminal::IsTerminal;
use std::io::Write;
use std::time::Duration;

pub fn handle(
    mut workspace: Draftlock,
    interval_ms: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(interval) = interval_ms {
        workspace.config_mut().tick_interval_ms = interval.max(1);
    }

    let doc = workspace
        .store()
        .active_document()
        .context("no active document")?;

    let interactive = std::io::stdout().is_terminal() && format == OutputFormat::Plain;
    if format == OutputFormat::Plain {
        println!("Watching {} ({})", doc.title, doc.mode);
        if interactive {
            println!("Focus away to pause the surface; 'q' to quit.");
        }
    }

    let ticker = workspace.into_ticker()?;
    if interactive {
        watch_interactive(&ticker)
    } else {
        watch_plain(&ticker, format)
    }
    // Dropping the ticker stops the worker and waits for its final persist.
}

/// Line-per-event rendering for pipes and `--format json`.
fn watch_plain(ticker: &LockTicker, format: OutputFormat) -> Result<()> {
    while let Ok(ticker_event) = ticker.events().recv() {
        match format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string(&present_watch_event(&ticker_event))?
                );
            }
            OutputFormat::Plain => match ticker_event {
                TickerEvent::Tick { remaining_ms } => {
                    println!("locked · {} remaining", format_remaining(remaining_ms));
                }
                TickerEvent::Unlocked => println!("write lock released"),
                TickerEvent::Suspended => println!("paused"),
                TickerEvent::Resumed { remaining_ms } => {
                    println!("resumed · {} remaining", format_remaining(remaining_ms));
                }
                TickerEvent::Stopped { .. } => {}
            },
        }
        if matches!(ticker_event, TickerEvent::Stopped { .. }) {
            break;
        }
    }
    Ok(())
}

/// Live countdown on a TTY. Terminal focus-lost/gained events map to the
/// visibility contract (suspend / re-anchor + resume).
fn watch_interactive(ticker: &LockTicker) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnableFocusChange)?;

    let result = interactive_loop(ticker, &mut stdout);

    let _ = execute!(stdout, DisableFocusChange);
    let _ = disable_raw_mode();
    println!();
    result
}

fn interactive_loop(ticker: &LockTicker, stdout: &mut std::io::Stdout) -> Result<()> {
    loop {
        while let Ok(ticker_event) = ticker.events().try_recv() {
            match ticker_event {
                TickerEvent::Tick { remaining_ms } => {
                    write!(
                        stdout,
                        "\rlocked · {} remaining   ",
                        format_remaining(remaining_ms)
                    )?;
                    stdout.flush()?;
                }
                TickerEvent::Unlocked => {
                    write!(
                        stdout,
                        "\r\nwrite lock released — 'draftlock mode edit' to revise\r\n"
                    )?;
                }
                TickerEvent::Suspended => {
                    write!(stdout, "\r\npaused (surface hidden)\r\n")?;
                }
                TickerEvent::Resumed { remaining_ms } => {
                    write!(
                        stdout,
                        "resumed · {} remaining\r\n",
                        format_remaining(remaining_ms)
                    )?;
                }
                TickerEvent::Stopped { .. } => return Ok(()),
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::FocusLost => ticker.suspend(),
                Event::FocusGained => ticker.resume(),
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
}
