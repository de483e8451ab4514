// NOTE: draftlock CLI Architecture Rationale
//
// Why does every command open the workspace fresh?
// - The lock is wall-clock-based: remaining time derives from the persisted
//   anchor, so a new process recomputes the truth with one tick
// - No daemon is required for correctness; `watch` only exists to show the
//   countdown live and to map terminal focus to the visibility contract
//
// Why are denials exit-code-1 messages, not panics?
// - A blocked revision and a premature unlock are the product working as
//   intended; the CLI surfaces the core's typed rejection and exits 1

mod args;
mod commands;
mod handlers;
mod presentation;
mod types;

pub use args::{Cli, Commands, DocCommand, ModeCommand};
pub use commands::run;
pub use types::OutputFormat;
