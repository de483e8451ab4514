pub mod config;
mod controller;
mod error;
mod ticker;
mod workspace;

pub use config::{Config, resolve_workspace_path};
pub use controller::{EditOutcome, LockController, TickReport};
pub use error::{Error, Result};
pub use ticker::{LockTicker, StopReason, TickerControl, TickerEvent};
pub use workspace::Draftlock;
