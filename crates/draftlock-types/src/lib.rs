pub mod document;
pub mod state;
mod title;
mod util;

pub use document::{DocMode, Document, LockState};
pub use state::AppState;
pub use title::{TITLE_MAX_CHARS, derive_title};
pub use util::*;
