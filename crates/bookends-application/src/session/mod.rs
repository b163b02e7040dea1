//! Editing sessions.
//!
//! Both sessions follow the same lifecycle:
//!
//! ```text
//! Loading --finish_load--> Ready --(edit / undo / redo / import)--> Ready
//!    |                       |
//!    +------- close ---------+--> Closed
//! ```
//!
//! Loading is split into a detached fetch (`loader().fetch()`) and
//! `finish_load`, so a caller may run the fetch on another task and still
//! have a late result dropped if the session was closed in the meantime.

mod media;
mod theme;

pub use media::{MediaCustomizationSession, MediaLoader, SaveKind};
pub use theme::{ThemeEditingSession, ThemeLoader};

use bookends_core::BookendsError;
use bookends_core::error::Result;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Ready,
    Closed,
}

impl SessionPhase {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    pub(crate) fn ensure_ready(self, operation: &str) -> Result<()> {
        match self {
            Self::Ready => Ok(()),
            Self::Loading => Err(BookendsError::invalid_state(format!(
                "cannot {} while the session is loading",
                operation
            ))),
            Self::Closed => Err(BookendsError::invalid_state(format!(
                "cannot {} after the session was closed",
                operation
            ))),
        }
    }
}
