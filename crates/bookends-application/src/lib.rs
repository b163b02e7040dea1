pub mod active_theme;
pub mod session;

pub use active_theme::ActiveTheme;
pub use session::{
    MediaCustomizationSession, SaveKind, SessionPhase, ThemeEditingSession,
};
