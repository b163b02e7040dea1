//! Journal media (per-journal customization) models and repository trait.
//!
//! A journal's media record holds the colors, fonts and wallpaper applied
//! when the journal is opened, plus a switch that turns the customization
//! on or off as a whole.

mod model;
mod repository;

pub use model::Media;
pub use repository::MediaRepository;
