//! Swing tempo model: phase timeline, timing accuracy scoring, and a
//! playback machine driven by an external clock.

pub mod animation;
pub mod cli;
pub mod coaching;
pub mod config;
pub mod error;
pub mod playback;
pub mod scoring;
pub mod timeline;
pub mod types;
pub mod ui;

pub use error::{ErrorKind, Result, TimelineError};
