use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Convenient alias for results returned by the timeline library.
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Broad category of a [`TimelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Phase table or other configuration violates an invariant.
    Config,
    /// Reading a configuration source failed.
    Io,
    /// A configuration source could not be decoded.
    Parse,
    /// The viewer failed to start.
    Ui,
}

#[derive(Debug, Clone)]
pub struct TimelineError {
    kind: ErrorKind,
    message: Arc<str>,
}

impl TimelineError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Arc::from(message.into()),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TimelineError {}

impl From<std::io::Error> for TimelineError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Parse, err.to_string())
    }
}
