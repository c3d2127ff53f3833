use std::fmt;

/// Why a status document could not be produced
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Upstream unreachable, timed out, or answered with a non-success status
    Transport(String),
    /// Upstream body is not the expected structure
    Decode(String),
    /// Upstream structure is fine but the status literal is not recognized
    UnknownState(String),
}

impl TranslateError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::Transport(_) => "transport",
            TranslateError::Decode(_) => "decode",
            TranslateError::UnknownState(_) => "unknown_state",
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Transport(msg) => write!(f, "state api request failed: {}", msg),
            TranslateError::Decode(msg) => write!(f, "invalid state api response: {}", msg),
            TranslateError::UnknownState(state) => write!(f, "unknown state: {}", state),
        }
    }
}

impl std::error::Error for TranslateError {}
