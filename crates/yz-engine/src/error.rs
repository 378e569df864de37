//! Error types for the game engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can surface while driving a game.
///
/// Scoring and the state machine are total over every reachable state, so
/// all of these originate in an I/O adapter.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The adapter failed to read input or draw output.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The adapter could not be set up or failed in some other way.
    #[error("adapter error: {0}")]
    Adapter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: EngineError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, EngineError::Io(_)));
        assert_eq!(err.to_string(), "i/o error: broken pipe");
    }

    #[test]
    fn adapter_error_display() {
        let err = EngineError::Adapter("no terminal".to_string());
        assert_eq!(err.to_string(), "adapter error: no terminal");
    }
}
