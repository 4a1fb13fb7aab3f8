//! Runtime error types

use frameloop_core::FrameError;
use thiserror::Error;

/// Invalid setup, reported before anything is drawn.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid step interval: {0}")]
    InvalidStep(String),

    #[error("At least one of the start and end messages must be set")]
    MissingMessage,

    #[error("'{name}' is already annotated; annotate the animated work instead")]
    DecorationOrder { name: String },

    #[error("'{name}' is already animated")]
    AlreadyAnimated { name: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    Frames(#[from] FrameError),
}

/// Failure inside the render loop. Never folded into the work's result.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Terminal write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error(transparent)]
    Frames(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_order_message() {
        let err = ConfigError::DecorationOrder {
            name: "build".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'build' is already annotated; annotate the animated work instead"
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            key: "FRAMELOOP_OUTPUT".to_string(),
            value: "tty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for FRAMELOOP_OUTPUT: \"tty\"");
    }

    #[test]
    fn test_frame_error_is_transparent() {
        let err = ConfigError::from(FrameError::EmptySequence);
        assert_eq!(err.to_string(), "cannot cycle an empty sequence");
    }

    #[test]
    fn test_write_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = RenderError::from(io_err);
        assert!(err.to_string().contains("pipe closed"));
    }
}
