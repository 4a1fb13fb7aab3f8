use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("cannot cycle an empty sequence")]
    EmptySequence,

    #[error("malformed frame source: {0}")]
    MalformedFrame(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
