use thiserror::Error;

/// Errors produced while writing or decoding WAV files.
#[derive(Error, Debug)]
pub enum WavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV file is not open for writing")]
    NotOpen,

    #[error("WAV writer has already been closed")]
    AlreadyClosed,

    #[error("Invalid WAV header: {0}")]
    InvalidHeader(String),

    #[error("WAV reader error: {0}")]
    Reader(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, WavError>;
