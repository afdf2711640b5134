//! Error types for camblock

use thiserror::Error;

/// Camblock-specific error type
#[derive(Error, Debug)]
pub enum CamblockError {
    /// Opening, writing or flushing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// FourCC is not exactly four bytes long
    #[error("FourCC must be exactly 4 characters, got {0}")]
    FourCcLength(usize),

    /// FourCC contains characters outside ASCII
    #[error("FourCC must be ASCII: {0:?}")]
    FourCcNotAscii(String),
}

pub type Result<T> = std::result::Result<T, CamblockError>;
