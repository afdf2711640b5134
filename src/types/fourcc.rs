//! Four-character pixel format codes

use crate::error::CamblockError;
use std::fmt;
use std::str::FromStr;

/// A four-byte ASCII pixel format code such as `"Y16 "` or `"YUY2"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    /// Build a code from a string of exactly four ASCII characters.
    ///
    /// Trailing spaces are significant: `"Y16 "` and `"Y16"` are different
    /// inputs, and only the first is accepted.
    pub fn new(code: &str) -> Result<Self, CamblockError> {
        if !code.is_ascii() {
            return Err(CamblockError::FourCcNotAscii(code.to_string()));
        }
        let bytes: [u8; 4] = code
            .as_bytes()
            .try_into()
            .map_err(|_| CamblockError::FourCcLength(code.len()))?;
        Ok(FourCc(bytes))
    }

    /// Build a code from raw bytes. Every byte must be ASCII.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self, CamblockError> {
        if !bytes.is_ascii() {
            return Err(CamblockError::FourCcNotAscii(
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }
        Ok(FourCc(bytes))
    }

    /// The four bytes as they appear in the block
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Construction guarantees ASCII, which is always valid UTF-8
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Default for FourCc {
    fn default() -> Self {
        FourCc(*crate::types::DEFAULT_FOURCC)
    }
}

impl TryFrom<&str> for FourCc {
    type Error = CamblockError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        FourCc::new(code)
    }
}

impl FromStr for FourCc {
    type Err = CamblockError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        FourCc::new(code)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
