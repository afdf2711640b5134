//! Camera configuration parameters

use super::fourcc::FourCc;
use super::layout::{ConfigBlock, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Parameters stored in a configuration block.
///
/// Width and height are kept as given. They are reduced modulo 65536 only
/// when the block is encoded, so out-of-range values wrap instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    pub fourcc: FourCc,
    pub width: u32,
    pub height: u32,
}

impl CameraConfig {
    pub fn new(fourcc: FourCc, width: u32, height: u32) -> Self {
        Self {
            fourcc,
            width,
            height,
        }
    }

    /// Width as it will be stored (low 16 bits)
    pub fn stored_width(&self) -> u16 {
        (self.width % 65536) as u16
    }

    /// Height as it will be stored (low 16 bits)
    pub fn stored_height(&self) -> u16 {
        (self.height % 65536) as u16
    }

    /// Encode into a configuration block
    pub fn encode(&self) -> ConfigBlock {
        crate::writer::encode(self)
    }
}

impl Default for CameraConfig {
    /// `"Y16 "` at 640x480
    fn default() -> Self {
        Self::new(FourCc::default(), DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
