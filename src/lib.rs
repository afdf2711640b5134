//! camblock - EEPROM configuration blocks for UVC camera firmware
//!
//! The camera reads a 256 byte block from its EEPROM at boot to learn which
//! pixel format and frame size to advertise over USB.
//!
//! # Layout
//!
//! | Bytes    | Content                         |
//! |----------|---------------------------------|
//! | 0..4     | FourCC, ASCII                   |
//! | 4..6     | width, big-endian u16           |
//! | 6..8     | height, big-endian u16          |
//! | 8..256   | `0xFF` fill                     |
//!
//! Width and height wrap modulo 65536.
//!
//! # Example
//!
//! ```rust
//! use camblock::{CameraConfig, FourCc, writer};
//!
//! let config = CameraConfig::new(FourCc::new("Y16 ").unwrap(), 640, 480);
//! let block = writer::encode(&config);
//!
//! assert_eq!(&block[..8], &[0x59, 0x31, 0x36, 0x20, 0x02, 0x80, 0x01, 0xE0]);
//! assert!(block[8..].iter().all(|&b| b == 0xFF));
//! ```

pub mod error;
pub mod types;
pub mod writer;

// Re-export common types at crate root
pub use error::{CamblockError, Result};
pub use types::{
    BLOCK_SIZE, CameraConfig, ConfigBlock, DEFAULT_FOURCC, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    FILL_BYTE, FourCc,
};
pub use writer::{encode, write_config_file, write_file};
