//! Serialization of configuration blocks

mod file;

use crate::types::{
    BLOCK_SIZE, CameraConfig, ConfigBlock, FILL_BYTE, FOURCC_OFFSET, HEIGHT_OFFSET, WIDTH_OFFSET,
};
use std::io::{self, Write};

pub use file::{write_config_file, write_file};

/// Encode a config into a fill-padded block. Never fails.
pub fn encode(config: &CameraConfig) -> ConfigBlock {
    let mut block = [FILL_BYTE; BLOCK_SIZE];

    block[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(config.fourcc.as_bytes());
    block[WIDTH_OFFSET..WIDTH_OFFSET + 2].copy_from_slice(&config.stored_width().to_be_bytes());
    block[HEIGHT_OFFSET..HEIGHT_OFFSET + 2]
        .copy_from_slice(&config.stored_height().to_be_bytes());

    log::debug!(
        "encoded {} {}x{} into {} byte block",
        config.fourcc,
        config.stored_width(),
        config.stored_height(),
        BLOCK_SIZE
    );
    block
}

/// Write the encoded block for a config to a writer
pub fn write<W: Write>(writer: &mut W, config: &CameraConfig) -> io::Result<()> {
    writer.write_all(&encode(config))
}

/// Encode a config to bytes
pub fn to_bytes(config: &CameraConfig) -> Vec<u8> {
    encode(config).to_vec()
}
