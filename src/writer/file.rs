//! Writing blocks to files

use crate::error::Result;
use crate::types::{CameraConfig, ConfigBlock};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a block to `path`, truncating any existing content.
///
/// The file handle is dropped, and therefore closed, on every return path.
pub fn write_file<P: AsRef<Path>>(path: P, block: &ConfigBlock) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(block)?;
    file.flush()?;

    log::info!("wrote {} bytes to {}", block.len(), path.display());
    Ok(())
}

/// Encode a config and write it to `path`
pub fn write_config_file<P: AsRef<Path>>(path: P, config: &CameraConfig) -> Result<()> {
    write_file(path, &config.encode())
}
