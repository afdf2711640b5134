//! Core types for camblock

mod config;
mod fourcc;
mod layout;

pub use config::CameraConfig;
pub use fourcc::FourCc;
pub use layout::{
    BLOCK_SIZE, ConfigBlock, DEFAULT_FOURCC, DEFAULT_HEIGHT, DEFAULT_WIDTH, FILL_BYTE,
    FOURCC_OFFSET, HEIGHT_OFFSET, PAYLOAD_SIZE, WIDTH_OFFSET,
};
