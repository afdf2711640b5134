//! Block layout constants

/// Total size of a configuration block in bytes
pub const BLOCK_SIZE: usize = 256;

/// Value of every byte not covered by a field
pub const FILL_BYTE: u8 = 0xFF;

/// Offset of the FourCC tag
pub const FOURCC_OFFSET: usize = 0;

/// Offset of the big-endian width
pub const WIDTH_OFFSET: usize = 4;

/// Offset of the big-endian height
pub const HEIGHT_OFFSET: usize = 6;

/// First byte of the fill region (end of the encoded fields)
pub const PAYLOAD_SIZE: usize = 8;

/// FourCC written when none is given
pub const DEFAULT_FOURCC: &[u8; 4] = b"Y16 ";

/// Frame width written when none is given
pub const DEFAULT_WIDTH: u32 = 640;

/// Frame height written when none is given
pub const DEFAULT_HEIGHT: u32 = 480;

/// A fully encoded configuration block
pub type ConfigBlock = [u8; BLOCK_SIZE];
