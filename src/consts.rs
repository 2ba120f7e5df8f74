use crate::pixel::Pixel;

pub const PIXELS_PER_CHUNK: usize = 64;
pub const BYTES_PER_PIXEL: usize = 4;
pub const BYTES_PER_CHUNK: usize = PIXELS_PER_CHUNK * BYTES_PER_PIXEL;

/// Sentinel slot plus the storable colors.
pub const PALETTE_SLOTS: usize = 8;
pub const MAX_COLORS: usize = PALETTE_SLOTS - 1;
pub const PALETTE_ENTRY_SIZE: usize = 3;

/// Magenta, read by the target as "transparent".
pub const SENTINEL: Pixel = Pixel::new([0xff, 0x00, 0xff, 0xff]);
pub const SENTINEL_INDEX: u8 = 0;

/// The 4th component is not stored, decoded colors get this value.
pub const DECODED_FILL: u8 = 0xff;

pub const TOKEN_MASK_INDEX: u8 = 0xe0;
pub const TOKEN_SHIFT_INDEX: u32 = 5;
pub const TOKEN_FLAG_TAIL: u8 = 0x10;
pub const TOKEN_MASK_SHORT_HEAD: u8 = 0x0f;
pub const TOKEN_MASK_LONG_HEAD_LOW: u8 = 0xc0;
pub const TOKEN_SHIFT_LONG_HEAD_LOW: u32 = 6;
pub const TOKEN_MASK_LONG_TAIL: u8 = 0x3f;

pub const TOKEN_SHORT_HEAD_MAX: u8 = 15;
pub const TOKEN_RUN_MAX: u8 = 63;
