use core::fmt::{self, Display};

use crate::consts::{MAX_COLORS, TOKEN_RUN_MAX};
use crate::pixel::Pixel;

#[derive(Debug)]
pub enum Error {
    /// An eighth distinct color showed up while all seven slots were taken.
    PaletteFull {
        pixel: Pixel,
    },
    MalformedInput {
        size: usize,
        reason: &'static str,
    },
    RunTooLong {
        head: usize,
        tail: usize,
    },
    InvalidPaletteIndex {
        index: u8,
        palette_size: usize,
    },
    InvalidPaletteSize {
        size: u8,
    },
    InvalidToken,
    ChunkOverrun {
        consumed: usize,
        remaining: usize,
    },
    UnexpectedBufferEnd,
    #[cfg(feature = "std")]
    IoError(std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::PaletteFull { pixel } => {
                write!(f, "too many colors: {:?} does not fit a palette of {}", pixel, MAX_COLORS)
            }
            Self::MalformedInput { size, reason } => {
                write!(f, "malformed input of {} bytes: {}", size, reason)
            }
            Self::RunTooLong { head, tail } => {
                write!(f, "run too long: head={} tail={} (max={})", head, tail, TOKEN_RUN_MAX)
            }
            Self::InvalidPaletteIndex { index, palette_size } => {
                write!(f, "invalid palette index: {} (palette size: {})", index, palette_size)
            }
            Self::InvalidPaletteSize { size } => {
                write!(f, "invalid palette size: {} (max={})", size, MAX_COLORS)
            }
            Self::InvalidToken => {
                write!(f, "invalid token: zero-length run pair")
            }
            Self::ChunkOverrun { consumed, remaining } => {
                write!(f, "token covers {} pixels but only {} are left in the chunk", consumed, remaining)
            }
            Self::UnexpectedBufferEnd => {
                write!(f, "unexpected input buffer end while decoding")
            }
            #[cfg(feature = "std")]
            Self::IoError(ref err) => {
                write!(f, "i/o error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}
