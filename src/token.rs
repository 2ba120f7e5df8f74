use alloc::vec::Vec;
use core::fmt;

use crate::consts::{
    PALETTE_SLOTS, TOKEN_FLAG_TAIL, TOKEN_MASK_INDEX, TOKEN_MASK_LONG_HEAD_LOW,
    TOKEN_MASK_LONG_TAIL, TOKEN_MASK_SHORT_HEAD, TOKEN_RUN_MAX, TOKEN_SHIFT_INDEX,
    TOKEN_SHIFT_LONG_HEAD_LOW, TOKEN_SHORT_HEAD_MAX,
};
use crate::error::{Error, Result};
use crate::utils::{unlikely, Bytes};

/// One scan step of a chunk: a palette index, the number of pixels it covers
/// from the front of the unscanned window and the number it covers from the
/// back.
///
/// On the wire a token is either a single byte
/// `[index:3][0:1][head:4]`, used when there is no tail run and the head run
/// is shorter than 16, or two big-endian bytes
/// `[index:3][1:1][head:6][tail:6]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    index: u8,
    head: u8,
    tail: u8,
}

impl Token {
    /// Creates a token, checking that every field fits its bit width.
    ///
    /// Neither run may exceed 63 pixels; the long form has six bits for each
    /// and anything larger would spill into the flag and index bits.
    pub fn new(index: u8, head: usize, tail: usize) -> Result<Self> {
        if unlikely(usize::from(index) >= PALETTE_SLOTS) {
            return Err(Error::InvalidPaletteIndex { index, palette_size: PALETTE_SLOTS - 1 });
        }
        let max = usize::from(TOKEN_RUN_MAX);
        if unlikely(head > max || tail > max) {
            return Err(Error::RunTooLong { head, tail });
        }
        #[allow(clippy::cast_possible_truncation)]
        let (head, tail) = (head as u8, tail as u8);
        Ok(Self { index, head, tail })
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    #[inline]
    pub const fn head_len(self) -> usize {
        self.head as usize
    }

    #[inline]
    pub const fn tail_len(self) -> usize {
        self.tail as usize
    }

    /// Total pixels consumed from the chunk.
    #[inline]
    pub const fn len(self) -> usize {
        self.head_len() + self.tail_len()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn is_short(self) -> bool {
        self.tail == 0 && self.head <= TOKEN_SHORT_HEAD_MAX
    }

    #[inline]
    pub const fn encoded_len(self) -> usize {
        if self.is_short() {
            1
        } else {
            2
        }
    }

    /// Packs the token into a fixed buffer, returning it with the number of
    /// bytes actually used.
    pub const fn to_bytes(self) -> ([u8; 2], usize) {
        let tag = self.index << TOKEN_SHIFT_INDEX;
        if self.is_short() {
            ([tag | self.head, 0], 1)
        } else {
            let word = ((tag | TOKEN_FLAG_TAIL) as u16) << 8
                | (self.head as u16) << TOKEN_SHIFT_LONG_HEAD_LOW
                | self.tail as u16;
            (word.to_be_bytes(), 2)
        }
    }

    #[inline]
    pub(crate) fn write_to(self, out: &mut Vec<u8>) {
        let (buf, n) = self.to_bytes();
        out.extend_from_slice(&buf[..n]);
    }

    pub(crate) fn read_from(buf: &mut Bytes) -> Result<Self> {
        let b1 = buf.read_u8()?;
        let index = (b1 & TOKEN_MASK_INDEX) >> TOKEN_SHIFT_INDEX;
        let (head, tail) = if b1 & TOKEN_FLAG_TAIL == 0 {
            (b1 & TOKEN_MASK_SHORT_HEAD, 0)
        } else {
            let b2 = buf.read_u8()?;
            let head = ((b1 & TOKEN_MASK_SHORT_HEAD) << 2)
                | ((b2 & TOKEN_MASK_LONG_HEAD_LOW) >> TOKEN_SHIFT_LONG_HEAD_LOW);
            (head, b2 & TOKEN_MASK_LONG_TAIL)
        };
        let token = Self { index, head, tail };
        if unlikely(token.is_empty()) {
            return Err(Error::InvalidToken);
        }
        Ok(token)
    }

    /// Parses a single token from the start of `data`, returning it together
    /// with the number of bytes it occupied.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize)> {
        let mut buf = Bytes::new(data);
        let token = Self::read_from(&mut buf)?;
        Ok((token, data.len() - buf.len()))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token({}, head={}, tail={})", self.index, self.head, self.tail)
    }
}
