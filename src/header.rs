use alloc::vec::Vec;

use crate::consts::{MAX_COLORS, PALETTE_ENTRY_SIZE, SENTINEL, SENTINEL_INDEX};
use crate::error::{Error, Result};
use crate::palette::PaletteRegistry;
use crate::pixel::Pixel;
use crate::utils::{unlikely, Bytes};

/// The stored palette table that opens every encoded stream: a size byte
/// followed by one RGB triplet per real color. The sentinel is implied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PaletteHeader {
    colors: [[u8; PALETTE_ENTRY_SIZE]; MAX_COLORS],
    len: u8,
}

impl PaletteHeader {
    /// Freezes a registry into the table that gets written out.
    pub fn from_registry(registry: &PaletteRegistry) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let len = registry.colors().len() as u8;
        let mut out = Self { len, ..Self::default() };
        for (slot, px) in out.colors.iter_mut().zip(registry.colors()) {
            *slot = px.rgb();
        }
        out
    }

    pub fn try_new(colors: &[[u8; PALETTE_ENTRY_SIZE]]) -> Result<Self> {
        if unlikely(colors.len() > MAX_COLORS) {
            let size = u8::try_from(colors.len()).unwrap_or(u8::MAX);
            return Err(Error::InvalidPaletteSize { size });
        }
        #[allow(clippy::cast_possible_truncation)]
        let len = colors.len() as u8;
        let mut out = Self { len, ..Self::default() };
        out.colors[..colors.len()].copy_from_slice(colors);
        Ok(out)
    }

    #[inline]
    pub fn colors(&self) -> &[[u8; PALETTE_ENTRY_SIZE]] {
        &self.colors[..usize::from(self.len)]
    }

    /// Number of stored colors, 0 to 7.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn encoded_len(&self) -> usize {
        1 + self.len() * PALETTE_ENTRY_SIZE
    }

    /// Resolves a token's palette index to the pixel it stands for.
    ///
    /// Index 0 is the sentinel. Stored colors come back with the 4th
    /// component set to `0xff`.
    #[inline]
    pub fn pixel(&self, index: u8) -> Result<Pixel> {
        if index == SENTINEL_INDEX {
            return Ok(SENTINEL);
        }
        self.colors()
            .get(usize::from(index) - 1)
            .map(|&rgb| Pixel::from_rgb(rgb))
            .ok_or(Error::InvalidPaletteIndex { index, palette_size: self.len() })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.len);
        for rgb in self.colors() {
            out.extend_from_slice(rgb);
        }
    }

    pub(crate) fn read_from(buf: &mut Bytes) -> Result<Self> {
        let size = buf.read_u8()?;
        if unlikely(usize::from(size) > MAX_COLORS) {
            return Err(Error::InvalidPaletteSize { size });
        }
        let mut out = Self { len: size, ..Self::default() };
        for slot in &mut out.colors[..usize::from(size)] {
            *slot = buf.read_array()?;
        }
        Ok(out)
    }

    /// Parses the palette table at the start of `data`.
    pub fn decode(data: impl AsRef<[u8]>) -> Result<Self> {
        Self::read_from(&mut Bytes::new(data.as_ref()))
    }
}
