use crate::consts::{PALETTE_SLOTS, SENTINEL, SENTINEL_INDEX};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::utils::unlikely;

/// Ordered, deduplicating table of pixel values shared by every chunk of one
/// encode pass.
///
/// Slot 0 always holds the transparency sentinel. Real colors take slots 1
/// through 7 in the order they are first seen, and a slot, once assigned,
/// never changes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PaletteRegistry {
    entries: [Pixel; PALETTE_SLOTS],
    len: usize,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteRegistry {
    pub const fn new() -> Self {
        let mut entries = [Pixel::new([0; 4]); PALETTE_SLOTS];
        entries[SENTINEL_INDEX as usize] = SENTINEL;
        Self { entries, len: 1 }
    }

    /// Returns the index of `pixel`, registering it first if it is new.
    ///
    /// Fails with [`Error::PaletteFull`] if the table has no free slot left,
    /// in which case the registry is left untouched.
    pub fn lookup_or_insert(&mut self, pixel: Pixel) -> Result<u8> {
        if let Some(index) = self.lookup(pixel) {
            return Ok(index);
        }
        if unlikely(self.len >= PALETTE_SLOTS) {
            return Err(Error::PaletteFull { pixel });
        }
        #[allow(clippy::cast_possible_truncation)]
        let index = self.len as u8;
        self.entries[self.len] = pixel;
        self.len += 1;
        log::trace!("palette slot {} <- {:?}", index, pixel);
        Ok(index)
    }

    #[inline]
    pub fn lookup(&self, pixel: Pixel) -> Option<u8> {
        let index = self.entries[..self.len].iter().position(|&px| px == pixel)?;
        u8::try_from(index).ok()
    }

    #[inline]
    pub fn get(&self, index: u8) -> Option<Pixel> {
        self.entries[..self.len].get(usize::from(index)).copied()
    }

    /// Number of occupied slots, sentinel included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no real color has been registered yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 1
    }

    /// The real colors in slot order, without the sentinel. Position `k` here
    /// is slot `k + 1`.
    #[inline]
    pub fn colors(&self) -> &[Pixel] {
        &self.entries[1..self.len]
    }
}
