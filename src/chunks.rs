use core::iter::FusedIterator;

use crate::consts::{BYTES_PER_PIXEL, PIXELS_PER_CHUNK, SENTINEL};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::utils::unlikely;

/// What to do when the pixel count is not a multiple of the chunk size.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Padding {
    /// Fill the tail of the last chunk with the transparency sentinel.
    #[default]
    Sentinel,
    /// Fail with [`Error::MalformedInput`].
    Reject,
}

/// Splits raw pixel bytes into 64-pixel chunks.
#[derive(Clone, Debug)]
pub struct PixelChunks<'a> {
    pixels: &'a [[u8; BYTES_PER_PIXEL]],
}

impl<'a> PixelChunks<'a> {
    /// Views `data` as 4-byte pixels. The data must be pixel-aligned; the
    /// `padding` policy decides whether a short final chunk is acceptable.
    pub fn new(data: &'a [u8], padding: Padding) -> Result<Self> {
        let size = data.len();
        let pixels: &[[u8; BYTES_PER_PIXEL]] = bytemuck::try_cast_slice(data).map_err(|_| {
            Error::MalformedInput { size, reason: "length is not a multiple of the pixel size" }
        })?;
        debug_assert_eq!(pixels.len() * BYTES_PER_PIXEL, size);
        if unlikely(padding == Padding::Reject && pixels.len() % PIXELS_PER_CHUNK != 0) {
            return Err(Error::MalformedInput {
                size,
                reason: "length is not a multiple of the chunk size",
            });
        }
        Ok(Self { pixels })
    }

    /// Number of chunks left, counting a padded tail chunk.
    #[inline]
    pub const fn n_chunks(&self) -> usize {
        (self.pixels.len() + PIXELS_PER_CHUNK - 1) / PIXELS_PER_CHUNK
    }

    /// Number of sentinel pixels the last chunk will be padded with.
    #[inline]
    pub const fn padding_len(&self) -> usize {
        (PIXELS_PER_CHUNK - self.pixels.len() % PIXELS_PER_CHUNK) % PIXELS_PER_CHUNK
    }
}

impl Iterator for PixelChunks<'_> {
    type Item = [Pixel; PIXELS_PER_CHUNK];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pixels.is_empty() {
            return None;
        }
        let n = self.pixels.len().min(PIXELS_PER_CHUNK);
        let (head, tail) = self.pixels.split_at(n);
        self.pixels = tail;
        let mut chunk = [SENTINEL; PIXELS_PER_CHUNK];
        for (px, &raw) in chunk.iter_mut().zip(head) {
            *px = Pixel::new(raw);
        }
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n_chunks();
        (n, Some(n))
    }
}

impl ExactSizeIterator for PixelChunks<'_> {}

impl FusedIterator for PixelChunks<'_> {}
