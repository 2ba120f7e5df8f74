use alloc::vec::Vec;

use crate::consts::{BYTES_PER_CHUNK, PIXELS_PER_CHUNK, SENTINEL};
use crate::error::{Error, Result};
use crate::header::PaletteHeader;
use crate::token::Token;
use crate::utils::{unlikely, Bytes};

/// Rebuilds raw pixels from an encoded stream.
///
/// The stream carries no pixel count, so decoding runs until the input is
/// exhausted and requires it to end on a chunk boundary.
pub struct Decoder<'a> {
    header: PaletteHeader,
    data: Bytes<'a>,
}

impl<'a> Decoder<'a> {
    /// Reads the palette table and prepares to decode the token stream that
    /// follows it.
    pub fn new(data: &'a (impl AsRef<[u8]> + ?Sized)) -> Result<Self> {
        let mut data = Bytes::new(data.as_ref());
        let header = PaletteHeader::read_from(&mut data)?;
        Ok(Self { header, data })
    }

    #[inline]
    pub const fn header(&self) -> &PaletteHeader {
        &self.header
    }

    /// Decodes the remaining tokens, returning 4 bytes per pixel.
    pub fn decode_to_vec(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut chunk = [SENTINEL.to_array(); PIXELS_PER_CHUNK];
        let (mut head, mut tail) = (0, PIXELS_PER_CHUNK);
        let mut n_tokens = 0_usize;

        while !self.data.is_empty() {
            let token = Token::read_from(&mut self.data)?;
            let remaining = tail - head;
            if unlikely(token.len() > remaining) {
                return Err(Error::ChunkOverrun { consumed: token.len(), remaining });
            }
            let px = self.header.pixel(token.index())?.to_array();

            chunk[head..head + token.head_len()].fill(px);
            head += token.head_len();
            chunk[tail - token.tail_len()..tail].fill(px);
            tail -= token.tail_len();
            n_tokens += 1;

            if head == tail {
                out.extend_from_slice(bytemuck::cast_slice(&chunk[..]));
                head = 0;
                tail = PIXELS_PER_CHUNK;
            }
        }

        if unlikely(head != 0 || tail != PIXELS_PER_CHUNK) {
            return Err(Error::UnexpectedBufferEnd);
        }
        log::debug!("decoded {} tokens into {} chunks", n_tokens, out.len() / BYTES_PER_CHUNK);
        Ok(out)
    }
}

#[inline]
pub fn decode_header(data: impl AsRef<[u8]>) -> Result<PaletteHeader> {
    PaletteHeader::decode(data)
}

#[inline]
pub fn decode_to_vec(data: impl AsRef<[u8]>) -> Result<(PaletteHeader, Vec<u8>)> {
    let mut decoder = Decoder::new(data.as_ref())?;
    let out = decoder.decode_to_vec()?;
    Ok((*decoder.header(), out))
}
