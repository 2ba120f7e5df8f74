use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::io::Write;

use crate::chunks::{Padding, PixelChunks};
use crate::consts::PIXELS_PER_CHUNK;
use crate::error::Result;
use crate::header::PaletteHeader;
use crate::palette::PaletteRegistry;
use crate::pixel::Pixel;
use crate::token::Token;

/// Scans one chunk from both ends and appends its tokens to `out`.
///
/// Each step takes the pixel at the front cursor as the baseline, eats the
/// matching run at the back of the window, then the matching run at the
/// front. The back scan stops where the cursors meet so that the baseline
/// pixel itself is always part of the head run. When this returns `Ok`, the
/// appended tokens cover exactly 64 pixels.
///
/// Registering a new color may fail with [`Error::PaletteFull`]; tokens
/// already appended for this chunk are then meaningless.
///
/// [`Error::PaletteFull`]: crate::Error::PaletteFull
pub fn encode_chunk(
    chunk: &[Pixel; PIXELS_PER_CHUNK], registry: &mut PaletteRegistry, out: &mut Vec<Token>,
) -> Result<()> {
    let mut head = 0;
    let mut tail = PIXELS_PER_CHUNK - 1;

    while head <= tail {
        let baseline = chunk[head];
        let index = registry.lookup_or_insert(baseline)?;

        // A lone pixel left between the cursors goes to the head run, giving
        // (index, 1, 0) in one byte rather than (index, 0, 1) in two.
        let tail_start = tail;
        while tail > head && chunk[tail] == baseline {
            tail -= 1;
        }

        let head_start = head;
        while head <= tail && chunk[head] == baseline {
            head += 1;
        }

        let token = Token::new(index, head - head_start, tail_start - tail)?;
        log::trace!("{:?} at [{}..{}]", token, head_start, tail_start);
        out.push(token);
    }

    Ok(())
}

/// The palette and token stream of a finished encode pass.
///
/// Nothing has been serialized yet; a value of this type only exists once
/// every chunk has been scanned successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedStream {
    palette: PaletteRegistry,
    tokens: Vec<Token>,
    n_chunks: usize,
}

impl EncodedStream {
    #[inline]
    pub const fn palette(&self) -> &PaletteRegistry {
        &self.palette
    }

    /// The palette table as it will be written, sentinel removed.
    #[inline]
    pub fn header(&self) -> PaletteHeader {
        PaletteHeader::from_registry(&self.palette)
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub const fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    /// Groups the token stream by the chunk each token belongs to.
    pub fn chunk_tokens(&self) -> Vec<&[Token]> {
        let mut out = Vec::with_capacity(self.n_chunks);
        let (mut start, mut covered) = (0, 0);
        for (i, token) in self.tokens.iter().enumerate() {
            covered += token.len();
            if covered >= PIXELS_PER_CHUNK {
                out.push(&self.tokens[start..=i]);
                start = i + 1;
                covered = 0;
            }
        }
        out
    }

    pub fn encoded_len(&self) -> usize {
        self.header().encoded_len() + self.tokens.iter().map(|t| t.encoded_len()).sum::<usize>()
    }

    pub fn write_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.header().write_to(&mut out);
        for token in &self.tokens {
            token.write_to(&mut out);
        }
        out
    }
}

/// Encodes raw 4-byte pixels into the palette-indexed RLE format.
///
/// The whole input is scanned before anything is produced, so a failing
/// encode never leaves partial output behind.
#[derive(Clone, Debug)]
pub struct Encoder<'a> {
    data: &'a [u8],
    padding: Padding,
}

impl<'a> Encoder<'a> {
    #[inline]
    pub fn new(data: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self { data: data.as_ref(), padding: Padding::default() }
    }

    #[inline]
    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[inline]
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// Runs the scan over every chunk, sharing one palette across all of them.
    pub fn encode(&self) -> Result<EncodedStream> {
        let chunks = PixelChunks::new(self.data, self.padding)?;
        let n_chunks = chunks.len();
        if chunks.padding_len() != 0 {
            log::debug!("padding last chunk with {} sentinel pixels", chunks.padding_len());
        }

        let mut palette = PaletteRegistry::new();
        let mut tokens = Vec::with_capacity(n_chunks * 2);
        for (i, chunk) in chunks.enumerate() {
            if let Err(err) = encode_chunk(&chunk, &mut palette, &mut tokens) {
                log::debug!("encode aborted at chunk {}/{}: {}", i, n_chunks, err);
                return Err(err);
            }
        }

        log::debug!(
            "encoded {} chunks into {} tokens using {} colors",
            n_chunks,
            tokens.len(),
            palette.colors().len()
        );
        Ok(EncodedStream { palette, tokens, n_chunks })
    }

    #[inline]
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        Ok(self.encode()?.write_to_vec())
    }

    /// Encodes and writes the result in one go, returning the number of
    /// bytes written. On error nothing reaches `writer`.
    #[cfg(feature = "std")]
    pub fn encode_to_stream<W: Write>(&self, writer: &mut W) -> Result<usize> {
        let out = self.encode_to_vec()?;
        writer.write_all(&out)?;
        Ok(out.len())
    }
}

/// Encodes raw 4-byte pixels with the default padding policy.
#[inline]
pub fn encode_to_vec(data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Encoder::new(data.as_ref()).encode_to_vec()
}
