//! Palette-indexed, bidirectional run-length encoding for graphics that target
//! a tiny fixed palette: at most 7 colors plus one reserved transparency value.
//!
//! The input is a stream of 4-byte pixels split into 64-pixel chunks. Each
//! chunk is scanned from both ends at once, and every scan step emits one
//! token holding a palette index, a forward run and a backward run.
//!
//! The encoded stream is laid out as follows:
//!
//! | Offset          | Size             | Meaning                           |
//! |-----------------|------------------|-----------------------------------|
//! | 0               | 1                | palette size, 0 to 7              |
//! | 1               | 3 x palette size | RGB triplets in first-seen order  |
//! | 1 + 3 x size    | variable         | tokens, 1 or 2 bytes each         |
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(
    clippy::inline_always,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata
)]

extern crate alloc;

mod chunks;
mod decode;
mod encode;
mod error;
mod header;
mod palette;
mod pixel;
mod token;
mod utils;

#[doc(hidden)]
pub mod consts;

pub use crate::chunks::{Padding, PixelChunks};
pub use crate::decode::{decode_header, decode_to_vec, Decoder};
pub use crate::encode::{encode_chunk, encode_to_vec, EncodedStream, Encoder};
pub use crate::error::{Error, Result};
pub use crate::header::PaletteHeader;
pub use crate::palette::PaletteRegistry;
pub use crate::pixel::Pixel;
pub use crate::token::Token;
