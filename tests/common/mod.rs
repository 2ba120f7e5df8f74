#![allow(dead_code)]

use palrle::consts::{PIXELS_PER_CHUNK, SENTINEL};

pub const fn rgb(r: u8, g: u8, b: u8) -> [u8; 4] {
    [r, g, b, 0xff]
}

pub const S: [u8; 4] = SENTINEL.to_array();

/// Flattens runs of `(pixel, count)` into raw pixel bytes.
pub fn pixels(runs: &[([u8; 4], usize)]) -> Vec<u8> {
    let mut out = vec![];
    for &(px, n) in runs {
        for _ in 0..n {
            out.extend_from_slice(&px);
        }
    }
    out
}

pub fn chunk(runs: &[([u8; 4], usize)]) -> Vec<u8> {
    let out = pixels(runs);
    assert_eq!(out.len(), PIXELS_PER_CHUNK * 4, "test chunk must hold exactly 64 pixels");
    out
}
