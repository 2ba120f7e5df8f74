#![no_main]
use libfuzzer_sys::fuzz_target;

use palrle::consts::BYTES_PER_CHUNK;
use palrle::{decode_to_vec, PaletteHeader};

fuzz_target!(|data: &[u8]| {
    if let Ok((header, out)) = decode_to_vec(data) {
        assert_eq!(header, PaletteHeader::decode(data).unwrap());
        assert_eq!(out.len() % BYTES_PER_CHUNK, 0);
    }
});
