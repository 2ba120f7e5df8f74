#![no_main]
use libfuzzer_sys::fuzz_target;

use palrle::consts::{BYTES_PER_CHUNK, BYTES_PER_PIXEL, PIXELS_PER_CHUNK};
use palrle::{decode_to_vec, Encoder, Error, Padding};

fuzz_target!(|input: (bool, &[u8])| {
    let (strict, data) = input;
    let padding = if strict { Padding::Reject } else { Padding::Sentinel };
    let res = Encoder::new(data).with_padding(padding).encode();
    if data.len() % BYTES_PER_PIXEL != 0 || (strict && data.len() % BYTES_PER_CHUNK != 0) {
        assert!(matches!(res, Err(Error::MalformedInput { .. })));
        return;
    }
    let stream = match res {
        Ok(stream) => stream,
        Err(Error::PaletteFull { .. }) => return,
        Err(err) => panic!("unexpected error: {}", err),
    };
    for group in stream.chunk_tokens() {
        assert_eq!(group.iter().map(|t| t.len()).sum::<usize>(), PIXELS_PER_CHUNK);
    }
    let encoded = stream.write_to_vec();
    let (_, decoded) = decode_to_vec(&encoded).unwrap();
    assert_eq!(decoded.len(), stream.n_chunks() * BYTES_PER_CHUNK);
});
