mod common;

use rand::{rngs::StdRng, Rng, SeedableRng};

use palrle::consts::{BYTES_PER_CHUNK, MAX_COLORS, PIXELS_PER_CHUNK, SENTINEL};
use palrle::{decode_to_vec, Encoder, Error, PaletteHeader};

use self::common::{rgb, S};

/// Produces chunk-aligned images out of runs drawn from a small color set.
struct ImageGen {
    colors: Vec<[u8; 4]>,
    p_sentinel: f64,
    max_run: usize,
}

impl ImageGen {
    pub fn new_random(rng: &mut impl Rng, n_colors: usize) -> Self {
        let mut colors: Vec<[u8; 4]> = Vec::with_capacity(n_colors);
        while colors.len() < n_colors {
            let px = rgb(rng.random(), rng.random(), rng.random());
            if px != S && !colors.contains(&px) {
                colors.push(px);
            }
        }
        Self {
            colors,
            p_sentinel: rng.random_range(0.0..0.5),
            max_run: rng.random_range(1..=80),
        }
    }

    pub fn generate(&self, rng: &mut impl Rng, n_chunks: usize) -> Vec<u8> {
        let n_pixels = n_chunks * PIXELS_PER_CHUNK;
        let mut out = Vec::with_capacity(n_pixels * 4);
        while out.len() < n_pixels * 4 {
            let px = if self.colors.is_empty() || rng.random_bool(self.p_sentinel) {
                S
            } else {
                self.colors[rng.random_range(0..self.colors.len())]
            };
            let run = rng.random_range(1..=self.max_run);
            for _ in 0..run {
                if out.len() == n_pixels * 4 {
                    break;
                }
                out.extend_from_slice(&px);
            }
        }
        out
    }
}

#[test]
fn test_generated() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..2000 {
        let n_colors = rng.random_range(0..=MAX_COLORS);
        let n_chunks = rng.random_range(1..=16);
        let gen = ImageGen::new_random(&mut rng, n_colors);
        let img = gen.generate(&mut rng, n_chunks);

        let stream = Encoder::new(&img).encode().unwrap();
        assert_eq!(stream.n_chunks(), n_chunks);

        let groups = stream.chunk_tokens();
        assert_eq!(groups.len(), n_chunks, "token stream does not split into chunks");
        for group in groups {
            assert_eq!(group.iter().map(|t| t.len()).sum::<usize>(), PIXELS_PER_CHUNK);
            assert!(group.iter().all(|t| t.head_len() >= 1));
        }
        for token in stream.tokens() {
            let expected = if token.tail_len() == 0 && token.head_len() < 16 { 1 } else { 2 };
            assert_eq!(token.encoded_len(), expected);
        }

        let encoded = stream.write_to_vec();
        assert_eq!(encoded.len(), stream.encoded_len());

        let header = PaletteHeader::decode(&encoded).unwrap();
        assert!(header.len() <= MAX_COLORS);
        assert!(header.colors().iter().all(|&c| c != SENTINEL.rgb()));
        assert!(header.colors().iter().all(|c| gen.colors.iter().any(|px| &px[..3] == c)));

        let (_, decoded) = decode_to_vec(&encoded).unwrap();
        assert_eq!(decoded.len(), n_chunks * BYTES_PER_CHUNK);
        assert_eq!(&img, &decoded, "roundtrip fail");
    }
}

#[test]
fn test_generated_too_many_colors() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let gen = ImageGen::new_random(&mut rng, MAX_COLORS + 1);
        let n_chunks = rng.random_range(1..=8);
        let mut img = gen.generate(&mut rng, n_chunks);

        // make sure every color really occurs at least once
        for (i, px) in gen.colors.iter().enumerate() {
            img[i * 4..i * 4 + 4].copy_from_slice(px);
        }

        let mut sink = vec![];
        let res = Encoder::new(&img).encode_to_stream(&mut sink);
        assert!(matches!(res, Err(Error::PaletteFull { .. })));
        assert!(sink.is_empty());
    }
}
