//! Just enough of the bitmap file header to find the pixel array.

use anyhow::{ensure, Result};

pub const FILE_HEADER_SIZE: usize = 14;
pub const PIXEL_OFFSET_POS: usize = 0x0a;
pub const MAGIC: [u8; 2] = *b"BM";

/// Returns everything from the pixel-array offset stored in the file header
/// to the end of the file.
pub fn pixel_data(file: &[u8]) -> Result<&[u8]> {
    ensure!(
        file.len() >= FILE_HEADER_SIZE,
        "file too short for a bitmap header: {} bytes",
        file.len()
    );
    if file[..2] != MAGIC {
        log::warn!("missing bitmap signature, reading pixel offset anyway");
    }
    let offset: u32 =
        bytemuck::pod_read_unaligned(&file[PIXEL_OFFSET_POS..PIXEL_OFFSET_POS + 4]);
    let offset = u32::from_le(offset) as usize;
    ensure!(
        offset <= file.len(),
        "pixel data offset {} is past the end of the file ({} bytes)",
        offset,
        file.len()
    );
    log::debug!("pixel data: {} bytes at offset {:#x}", file.len() - offset, offset);
    Ok(&file[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(offset: u32) -> Vec<u8> {
        let mut out = b"BM".to_vec();
        out.extend([0; 8]);
        out.extend(offset.to_le_bytes());
        out
    }

    #[test]
    fn test_pixel_data_offset() {
        let mut file = header(16);
        file.extend([0xaa, 0xbb, 1, 2, 3, 4]);
        assert_eq!(pixel_data(&file).unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_offset_at_end() {
        let file = header(14);
        assert!(pixel_data(&file).unwrap().is_empty());
    }

    #[test]
    fn test_bad_headers() {
        assert!(pixel_data(b"BM").is_err());
        assert!(pixel_data(&header(15)).is_err());
    }
}
