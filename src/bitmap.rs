//! Windows-style BITMAPFILEHEADER + BITMAPINFOHEADER + optional palette, as
//! embedded in an AGF image's decoded bitmap-header section.
use byteorder::{ByteOrder, LittleEndian};

use crate::error::Error;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const PADDING_SIZE: usize = 2;

/// `BITMAPFILEHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub bf_type: u16,
    pub bf_size: u32,
    pub bf_reserved1: u16,
    pub bf_reserved2: u16,
    pub bf_off_bits: u32,
}

/// `BITMAPINFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub bi_size: u32,
    pub bi_width: i32,
    pub bi_height: i32,
    pub bi_planes: u16,
    pub bi_bit_count: u16,
    pub bi_compression: u32,
    pub bi_size_image: u32,
    pub bi_x_pels_per_meter: i32,
    pub bi_y_pels_per_meter: i32,
    pub bi_clr_used: u32,
    pub bi_clr_important: u32,
}

/// The full bitmap header: file header, info header, and trailing palette
/// bytes (a sequence of 4-byte BGRA entries, empty for non-paletted images).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapHeader {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub palette_bytes: Vec<u8>,
}

/// Parses a full bitmap-header buffer (as produced by decoding an AGF
/// bitmap-header section).
pub fn parse_bitmap_header(buf: &[u8]) -> Result<BitmapHeader, Error> {
    let min_len = FILE_HEADER_SIZE + PADDING_SIZE + INFO_HEADER_SIZE;
    if buf.len() < min_len {
        return Err(Error::ShortRead {
            offset: 0,
            expected: min_len,
            actual: buf.len(),
        });
    }

    let fh = &buf[0..FILE_HEADER_SIZE];
    let file_header = FileHeader {
        bf_type: LittleEndian::read_u16(&fh[0..2]),
        bf_size: LittleEndian::read_u32(&fh[2..6]),
        bf_reserved1: LittleEndian::read_u16(&fh[6..8]),
        bf_reserved2: LittleEndian::read_u16(&fh[8..10]),
        bf_off_bits: LittleEndian::read_u32(&fh[10..14]),
    };

    let ih_start = FILE_HEADER_SIZE + PADDING_SIZE;
    let ih = &buf[ih_start..ih_start + INFO_HEADER_SIZE];
    let info_header = InfoHeader {
        bi_size: LittleEndian::read_u32(&ih[0..4]),
        bi_width: LittleEndian::read_i32(&ih[4..8]),
        bi_height: LittleEndian::read_i32(&ih[8..12]),
        bi_planes: LittleEndian::read_u16(&ih[12..14]),
        bi_bit_count: LittleEndian::read_u16(&ih[14..16]),
        bi_compression: LittleEndian::read_u32(&ih[16..20]),
        bi_size_image: LittleEndian::read_u32(&ih[20..24]),
        bi_x_pels_per_meter: LittleEndian::read_i32(&ih[24..28]),
        bi_y_pels_per_meter: LittleEndian::read_i32(&ih[28..32]),
        bi_clr_used: LittleEndian::read_u32(&ih[32..36]),
        bi_clr_important: LittleEndian::read_u32(&ih[36..40]),
    };

    let palette_bytes = buf[min_len..].to_vec();
    if palette_bytes.len() % 4 != 0 {
        return Err(Error::PaletteMisaligned(palette_bytes.len()));
    }

    Ok(BitmapHeader {
        file_header,
        info_header,
        palette_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_header(width: i32, height: i32, bit_count: u16) -> Vec<u8> {
        let mut buf = vec![0u8; 14 + 2 + 40];
        // bfType, bfSize, bfReserved1, bfReserved2, bfOffBits left zeroed.
        let ih = 16;
        buf[ih..ih + 4].copy_from_slice(&40u32.to_le_bytes());
        buf[ih + 4..ih + 8].copy_from_slice(&width.to_le_bytes());
        buf[ih + 8..ih + 12].copy_from_slice(&height.to_le_bytes());
        buf[ih + 14..ih + 16].copy_from_slice(&bit_count.to_le_bytes());
        buf
    }

    #[test]
    fn parses_minimal_header() {
        let buf = build_header(2, 2, 8);
        let header = parse_bitmap_header(&buf).unwrap();
        assert_eq!(header.info_header.bi_width, 2);
        assert_eq!(header.info_header.bi_height, 2);
        assert_eq!(header.info_header.bi_bit_count, 8);
        assert!(header.palette_bytes.is_empty());
    }

    #[test]
    fn rejects_short_buffers() {
        let buf = vec![0u8; 10];
        assert!(parse_bitmap_header(&buf).is_err());
    }

    #[test]
    fn rejects_misaligned_palette() {
        let mut buf = build_header(1, 1, 8);
        buf.extend_from_slice(&[0u8, 1, 2]); // 3 bytes, not a multiple of 4
        assert!(matches!(
            parse_bitmap_header(&buf),
            Err(Error::PaletteMisaligned(3))
        ));
    }
}
