//! AGF image decoding: 12-byte header, bitmap-header section, pixel-data
//! section, and (for the 32-bit variant) an ACIF sub-header plus an alpha
//! plane section.
use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};

use crate::{
    bitmap::{self, BitmapHeader},
    error::Error,
    section,
};

const AGF_TYPE_24BIT: u32 = 1;
const AGF_TYPE_32BIT: u32 = 2;
const ACIF_HEADER_SIZE: usize = 24;

/// A decoded raster. Dispatches on shape rather than carrying a dynamic
/// pixel-format tag, since exactly four shapes are possible from this
/// format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    Gray8 {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    Bgr24 {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    Bgra32 {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    Paletted8 {
        width: u32,
        height: u32,
        palette: Vec<u8>,
        indices: Vec<u8>,
    },
}

/// The result of decoding a 32-bit AGF blob's paletted branch: the palette
/// image and its alpha plane, kept separate rather than composited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettedWithAlpha {
    pub raster: Raster,
    pub alpha: Vec<u8>,
}

/// Either of the two shapes a 32-bit AGF blob's pixel data can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agf32Image {
    Direct(Raster),
    Paletted(PalettedWithAlpha),
}

/// A fully decoded AGF image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgfImage {
    TwentyFourBit(Raster),
    ThirtyTwoBit(Agf32Image),
}

/// Decodes a full AGF byte blob.
///
/// `force_rgb` channel-swaps the returned raster from BGR(A) to RGB(A) as a
/// final post-processing step.
pub fn decode(bytes: &[u8], force_rgb: bool) -> Result<AgfImage, Error> {
    let mut cursor = bytes;

    let mut header = [0u8; 12];
    cursor.read_exact(&mut header).map_err(|_| Error::ShortRead {
        offset: 0,
        expected: 12,
        actual: bytes.len().min(12),
    })?;
    let _signature = &header[0..4];
    let agf_type = LittleEndian::read_u32(&header[4..8]);
    let _reserved = LittleEndian::read_u32(&header[8..12]);

    if agf_type != AGF_TYPE_24BIT && agf_type != AGF_TYPE_32BIT {
        return Err(Error::UnsupportedAgfType(agf_type));
    }

    let bitmap_header_bytes = section::read_section(&mut cursor)?;
    let bitmap_header = bitmap::parse_bitmap_header(&bitmap_header_bytes)?;
    let pixel_data = section::read_section(&mut cursor)?;

    let info = &bitmap_header.info_header;
    if info.bi_height < 0 {
        return Err(Error::UnsupportedBitmap("top-down layout unsupported".into()));
    }
    if info.bi_bit_count % 8 != 0 {
        return Err(Error::UnsupportedBitmap("bit count not a multiple of 8".into()));
    }
    if info.bi_compression != 0 {
        return Err(Error::UnsupportedBitmap("compressed bitmap unsupported".into()));
    }

    let width = info.bi_width as u32;
    let height = info.bi_height as u32;
    let bytes_per_pixel = (info.bi_bit_count / 8) as u32;

    if agf_type == AGF_TYPE_24BIT {
        let raster = decode_24bit(width, height, bytes_per_pixel, pixel_data)?;
        let raster = if force_rgb { swap_channels(raster) } else { raster };
        return Ok(AgfImage::TwentyFourBit(raster));
    }

    let mut acif = [0u8; ACIF_HEADER_SIZE];
    cursor.read_exact(&mut acif).map_err(|_| Error::ShortRead {
        offset: 0,
        expected: ACIF_HEADER_SIZE,
        actual: 0,
    })?;
    let alpha = section::read_section(&mut cursor)?;

    let image = decode_32bit(width, height, bytes_per_pixel, pixel_data, alpha, &bitmap_header)?;
    let image = if force_rgb { swap_channels_32(image) } else { image };
    Ok(AgfImage::ThirtyTwoBit(image))
}

/// `agf_type = 1`. No row-flip is applied; pixel rows are used exactly as
/// stored.
fn decode_24bit(
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
    pixels: Vec<u8>,
) -> Result<Raster, Error> {
    if bytes_per_pixel == 1 {
        return Ok(Raster::Gray8 {
            width,
            height,
            pixels,
        });
    }

    let expected = (width * height * bytes_per_pixel) as usize;
    if pixels.len() != expected {
        return Err(Error::UnsupportedBitmap(
            format!("pixel data length {} does not match {}x{}x{}", pixels.len(), height, width, bytes_per_pixel).into(),
        ));
    }

    Ok(match bytes_per_pixel {
        3 => Raster::Bgr24 {
            width,
            height,
            pixels,
        },
        4 => Raster::Bgra32 {
            width,
            height,
            pixels,
        },
        other => {
            return Err(Error::UnsupportedBitmap(
                format!("unsupported bytes-per-pixel {other}").into(),
            ));
        }
    })
}

/// `agf_type = 2`. Row-flipped in the direct branch, not in the paletted
/// branch. This asymmetry is deliberate, not an oversight.
fn decode_32bit(
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
    pixels: Vec<u8>,
    alpha: Vec<u8>,
    bitmap_header: &BitmapHeader,
) -> Result<Agf32Image, Error> {
    let direct_len = (width * height * bytes_per_pixel) as usize;

    if pixels.len() == direct_len {
        let flipped = flip_rows(&pixels, width as usize, height as usize, bytes_per_pixel as usize);
        let bgra = interleave_bgr_alpha(&flipped, &alpha, width as usize, height as usize, bytes_per_pixel as usize);
        return Ok(Agf32Image::Direct(Raster::Bgra32 {
            width,
            height,
            pixels: bgra,
        }));
    }

    Ok(Agf32Image::Paletted(PalettedWithAlpha {
        raster: Raster::Paletted8 {
            width,
            height,
            palette: bitmap_header.palette_bytes.clone(),
            indices: pixels,
        },
        alpha,
    }))
}

fn flip_rows(pixels: &[u8], width: usize, height: usize, bytes_per_pixel: usize) -> Vec<u8> {
    let row_len = width * bytes_per_pixel;
    let mut out = vec![0u8; pixels.len()];
    for row in 0..height {
        let src = &pixels[row * row_len..(row + 1) * row_len];
        let dst_row = height - 1 - row;
        out[dst_row * row_len..(dst_row + 1) * row_len].copy_from_slice(src);
    }
    out
}

fn interleave_bgr_alpha(
    bgr: &[u8],
    alpha: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 4);
    for pixel in 0..(width * height) {
        let base = pixel * bytes_per_pixel;
        out.extend_from_slice(&bgr[base..base + bytes_per_pixel]);
        out.push(alpha[pixel]);
    }
    out
}

fn swap_channels(raster: Raster) -> Raster {
    match raster {
        Raster::Bgr24 {
            width,
            height,
            mut pixels,
        } => {
            for px in pixels.chunks_mut(3) {
                px.swap(0, 2);
            }
            Raster::Bgr24 {
                width,
                height,
                pixels,
            }
        }
        Raster::Bgra32 {
            width,
            height,
            mut pixels,
        } => {
            for px in pixels.chunks_mut(4) {
                px.swap(0, 2);
            }
            Raster::Bgra32 {
                width,
                height,
                pixels,
            }
        }
        other => other,
    }
}

fn swap_channels_32(image: Agf32Image) -> Agf32Image {
    match image {
        Agf32Image::Direct(raster) => Agf32Image::Direct(swap_channels(raster)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_header_section(width: i32, height: i32, bit_count: u16, palette: &[u8]) -> Vec<u8> {
        let mut header = vec![0u8; 14 + 2 + 40];
        let ih = 16;
        header[ih..ih + 4].copy_from_slice(&40u32.to_le_bytes());
        header[ih + 4..ih + 8].copy_from_slice(&width.to_le_bytes());
        header[ih + 8..ih + 12].copy_from_slice(&height.to_le_bytes());
        header[ih + 14..ih + 16].copy_from_slice(&bit_count.to_le_bytes());
        header.extend_from_slice(palette);

        let mut section = Vec::new();
        section.extend_from_slice(&(header.len() as u32).to_le_bytes());
        section.extend_from_slice(&(header.len() as u32).to_le_bytes());
        section.extend_from_slice(&(header.len() as u32).to_le_bytes());
        section.extend_from_slice(&header);
        section
    }

    fn literal_section(payload: &[u8]) -> Vec<u8> {
        let mut section = Vec::new();
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(payload);
        section
    }

    #[test]
    fn type1_one_byte_per_pixel_is_gray8() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"AGF\0");
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&bitmap_header_section(2, 2, 8, &[]));
        bytes.extend_from_slice(&literal_section(&[1, 2, 3, 4]));

        let image = decode(&bytes, false).unwrap();
        match image {
            AgfImage::TwentyFourBit(Raster::Gray8 {
                width,
                height,
                pixels,
            }) => {
                assert_eq!((width, height), (2, 2));
                assert_eq!(pixels, vec![1, 2, 3, 4]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn unsupported_agf_type_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"AGF\0");
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            decode(&bytes, false),
            Err(Error::UnsupportedAgfType(3))
        ));
    }

    #[test]
    fn type2_direct_branch_row_flips_and_appends_alpha() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"AGF\0");
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&bitmap_header_section(1, 2, 24, &[]));
        // bottom-up BGR rows: row0 = [1,1,1] (bottom), row1 = [2,2,2] (top)
        bytes.extend_from_slice(&literal_section(&[1, 1, 1, 2, 2, 2]));
        bytes.extend_from_slice(&[0u8; 24]); // ACIF sub-header
        bytes.extend_from_slice(&literal_section(&[9, 8])); // alpha, 1 byte/pixel

        let image = decode(&bytes, false).unwrap();
        match image {
            AgfImage::ThirtyTwoBit(Agf32Image::Direct(Raster::Bgra32 {
                width,
                height,
                pixels,
            })) => {
                assert_eq!((width, height), (1, 2));
                // after flip, row0 (top-down) = [2,2,2], row1 = [1,1,1]
                assert_eq!(pixels, vec![2, 2, 2, 9, 1, 1, 1, 8]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
