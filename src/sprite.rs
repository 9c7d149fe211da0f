//! Sprite-sheet cropping: given a decoded BGRA map-icon tile strip, crop
//! out frame 0 and the title subimage below it by scanning alpha.
use crate::error::Error;

/// A rectangular region within a raster, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

/// A cropped BGRA subimage: its region (relative to the image it was cut
/// from) and the raw pixel bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cropped {
    pub region: Region,
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// The result of cropping a map-icon tile strip: frame 0 always succeeds,
/// the title subimage is best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapIconSplit {
    pub frame0: Cropped,
    pub title: Option<Cropped>,
}

/// Crops a BGRA raster (width, height, 4 bytes/pixel) into its frame-0 icon
/// and, if a bounded non-transparent band exists below it, a title subimage.
pub fn split_map_icon(width: usize, height: usize, pixels: &[u8]) -> Result<MapIconSplit, Error> {
    let frame0_width = width / 8;
    let frame0 = crop_to_alpha_bounds(frame0_width, height, pixels, width)?;

    let band_top = frame0.region.bottom;
    let title = if band_top < height {
        let band_height = height - band_top;
        let band_pixels = &pixels[band_top * width * 4..];
        crop_to_alpha_bounds(width, band_height, band_pixels, width).ok()
    } else {
        None
    };

    Ok(MapIconSplit { frame0, title })
}

fn alpha_at(pixels: &[u8], row_stride: usize, x: usize, y: usize) -> u8 {
    pixels[(y * row_stride + x) * 4 + 3]
}

/// Scans a `sub_width × height` window of a `row_stride`-wide BGRA buffer
/// for the bounding box of pixels with `alpha > 0`, then crops it out.
fn crop_to_alpha_bounds(
    sub_width: usize,
    height: usize,
    pixels: &[u8],
    row_stride: usize,
) -> Result<Cropped, Error> {
    let top = (0..height)
        .find(|&y| (0..sub_width).any(|x| alpha_at(pixels, row_stride, x, y) > 0))
        .ok_or_else(|| Error::other("no non-transparent row found"))?;

    let bottom = (top..height)
        .find(|&y| (0..sub_width).all(|x| alpha_at(pixels, row_stride, x, y) == 0))
        .unwrap_or(height);

    if top == bottom {
        return Err(Error::other("empty vertical bounds"));
    }

    let left = (0..sub_width)
        .find(|&x| (top..bottom).any(|y| alpha_at(pixels, row_stride, x, y) > 0))
        .ok_or_else(|| Error::other("no non-transparent column found"))?;

    let right = (left..sub_width)
        .find(|&x| (top..bottom).all(|y| alpha_at(pixels, row_stride, x, y) == 0))
        .unwrap_or(sub_width);

    if left == right {
        return Err(Error::other("empty horizontal bounds"));
    }

    let crop_width = right - left;
    let crop_height = bottom - top;
    let mut out = Vec::with_capacity(crop_width * crop_height * 4);
    for y in top..bottom {
        let row_start = (y * row_stride + left) * 4;
        out.extend_from_slice(&pixels[row_start..row_start + crop_width * 4]);
    }

    Ok(Cropped {
        region: Region {
            left,
            top,
            right,
            bottom,
        },
        width: crop_width,
        height: crop_height,
        pixels: out,
    })
}
