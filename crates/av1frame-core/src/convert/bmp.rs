//! 24-bit BMP encoding from decoded 4:2:0 pictures.
//!
//! Produces a standalone BMP file image: a 54-byte header
//! (BITMAPFILEHEADER + BITMAPINFOHEADER) followed by row-padded 24-bit
//! pixel data, converting YCbCr samples to RGB with integer fixed-point
//! BT.601 math.
//!
//! All multi-byte header integers are little-endian.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::types::{ConvertError, PictureView};
use super::BitmapFrame;

/// Size of the BMP header (BITMAPFILEHEADER + BITMAPINFOHEADER) in bytes.
pub const HEADER_SIZE: usize = 54;

/// BMP file signature: `"BM"`.
const BMP_MAGIC: u16 = 0x4d42;

/// Pixel density written for both axes: 2835 pixels/meter (~72 DPI).
const PIXELS_PER_METER: u32 = 2835;

/// BMP header (54 bytes, all little-endian).
///
/// ```text
/// Offset  Size  Field
/// 0       2     signature: "BM"
/// 2       4     file size (header + pixel array)
/// 6       2     reserved
/// 8       2     reserved
/// 10      4     pixel data offset: 54
/// 14      4     DIB header size: 40
/// 18      4     width (signed, positive)
/// 22      4     height (signed, negative: rows stored top-to-bottom)
/// 26      2     color planes: 1
/// 28      2     bits per pixel: 24
/// 30      4     compression: 0 (BI_RGB)
/// 34      4     pixel array size (stride * height)
/// 38      4     horizontal resolution (pixels/meter)
/// 42      4     vertical resolution (pixels/meter)
/// 46      4     reserved
/// 50      4     reserved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BmpHeader {
    width: u32,
    height: u32,
    pixel_array_size: u32,
}

impl BmpHeader {
    /// Muxes this BMP header to the given writer.
    fn mux<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<LittleEndian>(BMP_MAGIC)?;
        writer.write_u32::<LittleEndian>(HEADER_SIZE as u32 + self.pixel_array_size)?;
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u32::<LittleEndian>(HEADER_SIZE as u32)?;
        writer.write_u32::<LittleEndian>(40)?; // BITMAPINFOHEADER size
        writer.write_i32::<LittleEndian>(self.width as i32)?;
        // Negative height marks the rows as stored top-to-bottom.
        writer.write_i32::<LittleEndian>(-(self.height as i32))?;
        writer.write_u16::<LittleEndian>(1)?; // color planes
        writer.write_u16::<LittleEndian>(24)?; // bits per pixel
        writer.write_u32::<LittleEndian>(0)?; // BI_RGB, uncompressed
        writer.write_u32::<LittleEndian>(self.pixel_array_size)?;
        writer.write_u32::<LittleEndian>(PIXELS_PER_METER)?;
        writer.write_u32::<LittleEndian>(PIXELS_PER_METER)?;
        writer.write_u32::<LittleEndian>(0)?; // reserved
        writer.write_u32::<LittleEndian>(0)?; // reserved
        Ok(())
    }
}

/// Row stride in bytes: 24-bit rows rounded up to a 4-byte boundary.
pub(crate) fn row_stride(width: u32) -> usize {
    ((24 * width as usize + 31) / 32) * 4
}

/// Encode a decoded picture as a complete 24-bit BMP file image.
///
/// The output is the 54-byte header followed by `stride * height` bytes
/// of pixel data. Rows are written top-to-bottom with row 0 first; the
/// header's negative height field flags that order for viewers. Row
/// padding bytes stay zero from allocation.
///
/// # Errors
///
/// Returns `ConvertError::Allocation` if the output buffer cannot be
/// allocated; no partial buffer is exposed.
pub fn encode_bmp(picture: &PictureView<'_>) -> Result<BitmapFrame, ConvertError> {
    let width = picture.width();
    let height = picture.height();
    let stride = row_stride(width);
    let pixel_array_size = stride * height as usize;
    let total = HEADER_SIZE + pixel_array_size;

    let mut data = Vec::new();
    data.try_reserve_exact(total)
        .map_err(|_| ConvertError::Allocation { requested: total })?;

    BmpHeader {
        width,
        height,
        pixel_array_size: pixel_array_size as u32,
    }
    .mux(&mut data)?;

    data.resize(total, 0);
    fill_pixels(picture, &mut data[HEADER_SIZE..], stride);

    Ok(BitmapFrame {
        width,
        height,
        data,
    })
}

/// Convert 4:2:0 YCbCr samples into BGR pixel rows.
///
/// Works one 2x2 luma block at a time, reusing the block's single Cb/Cr
/// pair for every covered luma sample (nearest-neighbor chroma, no
/// interpolation). Edge blocks shrink to one column or row when the
/// width or height is odd.
fn fill_pixels(picture: &PictureView<'_>, out: &mut [u8], out_stride: usize) {
    let width = picture.width() as usize;
    let height = picture.height() as usize;

    for block_row in 0..picture.chroma_height() as usize {
        let u_row = picture.u_row(block_row);
        let v_row = picture.v_row(block_row);

        for block_col in 0..picture.chroma_width() as usize {
            let cb = i32::from(u_row[block_col]);
            let cr = i32::from(v_row[block_col]);

            // Chroma terms are shared by up to four luma samples.
            let r_term = 409 * cr - 56992;
            let g_term = 34784 - 100 * cb - 208 * cr;
            let b_term = 516 * cb - 70688;

            for dy in 0..2 {
                let py = block_row * 2 + dy;
                if py >= height {
                    break;
                }
                let y_row = picture.y_row(py);

                for dx in 0..2 {
                    let px = block_col * 2 + dx;
                    if px >= width {
                        break;
                    }
                    let luma = 298 * i32::from(y_row[px]);
                    let at = py * out_stride + px * 3;
                    out[at] = clamp_component(luma + b_term);
                    out[at + 1] = clamp_component(luma + g_term);
                    out[at + 2] = clamp_component(luma + r_term);
                }
            }
        }
    }
}

/// Scale a fixed-point channel term back to an 8-bit sample.
fn clamp_component(value: i32) -> u8 {
    (value >> 8).clamp(0, 255) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
