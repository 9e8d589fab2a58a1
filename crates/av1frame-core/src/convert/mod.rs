//! Picture-to-buffer conversion for av1frame.
//!
//! This module provides the two converter variants of the pipeline, each
//! consuming one decoded picture and producing one flat output buffer:
//! - Planar extraction: tightly packed 4:2:0 YCbCr, stride padding removed
//! - BMP encoding: a 54-byte header followed by row-padded 24-bit color data
//!
//! # Architecture
//!
//! Converters read decoded pictures through [`PictureView`], a borrowed,
//! validated view over plane slices and strides. They never talk to the
//! decode engine directly, which keeps them testable against synthetic
//! pictures. Output buffers are owned `Vec<u8>`s inside [`DecodedFrame`];
//! dropping the frame releases them.

mod bmp;
mod planar;
mod types;

pub use bmp::{encode_bmp, HEADER_SIZE as BMP_HEADER_SIZE};
pub use planar::extract_planar;
pub use types::{ConvertError, PictureView, Plane};

use serde::{Deserialize, Serialize};

/// Requested output layout for a decoded access unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Tightly packed planar 4:2:0 YCbCr (Y plane, then U, then V).
    #[default]
    Yuv,
    /// 24-bit BMP: 54-byte header followed by row-padded BGR rows.
    Bmp,
}

/// One converted frame, tagged by its byte layout.
///
/// A frame is either fully populated or never returned; dropping it
/// releases the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedFrame {
    /// Planar 4:2:0 output.
    Planar(PlanarFrame),
    /// BMP container output.
    Bitmap(BitmapFrame),
}

impl DecodedFrame {
    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            DecodedFrame::Planar(frame) => frame.width,
            DecodedFrame::Bitmap(frame) => frame.width,
        }
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            DecodedFrame::Planar(frame) => frame.height,
            DecodedFrame::Bitmap(frame) => frame.height,
        }
    }

    /// Total output size in bytes.
    pub fn byte_size(&self) -> usize {
        self.data().len()
    }

    /// The frame's byte buffer.
    pub fn data(&self) -> &[u8] {
        match self {
            DecodedFrame::Planar(frame) => &frame.data,
            DecodedFrame::Bitmap(frame) => &frame.data,
        }
    }

    /// Consume the frame and return the owned byte buffer.
    pub fn into_data(self) -> Vec<u8> {
        match self {
            DecodedFrame::Planar(frame) => frame.data,
            DecodedFrame::Bitmap(frame) => frame.data,
        }
    }
}

/// A tightly packed planar 4:2:0 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Y plane followed by U then V, each with no row padding.
    /// Length is `width * height + 2 * ceil(width / 2) * ceil(height / 2)`.
    pub data: Vec<u8>,
}

impl PlanarFrame {
    /// The full-resolution luma plane.
    pub fn y_plane(&self) -> &[u8] {
        &self.data[..self.luma_size()]
    }

    /// The half-resolution Cb plane.
    pub fn u_plane(&self) -> &[u8] {
        let start = self.luma_size();
        &self.data[start..start + self.chroma_size()]
    }

    /// The half-resolution Cr plane.
    pub fn v_plane(&self) -> &[u8] {
        let start = self.luma_size() + self.chroma_size();
        &self.data[start..]
    }

    fn luma_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn chroma_size(&self) -> usize {
        ((self.width as usize + 1) / 2) * ((self.height as usize + 1) / 2)
    }
}

/// A complete BMP file image: 54-byte header plus row-padded pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Header followed by top-to-bottom BGR rows (the header's negative
    /// height field flags the row order for viewers).
    pub data: Vec<u8>,
}

impl BitmapFrame {
    /// The 54-byte BMP header.
    pub fn header(&self) -> &[u8] {
        &self.data[..BMP_HEADER_SIZE]
    }

    /// The row-padded pixel array following the header.
    pub fn pixels(&self) -> &[u8] {
        &self.data[BMP_HEADER_SIZE..]
    }

    /// Bytes per pixel row, including padding to the 4-byte boundary.
    pub fn row_stride(&self) -> usize {
        bmp::row_stride(self.width)
    }
}

/// Convert a validated picture into the requested output layout.
///
/// # Errors
///
/// Propagates the selected converter's error; no partial frame is
/// produced.
pub fn convert(
    picture: &PictureView<'_>,
    format: OutputFormat,
) -> Result<DecodedFrame, ConvertError> {
    match format {
        OutputFormat::Yuv => extract_planar(picture).map(DecodedFrame::Planar),
        OutputFormat::Bmp => encode_bmp(picture).map(DecodedFrame::Bitmap),
    }
}
