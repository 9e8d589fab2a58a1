//! WASM-compatible wrapper types for decoded frames.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! av1frame types, handling the conversion between Rust and JavaScript
//! data representations.

use av1frame_core::{DecodedFrame, OutputFormat};
use wasm_bindgen::prelude::*;

/// A decoded frame wrapper for JavaScript.
///
/// Wraps the output of a decode call: either a tightly packed planar
/// 4:2:0 buffer or a complete BMP file image, depending on the format
/// requested.
///
/// # Memory Management
///
/// The frame bytes live in WASM memory. Calling `data()` copies them out
/// to JavaScript as a `Uint8Array`. The `free()` method releases WASM
/// memory immediately; otherwise wasm-bindgen's finalizer handles
/// cleanup automatically.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Get the frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the frame buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Returns the frame bytes as a Uint8Array.
    ///
    /// Note: This creates a copy of the frame data, which is necessary
    /// for safe memory management across the WASM boundary.
    pub fn data(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large frame.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsFrame {
    /// Create a JsFrame from a core DecodedFrame.
    pub(crate) fn from_frame(frame: DecodedFrame) -> Self {
        let width = frame.width();
        let height = frame.height();
        Self {
            width,
            height,
            data: frame.into_data(),
        }
    }
}

/// Convert a u8 format tag to the core OutputFormat enum.
///
/// Values:
/// - 0 = tightly packed planar 4:2:0 YCbCr
/// - 1 = 24-bit BMP
///
/// Any other value defaults to planar YCbCr.
pub(crate) fn format_from_u8(value: u8) -> OutputFormat {
    match value {
        1 => OutputFormat::Bmp,
        _ => OutputFormat::Yuv, // Default
    }
}
