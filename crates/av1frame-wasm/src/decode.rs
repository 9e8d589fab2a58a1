//! AV1 decoding WASM bindings.
//!
//! This module exposes the av1frame-core decode pipeline to JavaScript:
//! open a decoder, feed it one compressed access unit, and get back a
//! planar YUV or BMP byte buffer.
//!
//! # Example
//!
//! ```typescript
//! import init, { Av1Decoder } from '@av1frame/wasm';
//!
//! await init();
//!
//! const decoder = new Av1Decoder();
//! const obu = new Uint8Array(await file.arrayBuffer());
//! const frame = decoder.decode_access_unit(obu, 1); // 1 = BMP
//! console.log(`Decoded ${frame.width}x${frame.height} frame`);
//! ```

use crate::types::{format_from_u8, JsFrame};
use av1frame_core::decode::{AccessUnit, Decoder};
use wasm_bindgen::prelude::*;

/// An AV1 decoder handle for JavaScript.
///
/// Wraps one decode engine instance. At most one decode runs per handle
/// at a time; create one handle per concurrent stream. The engine is
/// closed when the handle is garbage collected (or freed explicitly via
/// the generated `free()`).
#[wasm_bindgen]
pub struct Av1Decoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl Av1Decoder {
    /// Open a decode engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to open; no handle is
    /// produced.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Av1Decoder, JsValue> {
        Decoder::new()
            .map(|inner| Av1Decoder { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode one compressed access unit.
    ///
    /// The input bytes are copied into a payload buffer that is handed
    /// to the decode engine for the duration of the call.
    ///
    /// # Arguments
    ///
    /// * `payload` - One access unit of compressed AV1 data (an OBU
    ///   sequence) as a `Uint8Array`
    /// * `format` - Output layout: 0 = planar YUV, 1 = BMP
    ///
    /// # Returns
    ///
    /// A fully populated `JsFrame`, or an error if decoding or
    /// conversion fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine rejects the access unit or produces no picture
    /// - The decoded picture is not 8-bit 4:2:0
    /// - The output buffer cannot be allocated
    pub fn decode_access_unit(&mut self, payload: &[u8], format: u8) -> Result<JsFrame, JsValue> {
        let unit = AccessUnit::copy_from(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .decode_access_unit(unit, format_from_u8(format))
            .map(JsFrame::from_frame)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
