//! av1frame WASM - WebAssembly bindings for av1frame
//!
//! This crate provides WASM bindings to expose the av1frame-core
//! decode-and-convert pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `decode` - The decoder handle binding (`Av1Decoder`)
//! - `types` - WASM-compatible wrapper types for decoded frames
//!
//! # Usage
//!
//! ```typescript
//! import init, { Av1Decoder } from '@av1frame/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const decoder = new Av1Decoder();
//! const obu = new Uint8Array(await file.arrayBuffer());
//! const frame = decoder.decode_access_unit(obu, 0); // 0 = planar YUV
//! console.log(`Decoded ${frame.width}x${frame.height}`);
//! frame.free();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod types;

// Re-export public types
pub use decode::Av1Decoder;
pub use types::JsFrame;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
