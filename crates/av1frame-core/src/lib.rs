//! av1frame Core - Single-frame AV1 decode and convert
//!
//! One compressed AV1 access unit goes in; one flat byte buffer comes
//! out, in either of two consumer-facing layouts:
//!
//! - tightly packed planar 4:2:0 YCbCr (Y plane, then U, then V), or
//! - a standalone 24-bit BMP with a byte-exact 54-byte header.
//!
//! The AV1 bitstream work itself is delegated to the dav1d decode
//! engine. This crate owns everything around it: stride-aware plane
//! extraction, integer fixed-point colorspace conversion, container
//! assembly, and the buffer ownership handoffs between caller, engine,
//! and converter.
//!
//! The `dav1d` cargo feature (on by default) enables the [`decode`]
//! module and its link against libdav1d; without it, the conversion core
//! in [`convert`] still builds and can be driven by any 4:2:0 picture
//! source.

pub mod convert;
#[cfg(feature = "dav1d")]
pub mod decode;

pub use convert::{BitmapFrame, ConvertError, DecodedFrame, OutputFormat, PlanarFrame};
#[cfg(feature = "dav1d")]
pub use decode::{AccessUnit, DecodeError, Decoder, DecoderConfig};
