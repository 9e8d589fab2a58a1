//! AV1 decode pipeline for av1frame.
//!
//! This module drives the dav1d decode engine: one compressed access
//! unit goes in, one decoded picture comes out, and the picture is
//! converted into the caller's requested byte layout.
//!
//! # Architecture
//!
//! Everything is synchronous and blocking: a decode call submits the
//! payload, retrieves the picture, validates it against the supported
//! profile, and converts it before returning. At most one decode runs
//! per [`Decoder`] at a time; for concurrent streams, open one handle
//! each (handles share no mutable state).
//!
//! # Buffer ownership
//!
//! The payload moves into the engine on submission and is freed by the
//! engine's own release hook. The decoded picture is reference-counted
//! by the engine and unreferenced when it goes out of scope here, on
//! success and failure alike. The output buffer is an owned `Vec<u8>`
//! handed to the caller inside a [`DecodedFrame`].

mod types;

pub use types::{AccessUnit, DecodeError, DecoderConfig};

use dav1d::{PixelLayout, PlanarImageComponent};

use crate::convert::{self, DecodedFrame, OutputFormat, PictureView, Plane};

/// Handle to one AV1 decode engine instance.
///
/// Opened by [`Decoder::new`] or [`Decoder::with_config`]; dropping the
/// handle closes the engine. No partial handle ever exists: a failed
/// open returns an error and nothing else.
pub struct Decoder {
    engine: dav1d::Decoder,
}

impl Decoder {
    /// Open a decode engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Init` if the engine fails to open.
    pub fn new() -> Result<Self, DecodeError> {
        Self::with_config(&DecoderConfig::default())
    }

    /// Open a decode engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Init` if the engine fails to open.
    pub fn with_config(config: &DecoderConfig) -> Result<Self, DecodeError> {
        let mut settings = dav1d::Settings::new();
        settings.set_n_threads(config.threads);
        settings.set_max_frame_delay(config.max_frame_delay);

        let engine = dav1d::Decoder::with_settings(&settings).map_err(DecodeError::Init)?;
        Ok(Self { engine })
    }

    /// Decode one compressed access unit into the requested layout.
    ///
    /// The payload is consumed: submission moves the buffer into the
    /// decode engine, which releases it once decoding no longer needs
    /// it. The decoded picture is released on every path out of this
    /// function. A returned frame is always fully populated.
    ///
    /// Errors leave the handle usable; a later call with a valid access
    /// unit may still succeed.
    ///
    /// # Errors
    ///
    /// - `DecodeError::Submit` if the engine rejects the access unit
    /// - `DecodeError::NoPicture` if no decoded picture is available
    /// - `DecodeError::UnsupportedFormat` for pictures that are not
    ///   8-bit 4:2:0
    /// - `DecodeError::Convert` if output conversion fails
    pub fn decode_access_unit(
        &mut self,
        payload: AccessUnit,
        format: OutputFormat,
    ) -> Result<DecodedFrame, DecodeError> {
        self.engine
            .send_data(payload.into_boxed(), None, None, None)
            .map_err(DecodeError::Submit)?;

        let picture = self.engine.get_picture().map_err(DecodeError::NoPicture)?;
        validate_profile(&picture)?;

        // `picture` unrefs when it drops, converter success or failure.
        convert_picture(&picture, format)
    }
}

/// Reject pictures outside the supported 8-bit 4:2:0 profile.
fn validate_profile(picture: &dav1d::Picture) -> Result<(), DecodeError> {
    let layout = picture.pixel_layout();
    let bit_depth = picture.bit_depth();
    if !matches!(layout, PixelLayout::I420) || bit_depth != 8 {
        return Err(DecodeError::UnsupportedFormat {
            layout: layout_name(layout),
            bit_depth,
        });
    }
    Ok(())
}

fn layout_name(layout: PixelLayout) -> &'static str {
    match layout {
        PixelLayout::I400 => "4:0:0",
        PixelLayout::I420 => "4:2:0",
        PixelLayout::I422 => "4:2:2",
        PixelLayout::I444 => "4:4:4",
    }
}

/// Run a validated engine picture through the converter core.
fn convert_picture(
    picture: &dav1d::Picture,
    format: OutputFormat,
) -> Result<DecodedFrame, DecodeError> {
    let y = picture.plane(PlanarImageComponent::Y);
    let u = picture.plane(PlanarImageComponent::U);
    let v = picture.plane(PlanarImageComponent::V);

    let view = PictureView::new(
        picture.width(),
        picture.height(),
        Plane {
            data: &y[..],
            stride: picture.stride(PlanarImageComponent::Y) as usize,
        },
        Plane {
            data: &u[..],
            stride: picture.stride(PlanarImageComponent::U) as usize,
        },
        Plane {
            data: &v[..],
            stride: picture.stride(PlanarImageComponent::V) as usize,
        },
    )?;

    Ok(convert::convert(&view, format)?)
}
