//! Core types for the AV1 decode pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::ConvertError;

/// Error types for AV1 decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The decode engine failed to open.
    #[error("failed to open AV1 decoder: {0}")]
    Init(dav1d::Error),

    /// A payload buffer could not be allocated.
    #[error("out of memory allocating {requested} byte payload buffer")]
    OutOfMemory { requested: usize },

    /// The decode engine rejected the access unit.
    #[error("decoder rejected access unit: {0}")]
    Submit(dav1d::Error),

    /// The decode engine produced no picture for the access unit.
    #[error("decoder produced no picture: {0}")]
    NoPicture(dav1d::Error),

    /// The decoded picture is outside the supported profile.
    #[error("unsupported picture format: {layout} {bit_depth}-bit (only 4:2:0 8-bit is supported)")]
    UnsupportedFormat {
        layout: &'static str,
        bit_depth: usize,
    },

    /// Converting the decoded picture failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Decode engine configuration.
///
/// Passed explicitly into [`Decoder::with_config`](super::Decoder::with_config)
/// rather than living in process-wide state. The defaults favor
/// deterministic single-frame decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Worker threads for the decode engine. `0` lets the engine pick.
    pub threads: u32,
    /// Maximum frames in flight inside the engine.
    pub max_frame_delay: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        // One thread and one frame in flight: each submitted access unit
        // is decoded to completion before the call returns.
        Self {
            threads: 1,
            max_frame_delay: 1,
        }
    }
}

/// One compressed access unit (an OBU payload), owned until submission.
///
/// The buffer is allocated here and filled by the caller, then moved into
/// the decode engine by
/// [`Decoder::decode_access_unit`](super::Decoder::decode_access_unit).
/// Passing the unit by value is the handoff: after submission the payload
/// can no longer be read, written, or released from this side, and the
/// engine frees it once decoding no longer needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessUnit {
    data: Vec<u8>,
}

impl AccessUnit {
    /// Allocate a zero-filled payload buffer of exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::OutOfMemory` if the buffer cannot be
    /// allocated.
    pub fn alloc(len: usize) -> Result<Self, DecodeError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| DecodeError::OutOfMemory { requested: len })?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Allocate a payload buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::OutOfMemory` if the buffer cannot be
    /// allocated.
    pub fn copy_from(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut unit = Self::alloc(bytes.len())?;
        unit.data.copy_from_slice(bytes);
        Ok(unit)
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hand the buffer over for submission to the decode engine.
    pub(crate) fn into_boxed(self) -> Box<[u8]> {
        self.data.into_boxed_slice()
    }
}

impl From<Vec<u8>> for AccessUnit {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl std::ops::Deref for AccessUnit {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl std::ops::DerefMut for AccessUnit {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
