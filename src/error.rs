// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Errors returned by range validation, texture validation and repacking.
//!
//! Every failure is a value. Nothing in this crate panics on bad input outside of
//! `debug_assert!`s guarding documented preconditions.

use crate::pixel_formats::TextureFormat;

/// Broad classification of an [`Error`].
///
/// Callers that only need to decide between "reject the request" and "the request is
/// fine but unsupported here" can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument is malformed on its own (zero extent, bad face, bad stride).
    ArgumentInvalid,
    /// An argument is well-formed but does not fit inside the texture it addresses.
    ArgumentOutOfRange,
    /// Laying out the range would exceed 32-bit addressing.
    Overflow,
    /// The texture kind does not support the requested operation.
    Unsupported,
    /// The format has no storage size (the catalog's `Invalid` entry).
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("width, height, depth, num_layers, num_mip_levels and num_faces must be at least 1")]
    ZeroExtent,
    #[error(
        "{num_mip_levels} mip levels requested but a {width}x{height}x{depth} range only has {max_mip_levels}"
    )]
    TooManyMipLevels {
        num_mip_levels: u32,
        max_mip_levels: u32,
        width: u32,
        height: u32,
        depth: u32,
    },
    #[error("face {face} with {num_faces} faces: face must be below 6 and num_faces must be 1 or 6")]
    InvalidFace { face: u32, num_faces: u32 },
    #[error("origin plus extent on the {axis} axis exceeds u32::MAX")]
    AxisOverflow { axis: &'static str },
    #[error(
        "(x + width) * (y + height) * (z + depth) * (layer + num_layers) * num_faces exceeds u32::MAX"
    )]
    VolumeOverflow,
    #[error("{what} ({value}) does not fit in 32 bits")]
    ValueOverflow { what: &'static str, value: u64 },
    #[error("range exceeds texture dimensions")]
    RangeOutOfBounds,
    #[error("buffer of {len} bytes is too small, {required} bytes required")]
    BufferTooSmall { len: usize, required: usize },
    #[error("bytes_per_row {bytes_per_row} is smaller than the packed row of {packed} bytes")]
    BytesPerRowTooSmall { bytes_per_row: usize, packed: usize },
    #[error("a custom bytes_per_row cannot be used with {num_mip_levels} mip levels")]
    BytesPerRowWithMipChain { num_mip_levels: u32 },
    #[error("face must be 0 for non-cube textures, got {face}")]
    FaceOnNonCube { face: u32 },
    #[error("operation is not supported for {0:?} textures")]
    UnsupportedTextureType(crate::texture::TextureType),
    #[error("format {0} has no storage size")]
    InvalidFormat(TextureFormat),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroExtent
            | Error::TooManyMipLevels { .. }
            | Error::InvalidFace { .. }
            | Error::BytesPerRowTooSmall { .. }
            | Error::BytesPerRowWithMipChain { .. } => ErrorKind::ArgumentInvalid,
            Error::RangeOutOfBounds | Error::BufferTooSmall { .. } => {
                ErrorKind::ArgumentOutOfRange
            }
            Error::AxisOverflow { .. } | Error::VolumeOverflow | Error::ValueOverflow { .. } => {
                ErrorKind::Overflow
            }
            Error::FaceOnNonCube { .. } | Error::UnsupportedTextureType(_) => {
                ErrorKind::Unsupported
            }
            Error::InvalidFormat(_) => ErrorKind::InvalidFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::ZeroExtent.kind(), ErrorKind::ArgumentInvalid);
        assert_eq!(Error::VolumeOverflow.kind(), ErrorKind::Overflow);
        assert_eq!(Error::RangeOutOfBounds.kind(), ErrorKind::ArgumentOutOfRange);
        assert_eq!(
            Error::FaceOnNonCube { face: 2 }.kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            Error::InvalidFormat(TextureFormat::Invalid).kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn messages_name_the_values() {
        let e = Error::BytesPerRowTooSmall {
            bytes_per_row: 30,
            packed: 40,
        };
        let message = e.to_string();
        assert!(message.contains("30"));
        assert!(message.contains("40"));
        assert_eq!(
            Error::InvalidFormat(TextureFormat::Invalid).to_string(),
            "format Invalid has no storage size"
        );
    }
}
