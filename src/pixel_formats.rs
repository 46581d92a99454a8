// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture format identifiers and their storage properties.
//!
//! Every format the crate knows about is a variant of [`TextureFormat`]. Its storage
//! properties (bytes per block, block dimensions, minimum block counts, flags) live in a
//! `const` table and are read with [`TextureFormatProperties::from_format`].
//!
//! # Blocks
//!
//! All size arithmetic in this crate is done in *blocks*. For uncompressed formats a block is a
//! single pixel (1x1x1). Block-compressed formats store a fixed number of bytes for a fixed
//! rectangle of pixels:
//!
//! | Family | Block | Bytes | Minimum blocks |
//! |--------|-------|-------|----------------|
//! | ASTC   | 4x4 … 12x12 | 16 | 1x1 |
//! | ETC1/ETC2/EAC | 4x4 | 8 or 16 | 1x1 |
//! | PVRTC 2bpp | 8x4 | 8 | 2x2 |
//! | PVRTC 4bpp | 4x4 | 8 | 2x2 |
//! | BC7 | 4x4 | 16 | 1x1 |
//!
//! # Invalid formats
//!
//! [`TextureFormat::Invalid`], and any raw value not naming a format, maps to a sentinel
//! record whose `bytes_per_block` is zero. Size functions never panic on it, they just
//! compute zero, so check [`TextureFormatProperties::validate`] before sizing buffers.
//!
//! # Examples
//!
//! ```
//! use texture_ranges::pixel_formats::{TextureFormat, TextureFormatProperties};
//!
//! let props = TextureFormatProperties::from_format(TextureFormat::RGBA8UNorm);
//! assert_eq!(props.bytes_per_block(), 4);
//! assert!(!props.is_compressed());
//!
//! let unknown = TextureFormatProperties::from_raw(250);
//! assert!(unknown.validate().is_err());
//! ```

mod catalog;

use crate::error::Error;
use std::fmt::Display;

macro_rules! texture_formats {
    ($($(#[$meta:meta])* $variant:ident),+ $(,)?) => {
        /// Identifies a texture storage format.
        ///
        /// Discriminants are sequential starting at `Invalid = 0`, so a format round-trips
        /// through `as u8` and [`TextureFormat::from_raw`].
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum TextureFormat {
            #[default]
            Invalid = 0,
            $($(#[$meta])* $variant),+
        }

        impl TextureFormat {
            /// Every format, indexed by discriminant.
            pub const ALL: &'static [TextureFormat] = &[
                TextureFormat::Invalid,
                $(TextureFormat::$variant),+
            ];

            /// The identifier of this format, e.g. `"RGBA8UNorm"`.
            pub const fn name(self) -> &'static str {
                match self {
                    TextureFormat::Invalid => "Invalid",
                    $(TextureFormat::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

texture_formats! {
    A8UNorm,
    L8UNorm,
    R8UNorm,
    R16Float,
    R16UInt,
    R16UNorm,
    B5G5R5A1UNorm,
    B5G6R5UNorm,
    /// Not available on GLES.
    ABGR4UNorm,
    LA8UNorm,
    RG8UNorm,
    R4G2B2UNormApple,
    R4G2B2UNormRevApple,
    R5G5B5A1UNorm,
    RGBX8UNorm,
    RGBA8UNorm,
    BGRA8UNorm,
    BGRA8UNormRev,
    RGBA8UNormSRGB,
    BGRA8UNormSRGB,
    RG16Float,
    RG16UInt,
    RG16UNorm,
    RGB10A2UNormRev,
    RGB10A2UIntRev,
    BGR10A2UNorm,
    R32Float,
    RGB16Float,
    RGBA16Float,
    RG32Float,
    RGB32Float,
    RGBA32UInt,
    RGBA32Float,
    RGBAAstc4x4,
    SRGB8A8Astc4x4,
    RGBAAstc5x4,
    SRGB8A8Astc5x4,
    RGBAAstc5x5,
    SRGB8A8Astc5x5,
    RGBAAstc6x5,
    SRGB8A8Astc6x5,
    RGBAAstc6x6,
    SRGB8A8Astc6x6,
    RGBAAstc8x5,
    SRGB8A8Astc8x5,
    RGBAAstc8x6,
    SRGB8A8Astc8x6,
    RGBAAstc8x8,
    SRGB8A8Astc8x8,
    RGBAAstc10x5,
    SRGB8A8Astc10x5,
    RGBAAstc10x6,
    SRGB8A8Astc10x6,
    RGBAAstc10x8,
    SRGB8A8Astc10x8,
    RGBAAstc10x10,
    SRGB8A8Astc10x10,
    RGBAAstc12x10,
    SRGB8A8Astc12x10,
    RGBAAstc12x12,
    SRGB8A8Astc12x12,
    RGBAPvrtc2BppV1,
    RGBPvrtc2BppV1,
    RGBAPvrtc4BppV1,
    RGBPvrtc4BppV1,
    RGB8Etc1,
    RGB8Etc2,
    SRGB8Etc2,
    RGB8PunchthroughA1Etc2,
    SRGB8PunchthroughA1Etc2,
    RGBA8EacEtc2,
    SRGB8A8EacEtc2,
    RGEacUNorm,
    RGEacSNorm,
    REacUNorm,
    REacSNorm,
    RGBABc7UNorm4x4,
    RGBABc7SRGB4x4,
    /// Not available on iOS Metal.
    Z16UNorm,
    Z24UNorm,
    Z32UNorm,
    S8UIntZ24UNorm,
    S8UIntZ32UNorm,
    S8UInt,
}

impl TextureFormat {
    /// Maps a raw discriminant to a format. Values that name no format map to `Invalid`.
    pub const fn from_raw(raw: u8) -> TextureFormat {
        let index = raw as usize;
        if index < Self::ALL.len() {
            Self::ALL[index]
        } else {
            TextureFormat::Invalid
        }
    }

    /// Storage properties of this format.
    pub const fn properties(self) -> TextureFormatProperties {
        TextureFormatProperties::from_format(self)
    }
}

impl Display for TextureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Boolean traits of a format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        const DEPTH = 1 << 0;
        const STENCIL = 1 << 1;
        const COMPRESSED = 1 << 2;
        const SRGB = 1 << 3;
        /// Unnormalized integer channels.
        const INTEGER = 1 << 4;
        /// More than 8 bits of precision per channel.
        const HDR = 1 << 5;
    }
}

/// Storage properties of one [`TextureFormat`].
///
/// Values come from a `const` table and are never mutated; the struct is `Copy` so callers
/// can hold one alongside the ranges they size.
///
/// The size and offset arithmetic (`rows`, `bytes_per_row`, `bytes_per_layer`,
/// `bytes_per_range`, `sub_range_byte_offset`, `num_mip_levels`) is implemented in
/// [`crate::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureFormatProperties {
    name: &'static str,
    format: TextureFormat,
    components_per_pixel: u8,
    bytes_per_block: u8,
    block_width: u8,
    block_height: u8,
    block_depth: u8,
    min_blocks_x: u8,
    min_blocks_y: u8,
    min_blocks_z: u8,
    flags: FormatFlags,
}

impl TextureFormatProperties {
    /// Looks up a raw format discriminant. Unknown values yield the `Invalid` sentinel.
    pub const fn from_raw(raw: u8) -> Self {
        Self::from_format(TextureFormat::from_raw(raw))
    }

    /// Stringified format identifier.
    pub const fn name(&self) -> &'static str {
        self.name
    }
    pub const fn format(&self) -> TextureFormat {
        self.format
    }
    /// Number of channels per pixel (RGB has 3). Zero for the invalid format.
    pub const fn components_per_pixel(&self) -> u8 {
        self.components_per_pixel
    }
    /// Bytes per compressed block, or per pixel for uncompressed formats.
    pub const fn bytes_per_block(&self) -> u8 {
        self.bytes_per_block
    }
    pub const fn block_width(&self) -> u8 {
        self.block_width
    }
    pub const fn block_height(&self) -> u8 {
        self.block_height
    }
    pub const fn block_depth(&self) -> u8 {
        self.block_depth
    }
    /// Minimum number of blocks along X regardless of the requested width.
    pub const fn min_blocks_x(&self) -> u8 {
        self.min_blocks_x
    }
    pub const fn min_blocks_y(&self) -> u8 {
        self.min_blocks_y
    }
    pub const fn min_blocks_z(&self) -> u8 {
        self.min_blocks_z
    }
    pub const fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// `false` for the `Invalid` sentinel.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.format, TextureFormat::Invalid)
    }
    pub const fn is_compressed(&self) -> bool {
        self.flags.contains(FormatFlags::COMPRESSED)
    }
    pub const fn is_srgb(&self) -> bool {
        self.flags.contains(FormatFlags::SRGB)
    }
    pub const fn is_integer(&self) -> bool {
        self.flags.contains(FormatFlags::INTEGER)
    }
    pub const fn is_hdr(&self) -> bool {
        self.flags.contains(FormatFlags::HDR)
    }
    /// Depth without stencil, e.g. [`TextureFormat::Z24UNorm`].
    pub const fn is_depth_only(&self) -> bool {
        self.flags.contains(FormatFlags::DEPTH) && !self.flags.contains(FormatFlags::STENCIL)
    }
    /// Stencil without depth, e.g. [`TextureFormat::S8UInt`].
    pub const fn is_stencil_only(&self) -> bool {
        !self.flags.contains(FormatFlags::DEPTH) && self.flags.contains(FormatFlags::STENCIL)
    }
    pub const fn is_depth_or_stencil(&self) -> bool {
        self.flags
            .intersects(FormatFlags::DEPTH.union(FormatFlags::STENCIL))
    }

    /// Fails for formats the size arithmetic cannot handle (zero bytes per block).
    pub fn validate(&self) -> Result<(), Error> {
        if self.bytes_per_block == 0 {
            return Err(Error::InvalidFormat(self.format));
        }
        Ok(())
    }
}

impl Display for TextureFormatProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} bytes per {}x{}x{} block)",
            self.name, self.bytes_per_block, self.block_width, self.block_height, self.block_depth
        )
    }
}
