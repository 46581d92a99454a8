// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The static format table.

use super::{FormatFlags, TextureFormat, TextureFormatProperties};

const NONE: FormatFlags = FormatFlags::empty();
const SRGB: FormatFlags = FormatFlags::SRGB;
const HDR: FormatFlags = FormatFlags::HDR;
const INTEGER_HDR: FormatFlags = FormatFlags::INTEGER.union(FormatFlags::HDR);

// Metal on iOS stores this format in 5 bytes.
#[cfg(target_os = "ios")]
const S8_Z32_BYTES: u8 = 5;
#[cfg(not(target_os = "ios"))]
const S8_Z32_BYTES: u8 = 8;

impl TextureFormatProperties {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
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
    ) -> Self {
        TextureFormatProperties {
            name: format.name(),
            format,
            components_per_pixel,
            bytes_per_block,
            block_width,
            block_height,
            block_depth,
            min_blocks_x,
            min_blocks_y,
            min_blocks_z,
            flags,
        }
    }

    const fn invalid() -> Self {
        Self::new(TextureFormat::Invalid, 0, 0, 1, 1, 1, 1, 1, 1, NONE)
    }

    const fn color(format: TextureFormat, components: u8, bytes: u8, flags: FormatFlags) -> Self {
        Self::new(format, components, bytes, 1, 1, 1, 1, 1, 1, flags)
    }

    #[allow(clippy::too_many_arguments)]
    const fn compressed(
        format: TextureFormat,
        components: u8,
        bytes: u8,
        block: (u8, u8, u8),
        min_blocks: (u8, u8, u8),
        flags: FormatFlags,
    ) -> Self {
        Self::new(
            format,
            components,
            bytes,
            block.0,
            block.1,
            block.2,
            min_blocks.0,
            min_blocks.1,
            min_blocks.2,
            flags.union(FormatFlags::COMPRESSED),
        )
    }

    const fn astc(format: TextureFormat, width: u8, height: u8, flags: FormatFlags) -> Self {
        Self::compressed(format, 4, 16, (width, height, 1), (1, 1, 1), flags)
    }

    const fn pvrtc(format: TextureFormat, components: u8, block_width: u8) -> Self {
        Self::compressed(format, components, 8, (block_width, 4, 1), (2, 2, 1), NONE)
    }

    const fn etc(format: TextureFormat, components: u8, bytes: u8, flags: FormatFlags) -> Self {
        Self::compressed(format, components, bytes, (4, 4, 1), (1, 1, 1), flags)
    }

    const fn depth_stencil(
        format: TextureFormat,
        components: u8,
        bytes: u8,
        flags: FormatFlags,
    ) -> Self {
        Self::new(format, components, bytes, 1, 1, 1, 1, 1, 1, flags)
    }

    /// Looks up the storage properties of `format`.
    ///
    /// Pure table lookup; `TextureFormat::Invalid` yields a record with zero
    /// `bytes_per_block` and zero `components_per_pixel`.
    pub const fn from_format(format: TextureFormat) -> Self {
        use TextureFormat as F;
        match format {
            F::Invalid => Self::invalid(),
            F::A8UNorm => Self::color(format, 1, 1, NONE),
            F::L8UNorm => Self::color(format, 1, 1, NONE),
            F::R8UNorm => Self::color(format, 1, 1, NONE),
            F::R16Float => Self::color(format, 1, 2, HDR),
            F::R16UInt => Self::color(format, 1, 2, INTEGER_HDR),
            F::R16UNorm => Self::color(format, 1, 2, HDR),
            F::B5G5R5A1UNorm => Self::color(format, 4, 2, NONE),
            F::B5G6R5UNorm => Self::color(format, 3, 2, NONE),
            F::ABGR4UNorm => Self::color(format, 4, 2, NONE),
            F::LA8UNorm => Self::color(format, 2, 2, NONE),
            F::RG8UNorm => Self::color(format, 2, 2, NONE),
            F::R4G2B2UNormApple => Self::color(format, 3, 2, NONE),
            F::R4G2B2UNormRevApple => Self::color(format, 3, 2, NONE),
            F::R5G5B5A1UNorm => Self::color(format, 4, 2, NONE),
            F::RGBX8UNorm => Self::color(format, 3, 4, NONE),
            F::RGBA8UNorm => Self::color(format, 4, 4, NONE),
            F::BGRA8UNorm => Self::color(format, 4, 4, NONE),
            F::BGRA8UNormRev => Self::color(format, 4, 4, NONE),
            F::RGBA8UNormSRGB => Self::color(format, 4, 4, SRGB),
            F::BGRA8UNormSRGB => Self::color(format, 4, 4, SRGB),
            F::RG16Float => Self::color(format, 2, 4, HDR),
            F::RG16UInt => Self::color(format, 2, 4, INTEGER_HDR),
            F::RG16UNorm => Self::color(format, 2, 4, HDR),
            F::RGB10A2UNormRev => Self::color(format, 4, 4, HDR),
            F::RGB10A2UIntRev => Self::color(format, 4, 4, INTEGER_HDR),
            F::BGR10A2UNorm => Self::color(format, 4, 4, HDR),
            F::R32Float => Self::color(format, 1, 4, HDR),
            F::RGB16Float => Self::color(format, 3, 6, HDR),
            F::RGBA16Float => Self::color(format, 4, 8, HDR),
            F::RG32Float => Self::color(format, 2, 8, HDR),
            F::RGB32Float => Self::color(format, 3, 12, HDR),
            F::RGBA32UInt => Self::color(format, 4, 16, INTEGER_HDR),
            F::RGBA32Float => Self::color(format, 4, 16, HDR),
            F::RGBAAstc4x4 => Self::astc(format, 4, 4, NONE),
            F::SRGB8A8Astc4x4 => Self::astc(format, 4, 4, SRGB),
            F::RGBAAstc5x4 => Self::astc(format, 5, 4, NONE),
            F::SRGB8A8Astc5x4 => Self::astc(format, 5, 4, SRGB),
            F::RGBAAstc5x5 => Self::astc(format, 5, 5, NONE),
            F::SRGB8A8Astc5x5 => Self::astc(format, 5, 5, SRGB),
            F::RGBAAstc6x5 => Self::astc(format, 6, 5, NONE),
            F::SRGB8A8Astc6x5 => Self::astc(format, 6, 5, SRGB),
            F::RGBAAstc6x6 => Self::astc(format, 6, 6, NONE),
            F::SRGB8A8Astc6x6 => Self::astc(format, 6, 6, SRGB),
            F::RGBAAstc8x5 => Self::astc(format, 8, 5, NONE),
            F::SRGB8A8Astc8x5 => Self::astc(format, 8, 5, SRGB),
            F::RGBAAstc8x6 => Self::astc(format, 8, 6, NONE),
            F::SRGB8A8Astc8x6 => Self::astc(format, 8, 6, SRGB),
            F::RGBAAstc8x8 => Self::astc(format, 8, 8, NONE),
            F::SRGB8A8Astc8x8 => Self::astc(format, 8, 8, SRGB),
            F::RGBAAstc10x5 => Self::astc(format, 10, 5, NONE),
            F::SRGB8A8Astc10x5 => Self::astc(format, 10, 5, SRGB),
            F::RGBAAstc10x6 => Self::astc(format, 10, 6, NONE),
            F::SRGB8A8Astc10x6 => Self::astc(format, 10, 6, SRGB),
            F::RGBAAstc10x8 => Self::astc(format, 10, 8, NONE),
            F::SRGB8A8Astc10x8 => Self::astc(format, 10, 8, SRGB),
            F::RGBAAstc10x10 => Self::astc(format, 10, 10, NONE),
            F::SRGB8A8Astc10x10 => Self::astc(format, 10, 10, SRGB),
            F::RGBAAstc12x10 => Self::astc(format, 12, 10, NONE),
            F::SRGB8A8Astc12x10 => Self::astc(format, 12, 10, SRGB),
            F::RGBAAstc12x12 => Self::astc(format, 12, 12, NONE),
            F::SRGB8A8Astc12x12 => Self::astc(format, 12, 12, SRGB),
            F::RGBAPvrtc2BppV1 => Self::pvrtc(format, 4, 8),
            F::RGBPvrtc2BppV1 => Self::pvrtc(format, 3, 8),
            F::RGBAPvrtc4BppV1 => Self::pvrtc(format, 4, 4),
            F::RGBPvrtc4BppV1 => Self::pvrtc(format, 3, 4),
            F::RGB8Etc1 => Self::etc(format, 3, 8, NONE),
            F::RGB8Etc2 => Self::etc(format, 3, 8, NONE),
            F::SRGB8Etc2 => Self::etc(format, 3, 8, SRGB),
            F::RGB8PunchthroughA1Etc2 => Self::etc(format, 3, 8, NONE),
            F::SRGB8PunchthroughA1Etc2 => Self::etc(format, 3, 8, SRGB),
            F::RGBA8EacEtc2 => Self::etc(format, 4, 16, NONE),
            F::SRGB8A8EacEtc2 => Self::etc(format, 4, 16, SRGB),
            F::RGEacUNorm => Self::etc(format, 2, 16, NONE),
            F::RGEacSNorm => Self::etc(format, 2, 16, NONE),
            F::REacUNorm => Self::etc(format, 1, 8, NONE),
            F::REacSNorm => Self::etc(format, 1, 8, NONE),
            F::RGBABc7UNorm4x4 => Self::etc(format, 4, 16, NONE),
            F::RGBABc7SRGB4x4 => Self::etc(format, 4, 16, SRGB),
            F::Z16UNorm => Self::depth_stencil(format, 1, 2, FormatFlags::DEPTH),
            F::Z24UNorm => Self::depth_stencil(format, 1, 3, FormatFlags::DEPTH),
            F::Z32UNorm => Self::depth_stencil(format, 1, 4, FormatFlags::DEPTH),
            F::S8UIntZ24UNorm => Self::depth_stencil(
                format,
                2,
                4,
                FormatFlags::DEPTH.union(FormatFlags::STENCIL),
            ),
            F::S8UIntZ32UNorm => Self::depth_stencil(
                format,
                2,
                S8_Z32_BYTES,
                FormatFlags::DEPTH.union(FormatFlags::STENCIL),
            ),
            F::S8UInt => Self::depth_stencil(
                format,
                1,
                1,
                FormatFlags::STENCIL.union(FormatFlags::INTEGER),
            ),
        }
    }
}
