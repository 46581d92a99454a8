// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::pixel_formats::TextureFormat;
use wgpu::{AstcBlock, AstcChannel};

const fn astc(block: AstcBlock, srgb: bool) -> Option<wgpu::TextureFormat> {
    let channel = if srgb {
        AstcChannel::UnormSrgb
    } else {
        AstcChannel::Unorm
    };
    Some(wgpu::TextureFormat::Astc { block, channel })
}

impl TextureFormat {
    /// The matching wgpu format, or `None` when wgpu has no equivalent
    /// (PVRTC, most packed 16-bit formats, three-channel formats).
    pub const fn wgpu_format(self) -> Option<wgpu::TextureFormat> {
        use TextureFormat as F;
        use wgpu::TextureFormat as W;
        match self {
            F::R8UNorm => Some(W::R8Unorm),
            F::R16Float => Some(W::R16Float),
            F::R16UInt => Some(W::R16Uint),
            F::R16UNorm => Some(W::R16Unorm),
            F::RG8UNorm => Some(W::Rg8Unorm),
            // The fourth channel is ignored, the storage is the same.
            F::RGBX8UNorm => Some(W::Rgba8Unorm),
            F::RGBA8UNorm => Some(W::Rgba8Unorm),
            F::BGRA8UNorm => Some(W::Bgra8Unorm),
            F::RGBA8UNormSRGB => Some(W::Rgba8UnormSrgb),
            F::BGRA8UNormSRGB => Some(W::Bgra8UnormSrgb),
            F::RG16Float => Some(W::Rg16Float),
            F::RG16UInt => Some(W::Rg16Uint),
            F::RG16UNorm => Some(W::Rg16Unorm),
            F::RGB10A2UNormRev => Some(W::Rgb10a2Unorm),
            F::RGB10A2UIntRev => Some(W::Rgb10a2Uint),
            F::R32Float => Some(W::R32Float),
            F::RGBA16Float => Some(W::Rgba16Float),
            F::RG32Float => Some(W::Rg32Float),
            F::RGBA32UInt => Some(W::Rgba32Uint),
            F::RGBA32Float => Some(W::Rgba32Float),
            F::RGBAAstc4x4 => astc(AstcBlock::B4x4, false),
            F::SRGB8A8Astc4x4 => astc(AstcBlock::B4x4, true),
            F::RGBAAstc5x4 => astc(AstcBlock::B5x4, false),
            F::SRGB8A8Astc5x4 => astc(AstcBlock::B5x4, true),
            F::RGBAAstc5x5 => astc(AstcBlock::B5x5, false),
            F::SRGB8A8Astc5x5 => astc(AstcBlock::B5x5, true),
            F::RGBAAstc6x5 => astc(AstcBlock::B6x5, false),
            F::SRGB8A8Astc6x5 => astc(AstcBlock::B6x5, true),
            F::RGBAAstc6x6 => astc(AstcBlock::B6x6, false),
            F::SRGB8A8Astc6x6 => astc(AstcBlock::B6x6, true),
            F::RGBAAstc8x5 => astc(AstcBlock::B8x5, false),
            F::SRGB8A8Astc8x5 => astc(AstcBlock::B8x5, true),
            F::RGBAAstc8x6 => astc(AstcBlock::B8x6, false),
            F::SRGB8A8Astc8x6 => astc(AstcBlock::B8x6, true),
            F::RGBAAstc8x8 => astc(AstcBlock::B8x8, false),
            F::SRGB8A8Astc8x8 => astc(AstcBlock::B8x8, true),
            F::RGBAAstc10x5 => astc(AstcBlock::B10x5, false),
            F::SRGB8A8Astc10x5 => astc(AstcBlock::B10x5, true),
            F::RGBAAstc10x6 => astc(AstcBlock::B10x6, false),
            F::SRGB8A8Astc10x6 => astc(AstcBlock::B10x6, true),
            F::RGBAAstc10x8 => astc(AstcBlock::B10x8, false),
            F::SRGB8A8Astc10x8 => astc(AstcBlock::B10x8, true),
            F::RGBAAstc10x10 => astc(AstcBlock::B10x10, false),
            F::SRGB8A8Astc10x10 => astc(AstcBlock::B10x10, true),
            F::RGBAAstc12x10 => astc(AstcBlock::B12x10, false),
            F::SRGB8A8Astc12x10 => astc(AstcBlock::B12x10, true),
            F::RGBAAstc12x12 => astc(AstcBlock::B12x12, false),
            F::SRGB8A8Astc12x12 => astc(AstcBlock::B12x12, true),
            // ETC2 decoders read ETC1 data.
            F::RGB8Etc1 => Some(W::Etc2Rgb8Unorm),
            F::RGB8Etc2 => Some(W::Etc2Rgb8Unorm),
            F::SRGB8Etc2 => Some(W::Etc2Rgb8UnormSrgb),
            F::RGB8PunchthroughA1Etc2 => Some(W::Etc2Rgb8A1Unorm),
            F::SRGB8PunchthroughA1Etc2 => Some(W::Etc2Rgb8A1UnormSrgb),
            F::RGBA8EacEtc2 => Some(W::Etc2Rgba8Unorm),
            F::SRGB8A8EacEtc2 => Some(W::Etc2Rgba8UnormSrgb),
            F::RGEacUNorm => Some(W::EacRg11Unorm),
            F::RGEacSNorm => Some(W::EacRg11Snorm),
            F::REacUNorm => Some(W::EacR11Unorm),
            F::REacSNorm => Some(W::EacR11Snorm),
            F::RGBABc7UNorm4x4 => Some(W::Bc7RgbaUnorm),
            F::RGBABc7SRGB4x4 => Some(W::Bc7RgbaUnormSrgb),
            F::Z16UNorm => Some(W::Depth16Unorm),
            F::Z24UNorm => Some(W::Depth24Plus),
            F::S8UIntZ24UNorm => Some(W::Depth24PlusStencil8),
            F::S8UIntZ32UNorm => Some(W::Depth32FloatStencil8),
            F::S8UInt => Some(W::Stencil8),
            F::Invalid
            | F::A8UNorm
            | F::L8UNorm
            | F::B5G5R5A1UNorm
            | F::B5G6R5UNorm
            | F::ABGR4UNorm
            | F::LA8UNorm
            | F::R4G2B2UNormApple
            | F::R4G2B2UNormRevApple
            | F::R5G5B5A1UNorm
            | F::BGRA8UNormRev
            | F::BGR10A2UNorm
            | F::RGB16Float
            | F::RGB32Float
            | F::RGBAPvrtc2BppV1
            | F::RGBPvrtc2BppV1
            | F::RGBAPvrtc4BppV1
            | F::RGBPvrtc4BppV1
            | F::Z32UNorm => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_dimensions_agree_with_wgpu() {
        for format in TextureFormat::ALL {
            let Some(wgpu_format) = format.wgpu_format() else {
                continue;
            };
            let props = format.properties();
            if props.is_depth_or_stencil() {
                continue;
            }
            assert_eq!(
                wgpu_format.block_dimensions(),
                (props.block_width() as u32, props.block_height() as u32),
                "{format}"
            );
            assert_eq!(
                wgpu_format.block_copy_size(None),
                Some(props.bytes_per_block() as u32),
                "{format}"
            );
            assert_eq!(wgpu_format.is_srgb(), props.is_srgb(), "{format}");
        }
    }

    #[test]
    fn unmapped_formats() {
        assert_eq!(TextureFormat::Invalid.wgpu_format(), None);
        assert_eq!(TextureFormat::RGBPvrtc2BppV1.wgpu_format(), None);
        assert_eq!(
            TextureFormat::SRGB8A8Astc10x8.wgpu_format(),
            Some(wgpu::TextureFormat::Astc {
                block: AstcBlock::B10x8,
                channel: AstcChannel::UnormSrgb
            })
        );
    }
}
