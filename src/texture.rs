// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Whole-texture descriptions and the ranges derived from them.
//!
//! A [`TextureDesc`] describes the texture a [`TextureRangeDesc`] addresses. It answers the
//! questions a range cannot answer alone: how large each mip level is, whether a range fits
//! inside the texture, and whether an upload with a given row stride is well-formed.

use crate::bittricks::{extent_at_level, full_chain_length};
use crate::error::Error;
use crate::pixel_formats::{TextureFormat, TextureFormatProperties};
use crate::texture_range::{TextureCubeFace, TextureRangeDesc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureType {
    #[default]
    Invalid,
    TwoD,
    TwoDArray,
    ThreeD,
    Cube,
    /// Backed by an image the platform owns; cannot be uploaded to.
    ExternalImage,
}

/// Describes a texture.
///
/// Built with one of the `new_*` functions and refined with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureDesc {
    width: u32,
    height: u32,
    depth: u32,
    num_layers: u32,
    num_samples: u32,
    num_mip_levels: u32,
    texture_type: TextureType,
    format: TextureFormat,
    debug_name: String,
}

/// What an upload with a given row stride amounts to, from [`TextureDesc::validate_upload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLayout {
    /// Row stride of the caller's data.
    pub bytes_per_row: usize,
    /// Bytes the caller's data must hold.
    pub total_bytes: usize,
    /// The data is not tightly packed and must go through [`crate::repack::repack_rows`]
    /// before a packed upload.
    pub needs_repack: bool,
}

impl TextureDesc {
    fn new(
        texture_type: TextureType,
        format: TextureFormat,
        width: u32,
        height: u32,
        depth: u32,
        num_layers: u32,
    ) -> Self {
        TextureDesc {
            width,
            height,
            depth,
            num_layers,
            num_samples: 1,
            num_mip_levels: 1,
            texture_type,
            format,
            debug_name: String::new(),
        }
    }

    pub fn new_2d(format: TextureFormat, width: u32, height: u32) -> Self {
        Self::new(TextureType::TwoD, format, width, height, 1, 1)
    }

    pub fn new_2d_array(format: TextureFormat, width: u32, height: u32, num_layers: u32) -> Self {
        Self::new(TextureType::TwoDArray, format, width, height, 1, num_layers)
    }

    pub fn new_3d(format: TextureFormat, width: u32, height: u32, depth: u32) -> Self {
        Self::new(TextureType::ThreeD, format, width, height, depth, 1)
    }

    pub fn new_cube(format: TextureFormat, width: u32, height: u32) -> Self {
        Self::new(TextureType::Cube, format, width, height, 1, 1)
    }

    pub fn new_external_image(format: TextureFormat, width: u32, height: u32) -> Self {
        Self::new(TextureType::ExternalImage, format, width, height, 1, 1)
    }

    pub fn with_num_mip_levels(mut self, num_mip_levels: u32) -> Self {
        self.num_mip_levels = num_mip_levels;
        self
    }

    pub fn with_num_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples;
        self
    }

    pub fn with_debug_name(mut self, debug_name: impl Into<String>) -> Self {
        self.debug_name = debug_name.into();
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn depth(&self) -> u32 {
        self.depth
    }
    pub fn num_layers(&self) -> u32 {
        self.num_layers
    }
    pub fn num_samples(&self) -> u32 {
        self.num_samples
    }
    pub fn num_mip_levels(&self) -> u32 {
        self.num_mip_levels
    }
    pub fn texture_type(&self) -> TextureType {
        self.texture_type
    }
    pub fn format(&self) -> TextureFormat {
        self.format
    }
    pub fn debug_name(&self) -> &str {
        &self.debug_name
    }

    /// Length of the full mip chain of a `width x height x depth` texture, 0 if any extent is 0.
    ///
    /// ```
    /// use texture_ranges::TextureDesc;
    /// assert_eq!(TextureDesc::calc_num_mip_levels(1024, 512, 1), 11);
    /// assert_eq!(TextureDesc::calc_num_mip_levels(10, 10, 1), 4);
    /// ```
    pub fn calc_num_mip_levels(width: u32, height: u32, depth: u32) -> u32 {
        full_chain_length(width, height, depth)
    }

    /// 6 for cube textures, 1 otherwise.
    pub fn num_faces(&self) -> u32 {
        if self.texture_type == TextureType::Cube {
            6
        } else {
            1
        }
    }

    pub fn properties(&self) -> TextureFormatProperties {
        self.format.properties()
    }

    /// Every layer, face and mip level of the texture, as described.
    pub fn as_range(&self) -> TextureRangeDesc {
        TextureRangeDesc {
            width: self.width,
            height: self.height,
            depth: self.depth,
            num_layers: self.num_layers,
            num_mip_levels: self.num_mip_levels,
            num_faces: self.num_faces(),
            ..Default::default()
        }
    }

    /// Every texel, layer and face of `num_mip_levels` levels starting at `mip_level`.
    ///
    /// Extents are those of `mip_level`.
    pub fn full_range(&self, mip_level: u32, num_mip_levels: u32) -> TextureRangeDesc {
        TextureRangeDesc {
            num_layers: self.num_layers,
            num_faces: self.num_faces(),
            ..TextureRangeDesc::new_3d(
                0,
                0,
                0,
                extent_at_level(self.width, mip_level),
                extent_at_level(self.height, mip_level),
                extent_at_level(self.depth, mip_level),
                mip_level,
                num_mip_levels,
            )
        }
    }

    /// The whole texture.
    pub fn full_mip_range(&self) -> TextureRangeDesc {
        self.full_range(0, self.num_mip_levels)
    }

    /// One face of a cube texture.
    pub fn cube_face_range(
        &self,
        face: TextureCubeFace,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> TextureRangeDesc {
        debug_assert_eq!(self.texture_type, TextureType::Cube);
        self.full_range(mip_level, num_mip_levels).at_cube_face(face)
    }

    /// One layer of an array texture.
    pub fn layer_range(&self, layer: u32, mip_level: u32, num_mip_levels: u32) -> TextureRangeDesc {
        debug_assert_eq!(self.texture_type, TextureType::TwoDArray);
        self.full_range(mip_level, num_mip_levels).at_layer(layer)
    }

    /// Bytes of tightly packed storage for the whole texture, every mip level included.
    pub fn estimated_size_in_bytes(&self) -> usize {
        self.properties()
            .bytes_per_range(&self.full_mip_range(), None)
    }

    /**
    Checks that `range` is valid on its own and fits inside this texture.

    The range's box must fit inside its mip level, and its layers, mip levels and faces must
    fit inside the texture's.
    */
    pub fn validate_range(&self, range: &TextureRangeDesc) -> Result<(), Error> {
        range.validate()?;

        let level_width = extent_at_level(self.width, range.mip_level) as u64;
        let level_height = extent_at_level(self.height, range.mip_level) as u64;
        let level_depth = extent_at_level(self.depth, range.mip_level) as u64;
        let fits = |origin: u32, extent: u32, limit: u64| origin as u64 + extent as u64 <= limit;

        let inside = fits(range.x, range.width, level_width)
            && fits(range.y, range.height, level_height)
            && fits(range.z, range.depth, level_depth)
            && fits(range.layer, range.num_layers, self.num_layers as u64)
            && fits(range.mip_level, range.num_mip_levels, self.num_mip_levels as u64)
            && fits(range.face, range.num_faces, self.num_faces() as u64);
        if !inside {
            logwise::trace_sync!(
                "range {range} exceeds texture {texture}",
                range = logwise::privacy::LogIt(range),
                texture = logwise::privacy::LogIt(self)
            );
            return Err(Error::RangeOutOfBounds);
        }
        Ok(())
    }

    /**
    Checks an upload of `range` from data whose rows are `bytes_per_row` apart.

    `None` means tightly packed rows. A custom stride must hold a packed row, and with more
    than one mip level it must equal the packed row, since each level has its own packed row.

    # Errors

    * [`Error::UnsupportedTextureType`] for external images and invalid types
    * [`Error::FaceOnNonCube`] when `range.face > 0` on a non-cube texture
    * any error from [`TextureDesc::validate_range`]
    * [`Error::InvalidFormat`] when the format has no storage size
    * [`Error::BytesPerRowTooSmall`] and [`Error::BytesPerRowWithMipChain`] for bad strides
    */
    pub fn validate_upload(
        &self,
        range: &TextureRangeDesc,
        bytes_per_row: Option<usize>,
    ) -> Result<UploadLayout, Error> {
        match self.texture_type {
            TextureType::TwoD | TextureType::TwoDArray | TextureType::ThreeD | TextureType::Cube => {}
            other => return Err(Error::UnsupportedTextureType(other)),
        }
        if range.face > 0 && self.texture_type != TextureType::Cube {
            return Err(Error::FaceOnNonCube { face: range.face });
        }
        self.validate_range(range)?;

        let properties = self.properties();
        properties.validate()?;
        let packed = properties.bytes_per_row(range);
        if let Some(custom) = bytes_per_row {
            if custom < packed {
                return Err(Error::BytesPerRowTooSmall {
                    bytes_per_row: custom,
                    packed,
                });
            }
            if range.num_mip_levels > 1 && custom != packed {
                return Err(Error::BytesPerRowWithMipChain {
                    num_mip_levels: range.num_mip_levels,
                });
            }
        }

        let stride = bytes_per_row.unwrap_or(packed);
        let needs_repack = stride != packed;
        // A packed stride only names mip 0's row; smaller levels keep their own packed rows.
        let total_bytes = if needs_repack {
            properties.bytes_per_range(range, bytes_per_row)
        } else {
            properties.bytes_per_range(range, None)
        };
        Ok(UploadLayout {
            bytes_per_row: stride,
            total_bytes,
            needs_repack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn factories() {
        let desc = TextureDesc::new_2d_array(TextureFormat::RGBA8UNorm, 64, 32, 4)
            .with_num_mip_levels(3)
            .with_num_samples(4)
            .with_debug_name("atlas");
        assert_eq!((desc.width(), desc.height(), desc.depth()), (64, 32, 1));
        assert_eq!(desc.num_layers(), 4);
        assert_eq!(desc.num_mip_levels(), 3);
        assert_eq!(desc.num_samples(), 4);
        assert_eq!(desc.texture_type(), TextureType::TwoDArray);
        assert_eq!(desc.debug_name(), "atlas");

        let cube = TextureDesc::new_cube(TextureFormat::BGRA8UNorm, 16, 16);
        assert_eq!(cube.num_faces(), 6);
        assert_eq!(TextureDesc::new_3d(TextureFormat::R8UNorm, 4, 4, 4).depth(), 4);
        assert_eq!(TextureDesc::new_2d(TextureFormat::R8UNorm, 4, 4).num_faces(), 1);
        assert_eq!(TextureType::default(), TextureType::Invalid);
    }

    #[test]
    fn mip_chain_length() {
        assert_eq!(TextureDesc::calc_num_mip_levels(1, 1, 1), 1);
        assert_eq!(TextureDesc::calc_num_mip_levels(1024, 1, 1), 11);
        assert_eq!(TextureDesc::calc_num_mip_levels(3, 5, 9), 4);
        assert_eq!(TextureDesc::calc_num_mip_levels(0, 5, 9), 0);
    }

    #[test]
    fn ranges() {
        let cube = TextureDesc::new_cube(TextureFormat::RGBA8UNorm, 10, 10).with_num_mip_levels(4);
        let whole = cube.as_range();
        assert_eq!((whole.width, whole.num_faces, whole.num_mip_levels), (10, 6, 4));
        assert_eq!(cube.full_mip_range(), whole);

        let level = cube.full_range(2, 2);
        assert_eq!((level.width, level.height, level.mip_level), (2, 2, 2));
        assert_eq!(level.num_mip_levels, 2);

        let face = cube.cube_face_range(TextureCubeFace::PosZ, 1, 1);
        assert_eq!((face.face, face.num_faces, face.width), (4, 1, 5));

        let array = TextureDesc::new_2d_array(TextureFormat::RGBA8UNorm, 8, 8, 3);
        let layer = array.layer_range(2, 0, 1);
        assert_eq!((layer.layer, layer.num_layers), (2, 1));
    }

    #[test]
    fn estimated_size() {
        let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, 10, 10).with_num_mip_levels(3);
        assert_eq!(desc.estimated_size_in_bytes(), 516);
        let cube = TextureDesc::new_cube(TextureFormat::RGBA8UNorm, 10, 10).with_num_mip_levels(3);
        assert_eq!(cube.estimated_size_in_bytes(), 516 * 6);
    }

    #[test]
    fn range_bounds() {
        let desc = TextureDesc::new_2d_array(TextureFormat::RGBA8UNorm, 16, 16, 2).with_num_mip_levels(5);
        assert_eq!(desc.validate_range(&desc.full_mip_range()), Ok(()));
        assert_eq!(desc.validate_range(&desc.full_range(4, 1)), Ok(()));
        assert_eq!(
            desc.validate_range(&TextureRangeDesc::new_2d(8, 8, 8, 8, 0, 1)),
            Ok(())
        );

        let outside = [
            TextureRangeDesc::new_2d(9, 0, 8, 8, 0, 1),
            TextureRangeDesc::new_2d(0, 0, 16, 16, 1, 1),
            TextureRangeDesc::new_2d_array(0, 0, 16, 16, 1, 2, 0, 1),
            TextureRangeDesc::new_2d(0, 0, 1, 1, 5, 1),
            TextureRangeDesc::new_cube(0, 0, 16, 16, 0, 1),
        ];
        for range in outside {
            assert_eq!(desc.validate_range(&range), Err(Error::RangeOutOfBounds), "{range:?}");
        }

        let invalid = TextureRangeDesc::new_2d(0, 0, 0, 8, 0, 1);
        assert_eq!(desc.validate_range(&invalid), Err(Error::ZeroExtent));
    }

    #[test]
    fn upload_layout() {
        let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, 10, 10).with_num_mip_levels(3);
        let range = desc.full_range(0, 1);

        let packed = desc.validate_upload(&range, None).unwrap();
        assert_eq!(
            packed,
            UploadLayout {
                bytes_per_row: 40,
                total_bytes: 400,
                needs_repack: false
            }
        );

        let padded = desc.validate_upload(&range, Some(64)).unwrap();
        assert_eq!(padded.bytes_per_row, 64);
        assert_eq!(padded.total_bytes, 640);
        assert!(padded.needs_repack);

        let chain = desc.full_mip_range();
        let chain_packed = UploadLayout {
            bytes_per_row: 40,
            total_bytes: 516,
            needs_repack: false,
        };
        assert_eq!(desc.validate_upload(&chain, None), Ok(chain_packed));
        // Naming the packed stride of mip 0 is the same upload as passing none.
        assert_eq!(desc.validate_upload(&chain, Some(40)), Ok(chain_packed));
        assert_eq!(
            desc.validate_upload(&range, Some(40)),
            desc.validate_upload(&range, None)
        );
    }

    #[test]
    fn upload_rejections() {
        let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, 10, 10).with_num_mip_levels(3);
        let range = desc.full_range(0, 1);
        assert_eq!(
            desc.validate_upload(&range, Some(39)),
            Err(Error::BytesPerRowTooSmall {
                bytes_per_row: 39,
                packed: 40
            })
        );
        assert_eq!(
            desc.validate_upload(&desc.full_mip_range(), Some(64)),
            Err(Error::BytesPerRowWithMipChain { num_mip_levels: 3 })
        );

        let external = TextureDesc::new_external_image(TextureFormat::RGBA8UNorm, 10, 10);
        let err = external
            .validate_upload(&external.full_mip_range(), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let invalid = TextureDesc::new_2d(TextureFormat::Invalid, 4, 4);
        assert_eq!(
            invalid.validate_upload(&invalid.full_mip_range(), None),
            Err(Error::InvalidFormat(TextureFormat::Invalid))
        );

        let cube = TextureDesc::new_cube(TextureFormat::RGBA8UNorm, 4, 4);
        assert!(cube.validate_upload(&cube.cube_face_range(TextureCubeFace::NegY, 0, 1), None).is_ok());
    }

    #[test]
    fn face_on_non_cube() {
        let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, 4, 4);
        let range = desc.full_range(0, 1).at_face(1);
        let err = desc.validate_upload(&range, None).unwrap_err();
        assert_eq!(err, Error::FaceOnNonCube { face: 1 });
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        // Outside of uploads the same range is simply out of bounds.
        assert_eq!(desc.validate_range(&range), Err(Error::RangeOutOfBounds));
    }
}
