// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::error::Error;
use crate::pixel_formats::TextureFormatProperties;
use crate::texture::{TextureDesc, TextureType};
use crate::texture_range::TextureRangeDesc;
use wgpu::{Extent3d, Origin3d, TexelCopyBufferLayout};

fn to_u32(what: &'static str, value: u64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::ValueOverflow { what, value })
}

impl TextureDesc {
    /**
    The origin and extent of `range` in wgpu's addressing, for the level `range.mip_level`.

    wgpu folds layers and cube faces into array layers: layer `l`, face `f` of a cube is array
    layer `l * 6 + f`. 3D textures use `z` and `depth` instead.
    */
    pub fn wgpu_copy_region(&self, range: &TextureRangeDesc) -> Result<(Origin3d, Extent3d), Error> {
        self.validate_range(range)?;
        let (z, depth_or_array_layers) = match self.texture_type() {
            TextureType::ThreeD => (range.z as u64, range.depth as u64),
            TextureType::TwoD | TextureType::TwoDArray => {
                (range.layer as u64, range.num_layers as u64)
            }
            TextureType::Cube => (
                range.layer as u64 * 6 + range.face as u64,
                range.num_layers as u64 * range.num_faces as u64,
            ),
            other => return Err(Error::UnsupportedTextureType(other)),
        };
        Ok((
            Origin3d {
                x: range.x,
                y: range.y,
                z: to_u32("array layer", z)?,
            },
            Extent3d {
                width: range.width,
                height: range.height,
                depth_or_array_layers: to_u32("array layer count", depth_or_array_layers)?,
            },
        ))
    }
}

impl TextureFormatProperties {
    /// The buffer side of a copy of one mip level of `range`, starting `offset` bytes in.
    ///
    /// `bytes_per_row` of `None` means tightly packed rows.
    pub fn wgpu_buffer_layout(
        &self,
        range: &TextureRangeDesc,
        offset: u64,
        bytes_per_row: Option<usize>,
    ) -> Result<TexelCopyBufferLayout, Error> {
        let stride = bytes_per_row.unwrap_or_else(|| self.bytes_per_row(range));
        Ok(TexelCopyBufferLayout {
            offset,
            bytes_per_row: Some(to_u32("bytes_per_row", stride as u64)?),
            rows_per_image: Some(to_u32("rows_per_image", self.blocks_y(range.height))?),
        })
    }

    /// The packed row of `range` rounded up to [`wgpu::COPY_BYTES_PER_ROW_ALIGNMENT`],
    /// as buffer-to-texture copies require.
    pub fn wgpu_aligned_bytes_per_row(&self, range: &TextureRangeDesc) -> usize {
        self.aligned_bytes_per_row(range, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::TextureFormat;
    use crate::texture_range::TextureCubeFace;

    #[test]
    fn array_layers_address_z() {
        let desc = TextureDesc::new_2d_array(TextureFormat::RGBA8UNorm, 16, 16, 4);
        let range = TextureRangeDesc::new_2d_array(2, 3, 8, 8, 1, 2, 0, 1);
        let (origin, extent) = desc.wgpu_copy_region(&range).unwrap();
        assert_eq!((origin.x, origin.y, origin.z), (2, 3, 1));
        assert_eq!(
            (extent.width, extent.height, extent.depth_or_array_layers),
            (8, 8, 2)
        );
    }

    #[test]
    fn cube_faces_are_array_layers() {
        let desc = TextureDesc::new_cube(TextureFormat::RGBA8UNorm, 8, 8);
        let face = desc.cube_face_range(TextureCubeFace::PosZ, 0, 1);
        let (origin, extent) = desc.wgpu_copy_region(&face).unwrap();
        assert_eq!(origin.z, 4);
        assert_eq!(extent.depth_or_array_layers, 1);

        let (origin, extent) = desc.wgpu_copy_region(&desc.full_range(0, 1)).unwrap();
        assert_eq!(origin.z, 0);
        assert_eq!(extent.depth_or_array_layers, 6);
    }

    #[test]
    fn volumes_address_depth() {
        let desc = TextureDesc::new_3d(TextureFormat::R8UNorm, 8, 8, 8).with_num_mip_levels(2);
        let range = TextureRangeDesc::new_3d(0, 0, 1, 4, 4, 3, 1, 1);
        let (origin, extent) = desc.wgpu_copy_region(&range).unwrap();
        assert_eq!(origin.z, 1);
        assert_eq!(extent.depth_or_array_layers, 3);
    }

    #[test]
    fn unsupported_and_out_of_bounds() {
        let external = TextureDesc::new_external_image(TextureFormat::RGBA8UNorm, 4, 4);
        assert_eq!(
            external.wgpu_copy_region(&external.full_mip_range()),
            Err(Error::UnsupportedTextureType(TextureType::ExternalImage))
        );
        let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, 4, 4);
        assert_eq!(
            desc.wgpu_copy_region(&TextureRangeDesc::new_2d(0, 0, 8, 8, 0, 1)),
            Err(Error::RangeOutOfBounds)
        );
    }

    #[test]
    fn buffer_layout() {
        let props = TextureFormat::RGBPvrtc2BppV1.properties();
        let range = TextureRangeDesc::new_2d(0, 0, 10, 10, 0, 1);
        let layout = props.wgpu_buffer_layout(&range, 64, None).unwrap();
        assert_eq!(layout.offset, 64);
        assert_eq!(layout.bytes_per_row, Some(16));
        assert_eq!(layout.rows_per_image, Some(3));

        let padded = TextureFormat::RGBA8UNorm
            .properties()
            .wgpu_buffer_layout(&range, 0, Some(256))
            .unwrap();
        assert_eq!(padded.bytes_per_row, Some(256));
        assert_eq!(padded.rows_per_image, Some(10));

        let err = TextureFormat::RGBA8UNorm
            .properties()
            .wgpu_buffer_layout(&range, 0, Some(usize::MAX))
            .unwrap_err();
        assert!(matches!(err, Error::ValueOverflow { what: "bytes_per_row", .. }));
    }

    #[test]
    fn aligned_rows() {
        let props = TextureFormat::RGBA8UNorm.properties();
        let range = TextureRangeDesc::new_2d(0, 0, 100, 1, 0, 1);
        assert_eq!(props.wgpu_aligned_bytes_per_row(&range), 512);
    }
}
