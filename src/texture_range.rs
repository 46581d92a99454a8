// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Addressing a region of a texture.
//!
//! A [`TextureRangeDesc`] names a box of texels (`x, y, z` plus `width, height, depth`), a run of
//! array layers, a run of mip levels and a run of cube faces. It carries no format; pass it to
//! the size functions on [`TextureFormatProperties`](crate::pixel_formats::TextureFormatProperties)
//! to learn how many bytes it spans.
//!
//! Ranges are plain `Copy` values. Every transform returns a new range.
//!
//! ```
//! use texture_ranges::{TextureCubeFace, TextureRangeDesc};
//!
//! let cube = TextureRangeDesc::new_cube(0, 0, 64, 64, 0, 7);
//! let face = cube.at_cube_face(TextureCubeFace::NegY).at_mip_level(2);
//! assert_eq!((face.width, face.height, face.face), (16, 16, 3));
//! assert!(face.validate().is_ok());
//! ```

use crate::bittricks::{extent_at_level, full_chain_length, origin_at_level};
use crate::error::Error;

/// Cube faces in storage order.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureCubeFace {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl TextureCubeFace {
    pub const ALL: [TextureCubeFace; 6] = [
        TextureCubeFace::PosX,
        TextureCubeFace::NegX,
        TextureCubeFace::PosY,
        TextureCubeFace::NegY,
        TextureCubeFace::PosZ,
        TextureCubeFace::NegZ,
    ];
}

impl From<TextureCubeFace> for u32 {
    fn from(face: TextureCubeFace) -> u32 {
        face as u32
    }
}

impl TryFrom<u32> for TextureCubeFace {
    type Error = Error;

    fn try_from(face: u32) -> Result<Self, Self::Error> {
        TextureCubeFace::ALL
            .get(face as usize)
            .copied()
            .ok_or(Error::InvalidFace { face, num_faces: 1 })
    }
}

/// A region of a texture: a texel box, a run of layers, a run of mip levels and a run of faces.
///
/// Extents are expressed at `mip_level`. Fields are public; [`TextureRangeDesc::validate`]
/// checks the invariants the size functions rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRangeDesc {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layer: u32,
    pub num_layers: u32,
    pub mip_level: u32,
    pub num_mip_levels: u32,
    pub face: u32,
    pub num_faces: u32,
}

impl Default for TextureRangeDesc {
    /// A single texel at the origin of layer 0, mip 0, face 0.
    fn default() -> Self {
        TextureRangeDesc {
            x: 0,
            y: 0,
            z: 0,
            width: 1,
            height: 1,
            depth: 1,
            layer: 0,
            num_layers: 1,
            mip_level: 0,
            num_mip_levels: 1,
            face: 0,
            num_faces: 1,
        }
    }
}

impl TextureRangeDesc {
    pub fn new_1d(x: u32, width: u32, mip_level: u32, num_mip_levels: u32) -> Self {
        Self::new_1d_array(x, width, 0, 1, mip_level, num_mip_levels)
    }

    pub fn new_1d_array(
        x: u32,
        width: u32,
        layer: u32,
        num_layers: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        Self::new_2d_array(x, 0, width, 1, layer, num_layers, mip_level, num_mip_levels)
    }

    pub fn new_2d(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        Self::new_2d_array(x, y, width, height, 0, 1, mip_level, num_mip_levels)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_2d_array(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        layer: u32,
        num_layers: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        TextureRangeDesc {
            x,
            y,
            width,
            height,
            layer,
            num_layers,
            mip_level,
            num_mip_levels,
            ..Default::default()
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_3d(
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        depth: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        TextureRangeDesc {
            x,
            y,
            z,
            width,
            height,
            depth,
            mip_level,
            num_mip_levels,
            ..Default::default()
        }
    }

    /// All six faces of a cube.
    pub fn new_cube(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        TextureRangeDesc {
            num_faces: 6,
            ..Self::new_2d(x, y, width, height, mip_level, num_mip_levels)
        }
    }

    /// One face of a cube, by index in [`TextureCubeFace`] order.
    #[allow(clippy::too_many_arguments)]
    pub fn new_cube_face(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        face: u32,
        mip_level: u32,
        num_mip_levels: u32,
    ) -> Self {
        TextureRangeDesc {
            face,
            ..Self::new_2d(x, y, width, height, mip_level, num_mip_levels)
        }
    }

    /**
    The same region at mip `new_mip_level`, one level only.

    Origin and extents step down one level at a time from `mip_level`: extents halve with a
    floor of 1, origins halve to 0. A 10 texel wide range is 5, 2, 1, 1 texels wide at the
    next four levels.

    A level below the current `mip_level` cannot be reconstructed from a downscaled extent, so
    only `mip_level` changes in that case.
    */
    pub fn at_mip_level(&self, new_mip_level: u32) -> Self {
        let mut range = *self;
        range.mip_level = new_mip_level;
        range.num_mip_levels = 1;
        if new_mip_level < self.mip_level {
            logwise::warn_sync!(
                "at_mip_level({new}) from mip {current} keeps the current extents",
                new = new_mip_level,
                current = self.mip_level
            );
            return range;
        }
        let delta = new_mip_level - self.mip_level;
        range.x = origin_at_level(self.x, delta);
        range.y = origin_at_level(self.y, delta);
        range.z = origin_at_level(self.z, delta);
        range.width = extent_at_level(self.width, delta);
        range.height = extent_at_level(self.height, delta);
        range.depth = extent_at_level(self.depth, delta);
        range
    }

    /// `num_mip_levels` consecutive levels starting at the current `mip_level`.
    pub fn with_num_mip_levels(&self, num_mip_levels: u32) -> Self {
        TextureRangeDesc {
            num_mip_levels,
            ..*self
        }
    }

    /// A single layer.
    pub fn at_layer(&self, layer: u32) -> Self {
        TextureRangeDesc {
            layer,
            num_layers: 1,
            ..*self
        }
    }

    pub fn with_num_layers(&self, num_layers: u32) -> Self {
        TextureRangeDesc {
            num_layers,
            ..*self
        }
    }

    /// A single cube face, by index.
    pub fn at_face(&self, face: u32) -> Self {
        TextureRangeDesc {
            face,
            num_faces: 1,
            ..*self
        }
    }

    pub fn at_cube_face(&self, face: TextureCubeFace) -> Self {
        self.at_face(face.into())
    }

    pub fn with_num_faces(&self, num_faces: u32) -> Self {
        TextureRangeDesc {
            num_faces,
            ..*self
        }
    }

    /// Checks the invariants the size functions assume.
    ///
    /// * every count and extent is at least 1
    /// * `num_mip_levels` does not exceed the mip chain of `width x height x depth`
    /// * `face < 6` and `num_faces` is 1 or 6
    /// * origin plus extent fits in `u32` on every axis, and so does the layer run
    /// * `(x + width) * (y + height) * (z + depth) * (layer + num_layers) * num_faces` fits in `u32`
    pub fn validate(&self) -> Result<(), Error> {
        let result = self.check();
        if let Err(err) = &result {
            logwise::trace_sync!(
                "TextureRangeDesc::validate rejected {range}: {err}",
                range = logwise::privacy::LogIt(self),
                err = logwise::privacy::LogIt(err)
            );
        }
        result
    }

    fn check(&self) -> Result<(), Error> {
        if self.width == 0
            || self.height == 0
            || self.depth == 0
            || self.num_layers == 0
            || self.num_mip_levels == 0
            || self.num_faces == 0
        {
            return Err(Error::ZeroExtent);
        }
        let max_mip_levels = full_chain_length(self.width, self.height, self.depth);
        if self.num_mip_levels > max_mip_levels {
            return Err(Error::TooManyMipLevels {
                num_mip_levels: self.num_mip_levels,
                max_mip_levels,
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        if self.face >= 6 || (self.num_faces != 1 && self.num_faces != 6) {
            return Err(Error::InvalidFace {
                face: self.face,
                num_faces: self.num_faces,
            });
        }

        let axes = [
            ("x", self.x, self.width),
            ("y", self.y, self.height),
            ("z", self.z, self.depth),
            ("layer", self.layer, self.num_layers),
        ];
        let mut volume: u64 = self.num_faces as u64;
        for (axis, origin, extent) in axes {
            let end = origin
                .checked_add(extent)
                .ok_or(Error::AxisOverflow { axis })?;
            // Each factor is at most u32::MAX, so the running product stays within u64.
            volume *= end as u64;
            if volume > u32::MAX as u64 {
                return Err(Error::VolumeOverflow);
            }
        }
        Ok(())
    }
}
