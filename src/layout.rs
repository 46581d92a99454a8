// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Byte layout of texture ranges.

Sizes are computed on [`TextureFormatProperties`] for a [`TextureRangeDesc`]. Data for a range
is laid out mip-major: every layer of mip `n` precedes mip `n + 1`, and every face of a layer
precedes the next layer.

```text
mip 0: layer 0 [face 0 .. face 5] layer 1 [face 0 .. face 5] ...
mip 1: layer 0 [face 0 .. face 5] ...
```

Inside one face of one layer of one mip, block rows are stored top to bottom and depth
slices follow each other.

These functions assume `range.validate()` passed and do not check it again. Given the
`Invalid` format they return 0 rather than panic, whatever row stride is passed.

```
use texture_ranges::{TextureFormat, TextureRangeDesc};

let props = TextureFormat::RGBA8UNorm.properties();
let range = TextureRangeDesc::new_2d(0, 0, 10, 10, 0, 3);
assert_eq!(props.bytes_per_row(&range), 40);
assert_eq!(props.bytes_per_layer(&range, None), 400);
assert_eq!(props.bytes_per_range(&range, None), (100 + 25 + 4) * 4);
assert_eq!(props.sub_range_byte_offset(&range, &range.at_mip_level(2), None), 500);
```
*/

use crate::bittricks::{align_up, blocks, full_chain_length};
use crate::pixel_formats::TextureFormatProperties;
use crate::texture_range::TextureRangeDesc;

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Each mip level of `range` as a single-level range.
pub(crate) fn mip_levels(range: &TextureRangeDesc) -> impl Iterator<Item = TextureRangeDesc> + '_ {
    (0..range.num_mip_levels).map(move |i| range.at_mip_level(range.mip_level.saturating_add(i)))
}

impl TextureFormatProperties {
    fn blocks_x(&self, width: u32) -> u64 {
        blocks(width, self.block_width(), self.min_blocks_x())
    }

    pub(crate) fn blocks_y(&self, height: u32) -> u64 {
        blocks(height, self.block_height(), self.min_blocks_y())
    }

    pub(crate) fn blocks_z(&self, depth: u32) -> u64 {
        blocks(depth, self.block_depth(), self.min_blocks_z())
    }

    /// Block rows of one level, all depth slices, faces and layers.
    fn rows_at_level(&self, level: &TextureRangeDesc) -> u64 {
        self.blocks_y(level.height)
            .saturating_mul(self.blocks_z(level.depth))
            .saturating_mul(level.num_faces as u64)
            .saturating_mul(level.num_layers as u64)
    }

    /**
    Number of storage rows `range` spans.

    A storage row is a row of blocks, so a 10 pixel tall PVRTC 2bpp image (4 pixel tall blocks)
    has 3 rows. Depth slices, faces and layers multiply the count. With more than one mip
    level the per-level counts are summed, each level halved from the one above.
    */
    pub fn rows(&self, range: &TextureRangeDesc) -> usize {
        let total = mip_levels(range)
            .map(|level| self.rows_at_level(&level))
            .fold(0u64, u64::saturating_add);
        to_usize(total)
    }

    /// Bytes in one tightly packed row of `range.width` pixels.
    pub fn bytes_per_row(&self, range: &TextureRangeDesc) -> usize {
        self.bytes_per_row_for_width(range.width)
    }

    /// Bytes in one tightly packed row of `width` pixels.
    pub fn bytes_per_row_for_width(&self, width: u32) -> usize {
        to_usize(
            self.blocks_x(width)
                .saturating_mul(self.bytes_per_block() as u64),
        )
    }

    /// The packed row, rounded up to `alignment` (a power of two).
    pub fn aligned_bytes_per_row(&self, range: &TextureRangeDesc, alignment: usize) -> usize {
        align_up(self.bytes_per_row(range), alignment)
    }

    fn row_stride(&self, width: u32, bytes_per_row: Option<usize>) -> u64 {
        if self.bytes_per_block() == 0 {
            return 0;
        }
        let packed = self.bytes_per_row_for_width(width);
        let stride = match bytes_per_row {
            Some(custom) if custom < packed => {
                logwise::warn_sync!(
                    "bytes_per_row {custom} is below the packed row of {packed} bytes; using the packed row",
                    custom = custom,
                    packed = packed
                );
                packed
            }
            Some(custom) => custom,
            None => packed,
        };
        stride as u64
    }

    /**
    Bytes in one layer of one face of one mip level of `range`.

    `bytes_per_row` overrides the row stride. `None` means tightly packed rows. A stride below
    the packed row cannot hold a row, so it is raised to the packed row.
    */
    pub fn bytes_per_layer(&self, range: &TextureRangeDesc, bytes_per_row: Option<usize>) -> usize {
        to_usize(
            self.row_stride(range.width, bytes_per_row)
                .saturating_mul(self.blocks_y(range.height))
                .saturating_mul(self.blocks_z(range.depth)),
        )
    }

    pub fn bytes_per_layer_for_size(
        &self,
        width: u32,
        height: u32,
        depth: u32,
        bytes_per_row: Option<usize>,
    ) -> usize {
        self.bytes_per_layer(
            &TextureRangeDesc::new_3d(0, 0, 0, width, height, depth, 0, 1),
            bytes_per_row,
        )
    }

    /// Bytes for every mip level, layer and face of `range`.
    pub fn bytes_per_range(&self, range: &TextureRangeDesc, bytes_per_row: Option<usize>) -> usize {
        let total = mip_levels(range)
            .map(|level| {
                (self.bytes_per_layer(&level, bytes_per_row) as u64)
                    .saturating_mul(level.num_layers as u64)
                    .saturating_mul(level.num_faces as u64)
            })
            .fold(0u64, u64::saturating_add);
        to_usize(total)
    }

    /**
    Byte offset of `sub_range` inside a buffer holding all of `range`.

    Skips the whole mip levels before `sub_range.mip_level`, then the layers before
    `sub_range.layer` at that level, then the faces before `sub_range.face` in that layer.
    The texel origin of `sub_range` is not part of the offset.

    `sub_range` must start inside `range`.
    */
    pub fn sub_range_byte_offset(
        &self,
        range: &TextureRangeDesc,
        sub_range: &TextureRangeDesc,
        bytes_per_row: Option<usize>,
    ) -> usize {
        debug_assert!(sub_range.mip_level >= range.mip_level);
        debug_assert!(sub_range.mip_level - range.mip_level < range.num_mip_levels);
        debug_assert!(sub_range.layer >= range.layer);
        debug_assert!(sub_range.layer - range.layer < range.num_layers);
        debug_assert!(sub_range.face >= range.face);
        debug_assert!(sub_range.face - range.face < range.num_faces);

        let mut offset = 0usize;
        let mut working = *range;
        if sub_range.mip_level > working.mip_level {
            let skipped = working.with_num_mip_levels(sub_range.mip_level - working.mip_level);
            offset = offset.saturating_add(self.bytes_per_range(&skipped, bytes_per_row));
        }
        working = working.at_mip_level(sub_range.mip_level);

        if sub_range.layer > working.layer {
            let skipped = working.with_num_layers(sub_range.layer - working.layer);
            offset = offset.saturating_add(self.bytes_per_range(&skipped, bytes_per_row));
        }
        working = working.at_layer(sub_range.layer);

        if sub_range.face > working.face {
            let skipped = working.with_num_faces(sub_range.face - working.face);
            offset = offset.saturating_add(self.bytes_per_range(&skipped, bytes_per_row));
        }
        offset
    }

    /**
    How many whole mip levels of a `width x height` image, starting at mip 0, fit in
    `total_bytes`.

    Never more than the full mip chain. 0 for the `Invalid` format.
    */
    pub fn num_mip_levels(&self, width: u32, height: u32, total_bytes: usize) -> u32 {
        if self.bytes_per_block() == 0 {
            return 0;
        }
        let range = TextureRangeDesc::new_2d(0, 0, width, height, 0, 1);
        let max_levels = full_chain_length(width, height, 1);
        let mut remaining = total_bytes;
        let mut levels = 0;
        while levels < max_levels && remaining > 0 {
            let level_bytes = self.bytes_per_range(&range.at_mip_level(levels), None);
            if level_bytes > remaining {
                break;
            }
            remaining -= level_bytes;
            levels += 1;
        }
        levels
    }
}
