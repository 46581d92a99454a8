// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Moving texel rows between buffers with different row strides.
//!
//! Upload paths take data in whatever stride the caller has, but most backends want either
//! tightly packed rows or rows padded to an alignment. [`repack_rows`] converts between the two,
//! optionally flipping each image vertically on the way.

use crate::error::Error;
use crate::layout::mip_levels;
use crate::pixel_formats::TextureFormatProperties;
use crate::texture_range::TextureRangeDesc;

fn check_stride(bytes_per_row: Option<usize>, packed: usize) -> Result<(), Error> {
    match bytes_per_row {
        Some(stride) if stride < packed => Err(Error::BytesPerRowTooSmall {
            bytes_per_row: stride,
            packed,
        }),
        _ => Ok(()),
    }
}

fn check_len(len: usize, required: usize) -> Result<(), Error> {
    if len < required {
        Err(Error::BufferTooSmall { len, required })
    } else {
        Ok(())
    }
}

/**
Copies every block row of `range` from `src` to `dst`.

`src_bytes_per_row` and `dst_bytes_per_row` are the row strides of each buffer, `None` meaning
tightly packed. Images (depth slices, faces, layers, mip levels) follow each other in the order
described in [`crate::layout`]. With `flip_vertical` the rows of each image are written bottom
to top.

Custom strides only make sense for a single mip level, since each level has its own packed row.

# Errors

* [`Error::InvalidFormat`] for a format with no storage size
* [`Error::BytesPerRowWithMipChain`] for a custom stride with more than one mip level
* [`Error::BytesPerRowTooSmall`] for a stride that cannot hold a packed row
* [`Error::BufferTooSmall`] when either buffer cannot hold `range` at its stride

Nothing is written unless every check passes.

```
use texture_ranges::{TextureFormat, TextureRangeDesc};
use texture_ranges::repack::repack_rows;

let props = TextureFormat::R8UNorm.properties();
let range = TextureRangeDesc::new_2d(0, 0, 2, 2, 0, 1);
// Rows padded to 4 bytes.
let src = [1, 2, 0, 0, 3, 4, 0, 0];
let mut dst = [0u8; 4];
repack_rows(&props, &range, &src, Some(4), &mut dst, None, true).unwrap();
assert_eq!(dst, [3, 4, 1, 2]);
```
*/
pub fn repack_rows(
    properties: &TextureFormatProperties,
    range: &TextureRangeDesc,
    src: &[u8],
    src_bytes_per_row: Option<usize>,
    dst: &mut [u8],
    dst_bytes_per_row: Option<usize>,
    flip_vertical: bool,
) -> Result<(), Error> {
    properties.validate()?;
    if range.num_mip_levels > 1 && (src_bytes_per_row.is_some() || dst_bytes_per_row.is_some()) {
        return Err(Error::BytesPerRowWithMipChain {
            num_mip_levels: range.num_mip_levels,
        });
    }
    let packed = properties.bytes_per_row(range);
    check_stride(src_bytes_per_row, packed)?;
    check_stride(dst_bytes_per_row, packed)?;
    check_len(src.len(), properties.bytes_per_range(range, src_bytes_per_row))?;
    check_len(dst.len(), properties.bytes_per_range(range, dst_bytes_per_row))?;

    let _repack_guard = logwise::profile_begin!("repack_rows");
    let mut src_offset = 0usize;
    let mut dst_offset = 0usize;
    for level in mip_levels(range) {
        let row_bytes = properties.bytes_per_row(&level);
        let src_stride = src_bytes_per_row.unwrap_or(row_bytes);
        let dst_stride = dst_bytes_per_row.unwrap_or(row_bytes);
        let rows = properties.blocks_y(level.height) as usize;
        let images = properties.blocks_z(level.depth) as usize
            * level.num_layers as usize
            * level.num_faces as usize;

        for _ in 0..images {
            for row in 0..rows {
                let dst_row = if flip_vertical { rows - 1 - row } else { row };
                let from = src_offset + row * src_stride;
                let to = dst_offset + dst_row * dst_stride;
                let source = src.get(from..from + row_bytes).ok_or(Error::BufferTooSmall {
                    len: src.len(),
                    required: from + row_bytes,
                })?;
                let dst_len = dst.len();
                let target = dst.get_mut(to..to + row_bytes).ok_or(Error::BufferTooSmall {
                    len: dst_len,
                    required: to + row_bytes,
                })?;
                target.copy_from_slice(source);
            }
            src_offset += rows * src_stride;
            dst_offset += rows * dst_stride;
        }
    }
    Ok(())
}

impl TextureFormatProperties {
    /// The bytes of `sub_range` inside `data`, which holds all of `range`.
    ///
    /// Fails with [`Error::BufferTooSmall`] if `data` ends before `sub_range` does.
    pub fn sub_range_bytes<'a>(
        &self,
        data: &'a [u8],
        range: &TextureRangeDesc,
        sub_range: &TextureRangeDesc,
        bytes_per_row: Option<usize>,
    ) -> Result<&'a [u8], Error> {
        let start = self.sub_range_byte_offset(range, sub_range, bytes_per_row);
        let end = start.saturating_add(self.bytes_per_range(sub_range, bytes_per_row));
        data.get(start..end).ok_or(Error::BufferTooSmall {
            len: data.len(),
            required: end,
        })
    }
}
