// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! texture_ranges computes the storage layout of GPU textures: how many rows and bytes a region
of a texture occupies, and where a smaller region starts inside a buffer holding a larger one.

Every texture upload and readback path needs the same arithmetic. Compressed formats store
blocks rather than pixels, mip levels halve, cube faces and array layers multiply, and
backends disagree about row padding. This crate does that arithmetic once, for every format
in its catalog, so backends don't each get it subtly wrong.

| Piece | Type | Answers |
|-------|------|---------|
| Format catalog | [`TextureFormat`], [`TextureFormatProperties`] | block size, block dimensions, flags |
| Ranges | [`TextureRangeDesc`] | which texels, layers, faces and mip levels |
| Layout | methods on [`TextureFormatProperties`] | rows, bytes per row / layer / range, offsets |
| Textures | [`TextureDesc`] | full ranges, bounds checks, upload checks |
| Repacking | [`repack::repack_rows`] | re-striding and flipping rows |

# Example

```
use texture_ranges::{TextureDesc, TextureFormat, TextureRangeDesc};

let desc = TextureDesc::new_2d_array(TextureFormat::RGBAAstc4x4, 64, 64, 2).with_num_mip_levels(7);
let props = desc.properties();
let whole = desc.full_mip_range();
assert!(desc.validate_range(&whole).is_ok());

// Layer 1 of mip 2 is 16x16 texels, 4x4 blocks of 16 bytes.
let sub = whole.at_mip_level(2).at_layer(1);
assert_eq!(props.bytes_per_range(&sub, None), 256);

// It starts after both layers of mips 0 and 1, and layer 0 of mip 2.
let offset = props.sub_range_byte_offset(&whole, &sub, None);
assert_eq!(offset, 2 * (4096 + 1024) + 256);
```

# Failure model

Validation ([`TextureRangeDesc::validate`], [`TextureDesc::validate_range`],
[`TextureDesc::validate_upload`]) returns [`Error`]s. The size functions trust their input and
never re-check it; validate a range once, then size it as often as you like.

# Backends

With the `backend_wgpu` feature (on by default) formats map to `wgpu::TextureFormat`, and
ranges map to the origin, extent and buffer layout wgpu's copy functions take.
*/

logwise::declare_logging_domain!();

mod bittricks;
pub mod error;
mod imp;
pub mod layout;
pub mod pixel_formats;
pub mod repack;
pub mod texture;
pub mod texture_range;

pub use error::{Error, ErrorKind};
pub use pixel_formats::{FormatFlags, TextureFormat, TextureFormatProperties};
pub use texture::{TextureDesc, TextureType, UploadLayout};
pub use texture_range::{TextureCubeFace, TextureRangeDesc};
