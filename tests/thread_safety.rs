// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Tests to ensure the public types can be shared across threads.
//!
//! Layout queries are pure, so the same range sized on many threads must give the
//! same answer everywhere.

use std::sync::Arc;
use texture_ranges::{
    Error, FormatFlags, TextureCubeFace, TextureDesc, TextureFormat, TextureFormatProperties,
    TextureRangeDesc, TextureType, UploadLayout,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<TextureFormat>();
    assert_send_sync::<TextureFormatProperties>();
    assert_send_sync::<FormatFlags>();
    assert_send_sync::<TextureRangeDesc>();
    assert_send_sync::<TextureCubeFace>();
    assert_send_sync::<TextureDesc>();
    assert_send_sync::<TextureType>();
    assert_send_sync::<UploadLayout>();
    assert_send_sync::<Error>();
}

fn sizes(desc: &TextureDesc) -> Vec<usize> {
    let props = desc.properties();
    let whole = desc.full_mip_range();
    (0..desc.num_mip_levels())
        .flat_map(|mip| {
            let level = whole.at_mip_level(mip);
            [
                props.rows(&level),
                props.bytes_per_range(&level, None),
                props.sub_range_byte_offset(&whole, &level, None),
            ]
        })
        .collect()
}

#[test]
fn concurrent_queries_agree() {
    let desc = Arc::new(
        TextureDesc::new_cube(TextureFormat::RGBAAstc6x6, 250, 250)
            .with_num_mip_levels(8)
            .with_debug_name("environment"),
    );
    let expected = sizes(&desc);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let desc = Arc::clone(&desc);
            std::thread::spawn(move || sizes(&desc))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn errors_cross_threads() {
    let desc = TextureDesc::new_external_image(TextureFormat::RGBA8UNorm, 4, 4);
    let err = std::thread::spawn(move || desc.validate_upload(&desc.full_mip_range(), None))
        .join()
        .unwrap()
        .unwrap_err();
    assert_eq!(err, Error::UnsupportedTextureType(TextureType::ExternalImage));
}
