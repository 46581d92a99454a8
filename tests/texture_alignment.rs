// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Row alignment for buffer-to-texture copies.
//!
//! Copies require `bytes_per_row` to be a multiple of 256. RGBA8 rows of 64 and 128 pixels
//! already are; 63, 100 and 150 pixel rows need padding, and repacking into the padded
//! stride must keep every pixel.

use texture_ranges::repack::repack_rows;
use texture_ranges::{TextureDesc, TextureFormat, TextureRangeDesc};

const ALIGNMENT: usize = 256;

/// Helper function to test a specific width
fn check_width(width: u32) {
    let props = TextureFormat::RGBA8UNorm.properties();
    let range = TextureRangeDesc::new_2d(0, 0, width, 4, 0, 1);
    let packed = props.bytes_per_row(&range);
    let aligned = props.aligned_bytes_per_row(&range, ALIGNMENT);
    println!("width {width}: packed {packed} bytes, aligned {aligned} bytes");

    assert_eq!(packed, width as usize * 4);
    assert_eq!(aligned % ALIGNMENT, 0);
    assert!(aligned >= packed);
    assert!(aligned - packed < ALIGNMENT);
    if packed % ALIGNMENT == 0 {
        assert_eq!(aligned, packed);
    }

    let desc = TextureDesc::new_2d(TextureFormat::RGBA8UNorm, width, 4);
    let upload = desc.validate_upload(&range, Some(aligned)).unwrap();
    assert_eq!(upload.needs_repack, aligned != packed);
    assert_eq!(upload.total_bytes, aligned * 4);

    let src: Vec<u8> = (0..packed * 4).map(|i| (i % 253) as u8).collect();
    let mut padded = vec![0u8; upload.total_bytes];
    repack_rows(&props, &range, &src, None, &mut padded, Some(aligned), false).unwrap();
    for row in 0..4 {
        assert_eq!(
            &padded[row * aligned..row * aligned + packed],
            &src[row * packed..(row + 1) * packed],
            "row {row} of width {width}"
        );
    }

    #[cfg(feature = "backend_wgpu")]
    assert_eq!(props.wgpu_aligned_bytes_per_row(&range), aligned);
}

#[test]
fn texture_alignment_width_63() {
    check_width(63);
}

#[test]
fn texture_alignment_width_64() {
    check_width(64); // 64 * 4 = 256, which is aligned
}

#[test]
fn texture_alignment_width_100() {
    check_width(100);
}

#[test]
fn texture_alignment_width_128() {
    check_width(128); // 128 * 4 = 512, which is aligned
}

#[test]
fn texture_alignment_width_150() {
    check_width(150);
}
