// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
mip arithmetic.

Extents halve with a floor of 1, origins halve without one. Block counts round up.
*/

/// One mip step for an extent.
#[inline]
pub const fn halve_extent(extent: u32) -> u32 {
    let half = extent >> 1;
    if half == 0 { 1 } else { half }
}

/// `levels` mip steps for an extent, one flooring halving per level.
///
/// Stepwise so that odd sizes round at each level the way GPUs size their mips
/// (10 -> 5 -> 2 -> 1), not the way a single shift would.
pub const fn extent_at_level(mut extent: u32, levels: u32) -> u32 {
    let mut i = 0;
    while i < levels && extent > 1 {
        extent = halve_extent(extent);
        i += 1;
    }
    extent
}

/// `levels` mip steps for an origin coordinate.
#[inline]
pub const fn origin_at_level(origin: u32, levels: u32) -> u32 {
    if levels >= 32 { 0 } else { origin >> levels }
}

/// Number of blocks covering `pixels`, never fewer than `min_blocks`.
///
/// `block` is at least 1 for every catalog entry, the invalid one included.
#[inline]
pub const fn blocks(pixels: u32, block: u8, min_blocks: u8) -> u64 {
    let block = if block == 0 { 1 } else { block as u64 };
    let count = (pixels as u64).div_ceil(block);
    if count < min_blocks as u64 {
        min_blocks as u64
    } else {
        count
    }
}

/// Length of the full mip chain for a `width x height x depth` texture.
///
/// The bit length of `width | height | depth`; 0 when any extent is 0.
pub const fn full_chain_length(width: u32, height: u32, depth: u32) -> u32 {
    if width == 0 || height == 0 || depth == 0 {
        return 0;
    }
    u32::BITS - (width | height | depth).leading_zeros()
}

/// Rounds `value` up to a multiple of `alignment`, which must be a power of two.
#[inline]
pub const fn align_up(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_is_stepwise() {
        assert_eq!(extent_at_level(10, 1), 5);
        assert_eq!(extent_at_level(10, 2), 2);
        assert_eq!(extent_at_level(10, 3), 1);
        assert_eq!(extent_at_level(10, 4), 1);
        assert_eq!(extent_at_level(10, 0), 10);
        assert_eq!(extent_at_level(u32::MAX, 40), 1);
    }

    #[test]
    fn origins_reach_zero() {
        assert_eq!(origin_at_level(5, 1), 2);
        assert_eq!(origin_at_level(5, 3), 0);
        assert_eq!(origin_at_level(u32::MAX, 32), 0);
    }

    #[test]
    fn block_counts() {
        assert_eq!(blocks(10, 1, 1), 10);
        assert_eq!(blocks(10, 8, 2), 2);
        assert_eq!(blocks(17, 8, 2), 3);
        assert_eq!(blocks(2, 4, 2), 2);
        assert_eq!(blocks(u32::MAX, 1, 1), u32::MAX as u64);
    }

    #[test]
    fn chain_length() {
        assert_eq!(full_chain_length(1, 1, 1), 1);
        assert_eq!(full_chain_length(1024, 1024, 1), 11);
        assert_eq!(full_chain_length(10, 3, 1), 4);
        assert_eq!(full_chain_length(1, 1, 1024), 11);
        assert_eq!(full_chain_length(0, 5, 5), 0);
        assert_eq!(full_chain_length(u32::MAX, 1, 1), 32);
    }

    #[test]
    fn alignment() {
        assert_eq!(align_up(252, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(0, 256), 0);
    }
}
