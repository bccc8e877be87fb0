//! Estimate table and linear interpolation.
//!
//! Entry `i` of the table is `round(65536 / sqrt(2^i))`, the exact Q16.16
//! reciprocal square root of the power of two `2^i`. For inputs between
//! powers of two, the seed interpolates linearly toward the next entry.

use crate::mul::mul32_wide;

/// Initial estimates for `65536 / sqrt(2^i)`, `i` in `[0, 31]`.
pub const RSQRT_TABLE: [u32; 32] = [
    65536, 46341, 32768, 23170, 16384, // 2^0  to 2^4
    11585, 8192, 5793, 4096, 2896, // 2^5  to 2^9
    2048, 1448, 1024, 724, 512, // 2^10 to 2^14
    362, 256, 181, 128, 90, // 2^15 to 2^19
    64, 45, 32, 23, 16, // 2^20 to 2^24
    11, 8, 6, 4, 3, // 2^25 to 2^29
    2, 1, // 2^30, 2^31
];

/// Initial Q16 estimate for `x >= 2`, where `e = 31 - clz32(x)`.
///
/// Looks up the table entry for `2^e` and, when `x` is not itself a power of
/// two, subtracts the interpolated share of the drop toward the entry for
/// `2^(e+1)`. The `e = 31` boundary has no successor entry and interpolates
/// toward zero.
///
/// The result is coarse on purpose: it only needs to start the Newton stage
/// inside its two-iteration convergence basin.
pub fn seed(x: u32, e: u32) -> u32 {
    let mut y = RSQRT_TABLE[e as usize];
    if x > 1u32 << e {
        let y_next = if e < 31 { RSQRT_TABLE[e as usize + 1] } else { 0 };
        let delta = y - y_next;
        // frac = ((x - 2^e) / 2^e) in Q16, always in [0, 65536)
        let frac = (((x as u64 - (1u64 << e)) << 16) >> e) as u32;
        y -= (mul32_wide(delta, frac) >> 16) as u32;
    }
    y
}
