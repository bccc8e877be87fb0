//! Fixed-point reciprocal square root kernel.
//!
//! Computes `y ≈ 65536/√x` for a 32-bit unsigned `x`, returned as a Q16.16
//! value, using only addition, subtraction, shifts, and comparisons. The
//! kernel targets a minimal integer-only RV32-class core: no hardware MUL or
//! DIV, no floating point, no library support.
//!
//! Pipeline: bit-scan gives the exponent, a 32-entry lookup table gives a
//! coarse estimate, linear interpolation between adjacent entries refines it,
//! and two fixed Newton-Raphson iterations sharpen it into the documented
//! accuracy band.
//!
//! Every code path executes a statically bounded number of operations
//! (bit-scan at most 5 tests, multiply exactly 32 iterations, exactly 2
//! Newton steps), so worst-case cost is a compile-time constant.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod bits;
pub mod mul;
pub mod newton;
pub mod table;

pub use bits::clz32;
pub use mul::mul32_wide;
pub use newton::{NEWTON_ITERATIONS, newton_step};
pub use table::{RSQRT_TABLE, seed};

/// 1.0 in Q16.16 fixed point.
pub const Q16_ONE: u32 = 1 << 16;

/// Saturation sentinel returned for `x = 0` ("infinity").
pub const RSQRT_INFINITY: u32 = u32::MAX;

/// Compute `65536/√x` as a Q16.16 value.
///
/// Total over all inputs; the two non-mathematical cases are plain sentinel
/// returns, not errors:
/// - `x = 0` returns [`RSQRT_INFINITY`] (`0xFFFF_FFFF`).
/// - `x = 1` returns [`Q16_ONE`] (`65536`, exact).
///
/// Everything else goes through table lookup, interpolation, and two Newton
/// steps, landing within a few percent of the true value (see the accuracy
/// tests for the measured band).
pub fn rsqrt_q16(x: u32) -> u32 {
    if x == 0 {
        return RSQRT_INFINITY;
    }
    if x == 1 {
        return Q16_ONE;
    }

    let e = 31 - clz32(x);
    let mut y = seed(x, e);
    for _ in 0..NEWTON_ITERATIONS {
        y = newton_step(x, y);
    }
    y
}
