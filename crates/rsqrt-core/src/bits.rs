//! Bit-scan primitive.
//!
//! The target ISA has no CLZ instruction, so leading zeros are counted with
//! binary-search style folding: test and shift in halves (16, 8, 4, 2, 1
//! bits). At most 5 tests regardless of operand value.

/// Count leading zero bits of `v`.
///
/// Returns 32 for `v = 0` (no bit set); otherwise a value in `[0, 31]`
/// satisfying `2^(31-r) <= v < 2^(32-r)`.
pub fn clz32(v: u32) -> u32 {
    if v == 0 {
        return 32;
    }
    let mut v = v;
    let mut n = 0;
    if v & 0xFFFF_0000 == 0 {
        n += 16;
        v <<= 16;
    }
    if v & 0xFF00_0000 == 0 {
        n += 8;
        v <<= 8;
    }
    if v & 0xF000_0000 == 0 {
        n += 4;
        v <<= 4;
    }
    if v & 0xC000_0000 == 0 {
        n += 2;
        v <<= 2;
    }
    if v & 0x8000_0000 == 0 {
        n += 1;
    }
    n
}
