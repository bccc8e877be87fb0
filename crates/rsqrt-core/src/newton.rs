//! Newton-Raphson refinement in Q16 fixed point.
//!
//! One step of Newton's method for `f(y) = 1/y^2 - x` is
//! `y <- y * (3 - x*y^2) / 2`. In Q16 that becomes
//! `y = (y * ((3 << 16) - ((x * y^2) >> 16))) >> 17`, where the final `>> 17`
//! folds together the halving and the Q16 rescale. All products go through
//! the shift-add multiplier.

use crate::mul::mul32_wide;

/// Number of refinement steps applied by the driver.
///
/// Fixed, not adaptive: the interpolated seed is close enough that two steps
/// reach the documented accuracy band, and a fixed count keeps the cycle cost
/// a compile-time constant.
pub const NEWTON_ITERATIONS: u32 = 2;

/// One Q16 Newton step toward `65536/sqrt(x)`.
///
/// Intermediate products are truncated to 32 bits exactly as on the target:
/// `y^2` keeps its low 32 bits (in-domain seeds never exceed them), and the
/// `3 - x*y^2` term uses wrapping unsigned subtraction.
pub fn newton_step(x: u32, y: u32) -> u32 {
    let y2 = mul32_wide(y, y) as u32;
    let xy2 = (mul32_wide(x, y2) >> 16) as u32;
    (mul32_wide(y, (3u32 << 16).wrapping_sub(xy2)) >> 17) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_of_exact_value() {
        // y = 65536/sqrt(4) = 32768 is (nearly) a fixed point: one step must
        // not move it by more than a count.
        let y = newton_step(4, 32768);
        assert!(y.abs_diff(32768) <= 1, "got {y}");
    }

    #[test]
    fn test_step_contracts_toward_truth() {
        // Start 5% off for x = 100 (truth 6553.6) and check the step lands
        // closer than it started.
        let truth = 6553.6f64;
        for y0 in [6226u32, 6881] {
            let y1 = newton_step(100, y0);
            let before = (y0 as f64 - truth).abs();
            let after = (y1 as f64 - truth).abs();
            assert!(after < before, "y0={y0} y1={y1}");
        }
    }

    #[test]
    fn test_two_steps_reach_band_from_coarse_seed() {
        // Spot-check the two-iteration budget from a deliberately coarse
        // (table-entry-only) starting point.
        for (x, truth) in [(20u32, 14654.1f64), (30, 11965.4), (130, 5747.7)] {
            let seed = crate::table::RSQRT_TABLE[(31 - crate::bits::clz32(x)) as usize];
            let mut y = seed;
            for _ in 0..NEWTON_ITERATIONS {
                y = newton_step(x, y);
            }
            let rel = (y as f64 - truth).abs() / truth;
            assert!(rel < 0.08, "x={x} y={y} rel={rel}");
        }
    }
}
