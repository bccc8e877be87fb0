//! Cycle counter abstraction.
//!
//! On the target the counter is the RV32 `cycle`/`cycleh` CSR pair, read as
//! a 64-bit monotone value. Host-side it is injected so tests can control
//! what the runner observes; the counter is never part of the kernel's
//! correctness.

use std::time::Instant;

/// A monotonically increasing 64-bit counter, read on demand.
pub trait CycleCounter {
    /// Current counter value. Successive reads never decrease.
    fn now(&mut self) -> u64;
}

/// Wall-clock counter: nanoseconds since construction.
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        WallClock {
            start: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleCounter for WallClock {
    fn now(&mut self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}

/// Deterministic counter advancing a fixed amount per read.
///
/// Stands in for the emulator's per-instruction cycle accounting in tests:
/// with a fixed step, every measured interval is exactly `step` times the
/// number of intervening reads, independent of the input value.
pub struct FixedStep {
    value: u64,
    step: u64,
}

impl FixedStep {
    pub fn new(step: u64) -> Self {
        FixedStep { value: 0, step }
    }
}

impl CycleCounter for FixedStep {
    fn now(&mut self) -> u64 {
        let v = self.value;
        self.value += self.step;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_advances_per_read() {
        let mut c = FixedStep::new(7);
        assert_eq!(c.now(), 0);
        assert_eq!(c.now(), 7);
        assert_eq!(c.now(), 14);
    }

    #[test]
    fn test_wall_clock_is_monotone() {
        let mut c = WallClock::new();
        let a = c.now();
        let b = c.now();
        assert!(b >= a);
    }
}
