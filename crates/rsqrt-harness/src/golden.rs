//! Golden verification vectors.
//!
//! The `(input, expected)` pairs the original test image was checked
//! against, including both sentinels and the extremes of the domain.

use core::fmt;

use crate::runner::SampleRecord;

/// The original verification set.
pub const GOLDEN_VECTORS: [(u32, u32); 10] = [
    (1, 65536),
    (4, 32768),
    (16, 16384),
    (20, 14654),
    (30, 11965),
    (100, 6553),
    (120, 5982),
    (130, 5747),
    (0, 0xFFFF_FFFF),
    (0xFFFF_FFFF, 1),
];

/// A record that disagrees with the golden set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// Output differs from the golden expectation for this input.
    Mismatch {
        input: u32,
        expected: u32,
        actual: u32,
    },
    /// Record count differs from the golden set.
    WrongCount { expected: usize, actual: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Mismatch {
                input,
                expected,
                actual,
            } => write!(
                f,
                "rsqrt({input}): expected {expected}, got {actual}"
            ),
            VerifyError::WrongCount { expected, actual } => {
                write!(f, "expected {expected} records, got {actual}")
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// Check a run of the golden inputs against the golden outputs.
///
/// Records must be in golden-set order (the runner preserves input order).
pub fn verify(records: &[SampleRecord]) -> Result<(), VerifyError> {
    if records.len() != GOLDEN_VECTORS.len() {
        return Err(VerifyError::WrongCount {
            expected: GOLDEN_VECTORS.len(),
            actual: records.len(),
        });
    }
    for (record, &(input, expected)) in records.iter().zip(&GOLDEN_VECTORS) {
        if record.input != input || record.output != expected {
            return Err(VerifyError::Mismatch {
                input: record.input,
                expected,
                actual: record.output,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_records() -> Vec<SampleRecord> {
        GOLDEN_VECTORS
            .iter()
            .map(|&(input, output)| SampleRecord {
                input,
                output,
                cycles: 0,
            })
            .collect()
    }

    #[test]
    fn test_verify_accepts_golden() {
        assert_eq!(verify(&golden_records()), Ok(()));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let mut records = golden_records();
        records[3].output += 1;
        assert_eq!(
            verify(&records),
            Err(VerifyError::Mismatch {
                input: 20,
                expected: 14654,
                actual: 14655,
            })
        );
    }

    #[test]
    fn test_verify_rejects_short_run() {
        let records = &golden_records()[..4];
        assert_eq!(
            verify(records),
            Err(VerifyError::WrongCount {
                expected: 10,
                actual: 4,
            })
        );
    }
}
