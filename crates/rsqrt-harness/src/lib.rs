//! Host-side harness for the Q16 reciprocal square root kernel.
//!
//! The original deployment ran the kernel on a bare RV32 core: elapsed
//! cycles came from the `cycle`/`cycleh` CSR pair, results were stored to
//! fixed memory slots for an external harness to peek, and diagnostics went
//! out through a print ecall. This crate re-expresses those touchpoints as
//! typed collaborators:
//! - [`CycleCounter`] for the monotone counter,
//! - [`DiagnosticSink`] for best-effort debug output,
//! - [`Runner`] producing an ordered sequence of [`SampleRecord`]s instead
//!   of raw memory offsets.

mod cycles;
mod diag;
mod golden;
mod runner;

pub use cycles::{CycleCounter, FixedStep, WallClock};
pub use diag::{BufferSink, DiagnosticSink, LogSink, NullSink};
pub use golden::{GOLDEN_VECTORS, VerifyError, verify};
pub use runner::{Runner, SampleRecord};
