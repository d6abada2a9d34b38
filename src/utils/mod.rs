//! Utility modules for measuring and running methods.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{elapsed, now, per_call_nanos};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run, RunSummary};
pub use timer::{measure_method, BenchmarkResult, DigitResult, TimingConfig};
