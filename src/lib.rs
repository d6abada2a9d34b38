//! # dtoa-bench
//!
//! Verification and throughput harness for double-to-string conversion
//! routines. Each method is checked for exact round trips through a
//! parse-back oracle, then timed over random doubles bucketed by their number
//! of significant digits.

pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod methods;
pub mod parse;
pub mod platform;
pub mod random;
pub mod registry;
pub mod report;
pub mod utils;
pub mod verify;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run from utils::runner
pub use utils::runner::run;

pub use error::{BenchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::corpus::{DigitCorpus, MAX_DIGITS};
    pub use crate::registry::{build_registry, Method, MethodRegistry};
    pub use crate::utils::timer::{measure_method, BenchmarkResult, TimingConfig};
    pub use crate::verify::{Verifier, VerifyReport};
}
