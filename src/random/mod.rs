//! Reproducible random sources for corpus generation and verification.

pub mod lcg;

pub use lcg::{Lcg, DEFAULT_SEED};
