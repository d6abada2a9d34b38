//! Baseline that produces no text. Measures harness overhead.

use crate::registry::{Method, NULL_METHOD};

pub fn convert(_value: f64, _buffer: &mut String) {}

pub fn describe() -> Method {
    Method {
        name: NULL_METHOD,
        description: "Writes nothing; loop and call overhead baseline",
        max_len: 0,
        convert,
    }
}
