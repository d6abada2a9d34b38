//! # Round-trip verification
//!
//! Every method is run over the fixed boundary cases and a large sample of
//! random finite doubles. Each output is parsed back and checked for:
//!
//! - **text mismatch** against the canonical text, where one is known
//! - **trailing garbage**, characters the parser did not consume
//! - **round-trip failure**, a parsed value whose bits differ from the input
//!
//! None of these stop the run. Some formatters are known to print more digits
//! than necessary, and comparing them is the point of the harness.

pub mod cases;

pub use cases::{VerifyCase, BOUNDARY_CASES, DENORM_MIN};

use crate::parse::{LexicalParser, ParseBack};
use crate::random::{Lcg, DEFAULT_SEED};
use crate::registry::Method;

/// Random finite doubles checked per method.
pub const RANDOM_CASES: usize = 100_000;

/// Issues kept verbatim in a report; the rest are only counted.
const MAX_RECORDED_ISSUES: usize = 16;

/// A single problem found while verifying a method.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    TextMismatch {
        value: f64,
        expected: &'static str,
        actual: String,
    },
    TrailingGarbage {
        value: f64,
        text: String,
        consumed: usize,
    },
    RoundTrip {
        value: f64,
        text: String,
        roundtrip: f64,
    },
}

/// Outcome of verifying one method.
#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    pub method: &'static str,
    pub text_mismatches: usize,
    pub trailing_garbage: usize,
    pub roundtrip_failures: usize,
    /// Random samples checked
    pub samples: usize,
    /// Sum of output lengths over the random sample
    pub total_len: usize,
    /// Longest output over the random sample
    pub max_len: usize,
    /// First few issues, in discovery order
    pub issues: Vec<Issue>,
}

impl VerifyReport {
    fn new(method: &'static str) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Average output length over the random sample.
    pub fn avg_len(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.total_len as f64 / self.samples as f64
        }
    }

    /// True when every output parsed back completely and exactly.
    /// Text mismatches are tolerated.
    pub fn round_trips(&self) -> bool {
        self.trailing_garbage == 0 && self.roundtrip_failures == 0
    }

    pub fn issue_count(&self) -> usize {
        self.text_mismatches + self.trailing_garbage + self.roundtrip_failures
    }

    fn record(&mut self, issue: Issue) {
        match &issue {
            Issue::TextMismatch {
                value,
                expected,
                actual,
            } => {
                self.text_mismatches += 1;
                tracing::warn!(
                    method = self.method,
                    "expected {} but got {} for {:?}",
                    expected,
                    actual,
                    value
                );
            }
            Issue::TrailingGarbage {
                value,
                text,
                consumed,
            } => {
                self.trailing_garbage += 1;
                tracing::warn!(
                    method = self.method,
                    consumed = *consumed,
                    "some extra character {:?} -> '{}'",
                    value,
                    text
                );
            }
            Issue::RoundTrip {
                value,
                text,
                roundtrip,
            } => {
                self.roundtrip_failures += 1;
                tracing::warn!(
                    method = self.method,
                    "roundtrip fail {:?} -> '{}' -> {:?}",
                    value,
                    text,
                    roundtrip
                );
            }
        }
        if self.issues.len() < MAX_RECORDED_ISSUES {
            self.issues.push(issue);
        }
    }
}

/// Checks conversion methods against a parse-back oracle.
pub struct Verifier<P = LexicalParser> {
    parser: P,
    random_cases: usize,
    seed: u32,
}

impl Verifier<LexicalParser> {
    pub fn new() -> Self {
        Self::with_parser(LexicalParser)
    }
}

impl Default for Verifier<LexicalParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ParseBack> Verifier<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            random_cases: RANDOM_CASES,
            seed: DEFAULT_SEED,
        }
    }

    /// Override the size of the random sample.
    pub fn random_cases(mut self, count: usize) -> Self {
        self.random_cases = count;
        self
    }

    /// Override the seed of the random sample.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Verify one method. The `null` baseline is exempt and yields `None`.
    pub fn verify(&self, method: &Method) -> Option<VerifyReport> {
        if method.is_null() {
            return None;
        }

        let mut report = VerifyReport::new(method.name);
        let mut buffer = method.buffer();

        for case in BOUNDARY_CASES {
            self.check(method, &mut buffer, case.value, case.expected, &mut report);
        }

        let mut rng = Lcg::new(self.seed);
        for _ in 0..self.random_cases {
            let value = rng.next_finite();
            let len = self.check(method, &mut buffer, value, None, &mut report);
            report.samples += 1;
            report.total_len += len;
            report.max_len = report.max_len.max(len);
        }

        Some(report)
    }

    /// Convert, compare and parse back a single value. Returns the text length.
    fn check(
        &self,
        method: &Method,
        buffer: &mut String,
        value: f64,
        expected: Option<&'static str>,
        report: &mut VerifyReport,
    ) -> usize {
        let text = method.convert_into(value, buffer);

        if let Some(expected) = expected {
            if text != expected {
                report.record(Issue::TextMismatch {
                    value,
                    expected,
                    actual: text.to_string(),
                });
            }
        }

        let len = text.len();
        let (roundtrip, consumed) = self.parser.parse_back(text);

        if consumed != len {
            report.record(Issue::TrailingGarbage {
                value,
                text: text.to_string(),
                consumed,
            });
        }
        if roundtrip.to_bits() != value.to_bits() {
            report.record(Issue::RoundTrip {
                value,
                text: text.to_string(),
                roundtrip,
            });
        }

        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods;
    use std::fmt::Write as _;

    fn method(name: &'static str, convert: fn(f64, &mut String)) -> Method {
        Method {
            name,
            description: "",
            max_len: 64,
            convert,
        }
    }

    fn small() -> Verifier {
        Verifier::new().random_cases(2_000)
    }

    #[test]
    fn test_shortest_formatter_is_clean() {
        let report = small().verify(&methods::ryu_fmt::describe()).unwrap();
        assert_eq!(report.issue_count(), 0, "{:?}", report.issues);
        assert_eq!(report.samples, 2_000);
        assert!(report.max_len <= 24);
        assert!(report.avg_len() > 10.0 && report.avg_len() <= 24.0);
    }

    #[test]
    fn test_null_is_exempt() {
        assert!(small().verify(&methods::null::describe()).is_none());
    }

    #[test]
    fn test_lossy_formatter_fails_roundtrip() {
        let lossy = method("lossy", |value, buffer| {
            let _ = write!(buffer, "{:.3e}", value);
        });
        let report = small().verify(&lossy).unwrap();
        assert!(!report.round_trips());
        assert!(report.roundtrip_failures > 1_000);
        assert_eq!(report.trailing_garbage, 0);
        assert_eq!(report.issues.len(), MAX_RECORDED_ISSUES);
    }

    #[test]
    fn test_suffix_is_flagged_as_trailing_garbage() {
        let suffixed = method("suffixed", |value, buffer| {
            let _ = write!(buffer, "{:e}x", value);
        });
        let report = small().verify(&suffixed).unwrap();
        assert_eq!(report.trailing_garbage, BOUNDARY_CASES.len() + 2_000);
        assert_eq!(report.roundtrip_failures, 0);
        assert!(matches!(
            report.issues.first(),
            Some(Issue::TrailingGarbage { consumed: 3, .. })
        ));
    }

    #[test]
    fn test_text_mismatch_is_only_a_warning() {
        // Scientific notation round-trips but never matches "0.1".
        let report = small()
            .verify(&methods::core_fmt::describe_lower_exp())
            .unwrap();
        assert!(report.round_trips());
        assert_eq!(report.text_mismatches, 5);
        assert_eq!(
            report.issues[0],
            Issue::TextMismatch {
                value: 0.1,
                expected: "0.1",
                actual: "1e-1".to_string(),
            }
        );
    }

    #[test]
    fn test_twenty_thirds_round_trips() {
        let m = methods::ryu_fmt::describe();
        let mut buffer = m.buffer();
        let text = m.convert_into(20.0 / 3.0, &mut buffer);
        let (value, consumed) = LexicalParser.parse_back(text);
        assert_eq!(consumed, text.len());
        assert_eq!(value.to_bits(), (20.0f64 / 3.0).to_bits());
    }

    #[test]
    fn test_length_statistics_cover_random_sample_only() {
        let fixed = method("fixed", |_value, buffer| buffer.push_str("1.5"));
        let report = small().verify(&fixed).unwrap();
        assert_eq!(report.max_len, 3);
        assert_eq!(report.total_len, 3 * 2_000);
        assert!((report.avg_len() - 3.0).abs() < f64::EPSILON);
    }
}
