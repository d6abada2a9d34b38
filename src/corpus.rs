//! # Digit-bucketed benchmark corpus
//!
//! Random doubles grouped by how many significant decimal digits they carry.
//! Every raw draw is rounded to `digit` significant digits and parsed back, so
//! bucket `digit` holds values whose shortest representation has at most
//! `digit` digits. Throughput measured per bucket then shows how a formatter's
//! cost scales with output length instead of with raw input entropy.
//!
//! Buckets are stored back to back: bucket `digit` starts at `(digit - 1) * K`.

use crate::parse::{LexicalParser, ParseBack};
use crate::random::{Lcg, DEFAULT_SEED};
use once_cell::sync::OnceCell;
use std::fmt::Write as _;
use std::ops::RangeInclusive;
use std::time::Instant;

/// Significant decimal digits needed to round-trip any `f64` (`max_digits10`).
pub const MAX_DIGITS: usize = 17;

/// Values per digit bucket in the shared corpus.
pub const DOUBLES_PER_DIGIT: usize = 100_000;

static SHARED: OnceCell<DigitCorpus> = OnceCell::new();

/// The process-wide corpus, generated on first access.
pub fn shared() -> &'static DigitCorpus {
    SHARED.get_or_init(|| {
        let start = Instant::now();
        let corpus = DigitCorpus::generate(DOUBLES_PER_DIGIT, DEFAULT_SEED);
        tracing::info!(
            values = corpus.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated random digit corpus"
        );
        corpus
    })
}

/// Contiguous digit buckets of equal size.
#[derive(Clone, Debug)]
pub struct DigitCorpus {
    per_digit: usize,
    values: Vec<f64>,
}

impl DigitCorpus {
    /// Build `per_digit` values for each digit count in `1..=MAX_DIGITS`.
    pub fn generate(per_digit: usize, seed: u32) -> Self {
        Self::generate_with(per_digit, seed, &LexicalParser)
    }

    pub fn generate_with<P: ParseBack>(per_digit: usize, seed: u32, parser: &P) -> Self {
        let mut rng = Lcg::new(seed);
        let mut values = Vec::with_capacity(per_digit * MAX_DIGITS);
        let mut text = String::with_capacity(32);

        for digit in Self::digits() {
            let mut produced = 0;
            while produced < per_digit {
                let d = rng.next_finite();

                text.clear();
                let _ = write!(text, "{:.*e}", digit - 1, d);
                let (rounded, _) = parser.parse_back(&text);

                // Rounding up past f64::MAX overflows; such a value is useless
                // as a formatter input, so draw again.
                if rounded.is_finite() {
                    values.push(rounded);
                    produced += 1;
                }
            }
        }

        Self { per_digit, values }
    }

    /// Digit counts covered by the corpus.
    pub fn digits() -> RangeInclusive<usize> {
        1..=MAX_DIGITS
    }

    /// Number of values in each bucket.
    pub fn per_digit(&self) -> usize {
        self.per_digit
    }

    /// Offset of bucket `digit` in the flat value list.
    pub fn offset(&self, digit: usize) -> usize {
        assert!(
            Self::digits().contains(&digit),
            "digit {} outside 1..={}",
            digit,
            MAX_DIGITS
        );
        (digit - 1) * self.per_digit
    }

    /// Values rounded to `digit` significant digits.
    pub fn bucket(&self, digit: usize) -> &[f64] {
        let start = self.offset(digit);
        &self.values[start..start + self.per_digit]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: usize = 500;

    #[test]
    fn test_bucket_layout() {
        let corpus = DigitCorpus::generate(SMALL, DEFAULT_SEED);
        assert_eq!(corpus.len(), SMALL * MAX_DIGITS);
        for digit in DigitCorpus::digits() {
            assert_eq!(corpus.offset(digit), (digit - 1) * SMALL);
            assert_eq!(corpus.bucket(digit).len(), SMALL);
        }
        let first = corpus.bucket(1).as_ptr();
        let second = corpus.bucket(2).as_ptr();
        assert_eq!(unsafe { second.offset_from(first) }, SMALL as isize);
    }

    #[test]
    fn test_values_keep_their_digit_count() {
        let corpus = DigitCorpus::generate(SMALL, DEFAULT_SEED);
        for digit in DigitCorpus::digits() {
            for &value in corpus.bucket(digit) {
                assert!(value.is_finite());
                let text = format!("{:.*e}", digit - 1, value);
                let reparsed: f64 = text.parse().unwrap();
                assert_eq!(
                    reparsed.to_bits(),
                    value.to_bits(),
                    "digit {}: {:e} -> {}",
                    digit,
                    value,
                    text
                );
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = DigitCorpus::generate(SMALL, 42);
        let b = DigitCorpus::generate(SMALL, 42);
        let a_bits: Vec<u64> = a.values().iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.values().iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn test_one_digit_bucket_has_single_significant_digit() {
        let corpus = DigitCorpus::generate(SMALL, DEFAULT_SEED);
        for &value in corpus.bucket(1) {
            let shortest = format!("{:e}", value);
            let mantissa = shortest.trim_start_matches('-').split('e').next().unwrap();
            assert_eq!(mantissa.len(), 1, "{} has more than one digit", shortest);
        }
    }

    #[test]
    #[should_panic]
    fn test_digit_zero_is_rejected() {
        DigitCorpus::generate(1, DEFAULT_SEED).bucket(0);
    }
}
