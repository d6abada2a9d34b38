//! Per-digit throughput measurement.
//!
//! For every digit bucket a method is warmed up, then timed over several
//! trials. Each trial converts the whole bucket `num_trials` times so the
//! timed region dwarfs clock resolution. The fastest trial is kept: slower
//! ones only add scheduler and cache noise.

use std::hint::black_box;
use std::time::Duration;

use super::bench::{elapsed, now, per_call_nanos};
use super::cpu_affinity::CpuPinGuard;
use crate::corpus::DigitCorpus;
use crate::registry::Method;

/// Default number of timed trials per digit bucket
pub const DEFAULT_TRIALS: usize = 10;

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Timed trials per bucket; also the number of passes inside each trial
    pub num_trials: usize,
    /// Untimed passes over a bucket before its first trial
    pub warmup_passes: usize,
    /// Pin the thread to one core while a method is measured
    pub pin_cpu: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_TRIALS,
            warmup_passes: 1,
            pin_cpu: cfg!(feature = "pin_cpu"),
        }
    }
}

/// Cost of one conversion for a single digit bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitResult {
    pub digit: usize,
    pub duration_ns: f64,
}

/// Per-digit costs of one method plus their extremes.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub min_ns: f64,
    pub max_ns: f64,
    /// Ordered by digit, starting at 1
    pub per_digit: Vec<DigitResult>,
}

impl BenchmarkResult {
    fn new() -> Self {
        Self {
            min_ns: f64::INFINITY,
            max_ns: f64::NEG_INFINITY,
            per_digit: Vec::new(),
        }
    }

    fn push(&mut self, digit: usize, duration_ns: f64) {
        self.per_digit.push(DigitResult { digit, duration_ns });
        self.min_ns = self.min_ns.min(duration_ns);
        self.max_ns = self.max_ns.max(duration_ns);
    }
}

/// Raw durations of a series of trials.
#[derive(Clone, Debug, Default)]
pub struct TrialTimings {
    pub samples: Vec<Duration>,
}

impl TrialTimings {
    /// Fastest trial, or `Duration::ZERO` when no trial ran.
    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or(Duration::ZERO)
    }
}

/// Time `trials` runs of `body`.
pub fn run_trials<F: FnMut()>(trials: usize, mut body: F) -> TrialTimings {
    let mut samples = Vec::with_capacity(trials);
    for _ in 0..trials {
        let start = now();
        body();
        samples.push(elapsed(start));
    }
    TrialTimings { samples }
}

/// Convert every value of `bucket` `passes` times.
#[inline(always)]
fn convert_passes(method: &Method, bucket: &[f64], passes: usize, buffer: &mut String) {
    let convert = method.convert;
    for _ in 0..passes {
        for &value in bucket {
            buffer.clear();
            convert(black_box(value), black_box(&mut *buffer));
            black_box(buffer.as_str());
        }
    }
}

/// Measure one method over every digit bucket, in increasing digit order.
pub fn measure_method(method: &Method, corpus: &DigitCorpus, config: &TimingConfig) -> BenchmarkResult {
    let _pin = config.pin_cpu.then(CpuPinGuard::new);

    let passes = config.num_trials;
    let calls = passes * corpus.per_digit();
    let mut buffer = method.buffer();
    let mut result = BenchmarkResult::new();

    for digit in DigitCorpus::digits() {
        let bucket = corpus.bucket(digit);

        convert_passes(method, bucket, config.warmup_passes, &mut buffer);

        let timings = run_trials(config.num_trials, || {
            convert_passes(method, bucket, passes, &mut buffer);
        });
        let ns = per_call_nanos(timings.min(), calls);

        tracing::debug!(
            method = method.name,
            digit,
            ns,
            slowest_ns = per_call_nanos(timings.samples.iter().copied().max().unwrap_or_default(), calls),
            "measured digit bucket"
        );
        result.push(digit, ns);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MAX_DIGITS;
    use crate::methods;
    use std::thread;

    fn small_config() -> TimingConfig {
        TimingConfig {
            num_trials: 2,
            warmup_passes: 1,
            pin_cpu: false,
        }
    }

    #[test]
    fn test_run_trials_records_each_trial() {
        let mut calls = 0;
        let timings = run_trials(5, || calls += 1);
        assert_eq!(calls, 5);
        assert_eq!(timings.samples.len(), 5);
    }

    #[test]
    fn test_min_is_not_above_any_trial() {
        let mut round = 0u64;
        let timings = run_trials(4, || {
            round += 1;
            thread::sleep(Duration::from_millis(round));
        });
        let min = timings.min();
        assert!(timings.samples.iter().all(|&t| min <= t));
        assert!(min >= Duration::from_millis(1));
    }

    #[test]
    fn test_min_of_no_trials_is_zero() {
        assert_eq!(TrialTimings::default().min(), Duration::ZERO);
    }

    #[test]
    fn test_measure_method_covers_every_digit() {
        let corpus = DigitCorpus::generate(200, 0);
        let result = measure_method(&methods::ryu_fmt::describe(), &corpus, &small_config());

        assert_eq!(result.per_digit.len(), MAX_DIGITS);
        for (i, r) in result.per_digit.iter().enumerate() {
            assert_eq!(r.digit, i + 1);
            assert!(r.duration_ns >= 0.0);
            assert!(result.min_ns <= r.duration_ns && r.duration_ns <= result.max_ns);
        }
    }

    #[test]
    fn test_null_method_is_measurable() {
        let corpus = DigitCorpus::generate(100, 0);
        let config = TimingConfig {
            pin_cpu: true,
            ..small_config()
        };
        let result = measure_method(&methods::null::describe(), &corpus, &config);
        assert_eq!(result.per_digit.len(), MAX_DIGITS);
        assert!(result.min_ns.is_finite());
    }
}
