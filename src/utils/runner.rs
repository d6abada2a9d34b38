//! Run orchestration: verify every method, then measure every method.
//!
//! Methods are processed one at a time in name order. Verification never
//! aborts the run; the only fatal failure is an unusable report sink.

use std::io::Write as _;
use std::path::PathBuf;

use super::timer::{measure_method, TimingConfig};
use super::tui;
use crate::config::RunConfig;
use crate::corpus::{self, DigitCorpus};
use crate::error::{BenchError, Result};
use crate::parse::ParseBack;
use crate::platform::ReportIdentity;
use crate::registry::{Method, MethodRegistry};
use crate::report::{report_path, CsvReport, ReportSink};
use crate::verify::{Verifier, VerifyReport};

/// Timing extremes of one measured method.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodTiming {
    pub name: &'static str,
    pub min_ns: f64,
    pub max_ns: f64,
}

/// Everything a run produced besides the report rows.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub verified: Vec<VerifyReport>,
    pub timings: Vec<MethodTiming>,
    pub report_path: Option<PathBuf>,
}

/// Methods to run, sorted by name, optionally restricted to one name.
pub fn select_methods(registry: &MethodRegistry, only: Option<&str>) -> Result<Vec<Method>> {
    let mut selected = registry.clone();
    selected.sort_by_name();

    match only {
        None => Ok(selected.all().to_vec()),
        Some(name) => {
            let methods = selected.filter_by_name(name);
            if methods.is_empty() {
                Err(BenchError::UnknownMethod {
                    name: name.to_string(),
                    available: selected.list_names(),
                })
            } else {
                Ok(methods)
            }
        }
    }
}

/// Verify each method in turn. The `null` baseline produces no report.
pub fn verify_all<P: ParseBack>(methods: &[Method], verifier: &Verifier<P>) -> Vec<VerifyReport> {
    let mut reports = Vec::new();
    for method in methods {
        if method.is_null() {
            continue;
        }
        tui::print_verify_start(method.name);
        if let Some(report) = verifier.verify(method) {
            tui::print_verify_result(&report);
            reports.push(report);
        }
    }
    reports
}

/// Measure each method over the corpus and stream its rows into `sink`.
pub fn benchmark_all<S: ReportSink>(
    methods: &[Method],
    corpus: &DigitCorpus,
    timing: &TimingConfig,
    sink: &mut S,
) -> Result<Vec<MethodTiming>> {
    let mut timings = Vec::with_capacity(methods.len());
    for method in methods {
        tui::print_bench_start(method.name);
        let _ = std::io::stdout().flush();

        let result = measure_method(method, corpus, timing);
        sink.write_result(method.name, &result)?;

        tui::print_bench_result(result.min_ns, result.max_ns);
        timings.push(MethodTiming {
            name: method.name,
            min_ns: result.min_ns,
            max_ns: result.max_ns,
        });
    }
    sink.finish()?;
    Ok(timings)
}

/// Full run against the shared corpus, writing the CSV report.
pub fn run(config: &RunConfig, registry: &MethodRegistry) -> Result<RunSummary> {
    let methods = select_methods(registry, config.method.as_deref())?;
    tracing::info!(methods = methods.len(), trials = config.timing.num_trials, "starting run");

    let verified = verify_all(&methods, &Verifier::new());
    if config.verify_only {
        return Ok(RunSummary {
            verified,
            ..RunSummary::default()
        });
    }

    let identity = ReportIdentity::for_build(&config.machine, config.label.as_deref());
    let path = report_path(&config.results_dir, &identity.file_name());
    let mut sink = CsvReport::create(&path)?;
    tracing::info!(path = %path.display(), "writing report");

    let timings = benchmark_all(&methods, corpus::shared(), &config.timing, &mut sink)?;

    Ok(RunSummary {
        verified,
        timings,
        report_path: Some(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MAX_DIGITS;
    use crate::methods;
    use crate::report::MemoryReport;

    fn registry_of(names: &[&'static str]) -> MethodRegistry {
        names
            .iter()
            .map(|&name| Method {
                name,
                ..methods::null::describe()
            })
            .collect()
    }

    fn quick_timing() -> TimingConfig {
        TimingConfig {
            num_trials: 1,
            warmup_passes: 0,
            pin_cpu: false,
        }
    }

    #[test]
    fn test_report_order_is_lexicographic() {
        let registry = registry_of(&["c", "a", "b"]);
        let methods = select_methods(&registry, None).unwrap();
        let corpus = DigitCorpus::generate(10, 0);
        let mut sink = MemoryReport::default();

        let timings = benchmark_all(&methods, &corpus, &quick_timing(), &mut sink).unwrap();

        let names: Vec<_> = timings.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(sink.rows.len(), 3 * MAX_DIGITS);
        assert_eq!(sink.rows[0].method, "a");
        assert_eq!(sink.rows[MAX_DIGITS].method, "b");
        assert_eq!(sink.rows[2 * MAX_DIGITS].method, "c");
        assert_eq!(sink.rows[MAX_DIGITS - 1].digit, MAX_DIGITS);
    }

    #[test]
    fn test_duplicate_names_are_both_measured() {
        let registry = registry_of(&["dup", "dup"]);
        let methods = select_methods(&registry, Some("dup")).unwrap();
        assert_eq!(methods.len(), 2);
    }

    #[test]
    fn test_unknown_method_is_an_error() {
        let registry = registry_of(&["a"]);
        let err = select_methods(&registry, Some("zzz")).unwrap_err();
        assert!(matches!(err, BenchError::UnknownMethod { .. }));
    }

    #[test]
    fn test_verify_all_skips_null() {
        let methods = vec![methods::null::describe(), methods::ryu_fmt::describe()];
        let reports = verify_all(&methods, &Verifier::new().random_cases(100));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].method, "ryu");
        assert!(reports[0].round_trips());
    }

    #[test]
    fn test_verify_only_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            results_dir: dir.path().join("results"),
            method: Some("null".to_string()),
            verify_only: true,
            ..RunConfig::default()
        };
        let summary = run(&config, &crate::registry::build_registry()).unwrap();
        assert!(summary.verified.is_empty());
        assert!(summary.report_path.is_none());
        assert!(!dir.path().join("results").exists());
    }
}
