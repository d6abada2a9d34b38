//! Command-line configuration.

use std::path::PathBuf;

use crate::error::{BenchError, Result};
use crate::platform::DEFAULT_MACHINE;
use crate::utils::timer::TimingConfig;

/// Default directory for report files
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Settings for one benchmark run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Free-form tag appended to the report file name
    pub label: Option<String>,
    pub timing: TimingConfig,
    pub results_dir: PathBuf,
    pub machine: String,
    /// Only run methods with this name
    pub method: Option<String>,
    /// Skip measurement and the report file
    pub verify_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            label: None,
            timing: TimingConfig::default(),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            machine: DEFAULT_MACHINE.to_string(),
            method: None,
            verify_only: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug)]
pub enum Command {
    Help,
    List,
    Run(RunConfig),
}

/// Parse arguments (without the program name).
///
/// Positional arguments are `[LABEL] [TRIALS]`, in that order.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RunConfig::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--list" | "-l" => return Ok(Command::List),
            "--verify-only" => config.verify_only = true,
            "--trials" | "-t" => {
                let value = args.next().ok_or(BenchError::MissingValue("--trials"))?;
                config.timing.num_trials = parse_trials(&value)?;
            }
            "--warmup" => {
                let value = args.next().ok_or(BenchError::MissingValue("--warmup"))?;
                config.timing.warmup_passes =
                    value.parse().map_err(|_| BenchError::InvalidNumber {
                        option: "--warmup",
                        value,
                    })?;
            }
            "--out" | "-o" => {
                let value = args.next().ok_or(BenchError::MissingValue("--out"))?;
                config.results_dir = PathBuf::from(value);
            }
            "--machine" => {
                config.machine = args.next().ok_or(BenchError::MissingValue("--machine"))?;
            }
            "--method" | "-m" => {
                config.method = Some(args.next().ok_or(BenchError::MissingValue("--method"))?);
            }
            "--no-pin" => config.timing.pin_cpu = false,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(BenchError::UnknownOption(other.to_string()));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    if let Some(label) = positional.next() {
        config.label = Some(label);
    }
    if let Some(trials) = positional.next() {
        config.timing.num_trials = parse_trials(&trials)?;
    }
    if let Some(extra) = positional.next() {
        return Err(BenchError::UnknownOption(extra));
    }

    Ok(Command::Run(config))
}

fn parse_trials(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BenchError::InvalidTrials(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::DEFAULT_TRIALS;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn run_config(args: &[&str]) -> RunConfig {
        match parse(args).unwrap() {
            Command::Run(config) => config,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run_config(&[]);
        assert_eq!(config.label, None);
        assert_eq!(config.timing.num_trials, DEFAULT_TRIALS);
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert!(!config.verify_only);
    }

    #[test]
    fn test_positional_label_and_trials() {
        let config = run_config(&["abc123", "3"]);
        assert_eq!(config.label.as_deref(), Some("abc123"));
        assert_eq!(config.timing.num_trials, 3);
    }

    #[test]
    fn test_flags() {
        let config = run_config(&[
            "--trials", "4", "--out", "/tmp/r", "--machine", "box", "--method", "ryu", "--warmup",
            "0", "--no-pin",
        ]);
        assert_eq!(config.timing.num_trials, 4);
        assert_eq!(config.timing.warmup_passes, 0);
        assert!(!config.timing.pin_cpu);
        assert_eq!(config.results_dir, PathBuf::from("/tmp/r"));
        assert_eq!(config.machine, "box");
        assert_eq!(config.method.as_deref(), Some("ryu"));
    }

    #[test]
    fn test_zero_trials_rejected() {
        assert!(matches!(
            parse(&["label", "0"]),
            Err(BenchError::InvalidTrials(v)) if v == "0"
        ));
        assert!(matches!(
            parse(&["--trials", "many"]),
            Err(BenchError::InvalidTrials(_))
        ));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(BenchError::UnknownOption(_))));
        assert!(matches!(parse(&["--out"]), Err(BenchError::MissingValue("--out"))));
        assert!(matches!(parse(&["a", "1", "b"]), Err(BenchError::UnknownOption(_))));
    }

    #[test]
    fn test_help_and_list() {
        assert!(matches!(parse(&["--help"]), Ok(Command::Help)));
        assert!(matches!(parse(&["-l"]), Ok(Command::List)));
    }
}
