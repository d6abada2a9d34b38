//! Build and host identity used to name report files.
//!
//! Everything here is fixed at compile time by the composition layer; the
//! measurement core never asks which platform it runs on.

use std::fmt;

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Machine tag baked in from `DTOA_BENCH_MACHINE` at build time.
pub const DEFAULT_MACHINE: &str = match option_env!("DTOA_BENCH_MACHINE") {
    Some(machine) => machine,
    None => "unknown",
};

/// Rust compiler as `rustc<major>.<minor>`, captured by the build script.
pub const COMPILER_NAME: &str = match option_env!("DTOA_BENCH_RUSTC") {
    Some(rustc) => rustc,
    None => "rustc",
};

/// Operating system the harness was compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOs,
    Windows,
    Unknown,
}

impl Os {
    pub const fn current() -> Self {
        if cfg!(target_os = "linux") {
            Os::Linux
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            Os::Unknown
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::MacOs => "macos",
            Os::Windows => "windows",
            Os::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a report: `{machine}_{os}_{compiler}{_label}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportIdentity {
    pub machine: String,
    pub os: Os,
    pub compiler: String,
    pub label: Option<String>,
}

impl ReportIdentity {
    /// Identity of this build with the given machine tag and label.
    pub fn for_build(machine: &str, label: Option<&str>) -> Self {
        Self {
            machine: machine.to_string(),
            os: Os::current(),
            compiler: COMPILER_NAME.to_string(),
            label: label.map(str::to_string),
        }
    }

    pub fn file_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{}_{}_{}_{}.csv", self.machine, self.os, self.compiler, label),
            None => format!("{}_{}_{}.csv", self.machine, self.os, self.compiler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_os_matches_target() {
        let os = Os::current();
        #[cfg(target_os = "linux")]
        assert_eq!(os, Os::Linux);
        #[cfg(target_os = "macos")]
        assert_eq!(os, Os::MacOs);
        #[cfg(target_os = "windows")]
        assert_eq!(os, Os::Windows);
        assert_ne!(os.as_str(), "");
    }

    #[test]
    fn test_file_name_with_and_without_label() {
        let mut identity = ReportIdentity {
            machine: "m1".to_string(),
            os: Os::MacOs,
            compiler: "rustc1.82".to_string(),
            label: None,
        };
        assert_eq!(identity.file_name(), "m1_macos_rustc1.82.csv");
        identity.label = Some("abc123".to_string());
        assert_eq!(identity.file_name(), "m1_macos_rustc1.82_abc123.csv");
    }

    #[test]
    fn test_compiler_name_is_rustc() {
        assert!(COMPILER_NAME.starts_with("rustc"));
    }
}
