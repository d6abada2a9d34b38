//! Report sinks for per-digit benchmark rows.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};
use crate::utils::timer::BenchmarkResult;

/// Category tag of the digit-bucketed random benchmark.
pub const CATEGORY_RANDOM_DIGIT: &str = "randomdigit";

/// CSV header line
pub const CSV_HEADER: &str = "Type,Function,Digit,Time(ns)";

/// One (method, digit) measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub category: &'static str,
    pub method: String,
    pub digit: usize,
    pub duration_ns: f64,
}

/// Destination of benchmark rows.
pub trait ReportSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<()>;

    /// Flush buffered rows.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write one row per digit of `result`.
    fn write_result(&mut self, method: &str, result: &BenchmarkResult) -> Result<()> {
        for digit in &result.per_digit {
            self.write_row(&ReportRow {
                category: CATEGORY_RANDOM_DIGIT,
                method: method.to_string(),
                digit: digit.digit,
                duration_ns: digit.duration_ns,
            })?;
        }
        Ok(())
    }
}

/// CSV writer over any `Write`.
pub struct CsvReport<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> CsvReport<W> {
    /// Wrap `writer` and emit the header line.
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| BenchError::ReportWrite(e.into_error()))
    }
}

impl CsvReport<File> {
    /// Create `path`, including missing parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        let open_err = |source| BenchError::ReportOpen {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(open_err)?;
        }
        let file = File::create(path).map_err(open_err)?;
        Self::new(file)
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{:.6}",
            row.category, row.method, row.digit, row.duration_ns
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that keeps rows in memory.
#[derive(Debug, Default)]
pub struct MemoryReport {
    pub rows: Vec<ReportRow>,
}

impl ReportSink for MemoryReport {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}

/// Path of the report file for `file_name` inside `dir`.
pub fn report_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
