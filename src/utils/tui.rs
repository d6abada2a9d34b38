//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use super::bench::format_nanos;
use super::runner::{MethodTiming, RunSummary};
use crate::platform::C_COMPILER_NAME;
use crate::registry::{MethodRegistry, NULL_METHOD};
use crate::verify::VerifyReport;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// `sprintf` is shown with the C compiler that built it.
fn display_name(name: &str) -> String {
    match (name, C_COMPILER_NAME) {
        ("sprintf", Some(c)) => format!("{} ({})", name, c),
        _ => name.to_string(),
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " dtoa Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dtoa-bench [OPTIONS] [LABEL] [TRIALS]");
    println!();
    println!("Options:");
    println!("  --list, -l         List all available methods");
    println!("  --help, -h         Show this help message");
    println!("  --trials N, -t N   Timed trials per digit bucket (default: 10)");
    println!("  --warmup N         Untimed passes per digit bucket (default: 1)");
    println!("  --out DIR, -o DIR  Directory for the CSV report (default: results)");
    println!("  --machine NAME     Machine tag used in the report name");
    println!("  --method NAME, -m  Run only the named method");
    println!("  --verify-only      Verify methods without measuring them");
    println!("  --no-pin           Do not pin the thread to a CPU core");
    println!();
    println!("Arguments:");
    println!("  LABEL              Tag appended to the report name (e.g. a commit hash)");
    println!("  TRIALS             Same as --trials");
    println!();
    println!("Examples:");
    println!("  dtoa-bench                    # Verify and benchmark every method");
    println!("  dtoa-bench abc123 5           # Label the report, 5 trials");
    println!("  dtoa-bench --method ryu       # Only ryu");
    println!("  RUST_LOG=debug dtoa-bench     # Per-digit timings in the log");
}

/// Print the list of available methods
pub fn print_method_list(registry: &MethodRegistry) {
    println!("Available methods:");
    println!();
    for method in registry.all() {
        println!("  {:<20} - {}", display_name(method.name), method.description);
    }
}

pub fn print_verify_start(name: &str) {
    print!("Verifying {:20} ... ", name);
}

pub fn print_verify_result(report: &VerifyReport) {
    let status = if report.issue_count() == 0 {
        "OK.".to_string()
    } else {
        format!(
            "{} mismatch, {} garbage, {} roundtrip.",
            report.text_mismatches, report.trailing_garbage, report.roundtrip_failures
        )
    };
    println!(
        "{} Length Avg = {:2.3}, Max = {}",
        status,
        report.avg_len(),
        report.max_len
    );
}

pub fn print_bench_start(name: &str) {
    print!("Benchmarking randomdigit {:20} ... ", name);
}

pub fn print_bench_result(min_ns: f64, max_ns: f64) {
    println!("[{}, {}]", format_nanos(min_ns), format_nanos(max_ns));
}

/// Print the final ranking, fastest best case first.
pub fn print_summary(summary: &RunSummary) {
    if let Some(path) = &summary.report_path {
        println!();
        println!("  Report written to: {}", path.display());
    }
    if summary.timings.is_empty() {
        return;
    }

    let mut timings: Vec<&MethodTiming> = summary.timings.iter().collect();
    timings.sort_by(|a, b| a.min_ns.total_cmp(&b.min_ns));

    let term_width = get_term_width();
    let fixed_width = 12 + 12 + 9 + 9 + 4;
    let name_col_width = term_width.saturating_sub(fixed_width).clamp(15, 40);
    let table_width = name_col_width + fixed_width - 2;

    let baseline = timings
        .iter()
        .find(|t| t.name != NULL_METHOD)
        .map(|t| t.min_ns)
        .unwrap_or(1.0);

    println!();
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<n_width$} {:>12} {:>12} {:>9} {:>9}",
        "Method",
        "Min",
        "Max",
        "Slowdown",
        "Verified",
        n_width = name_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for timing in timings {
        let verified = summary
            .verified
            .iter()
            .find(|r| r.method == timing.name)
            .map(|r| if r.round_trips() { "yes" } else { "NO" })
            .unwrap_or("-");
        let slowdown = if baseline > 0.0 {
            timing.min_ns / baseline
        } else {
            0.0
        };
        println!(
            "  {:<n_width$} {:>12} {:>12} {:>8.2}x {:>9}",
            truncate(&display_name(timing.name), name_col_width),
            format_nanos(timing.min_ns).trim_start(),
            format_nanos(timing.max_ns).trim_start(),
            slowdown,
            verified,
            n_width = name_col_width
        );
    }
    println!();
}
