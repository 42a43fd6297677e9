//! Output formatting for solver results

use crate::executor::{SolverResult, WorkItem};
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// List puzzles whose input file is absent; they are reported as failed
    pub fn print_missing(&self, missing: &[&WorkItem]) {
        if missing.is_empty() {
            return;
        }
        eprintln!(
            "Missing {} input file(s): {}",
            missing.len(),
            missing
                .iter()
                .map(|w| format!("{}/day{:02}", w.year, w.day))
                .join(", ")
        );
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_result_line(result)),
            Err(_) => eprintln!("{}", format_result_line(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::from_results(results);
        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Totals over the successful parts of a run
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn from_results(results: &[SolverResult]) -> Self {
        let (ok, failed): (Vec<_>, Vec<_>) = results.iter().partition(|r| r.answer.is_ok());
        Self {
            solved: ok.len(),
            failed: failed.len(),
            parse_time: ok.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: ok.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)` or the error
fn format_result_line(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
