use super::types::{BenchmarkConfig, BenchmarkResult};
use crate::error::{BenchError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "Algorithm,InputSize,Time_ns";
pub const DEFAULT_CSV_PATH: &str = "benchmark_results.csv";

/// Durable destination for result records.
pub trait ResultSink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()>;
    fn get_description(&self) -> String;
}

/// Appends one row per result to a shared CSV file.
///
/// Every write opens the file in append mode, holds an exclusive `flock` for
/// the duration of the write and closes it again, so several benchmark
/// processes can share one file without interleaving rows.
pub struct CsvResultSink {
    path: PathBuf,
}

impl CsvResultSink {
    /// Creates the file if needed and writes the header if it is empty.
    /// Fails with [`BenchError::SinkOpen`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let sink_open = |source| BenchError::SinkOpen {
            path: path.clone(),
            source,
        };

        let file = open_append(&path).map_err(sink_open)?;
        let _lock = FileLock::exclusive(&file).map_err(sink_open)?;
        if file.metadata().map_err(sink_open)?.len() == 0 {
            (&file)
                .write_all(format!("{}\n", CSV_HEADER).as_bytes())
                .map_err(sink_open)?;
            log::debug!("wrote CSV header to {:?}", path);
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for CsvResultSink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        let sink_write = |source| BenchError::SinkWrite {
            path: self.path.clone(),
            source,
        };

        let file = open_append(&self.path).map_err(sink_write)?;
        let _lock = FileLock::exclusive(&file).map_err(sink_write)?;
        // One write_all per row so a row is never split around another writer's.
        (&file)
            .write_all(format!("{}\n", csv_row(result)).as_bytes())
            .map_err(sink_write)?;
        Ok(())
    }

    fn get_description(&self) -> String {
        self.path.display().to_string()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Advisory whole-file lock, released on drop.
struct FileLock<'a> {
    #[cfg_attr(not(unix), allow(dead_code))]
    file: &'a File,
}

impl<'a> FileLock<'a> {
    #[cfg(unix)]
    fn exclusive(file: &'a File) -> io::Result<Self> {
        use std::os::unix::io::AsRawFd;
        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { file })
    }

    #[cfg(not(unix))]
    fn exclusive(file: &'a File) -> io::Result<Self> {
        Ok(Self { file })
    }
}

impl Drop for FileLock<'_> {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            use std::os::unix::io::AsRawFd;
            libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
        }
    }
}

/// Keeps results in memory. Used when no file output is wanted and in tests.
#[derive(Default)]
pub struct InMemorySink {
    pub results: Vec<BenchmarkResult>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for InMemorySink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn get_description(&self) -> String {
        "in-memory".to_string()
    }
}

/// CSV row without the trailing newline.
pub fn csv_row(result: &BenchmarkResult) -> String {
    format!(
        "{},{},{}",
        result.algorithm,
        result.input_size,
        result.reported_ns()
    )
}

/// Console line for one input size.
pub fn format_result_line(result: &BenchmarkResult) -> String {
    format!(
        "n={} | Avg Time = {} ns",
        result.input_size,
        result.reported_ns()
    )
}

pub fn write_banner(out: &mut dyn Write, config: &BenchmarkConfig) -> io::Result<()> {
    writeln!(out, "--- {} Benchmark ---", config.display_name)?;
    writeln!(
        out,
        "Averaged over {} runs per input size.",
        config.repeat_count
    )?;
    writeln!(out)
}

/// Convert nanoseconds to a human-readable duration (ns, us, ms, s)
pub fn nanos_to_human_readable(ns: f64) -> String {
    const US: f64 = 1_000.0;
    const MS: f64 = 1_000_000.0;
    const S: f64 = 1_000_000_000.0;

    if ns >= S {
        format!("{:.2} s", ns / S)
    } else if ns >= MS {
        format!("{:.2} ms", ns / MS)
    } else if ns >= US {
        format!("{:.2} us", ns / US)
    } else {
        format!("{:.0} ns", ns)
    }
}

/// Print a summary table of all results
pub fn print_benchmark_summary(results: &[BenchmarkResult]) {
    println!("\n{}", "=".repeat(100));
    println!("Benchmark Results Summary");
    println!("{}", "=".repeat(100));
    println!(
        "{:<20} {:>10} {:>6} {:>14} {:>14} {:>14} {:>14}",
        "Algorithm", "n", "Runs", "Mean", "Min", "Max", "Total"
    );
    println!("{}", "-".repeat(100));

    for result in results {
        println!(
            "{:<20} {:>10} {:>6} {:>14} {:>14} {:>14} {:>14}",
            result.algorithm,
            result.input_size,
            result.repeat_count,
            nanos_to_human_readable(result.mean_ns),
            nanos_to_human_readable(result.min_ns as f64),
            nanos_to_human_readable(result.max_ns as f64),
            nanos_to_human_readable(result.total_ns as f64),
        );
    }
    println!("{}", "=".repeat(100));
}

/// Growth of the mean between consecutive sizes of the same algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthFactor {
    pub algorithm: String,
    pub from_size: usize,
    pub to_size: usize,
    /// `None` when the smaller size measured zero.
    pub factor: Option<f64>,
}

pub fn growth_factors(results: &[BenchmarkResult]) -> Vec<GrowthFactor> {
    results
        .windows(2)
        .filter(|pair| pair[0].algorithm == pair[1].algorithm)
        .map(|pair| GrowthFactor {
            algorithm: pair[1].algorithm.clone(),
            from_size: pair[0].input_size,
            to_size: pair[1].input_size,
            factor: (pair[0].mean_ns > 0.0).then(|| pair[1].mean_ns / pair[0].mean_ns),
        })
        .collect()
}

/// Print how the mean grows from one size to the next
pub fn print_growth_analysis(results: &[BenchmarkResult]) {
    let factors = growth_factors(results);
    if factors.is_empty() {
        return;
    }

    println!("\n=== GROWTH ANALYSIS ===");
    for growth in factors {
        let factor = match growth.factor {
            Some(f) => format!("{:.2}x", f),
            None => "N/A".to_string(),
        };
        println!(
            "{}: n={} -> n={}: {}",
            growth.algorithm, growth.from_size, growth.to_size, factor
        );
    }
}
