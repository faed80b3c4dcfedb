use crate::error::{BenchError, Result};
use std::time::Duration;

/// Everything one instantiation of the harness needs besides the algorithm
/// and the input provider.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Human-readable name used in the console banner, e.g. "Quick Sort".
    pub display_name: String,
    /// Input sizes, benchmarked in the listed order.
    pub sizes: Vec<usize>,
    /// Trials averaged per size.
    pub repeat_count: usize,
    /// Largest size the algorithm can take without exceeding its recursion
    /// bound, if it has one.
    pub max_size: Option<usize>,
    /// Check the output of the first trial of every size.
    pub verify: bool,
}

impl BenchmarkConfig {
    pub fn new(display_name: impl Into<String>, sizes: Vec<usize>, repeat_count: usize) -> Self {
        Self {
            display_name: display_name.into(),
            sizes,
            repeat_count,
            max_size: None,
            verify: false,
        }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(format!(
                "{}: no input sizes configured",
                self.display_name
            )));
        }
        if self.repeat_count == 0 {
            return Err(BenchError::InvalidConfig(format!(
                "{}: repeat count must be at least 1",
                self.display_name
            )));
        }
        if let Some(max) = self.max_size {
            if let Some(&too_big) = self.sizes.iter().find(|&&n| n > max) {
                return Err(BenchError::InvalidConfig(format!(
                    "{}: input size {} exceeds the supported maximum of {}",
                    self.display_name, too_big, max
                )));
            }
        }
        Ok(())
    }
}

/// Running totals for the trials of one input size.
///
/// The sum is kept in `u128` nanoseconds, far beyond any realistic total of
/// trial durations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialStats {
    pub trials: usize,
    pub total_ns: u128,
    pub min_ns: Option<u128>,
    pub max_ns: Option<u128>,
}

impl TrialStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        let ns = elapsed.as_nanos();
        self.trials += 1;
        self.total_ns += ns;
        self.min_ns = Some(self.min_ns.map_or(ns, |m| m.min(ns)));
        self.max_ns = Some(self.max_ns.map_or(ns, |m| m.max(ns)));
    }

    /// Floating-point mean; 0.0 before any trial is recorded.
    pub fn mean_ns(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_ns as f64 / self.trials as f64
        }
    }

    pub fn to_benchmark_result(&self, algorithm: &str, input_size: usize) -> BenchmarkResult {
        BenchmarkResult {
            algorithm: algorithm.to_string(),
            input_size,
            repeat_count: self.trials,
            total_ns: self.total_ns,
            mean_ns: self.mean_ns(),
            min_ns: self.min_ns.unwrap_or(0),
            max_ns: self.max_ns.unwrap_or(0),
        }
    }
}

/// Aggregate for one (algorithm, input size) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: String,
    pub input_size: usize,
    pub repeat_count: usize,
    pub total_ns: u128,
    pub mean_ns: f64,
    pub min_ns: u128,
    pub max_ns: u128,
}

impl BenchmarkResult {
    /// The mean as printed to the console and written to the CSV: rounded to
    /// the nearest nanosecond.
    pub fn reported_ns(&self) -> u128 {
        self.mean_ns.round() as u128
    }
}
