use super::input::{FibonacciInputProvider, RandomVecInputProvider, SearchInputProvider};
use super::reporting::ResultSink;
use super::runner::BenchmarkRunner;
use super::types::{BenchmarkConfig, BenchmarkResult};
use super::verification::{FibonacciVerifier, SearchVerifier, SortVerifier};
use crate::Algorithm;
use crate::algorithms::{
    BinarySearch, DpFibonacci, LinearSearch, MAX_RECURSIVE_FIBONACCI_N, MergeSort, QuickSort,
    RecursiveFibonacci,
};
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

const COMPARISON_SIZES: &[usize] = &[1, 10, 100, 1000, 10_000];
const RECURSIVE_FIBONACCI_SIZES: &[usize] = &[1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50];
const DP_FIBONACCI_SIZES: &[usize] = &[1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 100, 500, 1000, 5000];

/// The benchmarks this crate ships, with their default sizes and repeat
/// counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum AlgorithmKind {
    RecursiveFibonacci,
    DpFibonacci,
    LinearSearch,
    BinarySearch,
    MergeSort,
    QuickSort,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::RecursiveFibonacci,
        AlgorithmKind::DpFibonacci,
        AlgorithmKind::LinearSearch,
        AlgorithmKind::BinarySearch,
        AlgorithmKind::MergeSort,
        AlgorithmKind::QuickSort,
    ];

    /// Label written to the `Algorithm` column of the CSV.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::RecursiveFibonacci => RecursiveFibonacci.label(),
            AlgorithmKind::DpFibonacci => DpFibonacci.label(),
            AlgorithmKind::LinearSearch => LinearSearch.label(),
            AlgorithmKind::BinarySearch => BinarySearch.label(),
            AlgorithmKind::MergeSort => MergeSort.label(),
            AlgorithmKind::QuickSort => QuickSort.label(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::RecursiveFibonacci => "Recursive Fibonacci",
            AlgorithmKind::DpFibonacci => "Dynamic Programming Fibonacci",
            AlgorithmKind::LinearSearch => "Linear Search",
            AlgorithmKind::BinarySearch => "Binary Search",
            AlgorithmKind::MergeSort => "Merge Sort",
            AlgorithmKind::QuickSort => "Quick Sort",
        }
    }

    pub fn default_sizes(self) -> &'static [usize] {
        match self {
            AlgorithmKind::RecursiveFibonacci => RECURSIVE_FIBONACCI_SIZES,
            AlgorithmKind::DpFibonacci => DP_FIBONACCI_SIZES,
            _ => COMPARISON_SIZES,
        }
    }

    /// A single naive Fibonacci call at n=50 already takes tens of seconds,
    /// so that benchmark is not averaged.
    pub fn default_repeat_count(self) -> usize {
        match self {
            AlgorithmKind::RecursiveFibonacci => 1,
            AlgorithmKind::DpFibonacci => 10,
            AlgorithmKind::MergeSort => 20,
            AlgorithmKind::LinearSearch | AlgorithmKind::BinarySearch | AlgorithmKind::QuickSort => {
                30
            }
        }
    }

    pub fn max_size(self) -> Option<usize> {
        match self {
            AlgorithmKind::RecursiveFibonacci => Some(MAX_RECURSIVE_FIBONACCI_N),
            _ => None,
        }
    }

    pub fn default_config(self) -> BenchmarkConfig {
        let config = BenchmarkConfig::new(
            self.display_name(),
            self.default_sizes().to_vec(),
            self.default_repeat_count(),
        );
        match self.max_size() {
            Some(max) => config.with_max_size(max),
            None => config,
        }
    }

    /// Wires this algorithm to its input provider and verifier and runs it.
    pub fn run<S: ResultSink, W: Write>(
        self,
        runner: &mut BenchmarkRunner<S, W>,
        config: &BenchmarkConfig,
    ) -> Result<Vec<BenchmarkResult>> {
        match self {
            AlgorithmKind::RecursiveFibonacci => runner.run_benchmark_with_verifier(
                config,
                &RecursiveFibonacci,
                &FibonacciInputProvider,
                &FibonacciVerifier,
            ),
            AlgorithmKind::DpFibonacci => runner.run_benchmark_with_verifier(
                config,
                &DpFibonacci,
                &FibonacciInputProvider,
                &FibonacciVerifier,
            ),
            AlgorithmKind::LinearSearch => runner.run_benchmark_with_verifier(
                config,
                &LinearSearch,
                &SearchInputProvider::unsorted(),
                &SearchVerifier {
                    requires_sorted: false,
                },
            ),
            AlgorithmKind::BinarySearch => runner.run_benchmark_with_verifier(
                config,
                &BinarySearch,
                &SearchInputProvider::sorted(),
                &SearchVerifier {
                    requires_sorted: true,
                },
            ),
            AlgorithmKind::MergeSort => runner.run_benchmark_with_verifier(
                config,
                &MergeSort,
                &RandomVecInputProvider::new(),
                &SortVerifier,
            ),
            AlgorithmKind::QuickSort => runner.run_benchmark_with_verifier(
                config,
                &QuickSort,
                &RandomVecInputProvider::new(),
                &SortVerifier,
            ),
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
