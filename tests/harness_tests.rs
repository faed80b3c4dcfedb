mod common;

use algo_bench::benchmark::{
    AlgorithmKind, BenchmarkConfig, BenchmarkRunner, FibonacciInputProvider, InMemorySink,
    RandomVecInputProvider, SortVerifier, csv_row, format_result_line,
};
use algo_bench::rand::bench_rng;
use algo_bench::{Algorithm, BenchError, DpFibonacci, MergeSort, QuickSort, RecursiveFibonacci};

fn memory_runner() -> BenchmarkRunner<InMemorySink, Vec<u8>> {
    BenchmarkRunner::new(bench_rng(Some(42)), InMemorySink::new(), Vec::new())
}

/// A deliberately broken "sort" used to prove verification runs.
struct ReverseOnly;

impl Algorithm for ReverseOnly {
    type Input = Vec<i32>;
    type Output = ();

    fn label(&self) -> &'static str {
        "ReverseOnly"
    }

    fn run(&self, input: &mut Vec<i32>) {
        input.reverse();
    }
}

#[test]
fn test_one_result_per_size_in_order() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Merge Sort", vec![1, 10, 100, 1000], 5);
    let results = runner
        .run_benchmark(&config, &MergeSort, &RandomVecInputProvider::new())
        .unwrap();

    let sizes: Vec<usize> = results.iter().map(|r| r.input_size).collect();
    assert_eq!(sizes, vec![1, 10, 100, 1000]);
    for result in &results {
        assert_eq!(result.algorithm, "MergeSort");
        assert_eq!(result.repeat_count, 5);
        assert!(result.mean_ns >= 0.0);
        assert!(result.min_ns <= result.max_ns);
        assert!((result.mean_ns - result.total_ns as f64 / 5.0).abs() < 1e-6);
    }
    assert_eq!(runner.sink().results, results);
}

#[test]
fn test_console_lines_match_records() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Quick Sort", vec![1, 10, 100], 3);
    runner
        .run_benchmark(&config, &QuickSort, &RandomVecInputProvider::new())
        .unwrap();

    let (_, sink, console) = runner.into_parts();
    let text = String::from_utf8(console).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("--- Quick Sort Benchmark ---"));
    assert_eq!(lines.next(), Some("Averaged over 3 runs per input size."));
    assert_eq!(lines.next(), Some(""));

    let report_lines: Vec<&str> = lines.collect();
    assert_eq!(report_lines.len(), sink.results.len());
    for (line, result) in report_lines.iter().zip(&sink.results) {
        assert_eq!(*line, format_result_line(result));
        let row = csv_row(result);
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], "QuickSort");
        assert_eq!(fields[1], result.input_size.to_string());
        // the console value and the CSV value are the same number
        assert_eq!(
            line.trim_end_matches(" ns").rsplit(' ').next(),
            Some(fields[2])
        );
    }
}

#[test]
fn test_sort_of_single_element() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Quick Sort", vec![1], 30);
    let results = runner
        .run_benchmark(&config, &QuickSort, &RandomVecInputProvider::new())
        .unwrap();

    let row = csv_row(&results[0]);
    assert!(row.starts_with("QuickSort,1,"), "{}", row);
    // nothing to compare, so well below a millisecond
    assert!(results[0].mean_ns < 1_000_000.0);
}

#[test]
fn test_dp_fibonacci_large_index_accumulates() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Dynamic Programming Fibonacci", vec![5000], 10);
    let results = runner
        .run_benchmark(&config, &DpFibonacci, &FibonacciInputProvider)
        .unwrap();

    let result = &results[0];
    assert_eq!(result.repeat_count, 10);
    assert!(result.total_ns >= result.max_ns);
    assert!(result.total_ns <= result.max_ns * 10);
}

#[test]
fn test_invalid_config_is_rejected_before_output() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Merge Sort", vec![10], 0);
    let err = runner
        .run_benchmark(&config, &MergeSort, &RandomVecInputProvider::new())
        .unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
    assert!(runner.sink().results.is_empty());
    assert!(runner.console().is_empty());
}

#[test]
fn test_recursive_fibonacci_bound_enforced() {
    let mut runner = memory_runner();
    let mut config = AlgorithmKind::RecursiveFibonacci.default_config();
    config.sizes = vec![10, 60];
    let err = AlgorithmKind::RecursiveFibonacci
        .run(&mut runner, &config)
        .unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
}

#[test]
fn test_algorithm_bound_applies_without_config_max() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Recursive Fibonacci", vec![10, 100], 1);
    assert!(config.max_size.is_none());
    let err = runner
        .run_benchmark(&config, &RecursiveFibonacci, &FibonacciInputProvider)
        .unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
    assert!(runner.sink().results.is_empty());
    assert!(runner.console().is_empty());
}

#[test]
fn test_verification_catches_wrong_output() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Reverse Only", vec![100], 2).with_verify(true);
    let err = runner
        .run_benchmark_with_verifier(
            &config,
            &ReverseOnly,
            &RandomVecInputProvider::new(),
            &SortVerifier,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BenchError::Verification { input_size: 100, .. }
    ));
}

#[test]
fn test_verifier_ignored_unless_enabled() {
    let mut runner = memory_runner();
    let config = BenchmarkConfig::new("Reverse Only", vec![100], 2);
    let results = runner
        .run_benchmark_with_verifier(
            &config,
            &ReverseOnly,
            &RandomVecInputProvider::new(),
            &SortVerifier,
        )
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn test_every_kind_runs_verified() {
    let mut runner = memory_runner();
    for kind in AlgorithmKind::ALL {
        let mut config = kind.default_config().with_verify(true);
        config.sizes = vec![0, 1, 20];
        config.repeat_count = 2;
        let results = kind.run(&mut runner, &config).unwrap();
        assert_eq!(results.len(), 3, "{}", kind);
        assert!(results.iter().all(|r| r.algorithm == kind.label()));
    }
    assert_eq!(runner.sink().results.len(), 3 * AlgorithmKind::ALL.len());
}
