pub mod input;
pub mod reporting;
pub mod runner;
pub mod suite;
pub mod timer;
pub mod types;
pub mod verification;

pub use input::{
    ABSENT_TARGET, BenchmarkInputProvider, FibonacciInputProvider, RandomVecInputProvider,
    SearchInputProvider, VALUE_RANGE,
};
pub use reporting::{
    CSV_HEADER, CsvResultSink, DEFAULT_CSV_PATH, GrowthFactor, InMemorySink, ResultSink, csv_row,
    format_result_line, growth_factors, nanos_to_human_readable, print_benchmark_summary,
    print_growth_analysis, write_banner,
};
pub use runner::BenchmarkRunner;
pub use suite::AlgorithmKind;
pub use timer::time_once;
pub use types::{BenchmarkConfig, BenchmarkResult, TrialStats};
pub use verification::{FibonacciVerifier, OutputVerifier, SearchVerifier, SortVerifier};
