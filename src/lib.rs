// Micro-benchmark harness for classic algorithms

/// An algorithm under test.
///
/// `run` gets exclusive access to a freshly generated input; sorts work in
/// place, everything else only reads it. The harness ignores the output
/// beyond keeping the optimizer from discarding the call.
pub trait Algorithm {
    type Input;
    type Output;

    /// Label written to the `Algorithm` column of the results CSV.
    fn label(&self) -> &'static str;

    /// Largest input size `run` accepts, if it has a bound. The runner
    /// rejects configurations that exceed it before timing anything.
    fn max_input(&self) -> Option<usize> {
        None
    }

    fn run(&self, input: &mut Self::Input) -> Self::Output;
}

// Implementations
pub mod algorithms;
pub mod benchmark;
pub mod error;
pub mod graph;
pub mod rand;

// Export the main types
pub use algorithms::{
    BinarySearch, DpFibonacci, LinearSearch, MergeSort, QuickSort, RecursiveFibonacci, SearchInput,
};
pub use benchmark::{
    AlgorithmKind, BenchmarkConfig, BenchmarkResult, BenchmarkRunner, CsvResultSink, InMemorySink,
    ResultSink,
};
pub use error::{BenchError, Result};
pub use graph::{Graph, ShortestPaths, bellman_ford, dijkstra};
