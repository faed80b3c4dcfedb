use crate::algorithms::SearchInput;
use rand::Rng;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

/// Values drawn for generated sequences.
pub const VALUE_RANGE: RangeInclusive<i32> = 0..=100_000;

/// Search target that can never appear in a generated sequence, forcing
/// searches to probe their whole range.
pub const ABSENT_TARGET: i32 = -1;

/// Produces one fresh input per trial.
///
/// Everything done in `create_input` happens before the timer starts.
pub trait BenchmarkInputProvider {
    type Input;

    fn create_input(&self, rng: &mut StdRng, n: usize) -> Self::Input;
    fn get_description(&self) -> String;
}

/// The Fibonacci benchmarks take the index itself.
pub struct FibonacciInputProvider;

impl BenchmarkInputProvider for FibonacciInputProvider {
    type Input = usize;

    fn create_input(&self, _rng: &mut StdRng, n: usize) -> usize {
        n
    }

    fn get_description(&self) -> String {
        "Fibonacci index n".to_string()
    }
}

pub struct RandomVecInputProvider {
    pub range: RangeInclusive<i32>,
}

impl RandomVecInputProvider {
    pub fn new() -> Self {
        Self { range: VALUE_RANGE }
    }
}

impl Default for RandomVecInputProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkInputProvider for RandomVecInputProvider {
    type Input = Vec<i32>;

    fn create_input(&self, rng: &mut StdRng, n: usize) -> Vec<i32> {
        random_vec(rng, n, &self.range)
    }

    fn get_description(&self) -> String {
        format!(
            "{}..={} uniform random integers",
            self.range.start(),
            self.range.end()
        )
    }
}

/// Random haystack plus [`ABSENT_TARGET`].
pub struct SearchInputProvider {
    pub range: RangeInclusive<i32>,
    pub sorted: bool,
}

impl SearchInputProvider {
    pub fn unsorted() -> Self {
        Self {
            range: VALUE_RANGE,
            sorted: false,
        }
    }

    pub fn sorted() -> Self {
        Self {
            range: VALUE_RANGE,
            sorted: true,
        }
    }
}

impl BenchmarkInputProvider for SearchInputProvider {
    type Input = SearchInput;

    fn create_input(&self, rng: &mut StdRng, n: usize) -> SearchInput {
        let mut data = random_vec(rng, n, &self.range);
        if self.sorted {
            data.sort_unstable();
        }
        SearchInput {
            data,
            target: ABSENT_TARGET,
        }
    }

    fn get_description(&self) -> String {
        format!(
            "{}{}..={} uniform random integers, absent target {}",
            if self.sorted { "sorted " } else { "" },
            self.range.start(),
            self.range.end(),
            ABSENT_TARGET
        )
    }
}

fn random_vec(rng: &mut StdRng, n: usize, range: &RangeInclusive<i32>) -> Vec<i32> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}
