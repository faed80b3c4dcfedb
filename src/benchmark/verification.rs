use crate::algorithms::SearchInput;
use crate::algorithms::sort::is_sorted;

/// Out-of-band correctness check for the output of one trial. Runs after the
/// timer has stopped and never contributes to the measurement.
pub trait OutputVerifier {
    type Input;
    type Output;

    /// `original` is a copy of the input taken before the call, `processed` is
    /// the input after the call (sorts mutate it in place).
    fn verify(
        &self,
        original: &Self::Input,
        processed: &Self::Input,
        output: &Self::Output,
    ) -> Result<(), String>;
}

/// Checks that a sort left a non-decreasing permutation of its input.
pub struct SortVerifier;

impl OutputVerifier for SortVerifier {
    type Input = Vec<i32>;
    type Output = ();

    fn verify(&self, original: &Vec<i32>, processed: &Vec<i32>, _output: &()) -> Result<(), String> {
        if let Some(pos) = processed.windows(2).position(|w| w[0] > w[1]) {
            return Err(format!(
                "sort order violation at index {}: {} > {}",
                pos,
                processed[pos],
                processed[pos + 1]
            ));
        }

        let mut expected = original.clone();
        expected.sort_unstable();
        if expected != *processed {
            return Err("output is not a permutation of the input".to_string());
        }
        Ok(())
    }
}

/// Checks a search result against the haystack.
pub struct SearchVerifier {
    /// Binary search is only defined on sorted input.
    pub requires_sorted: bool,
}

impl OutputVerifier for SearchVerifier {
    type Input = SearchInput;
    type Output = Option<usize>;

    fn verify(
        &self,
        _original: &SearchInput,
        processed: &SearchInput,
        output: &Option<usize>,
    ) -> Result<(), String> {
        if self.requires_sorted && !is_sorted(&processed.data) {
            return Err("search input was not sorted".to_string());
        }
        match *output {
            Some(idx) => match processed.data.get(idx) {
                Some(&value) if value == processed.target => Ok(()),
                Some(&value) => Err(format!(
                    "index {} holds {}, not target {}",
                    idx, value, processed.target
                )),
                None => Err(format!(
                    "index {} out of bounds for length {}",
                    idx,
                    processed.data.len()
                )),
            },
            None if processed.data.contains(&processed.target) => Err(format!(
                "target {} is present but was not found",
                processed.target
            )),
            None => Ok(()),
        }
    }
}

/// Compares a Fibonacci result with a two-variable iteration (mod 2^64).
pub struct FibonacciVerifier;

impl FibonacciVerifier {
    fn reference(n: usize) -> u64 {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
        a
    }
}

impl OutputVerifier for FibonacciVerifier {
    type Input = usize;
    type Output = u64;

    fn verify(&self, original: &usize, _processed: &usize, output: &u64) -> Result<(), String> {
        let expected = Self::reference(*original);
        if *output != expected {
            return Err(format!("F({}) = {}, expected {}", original, output, expected));
        }
        Ok(())
    }
}
