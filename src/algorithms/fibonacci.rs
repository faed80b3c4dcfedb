use crate::Algorithm;

/// Largest index the naive recursion is benchmarked at. The call tree grows
/// as phi^n and the recursion depth is n.
pub const MAX_RECURSIVE_FIBONACCI_N: usize = 50;

/// Naive exponential-time Fibonacci.
///
/// Overflows `u64` from n = 94 on. [`RecursiveFibonacci`] caps its input at
/// [`MAX_RECURSIVE_FIBONACCI_N`]; direct callers must bound `n` themselves.
pub fn fibonacci_recursive(n: usize) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Bottom-up Fibonacci over a full `n + 1` table.
///
/// F(94) and above do not fit in a `u64`; the table is filled with wrapping
/// addition so the result is F(n) mod 2^64 and large indices still cost O(n).
pub fn fibonacci_dp(n: usize) -> u64 {
    if n <= 1 {
        return n as u64;
    }

    let mut fib = vec![0u64; n + 1];
    fib[1] = 1;
    for i in 2..=n {
        fib[i] = fib[i - 1].wrapping_add(fib[i - 2]);
    }
    fib[n]
}

/// Same recurrence as [`fibonacci_dp`] but returns `None` once F(n) overflows.
pub fn fibonacci_dp_checked(n: usize) -> Option<u64> {
    if n <= 1 {
        return Some(n as u64);
    }

    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 2..=n {
        let next = prev.checked_add(cur)?;
        prev = cur;
        cur = next;
    }
    Some(cur)
}

pub struct RecursiveFibonacci;

impl Algorithm for RecursiveFibonacci {
    type Input = usize;
    type Output = u64;

    fn label(&self) -> &'static str {
        "RecursiveFibonacci"
    }

    fn max_input(&self) -> Option<usize> {
        Some(MAX_RECURSIVE_FIBONACCI_N)
    }

    fn run(&self, input: &mut usize) -> u64 {
        fibonacci_recursive(*input)
    }
}

pub struct DpFibonacci;

impl Algorithm for DpFibonacci {
    type Input = usize;
    type Output = u64;

    fn label(&self) -> &'static str {
        "DP Fibonacci"
    }

    fn run(&self, input: &mut usize) -> u64 {
        fibonacci_dp(*input)
    }
}
