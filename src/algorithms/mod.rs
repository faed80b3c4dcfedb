pub mod fibonacci;
pub mod search;
pub mod sort;

pub use fibonacci::{DpFibonacci, MAX_RECURSIVE_FIBONACCI_N, RecursiveFibonacci};
pub use search::{BinarySearch, LinearSearch, SearchInput};
pub use sort::{MergeSort, QuickSort};
