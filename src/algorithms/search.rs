use crate::Algorithm;

/// A search problem: the haystack and the value to look for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInput {
    pub data: Vec<i32>,
    pub target: i32,
}

/// Scans left to right and returns the first index holding `target`.
pub fn linear_search(data: &[i32], target: i32) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Iterative binary search over a slice sorted in non-decreasing order.
pub fn binary_search(data: &[i32], target: i32) -> Option<usize> {
    // Half-open window [low, high) so an empty slice needs no special case.
    let mut low = 0;
    let mut high = data.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match data[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

pub struct LinearSearch;

impl Algorithm for LinearSearch {
    type Input = SearchInput;
    type Output = Option<usize>;

    fn label(&self) -> &'static str {
        "LinearSearch"
    }

    fn run(&self, input: &mut SearchInput) -> Option<usize> {
        linear_search(&input.data, input.target)
    }
}

pub struct BinarySearch;

impl Algorithm for BinarySearch {
    type Input = SearchInput;
    type Output = Option<usize>;

    fn label(&self) -> &'static str {
        "BinarySearch"
    }

    fn run(&self, input: &mut SearchInput) -> Option<usize> {
        binary_search(&input.data, input.target)
    }
}
