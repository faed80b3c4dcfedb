use crate::Algorithm;

/// Top-down merge sort. Recursion depth is about log2(n).
pub fn merge_sort(data: &mut [i32]) {
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);
    merge(data, mid);
}

/// Merges the sorted halves `data[..mid]` and `data[mid..]` in place,
/// copying both halves out first. Stable: ties take from the left half.
fn merge(data: &mut [i32], mid: usize) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        data[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// In-place quick sort with a Lomuto partition around the last element.
///
/// Only the smaller side of each partition is sorted recursively; the larger
/// side is handled by the loop, so stack depth stays within about log2(n)
/// even for already-sorted input.
pub fn quick_sort(mut data: &mut [i32]) {
    while data.len() > 1 {
        let p = partition(data);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Returns the final index of the pivot.
fn partition(data: &mut [i32]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    let mut store = 0;
    for j in 0..high {
        if data[j] <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

pub struct MergeSort;

impl Algorithm for MergeSort {
    type Input = Vec<i32>;
    type Output = ();

    fn label(&self) -> &'static str {
        "MergeSort"
    }

    fn run(&self, input: &mut Vec<i32>) {
        merge_sort(input);
    }
}

pub struct QuickSort;

impl Algorithm for QuickSort {
    type Input = Vec<i32>;
    type Output = ();

    fn label(&self) -> &'static str {
        "QuickSort"
    }

    fn run(&self, input: &mut Vec<i32>) {
        quick_sort(input);
    }
}
