#![allow(dead_code)]

use algo_bench::Algorithm;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn basic_sort<S: Algorithm<Input = Vec<i32>>>(sorter: &S) {
    let mut data = vec![26, 1, 13];
    sorter.run(&mut data);
    assert_eq!(data, vec![1, 13, 26]);
}

pub fn empty_and_single<S: Algorithm<Input = Vec<i32>>>(sorter: &S) {
    let mut empty: Vec<i32> = vec![];
    sorter.run(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![42];
    sorter.run(&mut single);
    assert_eq!(single, vec![42]);
}

pub fn reverse_order<S: Algorithm<Input = Vec<i32>>>(sorter: &S) {
    let mut data: Vec<i32> = (0..5000).rev().collect();
    sorter.run(&mut data);
    let expected: Vec<i32> = (0..5000).collect();
    assert_eq!(data, expected);
}

pub fn many_duplicates<S: Algorithm<Input = Vec<i32>>>(sorter: &S) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut data: Vec<i32> = (0..2000).map(|_| rng.random_range(0..4)).collect();
    let mut expected = data.clone();
    expected.sort();
    sorter.run(&mut data);
    assert_eq!(data, expected);
}

/// Sorted output must be a permutation of the input.
pub fn random_permutation<S: Algorithm<Input = Vec<i32>>>(sorter: &S) {
    let mut rng = StdRng::seed_from_u64(12);
    for size in [1, 10, 100, 1000, 10_000] {
        let mut data: Vec<i32> = (0..size).map(|_| rng.random_range(0..=100_000)).collect();
        let mut expected = data.clone();
        expected.sort();
        sorter.run(&mut data);
        assert_eq!(data, expected, "size {}", size);
    }
}
