mod common;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use algo_bench::benchmark::CSV_HEADER;
use common::{fresh_csv, test_dir_with_name};

fn algo_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_algo-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch algo-bench")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}

fn write_graph(name: &str, text: &str) -> PathBuf {
    let path = test_dir_with_name("test_runs").join(format!("{}.txt", name));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_run_appends_rows_and_reports_path() {
    let csv = fresh_csv("cli_binary_search");
    let output = algo_bench(&[
        "run",
        "-a",
        "binary-search",
        "--sizes",
        "1,10",
        "-r",
        "2",
        "--seed",
        "1",
        "-o",
        path_arg(&csv),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("--- Binary Search Benchmark ---"));
    assert!(out.contains("Averaged over 2 runs per input size."));
    assert!(out.contains("n=1 | Avg Time = "));
    assert!(out.contains("n=10 | Avg Time = "));
    assert!(out.contains(&format!("Results appended to {}", csv.display())));

    let contents = std::fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("BinarySearch,1,"));
    assert!(lines[2].starts_with("BinarySearch,10,"));
}

#[test]
fn test_unopenable_sink_fails_with_message() {
    let csv = test_dir_with_name("test_runs")
        .join("cli_missing_dir")
        .join("results.csv");
    let output = algo_bench(&[
        "run",
        "-a",
        "quick-sort",
        "--sizes",
        "1",
        "-r",
        "1",
        "-o",
        path_arg(&csv),
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Error: "), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("Benchmark ---"));
}

#[test]
fn test_oversized_recursive_fibonacci_rejected_before_csv_exists() {
    let csv = fresh_csv("cli_fib_bound");
    let output = algo_bench(&[
        "run",
        "-a",
        "recursive-fibonacci",
        "--sizes",
        "60",
        "-o",
        path_arg(&csv),
    ]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("Error: "), "stderr: {}", err);
    assert!(err.contains("60"));
    assert!(!csv.exists());
}

#[test]
fn test_list_shows_every_benchmark() {
    let output = algo_bench(&["list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for label in [
        "RecursiveFibonacci",
        "DP Fibonacci",
        "LinearSearch",
        "BinarySearch",
        "MergeSort",
        "QuickSort",
    ] {
        assert!(out.contains(label), "missing {}", label);
    }
}

#[test]
fn test_graph_dijkstra_prints_cost_and_path() {
    let file = write_graph(
        "cli_city",
        "7\nI J 2\nJ G 6\nI H 9\nH G 1\nI A 1\nA B 2\nB G 20\n",
    );
    let output = algo_bench(&["graph", "-f", path_arg(&file), "--from", "I", "--to", "G"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Minimum cost from I to G = 8"));
    assert!(out.contains("Path: I -> J -> G"));
}

#[test]
fn test_graph_reports_missing_path() {
    let file = write_graph("cli_disconnected", "2\nA B 1\nC D 1\n");
    let output = algo_bench(&["graph", "-f", path_arg(&file), "--from", "A", "--to", "D"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No path found from A to D"));
}

#[test]
fn test_graph_bellman_ford_cycle_reporting() {
    let acyclic = write_graph("cli_bf_acyclic", "3 3\nA B 4\nA C 5\nC B -3\n");
    let output = algo_bench(&[
        "graph",
        "-f",
        path_arg(&acyclic),
        "-a",
        "bellman-ford",
        "--from",
        "A",
        "--to",
        "B",
        "--directed",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Doesn't contain a negative cycle"));
    assert!(out.contains("Minimum cost from A to B = 2"));

    let cyclic = write_graph("cli_bf_cyclic", "3 3\nA B 1\nB C -2\nC B 1\n");
    let output = algo_bench(&[
        "graph",
        "-f",
        path_arg(&cyclic),
        "-a",
        "bellman-ford",
        "--from",
        "A",
        "--directed",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Contains a negative cycle"));
}

#[test]
fn test_graph_unknown_node_fails() {
    let file = write_graph("cli_unknown_node", "1\nA B 1\n");
    let output = algo_bench(&["graph", "-f", path_arg(&file), "--from", "Z"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown node: Z"));
}
