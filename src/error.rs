use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("could not open record sink {path:?}: {source}")]
    SinkOpen { path: PathBuf, source: io::Error },

    #[error("could not append to record sink {path:?}: {source}")]
    SinkWrite { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error("verification failed for {algorithm} at n={input_size}: {reason}")]
    Verification {
        algorithm: String,
        input_size: usize,
        reason: String,
    },

    #[error("graph parse error on line {line}: {reason}")]
    GraphParse { line: usize, reason: String },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: i64 },

    #[error("path length overflows i64 on {from} -> {to}")]
    DistanceOverflow { from: String, to: String },

    #[error("graph contains a negative cycle reachable from {0}")]
    NegativeCycle(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
