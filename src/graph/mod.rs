//! Weighted graphs read from plain-text edge lists, and single-source
//! shortest paths over them.
//!
//! Edge-list format:
//!
//! ```text
//! # comment
//! 6 20        <- "n m" (node count, edge count) or just "m"
//! A B -2      <- m lines of "from to weight"
//! ...
//! ```
//!
//! Node labels are any whitespace-free token and are numbered in order of
//! first appearance. A declared node count only bounds the number of labels.

pub mod shortest_path;

pub use shortest_path::{ShortestPaths, bellman_ford, dijkstra};

use crate::error::{BenchError, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `label`, adding the node if it is new.
    pub fn add_node(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) {
        self.edges.push(Edge { from, to, weight });
        self.adjacency[from].push((to, weight));
    }

    /// Adds `from -> to` and `to -> from`.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: i64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn neighbors(&self, node: usize) -> &[(usize, i64)] {
        &self.adjacency[node]
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn node_index(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| BenchError::UnknownNode(label.to_string()))
    }

    /// Renders a node path as `A -> B -> C`.
    pub fn format_path(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&n| self.label(n))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn from_file(path: impl AsRef<Path>, directed: bool) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse_edge_list(&text, directed)
    }

    pub fn parse_edge_list(text: &str, directed: bool) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines.next().ok_or(BenchError::GraphParse {
            line: 0,
            reason: "empty edge list".to_string(),
        })?;
        let counts = header
            .split_whitespace()
            .map(|t| parse_number::<usize>(t, header_line))
            .collect::<Result<Vec<_>>>()?;
        let (declared_nodes, edge_count) = match counts.as_slice() {
            [m] => (None, *m),
            [n, m] => (Some(*n), *m),
            _ => {
                return Err(BenchError::GraphParse {
                    line: header_line,
                    reason: format!("expected \"m\" or \"n m\", got {:?}", header),
                });
            }
        };

        let mut graph = Graph::new();
        let mut parsed = 0;
        for (line_no, line) in lines {
            if parsed == edge_count {
                return Err(BenchError::GraphParse {
                    line: line_no,
                    reason: format!("more than the {} declared edges", edge_count),
                });
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [from, to, weight] = tokens.as_slice() else {
                return Err(BenchError::GraphParse {
                    line: line_no,
                    reason: format!("expected \"from to weight\", got {:?}", line),
                });
            };
            let weight = parse_number::<i64>(weight, line_no)?;
            let from = graph.add_node(from);
            let to = graph.add_node(to);
            if directed {
                graph.add_edge(from, to, weight);
            } else {
                graph.add_undirected_edge(from, to, weight);
            }
            parsed += 1;
        }

        if parsed < edge_count {
            return Err(BenchError::GraphParse {
                line: header_line,
                reason: format!("declared {} edges but found {}", edge_count, parsed),
            });
        }
        if let Some(n) = declared_nodes {
            if graph.node_count() > n {
                return Err(BenchError::GraphParse {
                    line: header_line,
                    reason: format!(
                        "declared {} nodes but edges name {}",
                        n,
                        graph.node_count()
                    ),
                });
            }
        }

        log::debug!(
            "parsed graph: {} nodes, {} edges ({})",
            graph.node_count(),
            graph.edges().len(),
            if directed { "directed" } else { "undirected" }
        );
        Ok(graph)
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| BenchError::GraphParse {
        line,
        reason: format!("invalid number {:?}", token),
    })
}
