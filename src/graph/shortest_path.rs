use super::Graph;
use crate::error::{BenchError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Distances and shortest-path tree from one source node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    /// `None` for unreachable nodes.
    pub dist: Vec<Option<i64>>,
    pub parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn new(source: usize, node_count: usize) -> Self {
        let mut dist = vec![None; node_count];
        dist[source] = Some(0);
        Self {
            source,
            dist,
            parent: vec![None; node_count],
        }
    }

    pub fn distance(&self, node: usize) -> Option<i64> {
        self.dist[node]
    }

    /// Nodes from the source to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.dist[target]?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.parent[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

fn extend(graph: &Graph, from: usize, to: usize, dist: i64, weight: i64) -> Result<i64> {
    dist.checked_add(weight)
        .ok_or_else(|| BenchError::DistanceOverflow {
            from: graph.label(from).to_string(),
            to: graph.label(to).to_string(),
        })
}

/// Dijkstra with a binary heap and lazy deletion of stale entries.
/// Fails with [`BenchError::NegativeWeight`] on any negative edge and with
/// [`BenchError::DistanceOverflow`] if a path length leaves the `i64` range.
pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0) {
        return Err(BenchError::NegativeWeight {
            from: graph.label(edge.from).to_string(),
            to: graph.label(edge.to).to_string(),
            weight: edge.weight,
        });
    }

    let mut paths = ShortestPaths::new(source, graph.node_count());
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, source)));

    while let Some(Reverse((cost, u))) = heap.pop() {
        if paths.dist[u].is_some_and(|d| cost > d) {
            continue;
        }
        for &(v, weight) in graph.neighbors(u) {
            let candidate = extend(graph, u, v, cost, weight)?;
            if paths.dist[v].is_none_or(|d| candidate < d) {
                paths.dist[v] = Some(candidate);
                paths.parent[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    Ok(paths)
}

/// Bellman-Ford: n-1 rounds of relaxing every edge, then one more pass. Any
/// further improvement means a negative cycle reachable from `source`.
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::new(source, graph.node_count());

    for _ in 1..graph.node_count() {
        let mut changed = false;
        for edge in graph.edges() {
            let Some(du) = paths.dist[edge.from] else {
                continue;
            };
            let candidate = extend(graph, edge.from, edge.to, du, edge.weight)?;
            if paths.dist[edge.to].is_none_or(|d| candidate < d) {
                paths.dist[edge.to] = Some(candidate);
                paths.parent[edge.to] = Some(edge.from);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for edge in graph.edges() {
        if let (Some(du), Some(dv)) = (paths.dist[edge.from], paths.dist[edge.to]) {
            if extend(graph, edge.from, edge.to, du, edge.weight)? < dv {
                return Err(BenchError::NegativeCycle(graph.label(source).to_string()));
            }
        }
    }

    Ok(paths)
}
