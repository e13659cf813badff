//! Single-source shortest paths via Dijkstra's algorithm.
//!
//! Uses a binary-heap priority queue with lazy deletion: instead of a
//! decrease-key operation, an improved distance is pushed as a new entry and
//! outdated entries are skipped when popped. Requires non-negative weights;
//! graphs built through [`Graph`] constructors are checked for that.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::pqueue::MinQueue;

/// Distances and predecessors from one source, indexed like the graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShortestPaths {
    vertices: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, VertexId>,
    source: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// The source vertex.
    pub fn source(&self) -> &str {
        &self.vertices[self.source]
    }

    /// Shortest distance to `target`; `f64::INFINITY` when unreachable,
    /// `None` when `target` is not a vertex.
    pub fn distance(&self, target: &str) -> Option<f64> {
        self.id(target).map(|id| self.distances[id])
    }

    /// Immediate predecessor of `target` on its shortest path.
    pub fn predecessor(&self, target: &str) -> Option<&str> {
        let id = self.id(target)?;
        self.predecessors[id].map(|p| self.vertices[p].as_str())
    }

    /// Whether `target` can be reached from the source.
    pub fn is_reachable(&self, target: &str) -> bool {
        self.distance(target).is_some_and(f64::is_finite)
    }

    /// `(vertex, distance)` for every vertex, in graph order.
    pub fn distances(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.vertices
            .iter()
            .map(String::as_str)
            .zip(self.distances.iter().copied())
    }

    /// Predecessor map keyed by vertex, for every reached non-source vertex.
    pub fn predecessor_map(&self) -> HashMap<String, String> {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(|(v, p)| {
                p.map(|p| (self.vertices[v].clone(), self.vertices[p].clone()))
            })
            .collect()
    }

    /// Vertices on the shortest path from the source to `target`, inclusive.
    ///
    /// Empty when `target` is unreachable or unknown; just `[source]` when
    /// `target` is the source.
    pub fn path_to(&self, target: &str) -> Vec<&str> {
        let Some(mut node) = self.id(target) else {
            return Vec::new();
        };

        let mut path = vec![node];
        while node != self.source {
            match self.predecessors[node] {
                // A chain longer than |V| cannot come from relaxation.
                Some(prev) if path.len() <= self.vertices.len() => {
                    path.push(prev);
                    node = prev;
                }
                _ => return Vec::new(),
            }
        }

        path.reverse();
        path.into_iter().map(|v| self.vertices[v].as_str()).collect()
    }
}

/// Dijkstra's single-source shortest paths.
///
/// # Errors
/// `Error::MissingSource` if `source` is not a vertex; nothing is computed.
///
/// Time: O((V + E) log E).
pub fn dijkstra(graph: &Graph, source: &str) -> Result<ShortestPaths> {
    let source_id = graph
        .id(source)
        .ok_or_else(|| Error::MissingSource(source.to_string()))?;

    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source_id] = 0.0;

    let mut queue = MinQueue::new();
    queue.push(0.0, source_id);

    while let Some((dist, u)) = queue.pop() {
        // Skip if we've already found a better path
        if dist > distances[u] {
            continue;
        }

        for &(v, weight) in graph.neighbors(u) {
            let candidate = dist + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                queue.push(candidate, v);
            }
        }
    }

    let vertices: Vec<String> = graph.vertices().map(str::to_string).collect();
    let index = vertices
        .iter()
        .enumerate()
        .map(|(id, v)| (v.clone(), id))
        .collect();

    Ok(ShortestPaths {
        vertices,
        index,
        source: source_id,
        distances,
        predecessors,
    })
}

/// Rebuild the path from `source` to `target` out of a predecessor map.
///
/// Walks predecessors back from `target`. Returns an empty path if the walk
/// never reaches `source`, and `[source]` when `target == source`.
pub fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    source: &str,
    target: &str,
) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut node = target;
    while node != source {
        match predecessors.get(node) {
            Some(prev) if path.len() <= predecessors.len() => {
                path.push(prev.clone());
                node = prev.as_str();
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
