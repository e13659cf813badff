//! Minimum spanning trees.
//!
//! Two greedy strategies over the same [`Graph`]:
//!
//! - [`kruskal`]: global. Sort every edge by weight and keep those that join
//!   two different components, tracked with a [`DisjointSet`].
//! - [`prim`]: local. Grow a single tree from a start vertex, always taking
//!   the cheapest edge that leaves the visited set.
//!
//! On a disconnected graph Kruskal returns a spanning forest, while Prim only
//! covers the start vertex's component. Neither is an error; use
//! [`SpanningForest::is_spanning_tree`] to tell them apart.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsu::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::pqueue::MinQueue;

/// Edges accepted by a spanning tree algorithm, in acceptance order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningForest {
    /// Accepted edges.
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights.
    pub total_weight: f64,
}

impl SpanningForest {
    fn push(&mut self, graph: &Graph, u: VertexId, v: VertexId, weight: f64) {
        self.edges
            .push(Edge::new(graph.label(u), graph.label(v), weight));
        self.total_weight += weight;
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether these edges connect all of `graph`'s vertices.
    pub fn is_spanning_tree(&self, graph: &Graph) -> bool {
        self.edges.len() + 1 == graph.vertex_count().max(1)
    }
}

/// Kruskal's algorithm.
///
/// Edges are stable-sorted by weight, so equal-weight edges are considered
/// in input order. The result has `|V| - c` edges for `c` components.
///
/// Time: O(E log E).
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let mut edges = graph.edge_ids().to_vec();
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut ds = DisjointSet::new(graph.vertex_count());
    let mut forest = SpanningForest::default();

    for (u, v, weight) in edges {
        if ds.union(u, v) {
            forest.push(graph, u, v, weight);
        }
    }

    forest
}

/// Prim's algorithm from the vertex labelled `start`.
///
/// Each accepted edge is oriented `(visited, newly reached)`.
///
/// # Errors
/// `Error::UnknownVertex` if `start` is not in the graph.
///
/// Time: O(E log E).
pub fn prim(graph: &Graph, start: &str) -> Result<SpanningForest> {
    let start = graph
        .id(start)
        .ok_or_else(|| Error::UnknownVertex(start.to_string()))?;
    Ok(prim_from(graph, start))
}

/// Prim's algorithm from the first vertex in insertion order.
///
/// An empty graph yields an empty forest.
pub fn prim_from_first(graph: &Graph) -> SpanningForest {
    if graph.is_empty() {
        return SpanningForest::default();
    }
    prim_from(graph, 0)
}

fn prim_from(graph: &Graph, start: VertexId) -> SpanningForest {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut reached = 1;

    let mut frontier = MinQueue::new();
    for &(v, w) in graph.neighbors(start) {
        frontier.push(w, (start, v));
    }

    let mut forest = SpanningForest::default();

    while reached < n {
        let Some((weight, (u, v))) = frontier.pop() else {
            break;
        };
        // Stale: v was reached through a cheaper edge already.
        if visited[v] {
            continue;
        }
        visited[v] = true;
        reached += 1;
        forest.push(graph, u, v, weight);

        for &(next, w) in graph.neighbors(v) {
            if !visited[next] {
                frontier.push(w, (v, next));
            }
        }
    }

    forest
}
