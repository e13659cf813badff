//! Weighted undirected graph model.
//!
//! Vertices are string labels mapped to dense [`VertexId`]s in first-seen
//! order. The graph keeps both the edge list (for edge-sorting algorithms)
//! and an adjacency list (for frontier and relaxation algorithms). It is
//! built once and never mutated afterward.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsu::DisjointSet;
use crate::error::{Error, Result};

/// Dense vertex index, valid for the graph that issued it.
pub type VertexId = usize;

/// A weighted undirected edge between two labelled vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// One endpoint.
    pub u: String,
    /// The other endpoint.
    pub v: String,
    /// Non-negative weight.
    pub weight: f64,
}

impl Edge {
    /// Create an edge.
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: f64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

/// Immutable weighted undirected graph.
///
/// Parallel edges and self-loops are kept as given. Every edge appears in
/// the adjacency of both endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, VertexId>,
    edges: Vec<(VertexId, VertexId, f64)>,
    adjacency: Vec<Vec<(VertexId, f64)>>,
}

impl Graph {
    /// Build a graph from an explicit vertex set and an edge list.
    ///
    /// Duplicate vertex labels are collapsed. Every edge endpoint must be in
    /// `vertices`.
    ///
    /// # Errors
    /// `Error::UnknownVertex` for an endpoint outside the vertex set,
    /// `Error::InvalidWeight` for a negative or NaN weight.
    pub fn new<I, S>(vertices: I, edges: &[Edge]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::default();
        for label in vertices {
            graph.intern(label.into());
        }
        for edge in edges {
            let u = graph
                .id(&edge.u)
                .ok_or_else(|| Error::UnknownVertex(edge.u.clone()))?;
            let v = graph
                .id(&edge.v)
                .ok_or_else(|| Error::UnknownVertex(edge.v.clone()))?;
            graph.push_edge(u, v, edge)?;
        }
        Ok(graph)
    }

    /// Build a graph whose vertex set is exactly the edge endpoints.
    ///
    /// # Errors
    /// `Error::InvalidWeight` for a negative or NaN weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::default();
        for edge in edges {
            let u = graph.intern(edge.u.clone());
            let v = graph.intern(edge.v.clone());
            graph.push_edge(u, v, &edge)?;
        }
        Ok(graph)
    }

    fn intern(&mut self, label: String) -> VertexId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    fn push_edge(&mut self, u: VertexId, v: VertexId, edge: &Edge) -> Result<()> {
        if edge.weight.is_nan() || edge.weight < 0.0 {
            return Err(Error::InvalidWeight {
                u: edge.u.clone(),
                v: edge.v.clone(),
                weight: edge.weight,
            });
        }
        self.edges.push((u, v, edge.weight));
        self.adjacency[u].push((v, edge.weight));
        self.adjacency[v].push((u, edge.weight));
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether `label` is a vertex of this graph.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Index of `label`, if present.
    pub fn id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Label of vertex `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this graph.
    pub fn label(&self, id: VertexId) -> &str {
        &self.labels[id]
    }

    /// Vertex labels in first-seen order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Edges in input order, by index.
    pub fn edge_ids(&self) -> &[(VertexId, VertexId, f64)] {
        &self.edges
    }

    /// Edges in input order, with labels.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .map(|&(u, v, w)| Edge::new(self.label(u), self.label(v), w))
    }

    /// `(neighbor, weight)` entries for vertex `id`.
    pub fn neighbors(&self, id: VertexId) -> &[(VertexId, f64)] {
        &self.adjacency[id]
    }

    /// `(neighbor, weight)` entries for `label`, or `None` if absent.
    pub fn neighbors_of(&self, label: &str) -> Option<Vec<(&str, f64)>> {
        let id = self.id(label)?;
        Some(
            self.adjacency[id]
                .iter()
                .map(|&(n, w)| (self.label(n), w))
                .collect(),
        )
    }

    /// Number of connected components. Isolated vertices count as one each.
    pub fn component_count(&self) -> usize {
        let mut ds = DisjointSet::new(self.vertex_count());
        for &(u, v, _) in &self.edges {
            ds.union(u, v);
        }
        ds.set_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges([
            Edge::new("A", "B", 1.0),
            Edge::new("B", "C", 2.0),
            Edge::new("A", "C", 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn vertices_in_first_seen_order() {
        let g = triangle();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn adjacency_is_reciprocal() {
        let g = triangle();
        assert_eq!(g.neighbors_of("A").unwrap(), vec![("B", 1.0), ("C", 3.0)]);
        assert_eq!(g.neighbors_of("C").unwrap(), vec![("B", 2.0), ("A", 3.0)]);
        assert!(g.neighbors_of("Z").is_none());
    }

    #[test]
    fn parallel_edges_survive() {
        let g = Graph::from_edges([Edge::new("A", "B", 1.0), Edge::new("B", "A", 4.0)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).len(), 2);
        assert_eq!(g.neighbors(1).len(), 2);
    }

    #[test]
    fn explicit_vertices_allow_isolated() {
        let g = Graph::new(["A", "B", "C", "A"], &[Edge::new("A", "B", 1.0)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.component_count(), 2);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let err = Graph::new(["A"], &[Edge::new("A", "B", 1.0)]).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(v) if v == "B"));
    }

    #[test]
    fn negative_weight_rejected() {
        let err = Graph::from_edges([Edge::new("A", "B", -1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }));
    }

    #[test]
    fn edges_round_trip_labels() {
        let g = triangle();
        let edges: Vec<Edge> = g.edges().collect();
        assert_eq!(edges[1], Edge::new("B", "C", 2.0));
        assert!(edges[2].connects("C", "A"));
    }
}
