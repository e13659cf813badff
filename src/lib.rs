//! # Greedy graph and coding algorithms
//!
//! *Spanning trees, shortest paths and prefix codes from one idea: always take the cheapest step.*
//!
//! ## Intuition First
//!
//! Imagine connecting a set of towns with roads. You could look at every road in the
//! country, cheapest first, and build each one unless it closes a loop. Or you could
//! start in one town and keep paving the cheapest road out of the region you already
//! reach. Both end with the same total cost. That is the minimum spanning tree.
//!
//! Ask instead how far each town is from home, and you expand outward from home,
//! always settling the closest unsettled town next. That is Dijkstra.
//!
//! Huffman coding runs the same greedy loop on a different object: keep merging the
//! two rarest symbols into one, and the merge history is an optimal prefix code.
//!
//! ## The Problem
//!
//! Each algorithm needs one of two small, shared structures:
//! - **Disjoint-set union**: "are these two vertices already connected?" in near O(1).
//! - **Min-priority queue**: "what is the cheapest pending step?" in O(log n).
//!
//! ## Historical Context
//!
//! ```text
//! 1926  Borůvka     First MST algorithm (electrical network of Moravia)
//! 1930  Jarník      Frontier-expansion MST, later rediscovered by Prim (1957)
//! 1952  Huffman     Optimal prefix codes, a term paper at MIT
//! 1956  Kruskal     Edge-sorting MST
//! 1959  Dijkstra    Single-source shortest paths
//! 1975  Tarjan      Union by rank + path compression: inverse-Ackermann bound
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Kruskal**: O(E log E), dominated by the sort.
//! - **Prim / Dijkstra**: O(E log E) with a lazy binary heap.
//! - **Huffman**: O(n + k log k) for n symbols and k distinct symbols.
//!
//! ## Failure Modes
//!
//! 1. **Disconnected graphs**: Kruskal returns a spanning forest; Prim returns the tree
//!    of the start vertex's component only. Neither reports an error.
//! 2. **Negative weights**: rejected at graph construction. Dijkstra would be wrong.
//! 3. **Ties**: resolved by input order everywhere, so results are deterministic but
//!    not unique among equal-cost answers.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`graph`]: the immutable weighted undirected graph.
//! - [`dsu`]: union by rank with path compression.
//! - [`pqueue`]: a min-queue ordered on `(key, insertion order)`.
//! - [`mst`]: Kruskal and Prim.
//! - [`shortest_path`]: Dijkstra and path reconstruction.
//! - [`huffman`]: arena-backed Huffman trees, code tables and decoding.
//! - [`ingest`]: CSV graphs and text files.
//!
//! ```
//! use greedy::{dijkstra, kruskal, prim, Edge, Graph};
//!
//! let graph = Graph::from_edges([
//!     Edge::new("A", "B", 1.0),
//!     Edge::new("B", "C", 2.0),
//!     Edge::new("A", "C", 3.0),
//! ])?;
//!
//! assert_eq!(kruskal(&graph).total_weight, 3.0);
//! assert_eq!(prim(&graph, "A")?.total_weight, 3.0);
//! assert_eq!(dijkstra(&graph, "A")?.distance("C"), Some(3.0));
//! # Ok::<(), greedy::Error>(())
//! ```
//!
//! ## References
//!
//! - Kruskal, J. B. (1956). "On the shortest spanning subtree of a graph and the traveling salesman problem."
//! - Prim, R. C. (1957). "Shortest connection networks and some generalizations."
//! - Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs."
//! - Huffman, D. A. (1952). "A method for the construction of minimum-redundancy codes."
//! - Tarjan, R. E. (1975). "Efficiency of a good but not linear set union algorithm."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dsu;
pub mod error;
pub mod graph;
pub mod huffman;
pub mod ingest;
pub mod mst;
pub mod pqueue;
pub mod shortest_path;

pub use dsu::DisjointSet;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};
pub use huffman::{CodeTable, HuffmanTree};
pub use mst::{kruskal, prim, prim_from_first, SpanningForest};
pub use pqueue::MinQueue;
pub use shortest_path::{dijkstra, reconstruct_path, ShortestPaths};
