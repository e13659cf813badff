//! Error types for graph and coding operations.

use thiserror::Error;

/// Error variants for graph construction, queries and Huffman coding.
#[derive(Debug, Error)]
pub enum Error {
    /// The shortest-path source is not a vertex of the graph.
    #[error("source vertex '{0}' is not in the graph")]
    MissingSource(String),

    /// A vertex label was referenced that the graph does not contain.
    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),

    /// Edge weight is negative or NaN.
    #[error("invalid weight {weight} on edge {u} - {v}")]
    InvalidWeight {
        /// First endpoint.
        u: String,
        /// Second endpoint.
        v: String,
        /// The rejected weight.
        weight: f64,
    },

    /// Symbol has no entry in the code table.
    #[error("symbol has no code")]
    UnknownSymbol,

    /// Bit stream contains a non-binary digit or ends inside a code.
    #[error("invalid code at bit {0}")]
    InvalidCode(usize),

    /// Malformed input row.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },

    /// An I/O error occurred while reading input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for graph and coding operations.
pub type Result<T> = std::result::Result<T, Error>;
