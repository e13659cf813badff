//! Reading graphs and text from disk.
//!
//! Graphs come as CSV with a header row naming the endpoint and weight
//! columns, in any order:
//!
//! ```text
//! origen,destino,peso
//! A,B,1
//! B,C,2.5
//! ```
//!
//! `source,target,weight` is accepted as well. Fields are trimmed and blank
//! lines skipped. Quoting is not supported.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};

const SOURCE_COLUMNS: [&str; 2] = ["origen", "source"];
const TARGET_COLUMNS: [&str; 2] = ["destino", "target"];
const WEIGHT_COLUMNS: [&str; 2] = ["peso", "weight"];

fn column(headers: &[&str], names: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        .ok_or_else(|| Error::Parse {
            line: 1,
            reason: format!("missing column '{}'", names[0]),
        })
}

/// Parse CSV edge rows into a [`Graph`].
///
/// Vertices are the edge endpoints in first-seen order.
///
/// # Errors
/// `Error::Parse` for a missing header column, a short row, an empty
/// vertex label or an unparsable weight; `Error::InvalidWeight` for a
/// negative or NaN weight.
pub fn parse_graph(content: &str) -> Result<Graph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        return Ok(Graph::default());
    };
    let headers: Vec<&str> = header.split(',').map(str::trim).collect();
    let u_col = column(&headers, &SOURCE_COLUMNS)?;
    let v_col = column(&headers, &TARGET_COLUMNS)?;
    let w_col = column(&headers, &WEIGHT_COLUMNS)?;

    let mut edges = Vec::new();
    for (line, row) in lines {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        let field = |col: usize| {
            fields.get(col).copied().ok_or_else(|| Error::Parse {
                line,
                reason: format!("expected {} fields, found {}", headers.len(), fields.len()),
            })
        };

        let u = field(u_col)?;
        let v = field(v_col)?;
        if u.is_empty() || v.is_empty() {
            return Err(Error::Parse {
                line,
                reason: "empty vertex label".to_string(),
            });
        }
        let w = field(w_col)?;
        let weight: f64 = w.parse().map_err(|_| Error::Parse {
            line,
            reason: format!("invalid weight '{w}'"),
        })?;

        edges.push(Edge::new(u, v, weight));
    }

    Graph::from_edges(edges)
}

/// Read and parse a CSV graph file.
///
/// # Errors
/// `Error::Io` if the file cannot be read, otherwise as [`parse_graph`].
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    parse_graph(&fs::read_to_string(path)?)
}

/// Read a whole text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
