use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use greedy::huffman::{bits_to_string, frequencies};
use greedy::ingest::{load_graph, read_text};
use greedy::{
    dijkstra, kruskal, prim, prim_from_first, Edge, Error, Graph, HuffmanTree, SpanningForest,
};

/// Minimum spanning trees, shortest paths and Huffman codes
#[derive(Parser)]
#[command(name = "greedy", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Suppress non-JSON output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Minimum spanning tree by sorting edges (Kruskal)
    Kruskal {
        /// CSV file with origen,destino,peso columns
        graph: PathBuf,
    },
    /// Minimum spanning tree by frontier expansion (Prim)
    Prim {
        /// CSV file with origen,destino,peso columns
        graph: PathBuf,

        /// Start vertex (defaults to the first vertex in the file)
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Shortest paths from one source (Dijkstra)
    Dijkstra {
        /// CSV file with origen,destino,peso columns
        graph: PathBuf,

        /// Source vertex
        source: String,
    },
    /// Huffman code table for the characters of a text file
    Huffman {
        /// Input text file
        text: PathBuf,
    },
}

#[derive(Serialize)]
struct MstOutput {
    algorithm: &'static str,
    vertices: Vec<String>,
    edges: Vec<Edge>,
    total_weight: f64,
    spanning: bool,
}

#[derive(Serialize)]
struct PathOutput {
    vertex: String,
    /// `None` when unreachable.
    distance: Option<f64>,
    path: Vec<String>,
}

#[derive(Serialize)]
struct DijkstraOutput {
    source: String,
    paths: Vec<PathOutput>,
}

#[derive(Serialize)]
struct CodeOutput {
    symbol: char,
    frequency: u64,
    code: String,
}

#[derive(Serialize)]
struct HuffmanOutput {
    codes: Vec<CodeOutput>,
    encoded_bits: u64,
    fixed_length_bits: u64,
    tree: HuffmanTree<char>,
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn open_graph(path: &Path, quiet: bool) -> Result<Option<Graph>> {
    let graph = load_graph(path)
        .with_context(|| format!("failed to load graph: {}", path.display()))?;
    if graph.is_empty() {
        if !quiet {
            eprintln!("graph in {} is empty", path.display());
        }
        return Ok(None);
    }
    if !quiet {
        eprintln!(
            "loaded {} ({} vertices, {} edges)",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
    }
    Ok(Some(graph))
}

fn mst_output(algorithm: &'static str, graph: &Graph, forest: SpanningForest) -> MstOutput {
    MstOutput {
        algorithm,
        vertices: graph.vertices().map(str::to_string).collect(),
        spanning: forest.is_spanning_tree(graph),
        edges: forest.edges,
        total_weight: forest.total_weight,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Command::Kruskal { graph } => {
            let Some(graph) = open_graph(graph, args.quiet)? else {
                return Ok(());
            };
            let forest = kruskal(&graph);
            if !args.quiet {
                eprintln!("  kruskal accepted {} edges", forest.len());
            }
            emit(&mst_output("kruskal", &graph, forest), args.pretty)?;
        }
        Command::Prim { graph, start } => {
            let Some(graph) = open_graph(graph, args.quiet)? else {
                return Ok(());
            };
            let forest = match start {
                Some(start) => prim(&graph, start)?,
                None => prim_from_first(&graph),
            };
            if !args.quiet {
                eprintln!("  prim accepted {} edges", forest.len());
                if !forest.is_spanning_tree(&graph) {
                    eprintln!("  graph is disconnected; tree covers the start component only");
                }
            }
            emit(&mst_output("prim", &graph, forest), args.pretty)?;
        }
        Command::Dijkstra { graph, source } => {
            let Some(graph) = open_graph(graph, args.quiet)? else {
                return Ok(());
            };
            let paths = match dijkstra(&graph, source) {
                Ok(paths) => paths,
                Err(Error::MissingSource(s)) => {
                    let mut available: Vec<&str> = graph.vertices().collect();
                    available.sort_unstable();
                    bail!(
                        "source vertex '{s}' is not in the graph; available: {}",
                        available.join(", ")
                    );
                }
                Err(e) => return Err(e.into()),
            };

            let mut vertices: Vec<&str> = graph.vertices().collect();
            vertices.sort_unstable();
            let output = DijkstraOutput {
                source: source.clone(),
                paths: vertices
                    .into_iter()
                    .map(|v| PathOutput {
                        vertex: v.to_string(),
                        distance: paths.distance(v).filter(|d| d.is_finite()),
                        path: paths.path_to(v).into_iter().map(str::to_string).collect(),
                    })
                    .collect(),
            };
            emit(&output, args.pretty)?;
        }
        Command::Huffman { text } => {
            let text = read_text(text)
                .with_context(|| format!("failed to read text: {}", text.display()))?;
            let table = frequencies(text.chars());
            let Some(tree) = HuffmanTree::from_frequencies(&table) else {
                if !args.quiet {
                    eprintln!("text is empty; nothing to encode");
                }
                return Ok(());
            };
            let codes = tree.codes();

            if !args.quiet {
                eprint!("{}", tree.render_text());
            }

            let output = HuffmanOutput {
                codes: table
                    .iter()
                    .map(|&(symbol, frequency)| CodeOutput {
                        symbol,
                        frequency,
                        code: codes.get(&symbol).map(bits_to_string).unwrap_or_default(),
                    })
                    .collect(),
                encoded_bits: codes.encoded_len(&table),
                fixed_length_bits: u64::from(codes.fixed_length_bits()) * tree.total(),
                tree,
            };
            emit(&output, args.pretty)?;
        }
    }

    Ok(())
}
