use criterion::{criterion_group, criterion_main, Criterion};
use greedy::{dijkstra, kruskal, prim, Edge, Graph, HuffmanTree};

/// Grid graph with deterministic pseudo-random weights.
fn grid(side: usize) -> Graph {
    let label = |r: usize, c: usize| format!("{r}:{c}");
    let mut edges = Vec::new();
    let mut seed = 0x2545_f491_u64;
    let mut weight = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 1000) as f64
    };
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                edges.push(Edge::new(label(r, c), label(r, c + 1), weight()));
            }
            if r + 1 < side {
                edges.push(Edge::new(label(r, c), label(r + 1, c), weight()));
            }
        }
    }
    Graph::from_edges(edges).unwrap()
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    let graph = grid(64);

    group.bench_function("kruskal", |b| b.iter(|| kruskal(&graph)));
    group.bench_function("prim", |b| b.iter(|| prim(&graph, "0:0").unwrap()));
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let graph = grid(64);

    group.bench_function("grid_64", |b| b.iter(|| dijkstra(&graph, "0:0").unwrap()));
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    let text = "the quick brown fox jumps over the lazy dog. ".repeat(200);
    let tree = HuffmanTree::from_symbols(text.chars()).unwrap();
    let codes = tree.codes();
    let bits = codes.encode(text.chars()).unwrap();

    group.bench_function("build", |b| {
        b.iter(|| HuffmanTree::from_symbols(text.chars()).unwrap())
    });
    group.bench_function("encode", |b| b.iter(|| codes.encode(text.chars()).unwrap()));
    group.bench_function("decode", |b| b.iter(|| tree.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_mst, bench_dijkstra, bench_huffman);
criterion_main!(benches);
