//! Benchmarks for the traversal framework and the derived algorithms over a
//! synthetic layered graph:
//! - depth-first / breadth-first traversal
//! - strongly connected components (both algorithms)
//! - topological sorting
//! - minimum spanning tree and shortest paths

extern crate lattix;

use criterion::{criterion_group, criterion_main, Criterion};
use lattix::prelude::*;
use std::hint::black_box;
use strum::IntoEnumIterator;

/// Layered digraph: `layers` ranks of `width` vertices, every vertex wired to
/// two vertices of the next rank, plus some rank-skipping edges.
fn layered_digraph(layers: u32, width: u32) -> Digraph<u32> {
    let mut graph = Digraph::new();
    for layer in 0..layers.saturating_sub(1) {
        for slot in 0..width {
            let from = layer * width + slot;
            graph.add_edge(from, (layer + 1) * width + slot);
            graph.add_edge(from, (layer + 1) * width + (slot + 1) % width);
            if layer + 2 < layers && slot % 3 == 0 {
                graph.add_edge(from, (layer + 2) * width + slot);
            }
        }
    }
    graph
}

/// Weighted grid for the spanning-tree and shortest-path benches.
fn weighted_grid(side: u32) -> Graph<u32, f64> {
    let mut graph = Graph::new();
    for row in 0..side {
        for col in 0..side {
            let at = row * side + col;
            if col + 1 < side {
                graph.add_edge_with(at, at + 1, f64::from((at * 7) % 13 + 1));
            }
            if row + 1 < side {
                graph.add_edge_with(at, at + side, f64::from((at * 11) % 17 + 1));
            }
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = layered_digraph(64, 16);

    for order in TraversalOrder::iter() {
        c.bench_function(&format!("traverse_{order}"), |b| {
            b.iter(|| {
                let mut visited = Vec::new();
                traverse_with(order, black_box(&graph), &0, &mut visited, |_| Visit::Continue);
                black_box(visited)
            });
        });
    }
}

fn bench_scc(c: &mut Criterion) {
    // Layered graph plus back edges closing one large cycle per rank pair.
    let mut graph = layered_digraph(32, 16);
    for layer in 0..31u32 {
        graph.add_edge((layer + 1) * 16, layer * 16);
    }

    c.bench_function("scc_tarjan", |b| {
        b.iter(|| black_box(tarjan_scc(black_box(&graph))));
    });

    c.bench_function("scc_finish_time", |b| {
        b.iter(|| black_box(finish_time_scc(black_box(&graph))));
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let mut dag: Dag<u32> = Dag::new();
    for layer in 0..63u32 {
        for slot in 0..16 {
            let from = layer * 16 + slot;
            dag.add_edge(from, (layer + 1) * 16 + slot).unwrap();
            dag.add_edge(from, (layer + 1) * 16 + (slot + 1) % 16).unwrap();
        }
    }

    c.bench_function("topological_sort", |b| {
        b.iter(|| black_box(dag.topological_sort()));
    });
}

fn bench_weighted(c: &mut Criterion) {
    let graph = weighted_grid(24);

    c.bench_function("mst_kruskal", |b| {
        b.iter(|| black_box(graph.minimum_spanning_tree().unwrap()));
    });

    c.bench_function("shortest_paths_dijkstra", |b| {
        b.iter(|| black_box(graph.shortest_paths(&0).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_traversal,
    bench_scc,
    bench_topological_sort,
    bench_weighted
);
criterion_main!(benches);
