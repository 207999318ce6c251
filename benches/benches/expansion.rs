// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use grove_expansion::ExpansionState;
use grove_tree::{Tree, TreeNode};

fn chain_tree(branches: usize, depth: usize) -> Tree {
    let root = TreeNode::new("root", "Root").with_children((0..branches).map(|b| {
        let mut node = TreeNode::new(format!("b{b}-{depth}"), "Deepest");
        for level in (0..depth).rev() {
            node = TreeNode::new(format!("b{b}-{level}"), "Level").with_child(node);
        }
        node
    }));
    Tree::new(root).unwrap()
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/toggle");

    for branches in [8usize, 128, 2_048] {
        let tree = chain_tree(branches, 2);
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("pair", branches), &tree, |b, tree| {
            let mut state = ExpansionState::initial(tree);
            b.iter(|| {
                state.toggle(tree, "b0-0");
                state.toggle(tree, "b0-0");
                black_box(state.revision());
            });
        });
    }

    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/bulk");

    for branches in [8usize, 128, 2_048] {
        let tree = chain_tree(branches, 3);
        group.throughput(Throughput::Elements(tree.node_count() as u64));

        group.bench_with_input(BenchmarkId::new("expand_all", branches), &tree, |b, tree| {
            b.iter_batched(
                || ExpansionState::initial(tree),
                |mut state| {
                    state.expand_all(tree);
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("collapse_all", branches),
            &tree,
            |b, tree| {
                b.iter_batched(
                    || {
                        let mut state = ExpansionState::new();
                        state.expand_all(tree);
                        state
                    },
                    |mut state| {
                        state.collapse_all(tree);
                        black_box(state);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/reveal");

    for depth in [2usize, 8, 15] {
        let tree = chain_tree(16, depth);
        let target = format!("b7-{depth}");

        group.bench_with_input(BenchmarkId::new("deepest", depth), &tree, |b, tree| {
            b.iter_batched(
                ExpansionState::new,
                |mut state| {
                    state.reveal(tree, &target);
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_toggle, bench_bulk, bench_reveal);
criterion_main!(benches);
