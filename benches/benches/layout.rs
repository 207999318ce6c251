// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_expansion::ExpansionState;
use grove_layout::{LayoutConfig, compute_layout};
use grove_tree::{Tree, TreeNode};

fn wide_tree(branches: usize, leaves: usize, depth: usize) -> Tree {
    fn subtree(id: String, fanout: usize, depth: usize) -> TreeNode {
        let node = TreeNode::new(id.clone(), format!("Node {id}"));
        if depth == 0 {
            return node;
        }
        node.with_children((0..fanout).map(|i| subtree(format!("{id}.{i}"), fanout, depth - 1)))
    }
    let root = TreeNode::new("root", "Root").with_children(
        (0..branches).map(|i| subtree(format!("b{i}"), leaves, depth)),
    );
    Tree::new(root).unwrap()
}

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/visible");
    let config = LayoutConfig::default();

    for (branches, leaves) in [(4usize, 3usize), (8, 4), (32, 16), (128, 32)] {
        let tree = wide_tree(branches, leaves, 1);
        let mut expansion = ExpansionState::new();
        expansion.expand_all(&tree);
        let visible = 1 + branches + branches * leaves;
        group.throughput(Throughput::Elements(visible as u64));

        group.bench_with_input(
            BenchmarkId::new("expanded", visible),
            &(tree, expansion),
            |b, (tree, expansion)| {
                b.iter(|| black_box(compute_layout(tree, expansion, &config)));
            },
        );
    }

    group.finish();
}

fn bench_hidden_subtrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/hidden");
    let config = LayoutConfig::default();

    // Collapsed subtrees should cost nothing: the total node count grows while
    // the visible set stays at root plus branches.
    for depth in [1usize, 3, 5] {
        let tree = wide_tree(8, 4, depth);
        let mut collapsed = ExpansionState::initial(&tree);
        for i in 0..8 {
            collapsed.collapse(&format!("b{i}"));
        }
        group.throughput(Throughput::Elements(tree.node_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("collapsed", tree.node_count()),
            &(tree, collapsed),
            |b, (tree, expansion)| {
                b.iter(|| black_box(compute_layout(tree, expansion, &config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_visible, bench_hidden_subtrees);
criterion_main!(benches);
