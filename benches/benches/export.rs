// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_expansion::ExpansionState;
use grove_layout::{LayoutConfig, compute_layout};
use grove_source::parse_generated;
use grove_svg::{SvgTheme, export_svg};
use grove_text::WrapConfig;
use grove_tree::{Tree, TreeNode};

const LABEL: &str = "Ownership rules and the borrow checker in practice";

fn generated_response(branches: usize, leaves: usize) -> String {
    let branches: Vec<serde_json::Value> = (0..branches)
        .map(|b| {
            let children: Vec<serde_json::Value> = (0..leaves)
                .map(|l| {
                    serde_json::json!({ "id": format!("b{b}-{l}"), "label": LABEL, "pageIndex": b })
                })
                .collect();
            serde_json::json!({
                "id": format!("b{b}"),
                "label": LABEL,
                "description": LABEL,
                "importance": (b % 5) + 1,
                "pageIndex": b,
                "children": children,
            })
        })
        .collect();
    let map = serde_json::json!({ "id": "root", "label": "Root", "branches": branches });
    format!("```json\n{map}\n```")
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("export/wrap");
    let wrap = WrapConfig::for_font_size(13.0);
    for width in [60.0f64, 140.0, 400.0] {
        group.bench_with_input(BenchmarkId::new("label", width), &width, |b, &width| {
            b.iter(|| black_box(wrap.wrap(black_box(LABEL), width)));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("export/parse_generated");
    for branches in [4usize, 8, 64] {
        let text = generated_response(branches, 4);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(branches), &text, |b, text| {
            b.iter(|| black_box(parse_generated(text, branches)));
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("export/svg");
    let config = LayoutConfig::default();
    let theme = SvgTheme::default();
    for branches in [4usize, 8, 32] {
        let root = parse_generated(&generated_response(branches, 4), branches)
            .unwrap_or_else(|_| TreeNode::new("root", "Root"));
        let tree = Tree::new(root).unwrap();
        let mut expansion = ExpansionState::new();
        expansion.expand_all(&tree);
        let layout = compute_layout(&tree, &expansion, &config);
        group.throughput(Throughput::Elements(layout.nodes().len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(layout.nodes().len()),
            &layout,
            |b, layout| {
                b.iter(|| black_box(export_svg(layout, &config, layout.bounds(), &theme)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_wrap, bench_parse, bench_svg);
criterion_main!(benches);
