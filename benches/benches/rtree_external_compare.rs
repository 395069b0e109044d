// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use cellfind_index::{Cell, Grid, KdTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::RTree;
use rstar::primitives::Rectangle;

fn gen_grid_cells(n: u32, cell: f64) -> Vec<Cell> {
    Grid::with_extent(n, f64::from(n) * cell).cells().collect()
}

fn to_rstar_rects(v: &[Cell]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|c| {
            let h = c.half_size;
            Rectangle::from_corners(
                [c.center.x - h, c.center.y - h],
                [c.center.x + h, c.center.y + h],
            )
        })
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    for &n in &[64_u32, 128] {
        let cells = gen_grid_cells(n, 10.0);
        let queries: Vec<_> = cells.iter().step_by(7).map(|c| c.center).collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("kdtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || cells.clone(),
                |cells| {
                    let tree = KdTree::from_cells(&cells);
                    let hits = queries
                        .iter()
                        .filter(|p| !tree.search(**p).is_sentinel())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&cells),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let hits = queries
                        .iter()
                        .filter(|p| tree.locate_at_point(&[p.x, p.y]).is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
