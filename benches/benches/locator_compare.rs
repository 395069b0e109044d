// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellfind_index::{Cell, Grid, KdTree, Locator, Point, Scan, entries_from_cells};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_grid_cells(n: u32, cell: f64) -> Vec<Cell> {
    Grid::with_extent(n, f64::from(n) * cell).cells().collect()
}

fn gen_disc_cells(n: u32, radius: f64) -> Vec<Cell> {
    Grid::new(n, -radius, radius)
        .cells()
        .filter(|c| c.center.distance_squared(Point::ORIGIN) <= radius * radius)
        .collect()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, min: f64, max: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            Point::new(
                min + rng.next_f64() * (max - min),
                min + rng.next_f64() * (max - min),
            )
        })
        .collect()
}

fn shuffled_centers(cells: &[Cell], seed: u64) -> Vec<Point> {
    let mut points: Vec<_> = cells.iter().map(|c| c.center).collect();
    let mut rng = Rng::new(seed);
    for i in (1..points.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        points.swap(i, j);
    }
    points
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32_u32, 64, 128, 256] {
        let entries = entries_from_cells(&gen_grid_cells(n, 10.0));
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    tree.build(&entries);
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("scan_n{}", n), |b| {
            b.iter_batched(
                Scan::default,
                |mut scan| {
                    Locator::build(&mut scan, &entries);
                    black_box(scan.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_centers<L: Locator + Default>(c: &mut Criterion, label: &str, sizes: &[u32]) {
    let mut group = c.benchmark_group(format!("query_centers_{label}"));
    for &n in sizes {
        let cells = gen_disc_cells(n, 15.0);
        let points = shuffled_centers(&cells, 0xC0FF_EE00_1234_5678);
        let mut locator = L::default();
        locator.build(&entries_from_cells(&cells));
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("disc_n{}", n), |b| {
            b.iter(|| {
                let mut found = 0_usize;
                for p in &points {
                    if !locator.search(black_box(*p)).is_sentinel() {
                        found += 1;
                    }
                }
                black_box(found);
            })
        });
    }
    group.finish();
}

fn bench_query_scan(c: &mut Criterion) {
    // The scan is quadratic over a full pass; keep it to small grids.
    bench_query_centers::<Scan>(c, "scan", &[16, 32, 64]);
}

fn bench_query_kdtree(c: &mut Criterion) {
    bench_query_centers::<KdTree>(c, "kdtree", &[16, 32, 64, 256, 512]);
}

fn bench_query_random_kdtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_random_kdtree");
    for &n in &[64_u32, 256] {
        let cells = gen_grid_cells(n, 1.0);
        let tree = KdTree::from_cells(&cells);
        // Slightly larger than the grid so some queries miss.
        let points = gen_random_points(4096, -2.0, f64::from(n) + 2.0, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let mut visited = 0_usize;
                for p in &points {
                    let (cell, stats) = tree.search_with_stats(black_box(*p));
                    black_box(cell);
                    visited += stats.nodes_visited;
                }
                black_box(visited);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query_scan,
    bench_query_kdtree,
    bench_query_random_kdtree,
);
criterion_main!(benches);
