// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Cellfind Index: build cells from a grid, then look points up.

use cellfind_index::{Grid, KdTree, Point, scan};

fn main() {
    let grid = Grid::new(8, -4.0, 4.0);
    let cells: Vec<_> = grid.cells().collect();
    let tree = KdTree::from_cells(&cells);

    for p in [Point::new(0.3, -1.7), Point::new(3.9, 3.9), Point::new(9.0, 0.0)] {
        let (hit, stats) = tree.search_with_stats(p);
        let reference = scan::search(&cells, p);
        if hit.is_sentinel() {
            println!("{p:?}: not found ({} nodes visited)", stats.nodes_visited);
        } else {
            println!(
                "{p:?}: cell ({}, {}) centered at {:?} ({} nodes visited)",
                hit.grid_x, hit.grid_y, hit.center, stats.nodes_visited
            );
        }
        assert_eq!(hit, reference, "tree and scan disagree at {p:?}");
    }
}
