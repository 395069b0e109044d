// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced 2D k-d tree over cell centers.
//!
//! The tree is built once by recursive median partitioning on alternating
//! axes (x at even depths, y at odd depths) and is immutable afterwards.
//! Nodes live in a flat arena and refer to their children by index, so
//! dropping the tree never recurses regardless of its shape.
//!
//! # Search
//!
//! A query descends towards the side of each split that holds the query point,
//! then backtracks into the other side only when the split line is within the
//! pruning bound of the query. The bound is the largest half-size seen at build
//! time: a cell whose center is further than that along either axis cannot
//! contain the point. When both sides produce a containing cell the one from
//! the far side is kept. If no cell contains the point the sentinel is
//! returned.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem::size_of;

use crate::locator::{Locator, entries_from_cells};
use crate::types::{Axis, Cell, Point, abs_diff, cmp_on};

/// A balanced k-d tree answering point-in-cell queries.
#[derive(Clone, Default)]
pub struct KdTree {
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    node_count: usize,
    depth: usize,
    max_half_size: f64,
}

#[derive(Clone)]
struct Node {
    split: Point,
    cell: Cell,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// Work done by a single query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of tree nodes the query touched.
    pub nodes_visited: usize,
}

impl KdTree {
    /// Create an empty tree. Every query returns [`Cell::SENTINEL`] until built.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree pairing every cell with its own center.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut tree = Self::new();
        tree.build(&entries_from_cells(cells));
        tree
    }

    /// Number of indexed entries.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Height of the tree; zero when empty.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pruning radius used by searches: the largest half-size in the tree.
    pub fn max_half_size(&self) -> f64 {
        self.max_half_size
    }

    /// Replace the tree with one built from `entries`.
    ///
    /// Each point is the partition key for its cell, normally the cell's
    /// center. Works on a private copy; the caller's order is untouched.
    pub fn build(&mut self, entries: &[(Point, Cell)]) {
        let mut items = entries.to_vec();
        self.arena.clear();
        self.arena.reserve_exact(items.len());
        self.max_half_size = items
            .iter()
            .map(|(_, c)| c.half_size)
            .fold(0.0, f64::max);
        let mut depth = 0;
        self.root = Self::build_range(&mut self.arena, &mut items, 0, &mut depth);
        self.node_count = items.len();
        self.depth = depth;
        log::debug!(
            "built k-d tree: {} entries, depth {}, pruning bound {}",
            self.node_count,
            self.depth,
            self.max_half_size
        );
    }

    /// Partition `items` around its median on the depth's axis and recurse
    /// into both halves. An empty range has no node.
    fn build_range(
        arena: &mut Vec<Node>,
        items: &mut [(Point, Cell)],
        depth: usize,
        max_depth: &mut usize,
    ) -> Option<NodeIdx> {
        if items.is_empty() {
            return None;
        }
        *max_depth = (*max_depth).max(depth + 1);

        let axis = Axis::for_depth(depth);
        let mid = items.len() / 2;
        let _ = items.select_nth_unstable_by(mid, |a, b| cmp_on(a.0, b.0, axis));
        let (split, cell) = items[mid];

        let idx = NodeIdx::new(arena.len());
        arena.push(Node {
            split,
            cell,
            left: None,
            right: None,
        });

        let (below, rest) = items.split_at_mut(mid);
        let left = Self::build_range(arena, below, depth + 1, max_depth);
        let right = Self::build_range(arena, &mut rest[1..], depth + 1, max_depth);
        let node = &mut arena[idx.get()];
        node.left = left;
        node.right = right;
        Some(idx)
    }

    /// The cell containing `point`, or [`Cell::SENTINEL`].
    pub fn search(&self, point: Point) -> Cell {
        self.search_with_stats(point).0
    }

    /// Like [`KdTree::search`], also reporting how many nodes were visited.
    pub fn search_with_stats(&self, point: Point) -> (Cell, SearchStats) {
        let mut stats = SearchStats::default();
        let found = self
            .root
            .and_then(|root| self.search_node(root, point, Axis::X, &mut stats));
        (found.unwrap_or(Cell::SENTINEL), stats)
    }

    fn search_node(
        &self,
        idx: NodeIdx,
        point: Point,
        axis: Axis,
        stats: &mut SearchStats,
    ) -> Option<Cell> {
        stats.nodes_visited += 1;
        let node = &self.arena[idx.get()];
        let mut best = node.cell.contains(point).then_some(node.cell);

        let q = point.coord(axis);
        let s = node.split.coord(axis);
        let (near, far) = if q < s {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near
            && let Some(hit) = self.search_node(near, point, axis.next(), stats)
        {
            best = Some(hit);
        }
        if let Some(far) = far
            && abs_diff(q, s) <= self.max_half_size
            && let Some(hit) = self.search_node(far, point, axis.next(), stats)
        {
            best = Some(hit);
        }
        best
    }
}

impl Locator for KdTree {
    fn name(&self) -> &'static str {
        "KD-Tree Search"
    }

    fn build(&mut self, entries: &[(Point, Cell)]) {
        Self::build(self, entries);
    }

    fn search(&self, point: Point) -> Cell {
        Self::search(self, point)
    }

    fn len(&self) -> usize {
        self.node_count
    }

    fn memory_bytes(&self) -> usize {
        self.node_count * size_of::<Node>()
    }
}

impl Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("node_count", &self.node_count)
            .field("depth", &self.depth)
            .field("max_half_size", &self.max_half_size)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
