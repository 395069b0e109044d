// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locator trait shared by the lookup strategies.

use alloc::vec::Vec;

use crate::types::{Cell, Point};

/// A point-in-cell lookup strategy.
///
/// Both strategies are built once from `(center, cell)` pairs and then queried
/// many times. `search` is total: when nothing contains the point it returns
/// [`Cell::SENTINEL`].
pub trait Locator {
    /// Short human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Replace any previous contents with `entries`.
    ///
    /// The caller's slice is not reordered.
    fn build(&mut self, entries: &[(Point, Cell)]);

    /// The cell containing `point`, or [`Cell::SENTINEL`].
    fn search(&self, point: Point) -> Cell;

    /// Number of indexed cells.
    fn len(&self) -> usize;

    /// Whether no cells are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate heap footprint: bytes per stored entry times entry count.
    fn memory_bytes(&self) -> usize;
}

/// Pair every cell with its own center, the input shape [`Locator::build`] expects.
pub fn entries_from_cells(cells: &[Cell]) -> Vec<(Point, Cell)> {
    cells.iter().map(|c| (c.center, *c)).collect()
}
