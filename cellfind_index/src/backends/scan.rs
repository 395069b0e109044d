// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive scan. Small and simple; the reference the tree is checked against.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem::size_of;

use crate::locator::Locator;
use crate::types::{Cell, Point};

/// First cell in `cells` (in slice order) that contains `point`, or [`Cell::SENTINEL`].
pub fn search(cells: &[Cell], point: Point) -> Cell {
    cells
        .iter()
        .find(|c| c.contains(point))
        .copied()
        .unwrap_or(Cell::SENTINEL)
}

/// Locator backed by a flat list of cells with linear scans.
#[derive(Clone, Default)]
pub struct Scan {
    cells: Vec<Cell>,
}

impl Scan {
    /// Create a scan over a copy of `cells`, keeping their order.
    pub fn new(cells: &[Cell]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }

    /// The scanned cells, in scan order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Debug for Scan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scan")
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl Locator for Scan {
    fn name(&self) -> &'static str {
        "Regular Search"
    }

    fn build(&mut self, entries: &[(Point, Cell)]) {
        self.cells.clear();
        self.cells.extend(entries.iter().map(|(_, c)| *c));
    }

    fn search(&self, point: Point) -> Cell {
        search(&self.cells, point)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn memory_bytes(&self) -> usize {
        self.cells.len() * size_of::<Cell>()
    }
}
