// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid addressing over a bounded square region.
//!
//! A [`Grid`] splits `[min, max]²` into `size × size` equal square cells and
//! maps points to the cell that covers them. It is only used to produce cell
//! sets; neither lookup strategy consults it.

use crate::types::{Cell, Point};

/// Uniform `size × size` partition of the square `[min, max]²`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    size: u32,
    min: f64,
    max: f64,
    cell_size: f64,
}

impl Grid {
    /// Create a grid of `size × size` cells covering `[min, max]²`.
    ///
    /// `size` must be non-zero and `max` greater than `min`.
    pub fn new(size: u32, min: f64, max: f64) -> Self {
        debug_assert!(size > 0, "grid size must be non-zero");
        debug_assert!(max > min, "grid extent must be positive");
        Self {
            size,
            min,
            max,
            cell_size: (max - min) / f64::from(size),
        }
    }

    /// Create a grid covering `[0, max]²`.
    pub fn with_extent(size: u32, max: f64) -> Self {
        Self::new(size, 0.0, max)
    }

    /// Number of cells along each axis.
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Lower bound of the covered region on both axes.
    pub const fn min_coord(&self) -> f64 {
        self.min
    }

    /// Upper bound of the covered region on both axes.
    pub const fn max_coord(&self) -> f64 {
        self.max
    }

    /// Side length of every cell.
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        let n = self.size as usize;
        n * n
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float-to-int cast; the result is clamped to the grid afterwards."
        )]
        let i = v as i64;
        if (i as f64) > v { i - 1 } else { i }
    }

    fn clamp_index(&self, v: f64) -> i32 {
        let last = i64::from(self.size) - 1;
        let i = Self::floor_to_i64((v - self.min) / self.cell_size).clamp(0, last);
        i32::try_from(i).unwrap_or(i32::MAX)
    }

    /// Grid address `(gx, gy)` of the cell covering `p`.
    ///
    /// Points outside the region are clamped to the nearest border cell. A point
    /// on an interior cell edge maps to the cell above/right of the edge.
    pub fn address_of(&self, p: Point) -> (i32, i32) {
        (self.clamp_index(p.x), self.clamp_index(p.y))
    }

    /// The cell at grid address `(gx, gy)`.
    pub fn cell(&self, gx: i32, gy: i32) -> Cell {
        let center = Point::new(
            self.min + (f64::from(gx) + 0.5) * self.cell_size,
            self.min + (f64::from(gy) + 0.5) * self.cell_size,
        );
        Cell::new(gx, gy, center, self.cell_size / 2.0)
    }

    /// The cell covering `p` (clamped to the grid, see [`Grid::address_of`]).
    pub fn cell_at_point(&self, p: Point) -> Cell {
        let (gx, gy) = self.address_of(p);
        self.cell(gx, gy)
    }

    /// All cells in row-major order: rows bottom to top, columns left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = i32::try_from(self.size).unwrap_or(i32::MAX);
        (0..n).flat_map(move |gy| (0..n).map(move |gx| self.cell(gx, gy)))
    }
}
