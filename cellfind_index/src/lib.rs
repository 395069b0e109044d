// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellfind Index: which square cell contains a point?
//!
//! Cellfind Index answers point-containment queries over a fixed set of
//! axis-aligned square cells.
//!
//! - Build a cell set from a uniform [`Grid`] (or any other source).
//! - Look points up with an exhaustive [`scan`] or a balanced [`KdTree`].
//! - Both strategies implement [`Locator`], so callers can run either one and
//!   cross-check the results.
//!
//! Lookups are total: when no cell contains the point they return
//! [`Cell::SENTINEL`], recognisable by its negative grid address.
//!
//! # Example
//!
//! ```rust
//! use cellfind_index::{Cell, KdTree, Point, scan};
//!
//! // A 3×3 block of unit cells (half-size 1) centered on odd coordinates.
//! let mut cells = Vec::new();
//! for gy in 0..3 {
//!     for gx in 0..3 {
//!         let center = Point::new(f64::from(2 * gx + 1), f64::from(2 * gy + 1));
//!         cells.push(Cell::new(gx, gy, center, 1.0));
//!     }
//! }
//!
//! let tree = KdTree::from_cells(&cells);
//! let hit = tree.search(Point::new(3.0, 3.0));
//! assert_eq!(hit.center, Point::new(3.0, 3.0));
//! assert_eq!(hit, scan::search(&cells, Point::new(3.0, 3.0)));
//!
//! // Outside every cell.
//! assert!(tree.search(Point::new(-1.0, -1.0)).is_sentinel());
//! ```
//!
//! ## Choosing a strategy
//!
//! - [`Scan`]: no build cost, O(N) per query. Returns the first containing cell
//!   in input order.
//! - [`KdTree`]: O(N log N) build, O(log N) expected per query on evenly
//!   spread cells. Where cells share an edge and the point lies on it, either
//!   neighbour may be returned.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. A NaN query point is contained
//! in no cell. [`Point`] equality is tolerant to [`EPSILON`].

#![no_std]

extern crate alloc;

pub mod backends;
pub mod grid;
pub mod locator;
pub mod types;

pub use backends::kdtree::{KdTree, SearchStats};
pub use backends::scan::{self, Scan};
pub use grid::Grid;
pub use locator::{Locator, entries_from_cells};
pub use types::{Axis, Cell, EPSILON, Point};
