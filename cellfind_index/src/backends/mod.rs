// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup strategies.
//!
//! - `scan`: flat list with linear scans; first match in input order wins.
//! - `kdtree`: balanced 2D k-d tree over cell centers with descend-and-prune search.
//!
//! Pruning note
//! ------------
//! A cell can only contain a query point if its center lies within the cell's
//! half-size of the query on both axes. The k-d tree therefore only crosses a
//! split line when the query is within the largest half-size in the tree of it.
//! With uniform cells that is every cell's half-size; with mixed sizes it is
//! still a valid upper bound, so no containing cell is skipped.

pub mod kdtree;
pub mod scan;
