// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

/// Absolute tolerance used by [`Point`] and [`Cell`] equality.
pub const EPSILON: f64 = 1e-9;

/// Coordinate axis used to split entries at a given tree depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Axis used at tree depth `depth`: even depths split on x, odd depths on y.
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// The axis used one level further down.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A point in 2D.
///
/// Equality is tolerant: two points are equal when both coordinates differ by
/// less than [`EPSILON`]. Ordering is lexicographic on `(x, y)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub const fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        abs_diff(self.x, other.x) < EPSILON && abs_diff(self.y, other.y) < EPSILON
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

/// One square cell of a partition.
///
/// The cell covers the closed square `center ± half_size` on both axes, so
/// neighbours that share an edge both contain points lying exactly on it.
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    /// Column in the grid the cell was produced from.
    pub grid_x: i32,
    /// Row in the grid the cell was produced from.
    pub grid_y: i32,
    /// Center of the square.
    pub center: Point,
    /// Half of the side length.
    pub half_size: f64,
}

impl Cell {
    /// The "not found" value returned by lookups that match nothing.
    ///
    /// It has the invalid grid address `(-1, -1)`, sits at the origin and has
    /// zero size. It never contains a point.
    pub const SENTINEL: Self = Self::new(-1, -1, Point::ORIGIN, 0.0);

    /// Create a cell.
    pub const fn new(grid_x: i32, grid_y: i32, center: Point, half_size: f64) -> Self {
        Self {
            grid_x,
            grid_y,
            center,
            half_size,
        }
    }

    /// Whether this is the "not found" value (negative grid address).
    pub const fn is_sentinel(&self) -> bool {
        self.grid_x < 0
    }

    /// Full side length of the square.
    pub fn side(&self) -> f64 {
        2.0 * self.half_size
    }

    /// Whether the closed square contains `p`.
    ///
    /// Cells without a positive size contain nothing, which covers the sentinel.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.half_size > 0.0
            && abs_diff(p.x, self.center.x) <= self.half_size
            && abs_diff(p.y, self.center.y) <= self.half_size
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.grid_x == other.grid_x
            && self.grid_y == other.grid_y
            && self.center == other.center
            && abs_diff(self.half_size, other.half_size) < EPSILON
    }
}

/// `|a - b|` without relying on `std` float intrinsics. NaN in, NaN out.
#[inline]
pub(crate) fn abs_diff(a: f64, b: f64) -> f64 {
    if a >= b { a - b } else { b - a }
}

/// Total order on one coordinate, treating incomparable values as equal.
#[inline]
pub(crate) fn cmp_on(a: Point, b: Point, axis: Axis) -> Ordering {
    a.coord(axis)
        .partial_cmp(&b.coord(axis))
        .unwrap_or(Ordering::Equal)
}
