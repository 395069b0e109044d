// Copyright 2025 the Cellfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell sets and query points inside a disc centered on the origin.

use std::f64::consts::TAU;

use cellfind_index::{Cell, Grid, Point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Cells of a `grid_size × grid_size` partition of `[-radius, radius]²` whose
/// centers lie inside the disc of `radius` around the origin.
///
/// Cells keep their grid address and come out in row-major order.
pub fn circle_cells(radius: f64, grid_size: u32) -> Vec<Cell> {
    let grid = Grid::new(grid_size, -radius, radius);
    let r2 = radius * radius;
    grid.cells()
        .filter(|c| c.center.distance_squared(Point::ORIGIN) <= r2)
        .collect()
}

/// Centers of `cells`, in the same order.
pub fn centers(cells: &[Cell]) -> Vec<Point> {
    cells.iter().map(|c| c.center).collect()
}

/// Seeded source of query points inside a disc centered on the origin.
#[derive(Debug)]
pub struct PointGenerator {
    rng: StdRng,
    radius: f64,
}

impl PointGenerator {
    /// Create a generator for the disc of `radius`, reproducible from `seed`.
    pub fn new(radius: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            radius,
        }
    }

    /// Radius of the disc.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `count` uniform points, by rejection sampling from the bounding square.
    pub fn random_in_circle(&mut self, count: usize) -> Vec<Point> {
        let r = self.radius;
        let mut points = Vec::with_capacity(count);
        while points.len() < count {
            let p = Point::new(self.rng.random_range(-r..=r), self.rng.random_range(-r..=r));
            if p.distance_squared(Point::ORIGIN) <= r * r {
                points.push(p);
            }
        }
        log::debug!("generated {} random points by rejection", points.len());
        points
    }

    /// `count` uniform points, sampled in polar coordinates.
    pub fn random_in_circle_polar(&mut self, count: usize) -> Vec<Point> {
        let r = self.radius;
        let points: Vec<_> = (0..count)
            .map(|_| {
                let rho = r * self.rng.random::<f64>().sqrt();
                let theta = self.rng.random_range(0.0..TAU);
                Point::new(rho * theta.cos(), rho * theta.sin())
            })
            .collect();
        log::debug!("generated {} random points in polar form", points.len());
        points
    }

    /// An axis-parallel lattice of roughly `count` points over the bounding
    /// square, keeping the ones inside the disc.
    pub fn regular_in_circle(&self, count: usize) -> Vec<Point> {
        if count == 0 {
            return Vec::new();
        }
        let r = self.radius;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Lattice sizes are small positive integers."
        )]
        let per_side = ((count as f64).sqrt().ceil() as u32).max(1);
        let step = 2.0 * r / f64::from(per_side);
        let mut points = Vec::new();
        for j in 0..=per_side {
            for i in 0..=per_side {
                let p = Point::new(-r + f64::from(i) * step, -r + f64::from(j) * step);
                if p.distance_squared(Point::ORIGIN) <= r * r {
                    points.push(p);
                }
            }
        }
        log::debug!("generated {} lattice points", points.len());
        points
    }

    /// Shuffle `points` in place with the generator's RNG.
    pub fn shuffle(&mut self, points: &mut [Point]) {
        points.shuffle(&mut self.rng);
    }
}
