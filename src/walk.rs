//! Lazy walks across the hexagonal index.
//!
//! A [`Walker`] re-orders the current cell's neighbors at every step and asks
//! a [`Select`] policy which one to move to. Walks know nothing about grid
//! bounds; bound them with `max_steps` or by checking grid membership.
//!
//! A straight walk only approximately holds its bearing. Position 0 is
//! re-derived from the actual neighbor ring at every hop, so ellipsoid
//! curvature and hex discretization make the path drift from the true
//! geodesic. In particular, walking out and back is not guaranteed to return
//! to the starting cell.

use crate::cell::Cell;
use crate::neighbor::{Neighbor, NeighborMap};
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Chooses the next step of a walk.
///
/// Returning `None` ends the walk.
pub trait Select {
    fn select(&mut self, current: &Cell, neighbors: &NeighborMap) -> Option<Neighbor>;
}

impl<F> Select for F
where
    F: FnMut(&Cell, &NeighborMap) -> Option<Neighbor>,
{
    fn select(&mut self, current: &Cell, neighbors: &NeighborMap) -> Option<Neighbor> {
        self(current, neighbors)
    }
}

/// Always steps to position 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightWalk;

impl Select for StraightWalk {
    fn select(&mut self, _current: &Cell, neighbors: &NeighborMap) -> Option<Neighbor> {
        neighbors.get(0).copied()
    }
}

/// Steps to a uniformly random position: 0-5, or 0-4 on a pentagon.
#[derive(Debug, Clone)]
pub struct RandomWalk<R> {
    rng: R,
}

impl RandomWalk<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomWalk<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomWalk<ChaCha8Rng> {
    /// Reproducible walk: the same seed always picks the same positions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Select for RandomWalk<R> {
    fn select(&mut self, current: &Cell, neighbors: &NeighborMap) -> Option<Neighbor> {
        let count = if current.is_pentagon() { 5 } else { 6 };
        let position = self.rng.random_range(0..count);
        neighbors.get(position).copied()
    }
}

/// Stateful, forward-only walk yielding one [`Neighbor`] per step.
///
/// Built by [`Cell::walk`] and friends. Calling those again restarts from the
/// original cell; a single `Walker` cannot be rewound.
///
/// # Example
///
/// ```
/// use hexmap_rs::{Cell, StraightWalk};
///
/// # fn main() -> Result<(), hexmap_rs::HexmapError> {
/// let start = Cell::from_wgs84(&(-2.248, 53.481), 8)?;
/// let path: Vec<_> = start.walk(StraightWalk, 90.0, Some(4)).collect();
/// assert_eq!(path.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Walker<S> {
    current: Cell,
    select: S,
    bearing: f64,
    remaining: Option<usize>,
}

impl<S: Select> Walker<S> {
    pub fn new(start: Cell, select: S, bearing: f64, max_steps: Option<usize>) -> Self {
        Self {
            current: start,
            select,
            bearing,
            remaining: max_steps,
        }
    }

    /// The cell the walker is standing on.
    pub fn current(&self) -> &Cell {
        &self.current
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }
}

impl<S: Select> Iterator for Walker<S> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let neighbors = self.current.neighbor_map(self.bearing);
        let Some(step) = self.select.select(&self.current, &neighbors) else {
            self.remaining = Some(0);
            return None;
        };
        trace!(
            from = %self.current.index(),
            to = %step.cell().index(),
            position = step.position(),
            "walk step"
        );
        self.current = *step.cell();
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.remaining)
    }
}
