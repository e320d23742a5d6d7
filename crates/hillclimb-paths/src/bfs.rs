//! Breadth-first search.
//!
//! Every search owns a fresh [`Frontier`]: a FIFO queue of `(cell, distance)`
//! pairs plus a flat visited map. A cell is marked visited when it is
//! enqueued and is never enqueued again, so cells leave the queue in
//! non-decreasing distance order and the first goal dequeued is at the
//! shortest distance.

use std::collections::VecDeque;

use hillclimb_core::{Bounds, Coord, ElevationGrid, OutOfBounds};
use log::debug;

use crate::distance::{Distance, PathNode};
use crate::traits::{Pather, Walker};

/// Working state of one search.
struct Frontier {
    bounds: Bounds,
    queue: VecDeque<(Coord, usize)>,
    visited: Vec<bool>,
    expanded: usize,
}

impl Frontier {
    fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            queue: VecDeque::new(),
            visited: vec![false; bounds.len()],
            expanded: 0,
        }
    }

    /// Mark `c` visited and enqueue it. Returns `false` (and enqueues
    /// nothing) if `c` is outside the bounds or was already visited.
    fn push(&mut self, c: Coord, dist: usize) -> bool {
        let Some(i) = self.bounds.index(c) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.queue.push_back((c, dist));
        true
    }

    fn pop(&mut self) -> Option<(Coord, usize)> {
        let next = self.queue.pop_front();
        if next.is_some() {
            self.expanded += 1;
        }
        next
    }
}

/// Run a breadth-first search from `source` and return the distance to the
/// first dequeued cell for which `is_goal` holds.
///
/// A `source` outside the pather's bounds reaches nothing.
pub fn search<P, G>(pather: &P, source: Coord, is_goal: G) -> Distance
where
    P: Pather + ?Sized,
    G: Fn(Coord) -> bool,
{
    let mut frontier = Frontier::new(pather.bounds());
    frontier.push(source, 0);

    let mut nbuf = Vec::with_capacity(4);
    while let Some((current, dist)) = frontier.pop() {
        if is_goal(current) {
            debug!(
                "bfs from {source}: goal {current} at {dist} steps, {} cells expanded",
                frontier.expanded
            );
            return Distance::Steps(dist);
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            frontier.push(n, dist + 1);
        }
    }

    debug!(
        "bfs from {source}: unreachable, {} cells expanded",
        frontier.expanded
    );
    Distance::Unreachable
}

/// Shortest number of steps from `source` to `target` walking forward
/// under the puzzle rule.
///
/// Fails if either coordinate lies outside the grid.
pub fn shortest_distance(
    grid: &ElevationGrid,
    source: Coord,
    target: Coord,
) -> Result<Distance, OutOfBounds> {
    grid.elevation_at(source)?;
    grid.elevation_at(target)?;
    Ok(search(&Walker::forward(grid), source, |c| c == target))
}

/// Distances from `source` to every cell it reaches, in the order the
/// cells were dequeued (non-decreasing cost). The source itself comes
/// first at cost 0.
pub fn distance_map<P: Pather + ?Sized>(pather: &P, source: Coord) -> Vec<PathNode> {
    let mut frontier = Frontier::new(pather.bounds());
    frontier.push(source, 0);

    let mut results = Vec::new();
    let mut nbuf = Vec::with_capacity(4);
    while let Some((pos, cost)) = frontier.pop() {
        results.push(PathNode { pos, cost });
        nbuf.clear();
        pather.neighbors(pos, &mut nbuf);
        for &n in &nbuf {
            frontier.push(n, cost + 1);
        }
    }
    results
}
