//! Connected-component liberty analysis.
//!
//! A group is a maximal set of same-color stones joined by orthogonal
//! adjacency; its liberties are the empty intersections next to any member.
//! After a placement, every opponent group left without liberties is removed.
//!
//! All traversals use an explicit work list, so board size never bounds the
//! call stack.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{Color, Grid, Position};

/// A connected group of same-color stones and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Color of every stone in the group.
    pub color: Color,

    /// Member stones, in traversal order.
    pub stones: Vec<Position>,

    /// Distinct empty intersections adjacent to the group.
    pub liberties: FxHashSet<Position>,
}

impl Group {
    /// Number of stones in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Check if the group has no stones (only for an empty start cell).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Check if the group has no liberties.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Collect the full group containing `start` along with its liberties.
///
/// Returns an empty group if `start` is empty.
#[must_use]
pub fn group_at(grid: &Grid, start: Position) -> Group {
    let color = grid.get(start);
    let mut group = Group {
        color,
        stones: Vec::new(),
        liberties: FxHashSet::default(),
    };
    if !color.is_stone() {
        return group;
    }

    let size = grid.size();
    let mut visited = vec![false; grid.area()];
    let mut stack = vec![start];
    visited[start.to_index(size)] = true;

    while let Some(pos) = stack.pop() {
        group.stones.push(pos);
        for next in pos.neighbors(size) {
            let c = grid.get(next);
            if c == Color::Empty {
                group.liberties.insert(next);
            } else if c == color && !visited[next.to_index(size)] {
                visited[next.to_index(size)] = true;
                stack.push(next);
            }
        }
    }

    group
}

/// Check whether the group containing `start` has at least one liberty.
///
/// Stops at the first empty neighbor found. An empty `start` trivially
/// counts as having a liberty.
#[must_use]
pub fn has_liberty(grid: &Grid, start: Position) -> bool {
    let mut visited = vec![false; grid.area()];
    dead_group(grid, start, &mut visited).is_none()
}

/// Walk the group at `start`, marking members in `visited`.
///
/// Returns `None` as soon as a liberty is found, otherwise the full list of
/// member stones.
fn dead_group(grid: &Grid, start: Position, visited: &mut [bool]) -> Option<Vec<Position>> {
    let color = grid.get(start);
    if !color.is_stone() {
        return None;
    }

    let size = grid.size();
    let mut stones = Vec::new();
    let mut stack = vec![start];
    visited[start.to_index(size)] = true;

    while let Some(pos) = stack.pop() {
        stones.push(pos);
        for next in pos.neighbors(size) {
            let c = grid.get(next);
            if c == Color::Empty {
                return None;
            }
            if c == color && !visited[next.to_index(size)] {
                visited[next.to_index(size)] = true;
                stack.push(next);
            }
        }
    }

    Some(stones)
}

/// Remove every opponent group of `mover` that has no liberties.
///
/// Only the opponent's stones are examined; the mover's own groups are never
/// removed here. Returns the resulting grid and the freed positions in
/// row-major order. `grid` itself is not modified.
#[must_use]
pub fn resolve_captures(grid: &Grid, mover: Color) -> (Grid, Vec<Position>) {
    assert!(mover.is_stone(), "Captures are resolved for Black or White");

    let opponent = mover.opponent();
    let size = grid.size();
    let mut visited = vec![false; grid.area()];
    let mut next = grid.clone();
    let mut freed = Vec::new();

    for start in grid.positions_of(opponent) {
        if visited[start.to_index(size)] {
            continue;
        }
        // Removing one dead group never adds liberties to another group of
        // the same color, so every group is judged against the input grid.
        if let Some(stones) = dead_group(grid, start, &mut visited) {
            for &pos in &stones {
                next.set(pos, Color::Empty);
            }
            freed.extend(stones);
        }
    }

    if !freed.is_empty() {
        freed.sort_unstable();
        debug!(%mover, captured = freed.len(), "captured stones");
    }

    (next, freed)
}
