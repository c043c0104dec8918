use std::collections::HashMap;

use aoc_utilities::{parse, Coordinate, Grid, MinPriorityQueue, PriorityElement};
use chumsky::prelude::*;

/// How far a crucible must and may travel in a straight line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrucibleRules {
    /// Cells to cover in one direction before turning or stopping.
    pub min_run: usize,
    /// Cells after which a turn is forced.
    pub max_run: usize,
}

impl CrucibleRules {
    pub const CRUCIBLE: Self = Self {
        min_run: 0,
        max_run: 3,
    };
    pub const ULTRA_CRUCIBLE: Self = Self {
        min_run: 4,
        max_run: 10,
    };
    pub const UNCONSTRAINED: Self = Self {
        min_run: 0,
        max_run: usize::MAX,
    };
}

/// A node of the search graph. The same cell reached with a different
/// heading or run length is a different node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathState {
    pub location: Coordinate,
    /// [`Coordinate::ZERO`] before the first move.
    pub direction: Coordinate,
    /// Cells travelled in `direction`, minus the one entered on turning.
    pub straight_steps: usize,
}

impl PathState {
    fn start(location: Coordinate) -> Self {
        Self {
            location,
            direction: Coordinate::ZERO,
            straight_steps: 0,
        }
    }

    fn is_start(&self) -> bool {
        self.direction.is_zero()
    }

    fn can_stop(&self, rules: CrucibleRules) -> bool {
        self.straight_steps + 1 >= rules.min_run
    }

    /// The node reached by moving one cell along `direction`, unless the move
    /// reverses or breaks a run-length rule. Grid bounds are not checked.
    fn step(self, direction: Coordinate, rules: CrucibleRules) -> Option<Self> {
        if (direction + self.direction).is_zero() {
            return None;
        }

        let straight_steps = if direction == self.direction {
            if self.straight_steps + 1 >= rules.max_run {
                return None;
            }
            self.straight_steps + 1
        } else {
            if !self.is_start() && self.straight_steps + 1 < rules.min_run {
                return None;
            }
            0
        };

        Some(Self {
            location: self.location + direction,
            direction,
            straight_steps,
        })
    }
}

/// Parses a block of single-digit heat-loss values.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Grid<u32>, extra::Err<Rich<'a, char>>> {
    let digit = one_of("0123456789").map(|c: char| c as u32 - '0' as u32);
    parse::grid(digit)
}

/// Least total heat loss from `start` to `end`, counting every cell entered
/// but not the starting one.
///
/// Runs Dijkstra over [`PathState`]s so that run lengths take part in the
/// comparison. Arriving at `end` only counts once the final run is at least
/// `min_run` long. Returns `None` if the queue drains first.
#[tracing::instrument(skip(grid))]
pub fn shortest_path(
    grid: &Grid<u32>,
    start: Coordinate,
    end: Coordinate,
    min_run: usize,
    max_run: usize,
) -> Option<u32> {
    let rules = CrucibleRules { min_run, max_run };
    let mut distance: HashMap<PathState, u32> = HashMap::new();
    let mut queue = MinPriorityQueue::new();

    let origin = PathState::start(start);
    distance.insert(origin, 0);
    queue.push_with(origin, 0);

    while let Some(PriorityElement {
        value: state,
        priority: cost,
    }) = queue.pop()
    {
        if distance.get(&state).is_some_and(|&best| best < cost) {
            continue;
        }

        if state.location == end && state.can_stop(rules) {
            tracing::debug!(cost, explored = distance.len(), "reached the end");
            return Some(cost);
        }

        for direction in Coordinate::CARDINALS {
            let Some(next) = state.step(direction, rules) else {
                continue;
            };
            let Ok(&weight) = grid.get_by_coord(next.location) else {
                continue;
            };

            let alternative = cost + weight;
            if distance.get(&next).map_or(true, |&known| alternative < known) {
                distance.insert(next, alternative);
                queue.push_with(next, alternative);
            }
        }
    }

    tracing::debug!(explored = distance.len(), "no path");
    None
}
