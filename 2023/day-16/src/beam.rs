use aoc_utilities::{parse, Coordinate, Grid, Set, Vector};
use chumsky::prelude::*;
use rayon::prelude::*;

/// A cell of the contraption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    ForwardMirror,
    /// `\`
    BackMirror,
    /// `|`
    VerticalSplitter,
    /// `-`
    HorizontalSplitter,
}

impl Tile {
    /// Directions a beam leaves this tile in after entering it travelling
    /// `heading`. Splitters hit side-on yield two.
    fn deflect(self, heading: Coordinate) -> (Coordinate, Option<Coordinate>) {
        match self {
            Tile::Empty => (heading, None),
            Tile::ForwardMirror => (Coordinate::new(-heading.col, -heading.row), None),
            Tile::BackMirror => (Coordinate::new(heading.col, heading.row), None),
            Tile::VerticalSplitter if heading.col != 0 => (Coordinate::UP, Some(Coordinate::DOWN)),
            Tile::HorizontalSplitter if heading.row != 0 => {
                (Coordinate::LEFT, Some(Coordinate::RIGHT))
            }
            Tile::VerticalSplitter | Tile::HorizontalSplitter => (heading, None),
        }
    }
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Grid<Tile>, extra::Err<Rich<'a, char>>> {
    let tile = choice((
        just('.').to(Tile::Empty),
        just('/').to(Tile::ForwardMirror),
        just('\\').to(Tile::BackMirror),
        just('|').to(Tile::VerticalSplitter),
        just('-').to(Tile::HorizontalSplitter),
    ));

    parse::grid(tile)
}

/// Number of distinct cells energized by a beam entering at `start`.
///
/// Beams are followed with an explicit stack; a `(origin, direction)` state
/// is only expanded once, which is what stops mirror loops.
#[tracing::instrument(level = "trace", skip(grid))]
pub fn coverage(grid: &Grid<Tile>, start: Vector) -> usize {
    let mut visited = Set::new();
    let mut beams = vec![start];

    while let Some(beam) = beams.pop() {
        // Beams leaving the grid stop here.
        let Ok(&tile) = grid.get_by_coord(beam.origin) else {
            continue;
        };
        if !visited.add(beam) {
            continue;
        }

        let (first, second) = tile.deflect(beam.direction);
        beams.push(beam.heading(first));
        beams.extend(second.map(|direction| beam.heading(direction)));
    }

    let energized: Set<Coordinate> = visited.iter().map(|beam| beam.origin).collect();
    tracing::trace!(states = visited.len(), cells = energized.len());
    energized.len()
}

/// Every edge cell paired with the direction pointing into the grid.
pub fn border_starts(grid: &Grid<Tile>) -> Vec<Vector> {
    let (rows, cols) = grid.shape();
    let (rows, cols) = (rows as isize, cols as isize);

    let vertical = (0..cols).flat_map(|col| {
        [
            Vector::new(Coordinate::new(0, col), Coordinate::DOWN),
            Vector::new(Coordinate::new(rows - 1, col), Coordinate::UP),
        ]
    });
    let horizontal = (0..rows).flat_map(|row| {
        [
            Vector::new(Coordinate::new(row, 0), Coordinate::RIGHT),
            Vector::new(Coordinate::new(row, cols - 1), Coordinate::LEFT),
        ]
    });

    vertical.chain(horizontal).collect()
}

/// Best [`coverage`] over all [`border_starts`]. Each start is simulated
/// independently, so they are spread across the rayon pool.
#[tracing::instrument(skip(grid))]
pub fn optimal_coverage(grid: &Grid<Tile>) -> usize {
    let starts = border_starts(grid);
    tracing::debug!(starts = starts.len(), "simulating border entries");

    starts
        .into_par_iter()
        .map(|start| coverage(grid, start))
        .max()
        .unwrap_or(0)
}
