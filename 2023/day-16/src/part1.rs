use aoc_utilities::{Coordinate, Vector};
use chumsky::Parser;
use miette::*;

use crate::beam::{coverage, parser};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // The beam enters the top-left corner heading right.
    let energized = coverage(&grid, Vector::new(Coordinate::ZERO, Coordinate::RIGHT));

    Ok(energized.to_string())
}
