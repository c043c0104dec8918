use aoc_utilities::Coordinate;
use chumsky::Parser;
use miette::*;

use crate::crucible::{parser, shortest_path, CrucibleRules};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if grid.is_empty() {
        return Err(miette!("Empty city map"));
    }

    // Top-left lava pool to the bottom-right factory.
    let end = Coordinate::new(grid.row_size() as isize - 1, grid.col_size() as isize - 1);
    let rules = CrucibleRules::ULTRA_CRUCIBLE;
    let heat_loss = shortest_path(&grid, Coordinate::ZERO, end, rules.min_run, rules.max_run)
        .ok_or_else(|| miette!("No path satisfies {:?}", rules))?;

    Ok(heat_loss.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";
        assert_eq!("94", process(input)?);
        Ok(())
    }
}
