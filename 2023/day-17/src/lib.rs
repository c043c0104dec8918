pub mod crucible;
pub mod part1;
pub mod part2;
