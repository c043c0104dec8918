use miette::*;

use aoc2023_day_16::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt"))
        .into_diagnostic()
        .wrap_err("reading puzzle input")?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
