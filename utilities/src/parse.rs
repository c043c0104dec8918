use chumsky::prelude::*;

use crate::grid::Grid;

/// Parses newline-separated rows of `cell`s into a rectangular [`Grid`].
///
/// Blank lines (such as the one left by a trailing newline) are skipped and
/// rows of differing width fail the parse.
pub fn grid<'a, T, C>(cell: C) -> impl Parser<'a, &'a str, Grid<T>, extra::Err<Rich<'a, char>>>
where
    C: Parser<'a, &'a str, T, extra::Err<Rich<'a, char>>>,
{
    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .try_map(|rows, span| {
            let rows = rows.into_iter().filter(|row: &Vec<T>| !row.is_empty());
            Grid::from_rows(rows).map_err(|e| Rich::custom(span, e))
        })
}

/// Any non-newline character becomes a cell.
pub fn char_grid<'a>() -> impl Parser<'a, &'a str, Grid<char>, extra::Err<Rich<'a, char>>> {
    grid(none_of("\r\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn parses_rectangular_rows() -> Result<(), GridError> {
        let grid = char_grid().parse("ab\ncd\nef\n").into_result();
        let grid = grid.expect("input is rectangular");
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.get_row(2)?, &['e', 'f']);
        Ok(())
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let grid = char_grid().parse("ab\r\ncd").into_result();
        assert_eq!(grid.expect("input is rectangular").shape(), (2, 2));
    }

    #[test]
    fn ragged_rows_fail() {
        let result = char_grid().parse("abc\nde").into_result();
        let errors = result.expect_err("rows differ in width");
        assert!(errors[0].to_string().contains("3 columns wide"));
    }

    #[test]
    fn digits_map_to_numbers() -> Result<(), GridError> {
        let digit = one_of("0123456789").map(|c: char| c as u32 - '0' as u32);
        let grid = grid(digit).parse("12\n34").into_result();
        let grid = grid.expect("input is all digits");
        assert_eq!(*grid.get(1, 0)?, 3);
        Ok(())
    }

    #[test]
    fn unexpected_symbols_fail() {
        let digit = one_of("0123456789");
        assert!(grid(digit).parse("12\n3x").has_errors());
    }
}
