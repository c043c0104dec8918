use std::ops::{Add, Mul, Neg, Sub};

/// A signed `(row, col)` position or offset on a grid.
///
/// Rows grow downwards and columns grow to the right, so [`Coordinate::UP`]
/// is `(-1, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: isize,
    pub col: isize,
}

impl Coordinate {
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(-1, 0);
    pub const DOWN: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);

    /// The four unit steps, in up, down, left, right order.
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.row.abs(), self.col.abs())
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(isize, isize)> for Coordinate {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<isize> for Coordinate {
    type Output = Self;

    fn mul(self, scalar: isize) -> Self {
        Self::new(self.row * scalar, self.col * scalar)
    }
}

impl Neg for Coordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

/// A travelling head: where it is and which way it is going.
///
/// Two vectors are the same state only when both fields match, which is what
/// makes them usable as visited-set keys for beams and searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub origin: Coordinate,
    pub direction: Coordinate,
}

impl Vector {
    pub const fn new(origin: Coordinate, direction: Coordinate) -> Self {
        Self { origin, direction }
    }

    /// One step further along the current direction.
    pub fn advance(self) -> Self {
        Self::new(self.origin + self.direction, self.direction)
    }

    /// One step from the current origin along `direction`.
    pub fn heading(self, direction: Coordinate) -> Self {
        Self::new(self.origin + direction, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Coordinate::new(2, -3);
        let b = Coordinate::new(-1, 5);

        assert_eq!(a + b, Coordinate::new(1, 2));
        assert_eq!(a - b, Coordinate::new(3, -8));
        assert_eq!(a * 3, Coordinate::new(6, -9));
        assert_eq!(a.abs(), Coordinate::new(2, 3));
        assert_eq!(-a, Coordinate::new(-2, 3));
        // Operands are untouched.
        assert_eq!(a, Coordinate::new(2, -3));
    }

    #[rstest]
    #[case(Coordinate::UP, Coordinate::DOWN)]
    #[case(Coordinate::LEFT, Coordinate::RIGHT)]
    fn opposite_directions_cancel(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert!((a + b).is_zero());
        assert_eq!(-a, b);
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(-4, 7);
        assert_eq!(a.manhattan_distance(b), 11);
        assert_eq!(b.manhattan_distance(a), 11);
    }

    #[test]
    fn vector_steps() {
        let v = Vector::new(Coordinate::new(1, 1), Coordinate::RIGHT);
        assert_eq!(v.advance(), Vector::new(Coordinate::new(1, 2), Coordinate::RIGHT));
        assert_eq!(
            v.heading(Coordinate::UP),
            Vector::new(Coordinate::new(0, 1), Coordinate::UP)
        );
    }
}
