use super::direction::Direction;
use std::fmt;

/// Tolerance used by [`Point::intersects()`]
#[cfg(test)]
pub(crate) const DEFAULT_TOLERANCE: i32 = 10;

/// A position on the board, in board units.  `x` grows rightwards and `y`
/// grows downwards.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0, y: 0 };

    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Return the point `amount` units away from `self` in `direction`.  No
    /// bounds checking is done; walls are the caller's business.
    pub(crate) fn translate(self, direction: Direction, amount: i32) -> Point {
        let Point { x, y } = self;
        match direction {
            Direction::Up => Point::new(x, y - amount),
            Direction::Down => Point::new(x, y + amount),
            Direction::Left => Point::new(x - amount, y),
            Direction::Right => Point::new(x + amount, y),
        }
    }

    /// Test whether `other` is within [`DEFAULT_TOLERANCE`] of `self` on both
    /// axes
    #[cfg(test)]
    pub(crate) fn intersects(self, other: Point) -> bool {
        self.intersects_within(other, DEFAULT_TOLERANCE)
    }

    /// Test whether the two points are equal or are both within `tolerance`
    /// of each other on the x axis and on the y axis.  This is a "close
    /// enough" check, not a geometric overlap.
    pub(crate) fn intersects_within(self, other: Point, tolerance: i32) -> bool {
        self == other
            || (self.x.abs_diff(other.x) <= tolerance.unsigned_abs()
                && self.y.abs_diff(other.y) <= tolerance.unsigned_abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
