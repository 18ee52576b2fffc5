use super::direction::Direction;
use super::point::Point;
use crate::consts;
use std::collections::VecDeque;

/// Where newly-added tail segments are placed.  This is off the board, so a
/// new segment only shows up once the rest of the body has dragged it in.
pub(crate) const TAIL_PLACEHOLDER: Point = Point::new(-10, -10);

/// The snake: a head, a trailing body, and the direction it is moving in
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Point,

    /// The positions of the segments of the snake's body.  Segment 0 trails
    /// the head, and segment `i` trails segment `i - 1`.
    pub(super) body: VecDeque<Point>,

    /// The direction in which the snake is currently moving
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, moving right.  The body
    /// consists of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// segments piled up at the origin.
    pub(crate) fn new(head: Point) -> Snake {
        Snake {
            head,
            body: std::iter::repeat_n(Point::ORIGIN, consts::INITIAL_SNAKE_LENGTH).collect(),
            heading: Direction::Right,
        }
    }

    pub(crate) fn head(&self) -> Point {
        self.head
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Change the snake's heading to `direction`.  Turns along the axis the
    /// snake is already moving on (including straight back into its neck)
    /// are ignored.
    pub(crate) fn turn(&mut self, direction: Direction) {
        if direction.is_perpendicular_to(self.heading) {
            self.heading = direction;
        }
    }

    /// Move the snake forwards by `step` units.  Each body segment moves to
    /// where the segment before it (or the head) was, so the length of the
    /// body is unchanged.
    pub(crate) fn advance(&mut self, step: i32) {
        if self.body.pop_back().is_some() {
            self.body.push_front(self.head);
        }
        self.head = self.head.translate(self.heading, step);
    }

    /// Append a segment to the end of the body in response to eating a
    /// cherry
    pub(crate) fn add_tail(&mut self) {
        self.body.push_back(TAIL_PLACEHOLDER);
    }

    /// Test whether the head sits exactly on one of the body's segments
    pub(crate) fn bit_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}
