use super::point::Point;
use crate::consts;
use rand::Rng;
use std::time::Duration;

/// The fixed numbers that govern a game.  `Params::default()` gives the real
/// game; tests are free to build their own.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Params {
    /// The wall drawn around the playing field, in board units
    pub(crate) field: Field,

    /// How far the snake moves per tick
    pub(crate) step: i32,

    /// Time between ticks
    pub(crate) tick_period: Duration,

    /// How close the head must get to the cherry to eat it
    pub(crate) eat_tolerance: i32,

    /// Cherries are spawned in this area
    pub(crate) cherry_area: Area,
}

impl Params {
    /// Build the parameters for a field with its wall at `field`, deriving
    /// the collision margins & cherry area the way the real game does.  On
    /// fields too small for the usual inset, the cherry area shrinks to a
    /// single column or row at the near edge.
    pub(crate) fn for_field(field: Field) -> Params {
        Params {
            field,
            step: consts::STEP,
            tick_period: consts::TICK_PERIOD,
            eat_tolerance: consts::EAT_TOLERANCE,
            cherry_area: Area {
                left: field.x,
                top: field.y,
                right: (field.x + field.width - consts::CHERRY_FAR_INSET).max(field.x + 1),
                bottom: (field.y + field.height - consts::CHERRY_FAR_INSET).max(field.y + 1),
            },
        }
    }

    /// Where a new snake's head is placed
    pub(crate) fn snake_start(&self) -> Point {
        Point::new(self.field.width / 2, self.field.height / 2)
    }

    /// The head crashes into the wall once it reaches any of these
    /// coordinates
    pub(crate) fn walls(&self) -> Area {
        Area {
            left: self.field.x,
            top: self.field.y,
            right: self.field.x + self.field.width - self.step,
            bottom: self.field.y + self.field.height - self.step,
        }
    }

    /// Test whether a head at `p` has hit the wall
    pub(crate) fn hits_wall(&self, p: Point) -> bool {
        let walls = self.walls();
        p.x <= walls.left || p.x >= walls.right || p.y <= walls.top || p.y >= walls.bottom
    }
}

impl Default for Params {
    fn default() -> Params {
        let (x, y) = consts::BOARD_ORIGIN;
        Params::for_field(Field {
            x,
            y,
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
        })
    }
}

/// A rectangle in board units given by its top-left corner and size
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Field {
    /// Number of `step`-sized cells across the field
    pub(crate) fn columns(&self, step: i32) -> i32 {
        self.width / step
    }

    /// Number of `step`-sized cells down the field
    pub(crate) fn rows(&self, step: i32) -> i32 {
        self.height / step
    }

    /// Return the column & row of the cell containing `p`, or `None` if `p`
    /// is outside the field
    pub(crate) fn cell_of(&self, p: Point, step: i32) -> Option<(i32, i32)> {
        let col = (p.x - self.x).div_euclid(step);
        let row = (p.y - self.y).div_euclid(step);
        ((0..self.columns(step)).contains(&col) && (0..self.rows(step)).contains(&row))
            .then_some((col, row))
    }
}

/// A half-open rectangle `[left, right) × [top, bottom)` in board units
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Area {
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) right: i32,
    pub(crate) bottom: i32,
}

impl Area {
    pub(crate) fn contains(&self, p: Point) -> bool {
        (self.left..self.right).contains(&p.x) && (self.top..self.bottom).contains(&p.y)
    }

    /// Pick a point in the area uniformly at random
    pub(crate) fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(self.left..self.right),
            rng.random_range(self.top..self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[test]
    fn default_params() {
        let params = Params::default();
        assert_eq!(params.snake_start(), Point::new(380, 260));
        assert_eq!(
            params.walls(),
            Area {
                left: 20,
                top: 40,
                right: 770,
                bottom: 550
            }
        );
        assert_eq!(
            params.cherry_area,
            Area {
                left: 20,
                top: 40,
                right: 720,
                bottom: 500
            }
        );
        assert_eq!(params.tick_period, Duration::from_millis(45));
        assert_eq!(params.step, 10);
        assert_eq!(params.field.columns(params.step), 76);
        assert_eq!(params.field.rows(params.step), 52);
    }

    #[rstest]
    #[case(Point::new(380, 260), false)]
    #[case(Point::new(30, 50), false)]
    #[case(Point::new(760, 540), false)]
    #[case(Point::new(20, 260), true)]
    #[case(Point::new(770, 260), true)]
    #[case(Point::new(380, 40), true)]
    #[case(Point::new(380, 550), true)]
    #[case(Point::new(-10, -10), true)]
    fn test_hits_wall(#[case] p: Point, #[case] r: bool) {
        assert_eq!(Params::default().hits_wall(p), r);
    }

    #[rstest]
    #[case(Point::new(20, 40), Some((0, 0)))]
    #[case(Point::new(29, 49), Some((0, 0)))]
    #[case(Point::new(380, 260), Some((36, 22)))]
    #[case(Point::new(779, 559), Some((75, 51)))]
    #[case(Point::new(780, 260), None)]
    #[case(Point::new(19, 260), None)]
    #[case(Point::new(-10, -10), None)]
    #[case(Point::ORIGIN, None)]
    fn test_cell_of(#[case] p: Point, #[case] r: Option<(i32, i32)>) {
        let params = Params::default();
        assert_eq!(params.field.cell_of(p, params.step), r);
    }

    #[rstest]
    #[case(50, 50, Area { left: 0, top: 0, right: 1, bottom: 1 })]
    #[case(60, 200, Area { left: 0, top: 0, right: 1, bottom: 140 })]
    #[case(61, 61, Area { left: 0, top: 0, right: 1, bottom: 1 })]
    #[case(100, 0, Area { left: 0, top: 0, right: 40, bottom: 1 })]
    fn small_field_cherry_area(#[case] width: i32, #[case] height: i32, #[case] area: Area) {
        let params = Params::for_field(Field {
            x: 0,
            y: 0,
            width,
            height,
        });
        assert_eq!(params.cherry_area, area);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let p = params.cherry_area.random_point(&mut rng);
        assert!(area.contains(p), "{p} outside of {area:?}");
    }

    #[test]
    fn random_points_stay_in_area() {
        let area = Params::default().cherry_area;
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..1000 {
            let p = area.random_point(&mut rng);
            assert!(area.contains(p), "{p} outside of {area:?}");
        }
    }
}
