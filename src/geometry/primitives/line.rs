use std::f64::consts::{FRAC_PI_2, PI};
use std::hash::{Hash, Hasher};

use crate::geometry::primitives::{Point, Segment};

/// Line in normal-angle form: the set of points satisfying
/// `y·cos(angle) = x·sin(angle) + b`, with `angle ∈ [0, π)` measured from the
/// positive X axis.
///
/// Unlike slope-intercept forms, this representation has no storage
/// singularity for vertical lines (`angle == π/2`). The intersection math
/// still special-cases the vertical angle, see [`Line::intersection`].
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Line {
    pub b: f64,
    pub angle: f64,
}

impl Line {
    /// Line through `point` with inclination `angle`.
    ///
    /// `angle` must lie in `[0, π)`.
    pub fn new(point: Point, angle: f64) -> Self {
        debug_assert!((0.0..PI).contains(&angle), "incorrect line angle: {angle}");
        Line {
            b: point.1 * angle.cos() - point.0 * angle.sin(),
            angle,
        }
    }

    /// Line carrying `segment`, through `segment.begin`.
    pub fn from_segment(segment: &Segment) -> Self {
        let mut angle = (segment.end.1 - segment.begin.1).atan2(segment.end.0 - segment.begin.0);
        if angle < 0.0 {
            angle += PI;
        }
        if angle >= PI {
            angle -= PI;
        }
        Line::new(segment.begin, angle)
    }

    /// Line through two points.
    pub fn through(a: Point, b: Point) -> Self {
        Line::from_segment(&Segment::new(a, b))
    }

    /// Perpendicular bisector of the segment between `a` and `b`: the locus
    /// of points equidistant from both.
    pub fn bisector(a: Point, b: Point) -> Self {
        let segment = Segment::new(a, b);
        let through = Line::from_segment(&segment);
        let mut angle = if through.angle <= FRAC_PI_2 {
            through.angle + FRAC_PI_2
        } else {
            through.angle - FRAC_PI_2
        };
        //a perpendicular to an exactly vertical segment lands on π, which is
        //outside the angle domain and wraps to 0
        if angle == PI {
            angle = 0.0;
        }
        Line::new(segment.midpoint(), angle)
    }

    /// Intersection point of `self` and `other`.
    ///
    /// Vertical lines are detected by *exact* float equality of `angle` with
    /// `FRAC_PI_2`. An angle that drifted a few ulps off `FRAC_PI_2` (e.g.
    /// through accumulated rounding in a bisector construction) takes the
    /// general branch instead, where `cos(angle)` is nearly zero and the
    /// result degrades to catastrophic cancellation. Parallel distinct lines
    /// divide by zero and yield a non-finite point. Neither case is guarded.
    pub fn intersection(&self, other: &Line) -> Point {
        if self.angle == FRAC_PI_2 {
            //vertical: every point of self has x = -b
            let x = -self.b;
            let y = (-self.b) * other.angle.tan() + other.b / other.angle.cos();
            return Point(x, y);
        }
        if other.angle == FRAC_PI_2 {
            let x = -other.b;
            let y = (-other.b) * self.angle.tan() + self.b / self.angle.cos();
            return Point(x, y);
        }
        let x = -(self.b / self.angle.cos() - other.b / other.angle.cos())
            / (self.angle.tan() - other.angle.tan());
        let y = x * self.angle.tan() + self.b / self.angle.cos();
        Point(x, y)
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.b.to_bits().hash(state);
        self.angle.to_bits().hash(state);
    }
}
