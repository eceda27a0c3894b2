use std::hash::{Hash, Hasher};

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s, without orientation:
/// `Segment::new(a, b)` and `Segment::new(b, a)` are equal and hash identically.
///
/// Degenerate segments (`begin == end`) are structurally permitted and have
/// zero length.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(begin: Point, end: Point) -> Self {
        Segment { begin, end }
    }

    pub fn length(&self) -> f64 {
        self.begin.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        Point(
            (self.begin.0 + self.end.0) / 2.0,
            (self.begin.1 + self.end.1) / 2.0,
        )
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.begin == other.begin && self.end == other.end)
            || (self.begin == other.end && self.end == other.begin)
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        //hash the endpoints in a canonical order, so both orientations hash identically
        let key = |p: &Point| (p.0.to_bits(), p.1.to_bits());
        let (a, b) = (key(&self.begin), key(&self.end));
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo.hash(state);
        hi.hash(state);
    }
}
