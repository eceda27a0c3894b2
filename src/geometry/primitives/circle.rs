use std::f64::consts::PI;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::{Line, Point, Segment};

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Circle { center, radius }
    }

    /// Circle with `diameter` as its diameter: centered on the midpoint, with
    /// a radius of half the segment length.
    pub fn from_diameter(diameter: &Segment) -> Self {
        let center = diameter.midpoint();
        let radius = center.distance_to(&diameter.begin);
        Circle { center, radius }
    }

    /// Circumcircle of three points: its center is the intersection of the
    /// perpendicular bisectors of (a, b) and (b, c), its radius the distance
    /// from that center to `a`.
    ///
    /// The points must be distinct and non-collinear. Collinear input makes
    /// the two bisectors parallel and the resulting circle non-finite; this
    /// is not guarded.
    pub fn through_points(a: Point, b: Point, c: Point) -> Self {
        let center = Line::bisector(a, b).intersection(&Line::bisector(b, c));
        let radius = center.distance_to(&a);
        Circle { center, radius }
    }
}

impl CollidesWith<Point> for Circle {
    /// True iff `point` lies on or inside the circle (boundary inclusive).
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl DistanceTo<Circle> for Circle {
    fn distance_to(&self, other: &Circle) -> f64 {
        //gap between the outer boundaries, clamped to zero when the circles
        //touch, overlap or contain one another
        let gap = self.center.distance_to(&other.center) - (self.radius + other.radius);
        if gap > 0.0 { gap } else { 0.0 }
    }

    fn sq_distance_to(&self, other: &Circle) -> f64 {
        self.distance_to(other).powi(2)
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
