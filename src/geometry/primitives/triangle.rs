use anyhow::{Result, ensure};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Triangle spanned by three distinct vertices, kept in construction order.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        ensure!(
            a != b && b != c && a != c,
            "degenerate triangle, vertices must be distinct: {a:?}, {b:?}, {c:?}"
        );
        Ok(Triangle { a, b, c })
    }

    pub fn half_perimeter(&self) -> f64 {
        (self.a.distance_to(&self.b) + self.b.distance_to(&self.c) + self.c.distance_to(&self.a))
            / 2.0
    }
}

impl CollidesWith<Point> for Triangle {
    /// True iff `point` lies on or inside the triangle (boundary inclusive).
    fn collides_with(&self, point: &Point) -> bool {
        //the three sub-triangle areas sum to the full area only if the point
        //does not fall outside; compared through FPA to absorb the rounding
        //of chained Heron evaluations
        let sub = area_of(self.a, self.b, *point)
            + area_of(self.b, self.c, *point)
            + area_of(self.c, self.a, *point);
        FPA(sub) <= FPA(self.area())
    }
}

impl Shape for Triangle {
    fn centroid(&self) -> Point {
        Point(
            (self.a.0 + self.b.0 + self.c.0) / 3.0,
            (self.a.1 + self.b.1 + self.c.1) / 3.0,
        )
    }

    fn area(&self) -> f64 {
        area_of(self.a, self.b, self.c)
    }

    fn diameter(&self) -> f64 {
        let sides = [
            self.a.distance_to(&self.b),
            self.b.distance_to(&self.c),
            self.c.distance_to(&self.a),
        ];
        sides.into_iter().fold(0.0, f64::max)
    }
}

//Heron's formula; zero for collinear or coincident points
fn area_of(a: Point, b: Point, c: Point) -> f64 {
    let ab = a.distance_to(&b);
    let bc = b.distance_to(&c);
    let ca = c.distance_to(&a);
    let p = (ab + bc + ca) / 2.0;
    (p * (p - ab) * (p - bc) * (p - ca)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_vertices() {
        assert!(Triangle::new(Point(0.0, 0.0), Point(0.0, 0.0), Point(1.0, 1.0)).is_err());
        assert!(Triangle::new(Point(0.0, 0.0), Point(1.0, 1.0), Point(1.0, 1.0)).is_err());
    }

    #[test]
    fn right_triangle_measurements() {
        let t = Triangle::new(Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 3.0)).unwrap();
        assert!((t.half_perimeter() - 6.0).abs() < 1e-12);
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!((t.diameter() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let t = Triangle::new(Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 3.0)).unwrap();
        assert!(t.collides_with(&Point(1.0, 1.0)));
        assert!(t.collides_with(&Point(0.0, 0.0)));
        assert!(t.collides_with(&Point(2.0, 0.0)));
        assert!(!t.collides_with(&Point(5.0, 5.0)));
        assert!(!t.collides_with(&Point(-0.5, 1.0)));
    }
}
