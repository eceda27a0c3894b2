use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Circle, Point};

//Checks to verify the correctness of computed results.
//Used in debug_assert!() blocks and tests.

//relative to the circle radius
const BOUNDARY_TOLERANCE: f64 = 1e-9;

pub fn circle_encloses_points(circle: &Circle, points: &[Point]) -> bool {
    points.iter().all(|p| {
        p.sq_distance_to(&circle.center) <= circle.radius.powi(2) * (1.0 + BOUNDARY_TOLERANCE)
    })
}

///A minimal enclosing circle is always determined by points of the set lying
///on its boundary: two spanning a diameter, or three on the circumference.
pub fn circle_determined_by_boundary(circle: &Circle, points: &[Point]) -> bool {
    let on_boundary = points
        .iter()
        .filter(|p| {
            (p.distance_to(&circle.center) - circle.radius).abs()
                <= circle.radius * BOUNDARY_TOLERANCE
        })
        .count();
    on_boundary >= 2
}
