use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Circle, Point, Segment};
use crate::util::assertions;

//"best so far" seed: any finite candidate beats it
const UNBOUNDED: Circle = Circle {
    center: Point(0.0, 0.0),
    radius: f64::INFINITY,
};

/// Returns the [`Segment`] joining the two points of `points` furthest apart.
///
/// All unordered pairs are examined; ties are resolved in favor of the first
/// maximal pair in `i < j` iteration order. Errors when fewer than two points
/// are given.
pub fn diameter(points: &[Point]) -> Result<Segment> {
    ensure!(
        points.len() >= 2,
        "diameter needs at least 2 points, got {}",
        points.len()
    );

    //seed with the degenerate self-pair so any real pair strictly exceeds it
    let mut best = Segment::new(points[0], points[0]);
    let mut sq_max = 0.0;
    for (p, q) in points.iter().tuple_combinations() {
        let sq_d = p.sq_distance_to(q);
        if sq_d > sq_max {
            sq_max = sq_d;
            best = Segment::new(*p, *q);
        }
    }
    Ok(best)
}

/// Smallest circle containing every point of `points` (boundary inclusive).
///
/// A minimal enclosing circle either has the farthest pair of the set as its
/// diameter, or passes through three points of the set. Both candidate
/// families are searched exhaustively: a candidate is retained only when it
/// is strictly smaller than the family's best so far *and* contains the whole
/// set. Equal-radius stand-offs between the two family bests resolve to the
/// circumcircle candidate. Errors on an empty point set.
///
/// Deliberately brute force (circumcircle family is O(n³) over ordered
/// triples); no attempt is made at Welzl-style expected-linear behavior.
pub fn min_enclosing_circle(points: &[Point]) -> Result<Circle> {
    ensure!(!points.is_empty(), "cannot enclose an empty point set");

    match points {
        [p] => return Ok(Circle::new(*p, 0.0)),
        [p, q] => return Ok(Circle::from_diameter(&Segment::new(*p, *q))),
        _ => {}
    }

    //family 1: the circle spanned by the farthest pair. The pair is a
    //property of the whole set, so a single evaluation suffices.
    let span = diameter(points)?;
    let spanning = Circle::from_diameter(&span);
    let best_spanning = match encloses_all(&spanning, points) {
        true => spanning,
        false => UNBOUNDED,
    };

    //family 2: circumcircles of every ordered triple of distinct points.
    //Collinear triples degenerate into parallel bisectors; their garbage
    //candidates lose the radius comparison or fail the containment filter.
    let mut best_circum = UNBOUNDED;
    for a in points.iter() {
        for b in points.iter().filter(|&p| p != a) {
            for c in points.iter().filter(|&p| p != a && p != b) {
                let candidate = Circle::through_points(*a, *b, *c);
                if candidate.radius < best_circum.radius && encloses_all(&candidate, points) {
                    best_circum = candidate;
                }
            }
        }
    }

    debug!(
        "[MEC] {} points: spanning candidate r={}, circumcircle candidate r={}",
        points.len(),
        best_spanning.radius,
        best_circum.radius
    );

    //the circumcircle best wins unless the spanning best is strictly smaller
    let best = if best_spanning.radius < best_circum.radius {
        best_spanning
    } else {
        best_circum
    };
    debug_assert!(assertions::circle_encloses_points(&best, points));
    Ok(best)
}

fn encloses_all(circle: &Circle, points: &[Point]) -> bool {
    points.iter().all(|p| circle.collides_with(p))
}
