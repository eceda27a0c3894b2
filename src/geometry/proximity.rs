use anyhow::{Result, ensure};
use itertools::Itertools;
use ordered_float::NotNan;

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Circle;

/// Returns the pair of `circles` least distant from one another, measured by
/// the clamped boundary gap ([`DistanceTo<Circle>`]): circles that touch,
/// overlap or contain one another are at distance zero.
///
/// Ties are resolved in favor of the first minimal pair in `i < j` iteration
/// order. Errors when fewer than two circles are given.
pub fn nearest_circle_pair(circles: &[Circle]) -> Result<(Circle, Circle)> {
    ensure!(
        circles.len() >= 2,
        "nearest pair needs at least 2 circles, got {}",
        circles.len()
    );

    let (a, b) = circles
        .iter()
        .tuple_combinations()
        .min_by_key(|(a, b)| NotNan::new(a.distance_to(b)).unwrap())
        .expect("no circle pairs");

    Ok((a.clone(), b.clone()))
}
