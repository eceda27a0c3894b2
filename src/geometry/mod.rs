/// Computation of farthest point pairs and minimal enclosing circles
pub mod enclosing;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Closest-pair search among circles
pub mod proximity;
