//! Pathfinding for grid-based games on an implicit, unbounded cell grid.
//!
//! This crate provides [`Navigator`], a best-first (A\*) shortest-path
//! search with unit step costs over the 4-connected integer grid:
//!
//! - cell-space paths ([`Navigator::path_cells`], [`Navigator::path_cells_at`])
//! - world-space waypoint paths ([`Navigator::path_points`],
//!   [`Navigator::path_points_to`])
//!
//! Traversal is delegated to a caller-supplied [`MoveValidator`] capability,
//! and exploration is capped by a hop-count bound so searches toward
//! unreachable targets always terminate. The grid itself is never stored;
//! cells exist only as coordinates, so there is no map to build or resize.
//!
//! Each query allocates its own working state, so a single `Navigator` can
//! serve concurrent queries from multiple threads as long as its validator
//! can.

mod distance;
mod frontier;
mod navigator;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use navigator::{DEFAULT_MAX_DISTANCE, Navigator};
pub use traits::{MoveValidator, Unrestricted};
