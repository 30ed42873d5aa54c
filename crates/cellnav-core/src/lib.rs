//! **cellnav-core** — Grid navigation on an unbounded cell grid (core types).
//!
//! This crate provides the value types shared across the *cellnav*
//! workspace: integer cell coordinates, world-space positions, and the
//! cell/world coordinate conversion used when projecting paths into world
//! space.

pub mod geom;
pub mod layout;

pub use geom::{Cell, Vec2};
pub use layout::{CellConverter, GridLayout};
