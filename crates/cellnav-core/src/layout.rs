//! Cell/world coordinate conversion: the [`CellConverter`] capability and
//! the uniform rectangular [`GridLayout`] implementation.

use crate::geom::{Cell, Vec2};

/// Conversion between world-space positions and grid cells.
///
/// Implementations must be consistent: mapping a position to its cell and
/// back must be stable, so `world_to_cell(cell_to_world(world_to_cell(p)))`
/// equals `world_to_cell(p)` for every `p`. A uniform rectangular cell size
/// is assumed.
pub trait CellConverter {
    /// The cell containing the given world position.
    fn world_to_cell(&self, pos: Vec2) -> Cell;

    /// The world position of the cell's minimum (bottom-left) corner.
    fn cell_to_world(&self, cell: Cell) -> Vec2;

    /// Width and height of one cell in world units.
    fn cell_size(&self) -> Vec2;
}

/// A uniform rectangular grid anchored at `origin`.
///
/// Cell `(0, 0)` spans `[origin, origin + cell_size)`; positions on a cell
/// boundary belong to the cell above/right of it (floor mapping).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub origin: Vec2,
    pub cell_size: Vec2,
}

impl GridLayout {
    /// Create a layout with the given origin and per-cell size.
    #[inline]
    pub const fn new(origin: Vec2, cell_size: Vec2) -> Self {
        Self { origin, cell_size }
    }
}

impl Default for GridLayout {
    /// Unit cells anchored at the world origin.
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(1.0, 1.0))
    }
}

impl CellConverter for GridLayout {
    #[inline]
    fn world_to_cell(&self, pos: Vec2) -> Cell {
        Cell::new(
            ((pos.x - self.origin.x) / self.cell_size.x).floor() as i32,
            ((pos.y - self.origin.y) / self.cell_size.y).floor() as i32,
        )
    }

    #[inline]
    fn cell_to_world(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            self.origin.x + cell.x as f32 * self.cell_size.x,
            self.origin.y + cell.y as f32 * self.cell_size.y,
        )
    }

    #[inline]
    fn cell_size(&self) -> Vec2 {
        self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_floor_mapping() {
        let layout = GridLayout::default();
        assert_eq!(layout.world_to_cell(Vec2::new(0.0, 0.0)), Cell::new(0, 0));
        assert_eq!(layout.world_to_cell(Vec2::new(0.9, 0.9)), Cell::new(0, 0));
        assert_eq!(layout.world_to_cell(Vec2::new(1.0, 0.0)), Cell::new(1, 0));
        // Negative positions floor toward negative infinity, not zero.
        assert_eq!(
            layout.world_to_cell(Vec2::new(-0.5, -0.5)),
            Cell::new(-1, -1)
        );
        assert_eq!(
            layout.world_to_cell(Vec2::new(-1.0, -2.1)),
            Cell::new(-1, -3)
        );
    }

    #[test]
    fn custom_layout_round_trip() {
        let layout = GridLayout::new(Vec2::new(10.0, 5.0), Vec2::new(2.0, 0.5));
        let cell = Cell::new(3, -4);
        assert_eq!(layout.cell_to_world(cell), Vec2::new(16.0, 3.0));
        assert_eq!(layout.world_to_cell(Vec2::new(16.0, 3.0)), cell);
        assert_eq!(layout.world_to_cell(Vec2::new(17.9, 3.4)), cell);
    }

    #[test]
    fn mapping_is_stable() {
        let layout = GridLayout::new(Vec2::new(-1.5, 0.25), Vec2::new(0.75, 1.25));
        for pos in [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.3, -7.1),
            Vec2::new(-20.0, 14.6),
        ] {
            let cell = layout.world_to_cell(pos);
            let snapped = layout.cell_to_world(cell);
            assert_eq!(layout.world_to_cell(snapped), cell);
        }
    }
}
