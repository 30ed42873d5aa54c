use cellnav_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(3, -3)), 6);
        assert_eq!(manhattan(Cell::new(-2, 5), Cell::new(-2, 5)), 0);
        assert_eq!(manhattan(Cell::new(1, 1), Cell::new(-1, 0)), 3);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(chebyshev(Cell::new(0, 0), Cell::new(3, -3)), 3);
        assert_eq!(chebyshev(Cell::new(2, 2), Cell::new(2, 7)), 5);
    }
}
