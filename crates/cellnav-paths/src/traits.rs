use cellnav_core::Cell;

/// Per-edge traversal check, supplied by the caller.
///
/// The navigator asks once per candidate edge whether stepping from `from`
/// onto the adjacent `to` is allowed. Implementations may close over caller
/// state (say, a set of blocked cells) but are never mutated by the search;
/// the same edge may be queried again if the cell is rediscovered with a
/// better score.
pub trait MoveValidator {
    /// Whether moving from `from` onto the adjacent cell `to` is allowed.
    fn is_move_valid(&self, from: Cell, to: Cell) -> bool;
}

impl<F: Fn(Cell, Cell) -> bool> MoveValidator for F {
    #[inline]
    fn is_move_valid(&self, from: Cell, to: Cell) -> bool {
        self(from, to)
    }
}

/// The default validator: every move is allowed.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unrestricted;

impl MoveValidator for Unrestricted {
    #[inline]
    fn is_move_valid(&self, _from: Cell, _to: Cell) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn closures_are_validators() {
        let blocked: HashSet<Cell> = [Cell::new(1, 0)].into_iter().collect();
        let v = move |_from: Cell, to: Cell| !blocked.contains(&to);
        assert!(v.is_move_valid(Cell::ZERO, Cell::new(0, 1)));
        assert!(!v.is_move_valid(Cell::ZERO, Cell::new(1, 0)));
    }

    #[test]
    fn unrestricted_allows_everything() {
        assert!(Unrestricted.is_move_valid(Cell::new(-5, 3), Cell::new(-5, 4)));
    }
}
