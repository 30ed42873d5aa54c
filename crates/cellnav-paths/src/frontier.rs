//! Per-query search state: discovered-cell records and the priority
//! frontier. Both live only for the duration of one query.

use cellnav_core::Cell;

/// What the search knows about a discovered cell.
///
/// For every cell except the start, `predecessor` is another discovered
/// cell one step closer along the best known route; the start points at
/// itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record {
    /// Best known score `f = g + h`.
    pub(crate) score: i32,
    /// Hop count from the start along the best known route (`g`).
    pub(crate) travelled: i32,
    /// Manhattan distance to the target (`h`).
    pub(crate) heuristic: i32,
    /// Cell this one was reached from.
    pub(crate) predecessor: Cell,
}

/// Frontier entry, ordered for use in a `BinaryHeap`.
///
/// Rediscovering a cell with a better score pushes a fresh entry rather
/// than updating the old one; stale entries are recognised by comparing
/// their score against the cell's current record and skipped on pop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) cell: Cell,
    pub(crate) score: i32,
    pub(crate) heuristic: i32,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest score first.
        // Ties break toward the smaller heuristic (closer to the target),
        // then the Cell total order, so pop order never depends on
        // insertion order.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(cell: Cell, score: i32, heuristic: i32) -> FrontierEntry {
        FrontierEntry {
            cell,
            score,
            heuristic,
        }
    }

    #[test]
    fn pops_smallest_score_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(Cell::new(0, 0), 9, 4));
        heap.push(entry(Cell::new(1, 0), 3, 2));
        heap.push(entry(Cell::new(2, 0), 6, 1));
        assert_eq!(heap.pop().unwrap().score, 3);
        assert_eq!(heap.pop().unwrap().score, 6);
        assert_eq!(heap.pop().unwrap().score, 9);
    }

    #[test]
    fn score_ties_prefer_smaller_heuristic() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(Cell::new(0, 0), 5, 4));
        heap.push(entry(Cell::new(1, 0), 5, 1));
        assert_eq!(heap.pop().unwrap().cell, Cell::new(1, 0));
    }

    #[test]
    fn full_ties_use_cell_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(Cell::new(4, 2), 5, 3));
        heap.push(entry(Cell::new(-1, 2), 5, 3));
        heap.push(entry(Cell::new(0, 1), 5, 3));
        // Cell order is (y, then x), so (0, 1) precedes both y = 2 cells.
        assert_eq!(heap.pop().unwrap().cell, Cell::new(0, 1));
        assert_eq!(heap.pop().unwrap().cell, Cell::new(-1, 2));
        assert_eq!(heap.pop().unwrap().cell, Cell::new(4, 2));
    }
}
