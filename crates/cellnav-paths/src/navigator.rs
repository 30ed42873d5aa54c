use std::collections::{BinaryHeap, HashMap};

use cellnav_core::{Cell, CellConverter, GridLayout, Vec2};

use crate::distance::manhattan;
use crate::frontier::{FrontierEntry, Record};
use crate::traits::{MoveValidator, Unrestricted};

/// Default hop-count ceiling for a freshly constructed [`Navigator`].
pub const DEFAULT_MAX_DISTANCE: i32 = 100;

/// Best-first shortest-path search on an implicit, unbounded 4-connected
/// grid.
///
/// A navigator is configured once — origin cell, hop bound, move validator,
/// cell/world converter — and then queried for paths to arbitrary targets.
/// Steps all cost 1, so a returned path is shortest in hop count. The
/// search explores cells in ascending `f = g + h` order with a Manhattan
/// heuristic; ties break toward the smaller heuristic, then the cell total
/// order, so results are fully deterministic.
///
/// Queries share no mutable state: every call builds its own record table
/// and frontier, making `&self` queries safe to issue from several threads
/// at once whenever the validator tolerates that.
///
/// "No path" is an ordinary outcome, reported as an empty `Vec` rather
/// than an error. A panicking validator propagates to the caller untouched.
pub struct Navigator<C = GridLayout, V = Unrestricted> {
    converter: C,
    start: Cell,
    max_distance: i32,
    validator: V,
}

impl Navigator {
    /// Create a navigator at `start` on the default unit-cell layout, with
    /// no movement restrictions and the default hop bound.
    pub fn new(start: Cell) -> Self {
        Self::with_converter(GridLayout::default(), start)
    }
}

impl<C: CellConverter> Navigator<C, Unrestricted> {
    /// Create a navigator at `start` using the given cell/world converter.
    pub fn with_converter(converter: C, start: Cell) -> Self {
        Self {
            converter,
            start,
            max_distance: DEFAULT_MAX_DISTANCE,
            validator: Unrestricted,
        }
    }
}

impl<C: CellConverter, V: MoveValidator> Navigator<C, V> {
    /// Set the hop-count ceiling. Must be positive.
    ///
    /// The bound is strict: no returned path ever has `max_distance` or
    /// more hops, even when a longer route exists.
    pub fn with_max_distance(mut self, max_distance: i32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Replace the move validator.
    ///
    /// Accepts any [`MoveValidator`], including plain
    /// `Fn(Cell, Cell) -> bool` closures.
    pub fn with_validator<W: MoveValidator>(self, validator: W) -> Navigator<C, W> {
        Navigator {
            converter: self.converter,
            start: self.start,
            max_distance: self.max_distance,
            validator,
        }
    }

    /// The configured origin cell of every query.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The configured hop-count ceiling.
    #[inline]
    pub fn max_distance(&self) -> i32 {
        self.max_distance
    }

    /// Find a shortest path of cells from the start to `target`.
    ///
    /// The result includes both endpoints; consecutive cells are exactly
    /// one cardinal step apart. Targeting the start cell yields the
    /// one-element path `[start]`. Returns an empty `Vec` when no route
    /// exists within the hop bound.
    pub fn path_cells(&self, target: Cell) -> Vec<Cell> {
        self.find_path(target)
    }

    /// Find a shortest path of cells toward the cell containing the world
    /// position `pos`.
    pub fn path_cells_at(&self, pos: Vec2) -> Vec<Cell> {
        self.find_path(self.converter.world_to_cell(pos))
    }

    /// Find a path toward the world position `pos` and return world-space
    /// waypoints.
    ///
    /// Every cell maps to its world-space centre, except the final
    /// waypoint: its horizontal coordinate snaps to the exact requested
    /// position while keeping the target cell's vertical centre, so an
    /// agent walks to precisely where the caller pointed. Returns an empty
    /// `Vec` when no route exists.
    pub fn path_points(&self, pos: Vec2) -> Vec<Vec2> {
        let cells = self.find_path(self.converter.world_to_cell(pos));
        let Some((_, before_target)) = cells.split_last() else {
            return Vec::new();
        };
        let mut points: Vec<Vec2> = before_target
            .iter()
            .map(|&cell| self.cell_center(cell))
            .collect();
        points.push(self.snap_to_floor(pos));
        points
    }

    /// Find a path toward `target` and return world-space waypoints, each
    /// at its cell's centre (the target included).
    pub fn path_points_to(&self, target: Cell) -> Vec<Vec2> {
        self.find_path(target)
            .into_iter()
            .map(|cell| self.cell_center(cell))
            .collect()
    }

    /// A* over the implicit grid.
    ///
    /// Records live in a per-call table keyed by cell; the frontier is a
    /// min-heap on `f` with lazy invalidation — rediscovering a cell with a
    /// strictly better score rewrites its record and pushes a fresh entry,
    /// and entries whose score no longer matches the record are dropped on
    /// pop.
    fn find_path(&self, target: Cell) -> Vec<Cell> {
        if target == self.start {
            return vec![self.start];
        }

        let mut records: HashMap<Cell, Record> = HashMap::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();

        let start_heuristic = manhattan(self.start, target);
        records.insert(
            self.start,
            Record {
                score: start_heuristic,
                travelled: 0,
                heuristic: start_heuristic,
                // Self-referential sentinel; reconstruction stops here.
                predecessor: self.start,
            },
        );
        frontier.push(FrontierEntry {
            cell: self.start,
            score: start_heuristic,
            heuristic: start_heuristic,
        });

        let mut found = false;
        while let Some(entry) = frontier.pop() {
            let current = records[&entry.cell];

            // A stale entry: the cell was rediscovered with a better score
            // after this entry was pushed.
            if entry.score != current.score {
                continue;
            }

            if current.heuristic == 0 {
                found = true;
                break;
            }

            for neighbor in entry.cell.neighbors_4() {
                if !self.validator.is_move_valid(entry.cell, neighbor) {
                    continue;
                }

                let travelled = current.travelled + 1;
                if travelled >= self.max_distance {
                    continue;
                }

                let heuristic = manhattan(neighbor, target);
                let score = travelled + heuristic;

                let improves = records
                    .get(&neighbor)
                    .is_none_or(|known| score < known.score);
                if improves {
                    records.insert(
                        neighbor,
                        Record {
                            score,
                            travelled,
                            heuristic,
                            predecessor: entry.cell,
                        },
                    );
                    frontier.push(FrontierEntry {
                        cell: neighbor,
                        score,
                        heuristic,
                    });
                }
            }
        }

        if !found {
            return Vec::new();
        }

        // Walk predecessor links back to the start. A broken chain means an
        // inconsistent record table; degrade to "no path" rather than panic.
        let mut path = vec![target];
        let mut cell = target;
        while cell != self.start {
            let Some(record) = records.get(&cell) else {
                return Vec::new();
            };
            cell = record.predecessor;
            path.push(cell);
        }
        path.reverse();
        path
    }

    fn cell_center(&self, cell: Cell) -> Vec2 {
        self.converter.cell_to_world(cell) + self.converter.cell_size() * 0.5
    }

    /// World point for the final waypoint: exact requested `x`, target
    /// cell's centre `y`.
    fn snap_to_floor(&self, pos: Vec2) -> Vec2 {
        let center = self.cell_center(self.converter.world_to_cell(pos));
        Vec2::new(pos.x, center.y)
    }
}
