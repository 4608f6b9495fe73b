//! Game board state: the cell grid, the owned fleet, placement legality and
//! shot resolution.

use core::fmt;
use core::iter;

use crate::common::{CellState, Coord};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

const N: usize = BOARD_SIZE as usize;

type Cells = [[CellState; N]; N];

/// A 10x10 board owning the ships placed on it. Created empty, populated by
/// placement calls, then mutated only through `resolve_shot`.
pub struct Board {
    cells: Cells,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; N]; N],
            ships: Vec::new(),
        }
    }

    /// Reset every cell to `Empty` and drop the fleet.
    pub fn clear(&mut self) {
        self.cells = [[CellState::Empty; N]; N];
        self.ships.clear();
    }

    /// State of the cell at `at`, or `None` off-board.
    pub fn state_at(&self, at: Coord) -> Option<CellState> {
        if at.in_bounds() {
            Some(self.cells[at.x as usize][at.y as usize])
        } else {
            None
        }
    }

    fn set(&mut self, at: Coord, state: CellState) {
        self.cells[at.x as usize][at.y as usize] = state;
    }

    /// Immutable view of the placed fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every offending coordinate for the proposed placement: footprint
    /// cells that fall off-board, plus footprint cells on or next to an
    /// existing ship. Empty means the placement is legal.
    pub fn placement_violations(
        &self,
        size: usize,
        orientation: Orientation,
        origin: Coord,
    ) -> Vec<Coord> {
        let mut violations = Vec::new();
        for cell in Ship::footprint(origin, orientation, size) {
            if !cell.in_bounds() {
                violations.push(cell);
                continue;
            }
            let blocked = iter::once(cell)
                .chain(cell.neighbors8())
                .any(|n| self.state_at(n) == Some(CellState::Ship));
            if blocked {
                violations.push(cell);
            }
        }
        violations
    }

    /// Whether a ship of `size` and `orientation` may be placed at `origin`
    /// under the no-touch rule.
    pub fn can_place(&self, size: usize, orientation: Orientation, origin: Coord) -> bool {
        self.placement_violations(size, orientation, origin).is_empty()
    }

    /// Place a ship if every footprint cell is in-bounds and neither on nor
    /// adjacent to an existing ship. Returns `false` and leaves the board
    /// untouched otherwise.
    pub fn place_ship(&mut self, size: usize, orientation: Orientation, origin: Coord) -> bool {
        if !self.can_place(size, orientation, origin) {
            return false;
        }
        self.commit_placement(size, orientation, origin);
        true
    }

    /// Place a ship checking only bounds and direct overlap, not adjacency.
    /// Manual (hotseat) placement goes through here; `has_adjacent_ships`
    /// exists to validate such boards afterwards.
    pub fn place_ship_unchecked(
        &mut self,
        size: usize,
        orientation: Orientation,
        origin: Coord,
    ) -> bool {
        let fits = Ship::footprint(origin, orientation, size)
            .all(|cell| self.state_at(cell) == Some(CellState::Empty));
        if !fits {
            return false;
        }
        self.commit_placement(size, orientation, origin);
        true
    }

    fn commit_placement(&mut self, size: usize, orientation: Orientation, origin: Coord) {
        let cells: Vec<Coord> = Ship::footprint(origin, orientation, size).collect();
        for &cell in &cells {
            self.set(cell, CellState::Ship);
        }
        let mut ship = Ship::new(size, orientation);
        ship.assign_cells(cells);
        self.ships.push(ship);
    }

    /// Resolve a shot at `at` and report the resulting cell state.
    ///
    /// Off-board coordinates resolve as `Miss` without mutation. Shots into
    /// already-resolved cells return the recorded state unchanged; callers
    /// are expected to gate repeat fire themselves. When a hit destroys a
    /// ship, all its cells flip to `Destroyed` and every still-empty cell in
    /// its 8-neighborhood is marked `Miss`, since no other ship can occupy
    /// them.
    pub fn resolve_shot(&mut self, at: Coord) -> CellState {
        let Some(state) = self.state_at(at) else {
            return CellState::Miss;
        };
        match state {
            CellState::Ship => {
                self.set(at, CellState::Hit);
                let Some(idx) = self.ships.iter().position(|s| s.contains(at)) else {
                    return CellState::Hit;
                };
                self.ships[idx].register_hit();
                if self.ships[idx].is_destroyed() {
                    self.mark_destroyed(idx);
                    CellState::Destroyed
                } else {
                    CellState::Hit
                }
            }
            CellState::Empty => {
                self.set(at, CellState::Miss);
                CellState::Miss
            }
            resolved => resolved,
        }
    }

    fn mark_destroyed(&mut self, idx: usize) {
        let cells: Vec<Coord> = self.ships[idx].cells().to_vec();
        for &cell in &cells {
            self.set(cell, CellState::Destroyed);
        }
        for &cell in &cells {
            for n in cell.neighbors8() {
                if self.state_at(n) == Some(CellState::Empty) {
                    self.set(n, CellState::Miss);
                }
            }
        }
    }

    /// True once every ship in the fleet is destroyed. Vacuously true on a
    /// board with no fleet; sessions guard against that themselves.
    pub fn all_ships_destroyed(&self) -> bool {
        self.ships.iter().all(|s| s.is_destroyed())
    }

    /// Diagnostic scan: do cells of two distinct ships touch, orthogonally
    /// or diagonally? Placements made through `place_ship` never do; this
    /// catches fleets assembled via `place_ship_unchecked`.
    pub fn has_adjacent_ships(&self) -> bool {
        for (i, a) in self.ships.iter().enumerate() {
            for b in &self.ships[i + 1..] {
                for &ca in a.cells() {
                    if b.cells().iter().any(|&cb| ca.touches(cb)) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let glyph = match self.cells[x as usize][y as usize] {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'x',
                    CellState::Miss => 'o',
                    CellState::Destroyed => '#',
                };
                write!(f, "{} ", glyph)?;
            }
            if y + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ ships: {}, grid:", self.ships.len())?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}
