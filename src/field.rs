//! Field state: the sparse cell table and the live-ship count.

use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::FieldError;
use crate::config::{COORD_MAX, MAX_SHIP_LENGTH, NO_SHIP_NAME};
use crate::ship::{Orientation, Position, Ship};
use crate::table::CellTable;

/// A battleship field: a sparse grid over the full coordinate space.
///
/// Cells are held in a fixed-size chained hash table; the number of buckets
/// is derived once at construction as `floor(sqrt(COORD_MAX))` and never
/// changes. Dropping the field releases every record and the table itself.
pub struct Field {
    table: CellTable,
    ships: usize,
}

impl Field {
    /// Create an empty field with no ships placed.
    pub fn new() -> Self {
        let buckets = libm::sqrt(f64::from(COORD_MAX)) as usize;
        Field {
            table: CellTable::with_buckets(buckets),
            ships: 0,
        }
    }

    /// Number of currently intact ships. O(1).
    pub fn count_ships(&self) -> usize {
        self.ships
    }

    /// Number of occupied cells on the field.
    pub fn cell_count(&self) -> usize {
        self.table.len()
    }

    /// The ship occupying `position`, if any. Read-only; never mutates.
    pub fn ship_at(&self, position: Position) -> Option<&Ship> {
        self.table.find(position).map(|record| &record.ship)
    }

    /// Place a ship on the field.
    ///
    /// Rejected with no state change if the ship's far end passes the edge
    /// of the coordinate space, its length is outside
    /// `1..=MAX_SHIP_LENGTH`, or its name is the reserved [`NO_SHIP_NAME`].
    ///
    /// Cells are bound one at a time from the anchor. A cell that is
    /// already occupied is attacked first, destroying the occupant whole,
    /// and then rebound to the new ship. The live-ship count goes up by one
    /// for every accepted placement, unconditionally.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), FieldError> {
        if ship.last_cell().is_none() {
            return Err(FieldError::ShipOutOfBounds);
        }
        if ship.length() < 1 || ship.length() > MAX_SHIP_LENGTH {
            return Err(FieldError::InvalidLength);
        }
        if ship.name() == NO_SHIP_NAME {
            return Err(FieldError::ReservedName);
        }
        for position in ship.cells() {
            if self.table.find(position).is_some() {
                debug!("cell {} contested; destroying the occupant", position);
                self.attack(position);
            }
            self.table.insert(position, ship);
        }
        self.ships += 1;
        Ok(())
    }

    /// Attack `position`.
    ///
    /// A hit destroys the occupying ship entirely: every one of its cells,
    /// recomputed from the data recorded at the struck cell, is cleared
    /// (cells already gone are tolerated) and the live-ship count drops by
    /// one. Returns the destroyed ship's name, or `None` for open water
    /// with no state change.
    pub fn attack(&mut self, position: Position) -> Option<char> {
        let ship = self.table.find(position)?.ship;
        for cell in ship.cells() {
            self.table.remove(cell);
        }
        self.ships -= 1;
        debug!("ship '{}' destroyed by attack at {}", ship.name(), position);
        Some(ship.name())
    }

    /// Clear the single cell record at `position`, leaving the rest of its
    /// ship in place. Returns whether a record was removed.
    ///
    /// Does not touch the live-ship count; only [`attack`](Self::attack)
    /// adjusts it. Remaining cells keep their full recorded ship data, so a
    /// later attack on any of them still sweeps the ship's whole original
    /// span.
    pub fn delete_cell(&mut self, position: Position) -> bool {
        self.table.remove(position)
    }

    /// Pick a random spot for a ship of `length` named `name` inside the
    /// `width` x `height` region at the origin, such that none of its cells
    /// are occupied. Retries up to 100 times before giving up with
    /// [`FieldError::UnableToPlaceShip`]. Returns the candidate ship
    /// without placing it.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: u8,
        name: char,
        width: u32,
        height: u32,
    ) -> Result<Ship, FieldError> {
        if length < 1 || length > MAX_SHIP_LENGTH {
            return Err(FieldError::InvalidLength);
        }
        if name == NO_SHIP_NAME {
            return Err(FieldError::ReservedName);
        }
        let len = u32::from(length);
        if width == 0 || height == 0 || (width < len && height < len) {
            return Err(FieldError::ShipOutOfBounds);
        }
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let horizontal = if width >= len && height >= len {
                rng.random()
            } else {
                width >= len
            };
            let (orientation, max_x, max_y) = if horizontal {
                (Orientation::Horizontal, width - len, height - 1)
            } else {
                (Orientation::Vertical, width - 1, height - len)
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let ship = Ship::new(x, y, orientation, length, name);
            if ship.cells().all(|cell| self.ship_at(cell).is_none()) {
                return Ok(ship);
            }
        }
        Err(FieldError::UnableToPlaceShip)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field {{ ships: {}, cells: {}, buckets: {} }}",
            self.ships,
            self.table.len(),
            self.table.bucket_count(),
        )
    }
}
