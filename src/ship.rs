//! Coordinate and ship value types.

use core::fmt;

/// A cell coordinate on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    /// Create a position at (`x`, `y`).
    pub const fn new(x: u32, y: u32) -> Self {
        Position { x, y }
    }

    /// Checked move of `distance` cells along `orientation`.
    /// Returns `None` past the edge of the coordinate space.
    pub fn offset(self, orientation: Orientation, distance: u32) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => {
                self.x.checked_add(distance).map(|x| Position::new(x, self.y))
            }
            Orientation::Vertical => {
                self.y.checked_add(distance).map(|y| Position::new(self.x, y))
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vessel: top-left anchor, orientation, length, one-character name.
///
/// Pure value type. The constructor performs no validation; bounds, length,
/// and name are checked when the ship is placed on a [`Field`](crate::Field).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Position,
    orientation: Orientation,
    length: u8,
    name: char,
}

impl Ship {
    /// Create a ship anchored at (`x`, `y`).
    pub const fn new(x: u32, y: u32, orientation: Orientation, length: u8, name: char) -> Self {
        Ship {
            anchor: Position::new(x, y),
            orientation,
            length,
            name,
        }
    }

    /// Top-left anchor coordinate.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of the ship in cells.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Ship's name.
    pub fn name(&self) -> char {
        self.name
    }

    /// Coordinate of the ship's far end.
    /// Returns `None` if it would pass the edge of the coordinate space.
    pub fn last_cell(&self) -> Option<Position> {
        self.anchor
            .offset(self.orientation, u32::from(self.length.saturating_sub(1)))
    }

    /// Iterator over the ship's cells, in order from the anchor.
    pub fn cells(&self) -> Cells {
        Cells {
            ship: *self,
            index: 0,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: '{}', anchor: {}, orientation: {:?}, length: {} }}",
            self.name, self.anchor, self.orientation, self.length,
        )
    }
}

/// Iterator over the cells a ship occupies.
#[derive(Clone, Copy)]
pub struct Cells {
    ship: Ship,
    index: u8,
}

impl Iterator for Cells {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.index >= self.ship.length {
            return None;
        }
        // Stops early if an unvalidated ship runs off the coordinate space.
        let cell = self
            .ship
            .anchor
            .offset(self.ship.orientation, u32::from(self.index))?;
        self.index += 1;
        Some(cell)
    }
}
