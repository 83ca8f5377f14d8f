//! The 4-bit [`Cell`] occupancy record and the [`Direction`] it encodes.
//!
//! Each cell holds one bit per lattice direction:
//!
//! ```text
//! bit 0  Up     (row - 1)
//! bit 1  Right  (col + 1)
//! bit 2  Down   (row + 1)
//! bit 3  Left   (col - 1)
//! ```
//!
//! Every value in `0..=15` is valid, including [`Cell::FULL`].

use std::fmt;

/// One of the four lattice directions of the HPP model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row - 1.
    Up,
    /// Towards col + 1.
    Right,
    /// Towards row + 1.
    Down,
    /// Towards col - 1.
    Left,
}

impl Direction {
    /// All directions in bit order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Bit index of this direction within a [`Cell`].
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Single-bit mask of this direction.
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// The direction pointing the other way along the same axis.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// `(d_row, d_col)` displacement of one move in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// Directional occupancy of a single lattice site.
///
/// A set bit means a particle is present and moving in that direction.
/// Only the low four bits are ever set; [`Cell::from_bits`] masks the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// No particles.
    pub const EMPTY: Cell = Cell(0);
    /// Up + Down: the vertical head-on pair (value 5).
    pub const VERTICAL_PAIR: Cell = Cell(0b0101);
    /// Right + Left: the horizontal head-on pair (value 10).
    pub const HORIZONTAL_PAIR: Cell = Cell(0b1010);
    /// All four directions occupied (value 15).
    pub const FULL: Cell = Cell(0b1111);

    /// Mask covering the four direction bits.
    pub const MASK: u8 = 0b1111;

    /// Build a cell from a raw value, discarding bits above bit 3.
    pub const fn from_bits(bits: u8) -> Self {
        Cell(bits & Self::MASK)
    }

    /// Build a cell with exactly the given directions occupied.
    pub fn from_directions(dirs: &[Direction]) -> Self {
        dirs.iter().fold(Cell::EMPTY, |c, &d| c.with(d))
    }

    /// Raw 4-bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether a particle occupies direction `d`.
    pub const fn contains(self, d: Direction) -> bool {
        self.0 & d.mask() != 0
    }

    /// Occupy direction `d`. Setting an occupied slot is a no-op.
    pub fn set(&mut self, d: Direction) {
        self.0 |= d.mask();
    }

    /// Vacate direction `d`.
    pub fn clear(&mut self, d: Direction) {
        self.0 &= !d.mask();
    }

    /// Copy of `self` with direction `d` occupied.
    pub const fn with(self, d: Direction) -> Self {
        Cell(self.0 | d.mask())
    }

    /// Whether no direction is occupied.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of particles in this cell (0..=4).
    pub const fn particle_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Occupied directions in bit order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// Apply the head-on collision rule to this cell.
    ///
    /// Exactly [`Cell::HORIZONTAL_PAIR`] becomes [`Cell::VERTICAL_PAIR`] and
    /// vice versa. Every other value is returned unchanged.
    pub const fn collide(self) -> Self {
        match self.0 {
            0b1010 => Cell::VERTICAL_PAIR,
            0b0101 => Cell::HORIZONTAL_PAIR,
            _ => self,
        }
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
