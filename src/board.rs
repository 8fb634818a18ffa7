//! Board model: stones, intersection coordinates, and fixed-size grids.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Largest supported grid dimension (standard Omok board).
pub const MAX_SIZE: u8 = 15;

/// Grid dimension used by the small illustration boards.
pub const SMALL_SIZE: u8 = 9;

/// A stone color. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    /// First mover.
    Black,
    /// Second mover.
    White,
}

impl Stone {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// An intersection on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column, counted left to right.
    pub x: u8,
    /// Row, counted top to bottom.
    pub y: u8,
}

impl Coordinate {
    /// Creates a coordinate from column and row.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Failure to parse a `"x,y"` composite key.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordinateError {
    /// The separating comma is missing.
    #[display("expected \"x,y\", missing comma")]
    MissingComma,
    /// One of the components is not an integer.
    #[display("invalid integer in coordinate: {_0}")]
    InvalidNumber(std::num::ParseIntError),
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParseCoordinateError::MissingComma)?;
        let x = x.trim().parse().map_err(ParseCoordinateError::InvalidNumber)?;
        let y = y.trim().parse().map_err(ParseCoordinateError::InvalidNumber)?;
        Ok(Self { x, y })
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors raised when placing a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The intersection already holds a stone.
    #[display("intersection {_0} is already occupied")]
    Occupied(#[error(not(source))] Coordinate),
    /// The coordinate lies outside the active grid.
    #[display("coordinate {_0} is outside a {_1}x{_1} board")]
    OutOfRange(Coordinate, u8),
}

/// An N×N grid of intersections, each empty or holding one stone.
///
/// Backed by a fixed arena sized for the standard board; smaller boards
/// (the 9×9 illustrations) use a prefix of it. Stones are placed, never
/// cleared or overwritten. Callers that need snapshot semantics use
/// [`Board::with`], which leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: [[Option<Stone>; MAX_SIZE as usize]; MAX_SIZE as usize],
}

impl Board {
    /// Creates an empty board with the given grid dimension (capped at 15).
    pub fn new(size: u8) -> Self {
        Self {
            size: size.min(MAX_SIZE),
            cells: [[None; MAX_SIZE as usize]; MAX_SIZE as usize],
        }
    }

    /// Creates an empty standard 15×15 board.
    pub fn standard() -> Self {
        Self::new(MAX_SIZE)
    }

    /// Builds a board of the given size from a list of pre-placed stones.
    ///
    /// Entries that fall outside the grid or collide with an earlier entry
    /// are dropped silently; the stone lists are static authored data with
    /// no runtime validation contract.
    pub fn from_stones(size: u8, stones: &[(u8, u8, Stone)]) -> Self {
        let mut board = Self::new(size);
        for &(x, y, stone) in stones {
            let _ = board.place(Coordinate::new(x, y), stone);
        }
        board
    }

    /// Returns the active grid dimension.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Checks whether a coordinate lies on the active grid.
    pub fn in_range(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Returns the stone at a coordinate, if any.
    pub fn get(&self, coord: Coordinate) -> Option<Stone> {
        if self.in_range(coord) {
            self.cells[coord.y as usize][coord.x as usize]
        } else {
            None
        }
    }

    /// Checks whether a coordinate is on the grid and unoccupied.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.in_range(coord) && self.get(coord).is_none()
    }

    /// Counts the stones on the board.
    pub fn stone_count(&self) -> usize {
        self.stones().count()
    }

    /// Iterates over occupied intersections in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Coordinate, Stone)> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| {
                let coord = Coordinate::new(x, y);
                self.get(coord).map(|stone| (coord, stone))
            })
        })
    }

    /// Places a stone at an empty intersection.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for coordinates off the grid and
    /// [`PlaceError::Occupied`] if the intersection already holds a stone.
    pub fn place(&mut self, coord: Coordinate, stone: Stone) -> Result<(), PlaceError> {
        if !self.in_range(coord) {
            return Err(PlaceError::OutOfRange(coord, self.size));
        }
        if self.get(coord).is_some() {
            return Err(PlaceError::Occupied(coord));
        }
        self.cells[coord.y as usize][coord.x as usize] = Some(stone);
        Ok(())
    }

    /// Returns a new snapshot with one additional stone, leaving `self` as is.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::place`].
    pub fn with(&self, coord: Coordinate, stone: Stone) -> Result<Self, PlaceError> {
        let mut next = *self;
        next.place(coord, stone)?;
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

// Boards serialize as a map of "x,y" composite keys to stone colors,
// e.g. {"5,7":"white"}.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.stone_count()))?;
        for (coord, stone) in self.stones() {
            map.serialize_entry(&coord, &stone)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = Board;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of \"x,y\" keys to stone colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Board, A::Error> {
                let mut board = Board::standard();
                while let Some((coord, stone)) = access.next_entry::<Coordinate, Stone>()? {
                    board.place(coord, stone).map_err(serde::de::Error::custom)?;
                }
                Ok(board)
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}
