use std::{
    fmt::Display,
    ops::{Index, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

pub const SIDE: u8 = 3;
pub const CELL_COUNT: usize = 9;

/// The symbol a player places. An empty cell is `None` in an `Option<Mark>`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        !self
    }
}

impl Not for Mark {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::O => write!(f, "O"),
            Mark::X => write!(f, "X"),
        }
    }
}

// row:
// 1: 0 1 2
// 2: 3 4 5
// 3: 6 7 8
//    a b c : column
/// One of the nine cells, stored as its row-major index.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const TOP_LEFT: Position = Position(0);
    pub const TOP_CENTER: Position = Position(1);
    pub const TOP_RIGHT: Position = Position(2);
    pub const MIDDLE_LEFT: Position = Position(3);
    pub const CENTER: Position = Position(4);
    pub const MIDDLE_RIGHT: Position = Position(5);
    pub const BOTTOM_LEFT: Position = Position(6);
    pub const BOTTOM_CENTER: Position = Position(7);
    pub const BOTTOM_RIGHT: Position = Position(8);

    /// Every cell in row-major order: row 0 left to right, then row 1, then row 2.
    pub const ALL: [Position; CELL_COUNT] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    pub const fn new(column: u8, row: u8) -> Result<Self, PositionError> {
        if column >= SIDE || row >= SIDE {
            Err(PositionError::OutOfRange { column, row })
        } else {
            Ok(Self(row * SIDE + column))
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index as usize >= CELL_COUNT {
            None
        } else {
            Some(Self(index))
        }
    }

    pub const fn column(self) -> u8 {
        self.0 % SIDE
    }

    pub const fn row(self) -> u8 {
        self.0 / SIDE
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PositionError::OutOfRange {
            column: index % SIDE,
            row: index / SIDE,
        })
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || PositionError::Unrecognized(s.to_string());
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unrecognized());
        };

        let column = match file.to_ascii_lowercase() {
            'a' => 0,
            'b' => 1,
            'c' => 2,
            _ => return Err(unrecognized()),
        };
        let row = match rank {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            _ => return Err(unrecognized()),
        };

        Position::new(column, row)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.column()) as char;
        write!(f, "{}{}", file, self.row() + 1)
    }
}

/// A 3x3 grid of cells. Boards are values: marking a cell yields a new board.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self[position]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self[position].is_some()
    }

    /// Returns a copy of this board with `mark` placed at `position`.
    ///
    /// Cells are write-once. Callers check occupancy first; asking to
    /// overwrite a marked cell panics.
    pub fn with_mark_at(&self, position: Position, mark: Mark) -> Board {
        assert!(
            !self.is_occupied(position),
            "cell {position} is already marked with {:?}",
            self[position]
        );
        let mut next = *self;
        next.cells[position.index()] = Some(mark);
        next
    }

    pub fn marked_count(&self) -> u8 {
        self.cells.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.marked_count() as usize == CELL_COUNT
    }

    /// Unmarked cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&position| !self.is_occupied(position))
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Mark>)> + '_ {
        Position::ALL
            .into_iter()
            .map(move |position| (position, self[position]))
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> + '_ {
        self.cells.chunks_exact(SIDE as usize)
    }
}

impl Index<Position> for Board {
    type Output = Option<Mark>;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[position.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            write!(f, "{}│ ", i + 1)?;
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "-")?,
                };
            }

            writeln!(f)?;
        }
        write!(f, " ╰─────\n   abc")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_coordinates() {
        let position = Position::new(2, 1).unwrap();
        assert_eq!(position, Position::MIDDLE_RIGHT);
        assert_eq!(position.column(), 2);
        assert_eq!(position.row(), 1);
        assert_eq!(
            Position::new(3, 0),
            Err(PositionError::OutOfRange { column: 3, row: 0 })
        );
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn parses_cell_names() {
        assert_eq!("a1".parse::<Position>(), Ok(Position::TOP_LEFT));
        assert_eq!("B2".parse::<Position>(), Ok(Position::CENTER));
        assert_eq!(" c3\n".parse::<Position>(), Ok(Position::BOTTOM_RIGHT));
        assert_eq!("c1".parse::<Position>(), Ok(Position::TOP_RIGHT));
        assert!("d1".parse::<Position>().is_err());
        assert!("a4".parse::<Position>().is_err());
        assert!("a11".parse::<Position>().is_err());
        assert_eq!(Position::BOTTOM_LEFT.to_string(), "a3");
    }

    #[test]
    fn marking_leaves_receiver_untouched() {
        let board = Board::new();
        let next = board.with_mark_at(Position::CENTER, Mark::X);
        assert_eq!(board.get(Position::CENTER), None);
        assert_eq!(next.get(Position::CENTER), Some(Mark::X));
        assert_eq!(next.marked_count(), 1);
        assert_eq!(next.empty_positions().count(), 8);
    }

    #[test]
    #[should_panic(expected = "already marked")]
    fn overwriting_a_cell_panics() {
        Board::new()
            .with_mark_at(Position::TOP_LEFT, Mark::X)
            .with_mark_at(Position::TOP_LEFT, Mark::O);
    }

    #[test]
    fn cells_pair_positions_with_marks() {
        let board = Board::new()
            .with_mark_at(Position::TOP_RIGHT, Mark::O)
            .with_mark_at(Position::BOTTOM_LEFT, Mark::X);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], (Position::TOP_LEFT, None));
        assert_eq!(cells[2], (Position::TOP_RIGHT, Some(Mark::O)));
        assert_eq!(cells[6], (Position::BOTTOM_LEFT, Some(Mark::X)));
        assert!(cells
            .iter()
            .all(|&(position, mark)| board.get(position) == mark));
    }

    #[test]
    fn display_grid() {
        let board = Board::new()
            .with_mark_at(Position::TOP_LEFT, Mark::X)
            .with_mark_at(Position::CENTER, Mark::O);
        assert_eq!(board.to_string(), "1│ X--\n2│ -O-\n3│ ---\n ╰─────\n   abc");
    }
}
