//! Board addressing: one-based file/rank positions, array indices, and human coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoordError, PositionError};

/// A one-based `(file, rank)` pair.
///
/// Both components lie in `1..=8` for squares on the board. Values outside that
/// range are allowed so generators can step one square past an edge; check
/// [`Position::in_bounds`] before indexing with such a position.
///
/// Index = (rank - 1) * 8 + (file - 1), so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    /// Number of on-board positions.
    pub const COUNT: usize = 64;

    /// Create a position. No range check is made.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Position {
        Position { file, rank }
    }

    /// Create a position from a board index, returning `None` past 63.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Position> {
        if index < Self::COUNT {
            Some(Position {
                file: (index % 8) as i8 + 1,
                rank: (index / 8) as i8 + 1,
            })
        } else {
            None
        }
    }

    /// One-based file (1 = A).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// One-based rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// `true` iff both file and rank are in `1..=8`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    /// Return the board index.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[inline]
    pub fn index(self) -> usize {
        assert!(self.in_bounds(), "index of off-board position {self:?}");
        ((self.rank as isize - 1) * 8 + (self.file as isize - 1)) as usize
    }

    /// Checked form of [`Position::index`].
    #[inline]
    pub fn try_index(self) -> Result<usize, PositionError> {
        if self.in_bounds() {
            Ok(self.index())
        } else {
            Err(PositionError::OutOfBounds {
                file: self.file,
                rank: self.rank,
            })
        }
    }

    /// Step by a file/rank delta. The result may be off the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Position {
        Position {
            file: self.file.saturating_add(file_delta),
            rank: self.rank.saturating_add(rank_delta),
        }
    }

    /// Convert a human coordinate to a position. Letter 'A' is file 1.
    #[inline]
    pub const fn from_coord(coord: Coord) -> Position {
        Position {
            file: (coord.file as u8 - b'A') as i8 + 1,
            rank: coord.rank as i8,
        }
    }

    /// Convert to a human coordinate, or `None` if off the board.
    #[inline]
    pub const fn to_coord(self) -> Option<Coord> {
        if !self.in_bounds() {
            return None;
        }
        Some(Coord {
            file: (b'A' + (self.file - 1) as u8) as char,
            rank: self.rank as u8,
        })
    }

    /// Iterate over all 64 positions in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_coord() {
            Some(coord) => write!(f, "{coord}"),
            None => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

impl FromStr for Position {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Position, CoordError> {
        s.parse::<Coord>().map(Position::from_coord)
    }
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Position {
        Position::from_coord(coord)
    }
}

/// A human coordinate: file letter `'A'..='H'` and rank `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    file: char,
    rank: u8,
}

impl Coord {
    /// Build a coordinate. Lowercase file letters are accepted and stored uppercase.
    pub fn new(file: char, rank: u8) -> Result<Coord, CoordError> {
        let upper = file.to_ascii_uppercase();
        if !('A'..='H').contains(&upper) {
            return Err(CoordError::InvalidFile { character: file });
        }
        if !(1..=8).contains(&rank) {
            return Err(CoordError::InvalidRank {
                character: char::from_digit(u32::from(rank), 10).unwrap_or('?'),
            });
        }
        Ok(Coord { file: upper, rank })
    }

    #[inline]
    pub const fn file(self) -> char {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Coord, CoordError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordError::InvalidLength {
                found: s.to_string(),
            });
        };
        let digit = rank
            .to_digit(10)
            .filter(|d| (1..=8).contains(d))
            .ok_or(CoordError::InvalidRank { character: rank })?;
        Coord::new(file, digit as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Position};
    use crate::error::{CoordError, PositionError};

    #[test]
    fn in_bounds_over_wide_domain() {
        for file in -20i8..=20 {
            for rank in -20i8..=20 {
                let expected = (1..=8).contains(&file) && (1..=8).contains(&rank);
                assert_eq!(
                    Position::new(file, rank).in_bounds(),
                    expected,
                    "file {file}, rank {rank}"
                );
            }
        }
        assert!(!Position::new(i8::MIN, i8::MAX).in_bounds());
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..64 {
            let pos = Position::from_index(i).unwrap();
            assert!(pos.in_bounds());
            assert_eq!(pos.index(), i);
        }
        for file in 1..=8 {
            for rank in 1..=8 {
                let pos = Position::new(file, rank);
                assert_eq!(Position::from_index(pos.index()), Some(pos));
            }
        }
        assert_eq!(Position::from_index(64), None);
    }

    #[test]
    fn index_layout() {
        assert_eq!(Position::new(1, 1).index(), 0);
        assert_eq!(Position::new(2, 1).index(), 1);
        assert_eq!(Position::new(1, 2).index(), 8);
        assert_eq!(Position::new(5, 8).index(), 60);
        assert_eq!(Position::new(8, 8).index(), 63);
    }

    #[test]
    #[should_panic(expected = "off-board")]
    fn index_rejects_positions_that_alias_a_square() {
        let _ = Position::new(9, 1).index();
    }

    #[test]
    fn try_index_rejects_off_board() {
        assert_eq!(Position::new(4, 4).try_index(), Ok(27));
        assert_eq!(
            Position::new(0, 3).try_index(),
            Err(PositionError::OutOfBounds { file: 0, rank: 3 })
        );
        assert!(Position::new(3, 9).try_index().is_err());
    }

    #[test]
    fn coord_conversion() {
        let coord = Coord::new('A', 1).unwrap();
        assert_eq!(Position::from_coord(coord), Position::new(1, 1));
        let coord = Coord::new('h', 8).unwrap();
        assert_eq!(coord.file(), 'H');
        assert_eq!(Position::from_coord(coord), Position::new(8, 8));

        for pos in Position::all() {
            let coord = pos.to_coord().unwrap();
            assert_eq!(Position::from_coord(coord), pos);
        }
        assert_eq!(Position::new(9, 1).to_coord(), None);
    }

    #[test]
    fn coord_rejects_bad_parts() {
        assert_eq!(
            Coord::new('I', 1),
            Err(CoordError::InvalidFile { character: 'I' })
        );
        assert!(Coord::new('A', 0).is_err());
        assert!(Coord::new('A', 9).is_err());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("B2".parse::<Position>(), Ok(Position::new(2, 2)));
        assert_eq!("e4".parse::<Position>(), Ok(Position::new(5, 4)));
        assert_eq!(format!("{}", Position::new(5, 4)), "E4");
        assert_eq!(format!("{}", Position::new(0, 4)), "(0, 4)");
        assert_eq!(format!("{:?}", Position::new(3, 6)), "Position(C6)");
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!("".parse::<Coord>(), Err(CoordError::InvalidLength { .. })));
        assert!(matches!("a".parse::<Coord>(), Err(CoordError::InvalidLength { .. })));
        assert!(matches!("a1b".parse::<Coord>(), Err(CoordError::InvalidLength { .. })));
        assert_eq!(
            "i1".parse::<Coord>(),
            Err(CoordError::InvalidFile { character: 'i' })
        );
        assert_eq!(
            "a9".parse::<Coord>(),
            Err(CoordError::InvalidRank { character: '9' })
        );
    }

    #[test]
    fn offset_can_leave_board() {
        let pos = Position::new(1, 1).offset(-1, 2);
        assert_eq!(pos, Position::new(0, 3));
        assert!(!pos.in_bounds());
        assert_eq!(Position::new(4, 4).offset(1, -1), Position::new(5, 3));
    }

    #[test]
    fn all_iterator() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[63], Position::new(8, 8));
    }
}
