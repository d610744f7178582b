//! The [`Board`] struct represents one configuration of the 3x3 sliding tile
//! puzzle. Tiles are stored row by row, with `0` standing for the blank cell.

use crate::search::PuzzleError;
use std::fmt;
use std::str::FromStr;

pub const BOARD_WIDTH: usize = 3;
pub const NUM_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;
pub const BLANK: u8 = 0;

pub const GOAL_TILES: [u8; NUM_CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
pub const DEFAULT_INITIAL_TILES: [u8; NUM_CELLS] = [8, 7, 6, 5, 4, 3, 2, 1, 0];

/// Packed encoding of a board, the tiles read as a nine digit decimal number.
pub type BoardKey = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; NUM_CELLS],
    /// Index of the blank cell
    blank: usize,
}

impl Board {
    /// Create a board from its tiles, checking that they form a permutation of
    /// `0..=8`.
    pub fn new(tiles: [u8; NUM_CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; NUM_CELLS];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| {
                PuzzleError::InvalidBoard(format!("tile {} is out of range", tile))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidBoard(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
            *slot = true;
        }
        // Every tile seen exactly once, so the blank is present.
        let blank = tiles.iter().position(|&tile| tile == BLANK).unwrap_or(0);
        Ok(Self { tiles, blank })
    }

    /// Create a board from a slice of tiles of any length. Fails unless the
    /// slice holds exactly nine tiles.
    pub fn from_slice(tiles: &[u8]) -> Result<Self, PuzzleError> {
        let tiles: [u8; NUM_CELLS] = tiles.try_into().map_err(|_| {
            PuzzleError::InvalidBoard(format!(
                "expected {} tiles, found {}",
                NUM_CELLS,
                tiles.len()
            ))
        })?;
        Self::new(tiles)
    }

    pub fn goal() -> Self {
        Self {
            tiles: GOAL_TILES,
            blank: NUM_CELLS - 1,
        }
    }

    pub fn default_initial() -> Self {
        Self {
            tiles: DEFAULT_INITIAL_TILES,
            blank: NUM_CELLS - 1,
        }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8; NUM_CELLS] {
        &self.tiles
    }

    #[inline(always)]
    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    pub fn is_identical(&self, other: &Board) -> bool {
        self.tiles == other.tiles
    }

    pub fn key(&self) -> BoardKey {
        self.tiles
            .iter()
            .fold(0, |key, &tile| key * 10 + tile as BoardKey)
    }

    /// Whether the goal can be reached from this board at all. On a board of
    /// odd width this holds iff the number of inversions among the non-blank
    /// tiles is even.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self
            .tiles
            .iter()
            .copied()
            .filter(|&tile| tile != BLANK)
            .collect();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// All boards reachable by sliding one tile into the blank, in ascending
    /// order of the moved tile's position.
    ///
    /// A cell is adjacent to the blank when their indices differ by 3 (same
    /// column) or by 1, except where the two cells sit on either side of a row
    /// boundary.
    pub fn possible_moves(&self) -> Vec<Board> {
        let mut moves = Vec::with_capacity(4);
        for position in 0..NUM_CELLS {
            if position == self.blank {
                continue;
            }
            let distance = self.blank.abs_diff(position);
            if distance != 1 && distance != BOARD_WIDTH {
                continue;
            }
            let wraps_forward =
                (position + 1) % BOARD_WIDTH == 0 && self.blank == position + 1;
            let wraps_backward =
                (self.blank + 1) % BOARD_WIDTH == 0 && position == self.blank + 1;
            if wraps_forward || wraps_backward {
                continue;
            }
            moves.push(self.slide(position));
        }
        moves
    }

    fn slide(&self, position: usize) -> Board {
        let mut tiles = self.tiles;
        tiles[self.blank] = tiles[position];
        tiles[position] = BLANK;
        Board {
            tiles,
            blank: position,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::default_initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Accepts the compact form printed by [`Board`]'s `Display` (`"876543210"`)
/// as well as lists such as `"8, 7, 6, 5, 4, 3, 2, 1, 0"` or
/// `"{8,7,6,5,4,3,2,1,0}"`.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::with_capacity(NUM_CELLS);
        for c in s.trim().chars() {
            match c {
                '0'..='9' => tiles.push(c as u8 - b'0'),
                ',' | '{' | '}' | '[' | ']' => {}
                c if c.is_whitespace() => {}
                c => {
                    return Err(PuzzleError::InvalidBoard(format!(
                        "unexpected character {:?} in {:?}",
                        c, s
                    )))
                }
            }
        }
        Self::from_slice(&tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn board(tiles: [u8; NUM_CELLS]) -> Board {
        Board::new(tiles).unwrap()
    }

    #[test]
    fn goal_detection() {
        assert!(Board::goal().is_goal());
        assert!(board(GOAL_TILES).is_goal());
        assert!(!Board::default_initial().is_goal());
        assert!(!board(ONE_MOVE_TILES).is_goal());
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(Board::new([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
        assert!(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
        assert!(Board::from_slice(&[1, 2, 3]).is_err());
    }

    #[test]
    fn blank_is_located() {
        assert_eq!(board(ONE_MOVE_TILES).blank(), 5);
        assert_eq!(board(TWO_MOVE_TILES).blank(), 4);
        assert_eq!(Board::default_initial().blank(), 8);
    }

    #[test]
    fn identical_compares_every_cell() {
        let a = board(ONE_MOVE_TILES);
        let b = board(ONE_MOVE_TILES);
        assert!(a.is_identical(&b));
        assert!(!a.is_identical(&Board::goal()));
    }

    #[test]
    fn centre_blank_has_four_moves() {
        let moves = board(TWO_MOVE_TILES).possible_moves();
        let blanks: Vec<usize> = moves.iter().map(|m| m.blank()).collect();
        assert_eq!(blanks, vec![1, 3, 5, 7]);
        assert_eq!(moves[3].tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
    }

    #[test]
    fn corner_blank_has_two_moves() {
        let moves = Board::goal().possible_moves();
        let blanks: Vec<usize> = moves.iter().map(|m| m.blank()).collect();
        assert_eq!(blanks, vec![5, 7]);
    }

    #[test]
    fn no_move_wraps_across_rows() {
        // Blank at the end of the first row must not swap with index 3, and
        // blank at the start of the third row must not swap with index 5.
        let end_of_row = board([1, 2, 0, 3, 4, 5, 6, 7, 8]);
        let start_of_row = board([1, 2, 3, 4, 5, 6, 0, 7, 8]);
        assert_eq!(
            end_of_row
                .possible_moves()
                .iter()
                .map(|m| m.blank())
                .collect::<Vec<_>>(),
            vec![1, 5]
        );
        assert_eq!(
            start_of_row
                .possible_moves()
                .iter()
                .map(|m| m.blank())
                .collect::<Vec<_>>(),
            vec![3, 7]
        );

        for sample in sample_boards() {
            for successor in sample.possible_moves() {
                let (from, to) = (sample.blank(), successor.blank());
                assert!(
                    from / BOARD_WIDTH == to / BOARD_WIDTH
                        || from % BOARD_WIDTH == to % BOARD_WIDTH,
                    "illegal move from {} to {}",
                    sample,
                    successor
                );
            }
        }
    }

    #[test]
    fn moves_do_not_mutate_the_source() {
        let original = board(TWO_MOVE_TILES);
        let copy = original;
        let _ = original.possible_moves();
        assert_eq!(original, copy);
    }

    #[test]
    fn parse_and_display() {
        let parsed: Board = "876543210".parse().unwrap();
        assert_eq!(parsed, Board::default_initial());
        assert_eq!(parsed.to_string(), "876543210");

        let parsed: Board = "{1, 2, 3, 4, 5, 0, 7, 8, 6}".parse().unwrap();
        assert_eq!(parsed, board(ONE_MOVE_TILES));

        assert!("12345678".parse::<Board>().is_err());
        assert!("1234567x0".parse::<Board>().is_err());
    }

    #[test]
    fn key_is_packed_digits() {
        assert_eq!(Board::goal().key(), 123_456_780);
        assert_eq!(Board::default_initial().key(), 876_543_210);
    }

    #[test]
    fn solvability_parity() {
        assert!(Board::goal().is_solvable());
        assert!(Board::default_initial().is_solvable());
        assert!(!board(UNSOLVABLE_TILES).is_solvable());
        for sample in sample_boards() {
            assert!(sample.is_solvable());
        }
    }
}
