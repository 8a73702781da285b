//! Sliding-tile boards.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Direction the blank slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    /// Blank moves one row up.
    Up,
    /// Blank moves one row down.
    Down,
    /// Blank moves one column left.
    Left,
    /// Blank moves one column right.
    Right,
}

impl Move {
    /// Every move, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// A `rows × cols` board: tiles `1..n` and a blank (`0`), row-major.
///
/// The goal layout is ascending tiles with the blank last. Boards are at
/// least 2×2 and small enough for [`Board::packed_key`] to fit in 128 bits
/// (up to 5×5).
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Builds a board from a row-major layout.
    ///
    /// Fails with [`Error::InvalidBoard`] unless `tiles` is a permutation of
    /// `0..rows * cols` on a board of at least 2×2 whose packed key fits in
    /// 128 bits.
    pub fn new(rows: usize, cols: usize, tiles: Vec<u8>) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let n = rows * cols;
        if tiles.len() != n {
            return Err(Error::InvalidBoard(format!(
                "expected {n} tiles for a {rows}x{cols} board, got {}",
                tiles.len()
            )));
        }
        let mut seen = vec![false; n];
        for &tile in &tiles {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(Error::InvalidBoard(format!(
                        "tile {tile} is repeated or out of range"
                    )))
                }
            }
        }
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or_else(|| Error::InvalidBoard("no blank tile".into()))?;
        Ok(Self {
            rows,
            cols,
            tiles,
            blank,
        })
    }

    /// The goal board.
    pub fn solved(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Self::new(rows, cols, goal_layout(rows * cols))
    }

    /// A uniformly shuffled, solvable board.
    ///
    /// An unsolvable shuffle is corrected by swapping the first two adjacent
    /// non-blank tiles, which flips the inversion parity; if that still does
    /// not give a solvable board the layout is drawn again.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let mut tiles = goal_layout(rows * cols);
        loop {
            tiles.shuffle(rng);
            let mut board = Self::new(rows, cols, tiles.clone())?;
            if board.is_solvable() {
                return Ok(board);
            }
            if let Some(i) = board.tiles.windows(2).position(|w| w[0] != 0 && w[1] != 0) {
                board.tiles.swap(i, i + 1);
                if board.is_solvable() {
                    return Ok(board);
                }
            }
            tracing::trace!("regenerating unsolvable layout");
        }
    }

    /// Board height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major tiles, `0` for the blank.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    /// Tile at `row`, `col`.
    pub fn tile(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.tiles[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns `true` for the goal layout.
    pub fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &t)| {
            if i + 1 == self.tiles.len() {
                t == 0
            } else {
                usize::from(t) == i + 1
            }
        })
    }

    /// Sum over non-blank tiles of the row plus column distance to the
    /// tile's goal cell. Never overestimates the remaining move count.
    pub fn manhattan(&self) -> u32 {
        let mut total = 0;
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal = usize::from(tile) - 1;
            total += (i / self.cols).abs_diff(goal / self.cols);
            total += (i % self.cols).abs_diff(goal % self.cols);
        }
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// Pairs of non-blank tiles out of order in row-major reading.
    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Whether the goal is reachable.
    ///
    /// Odd width: the inversion count is even. Even width: inversions plus
    /// the blank's row counted from the bottom (1-based) is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.cols % 2 == 1 {
            inversions % 2 == 0
        } else {
            let from_bottom = self.rows - self.blank / self.cols;
            (inversions + from_bottom) % 2 == 1
        }
    }

    /// The board after sliding the blank, or `None` at an edge.
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let target = match mv {
            Move::Up if row > 0 => self.blank - self.cols,
            Move::Down if row + 1 < self.rows => self.blank + self.cols,
            Move::Left if col > 0 => self.blank - 1,
            Move::Right if col + 1 < self.cols => self.blank + 1,
            _ => return None,
        };
        let mut next = self.clone();
        next.tiles.swap(self.blank, target);
        next.blank = target;
        Some(next)
    }

    /// Every legal move with the board it leads to.
    pub fn successors(&self) -> Vec<(Move, Self)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|board| (mv, board)))
            .collect()
    }

    /// The single move leading from `self` to `next`, if there is one.
    pub fn move_to(&self, next: &Self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&mv| self.apply(mv).as_ref() == Some(next))
    }

    /// Applies `moves` in order; `None` if any of them is illegal.
    pub fn replay(&self, moves: &[Move]) -> Option<Self> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &mv| board.apply(mv))
    }

    /// The layout packed into one integer, `ceil(log2(n))` bits per tile.
    ///
    /// Distinct layouts of the same dimensions have distinct keys.
    pub fn packed_key(&self) -> u128 {
        let bits = bits_per_tile(self.tiles.len());
        self.tiles
            .iter()
            .fold(0_u128, |key, &tile| (key << bits) | u128::from(tile))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("tiles", &self.tiles)
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.cols) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{t:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

fn goal_layout(n: usize) -> Vec<u8> {
    (1..n)
        .map(|t| u8::try_from(t).unwrap_or(u8::MAX))
        .chain(std::iter::once(0))
        .collect()
}

fn bits_per_tile(n: usize) -> u32 {
    usize::BITS - (n - 1).leading_zeros()
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows < 2 || cols < 2 {
        return Err(Error::InvalidBoard(format!(
            "{rows}x{cols} is too small, both sides must be at least 2"
        )));
    }
    let n = rows
        .checked_mul(cols)
        .ok_or_else(|| Error::InvalidBoard(format!("{rows}x{cols} overflows")))?;
    let bits = u128::BITS as usize;
    if n > bits || n * bits_per_tile(n) as usize > bits {
        return Err(Error::InvalidBoard(format!(
            "{rows}x{cols} does not pack into {bits} bits"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn board(rows: usize, cols: usize, tiles: &[u8]) -> Board {
        Board::new(rows, cols, tiles.to_vec()).unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(Board::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]).is_ok());
        for tiles in [
            vec![1, 1, 3, 4, 5, 6, 7, 8, 0],
            vec![1, 2, 3],
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        ] {
            assert!(matches!(Board::new(3, 3, tiles), Err(Error::InvalidBoard(_))));
        }
        assert!(matches!(Board::solved(1, 4), Err(Error::InvalidBoard(_))));
        assert!(Board::solved(5, 5).is_ok());
        assert!(matches!(Board::solved(6, 6), Err(Error::InvalidBoard(_))));
    }

    #[test]
    fn test_goal_and_manhattan() {
        let goal = Board::solved(3, 3).unwrap();
        assert!(goal.is_goal());
        assert_eq!(goal.manhattan(), 0);
        assert_eq!(goal.blank(), (2, 2));

        let b = board(3, 3, &[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert!(!b.is_goal());
        // 8:3, 1:1, 2:2, 6:2, 5:2
        assert_eq!(b.manhattan(), 10);
        assert_eq!(b.tile(0, 0), Some(8));
        assert_eq!(b.tile(3, 0), None);
    }

    #[test]
    fn test_apply_at_edges() {
        let goal = Board::solved(3, 3).unwrap();
        assert!(goal.apply(Move::Down).is_none());
        assert!(goal.apply(Move::Right).is_none());

        let up = goal.apply(Move::Up).unwrap();
        assert_eq!(up.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert_eq!(up.blank(), (1, 2));
        assert_eq!(up.apply(Move::Up.opposite()).unwrap(), goal);
        assert_eq!(goal.move_to(&up), Some(Move::Up));
        assert_eq!(goal.successors().len(), 2);
        assert_eq!(board(3, 3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).successors().len(), 4);
    }

    #[test]
    fn test_replay() {
        let goal = Board::solved(2, 2).unwrap();
        let moves = [Move::Up, Move::Left, Move::Down, Move::Right];
        let scrambled = goal.replay(&moves).unwrap();
        assert_eq!(scrambled.tiles(), &[3, 1, 2, 0]);
        assert!(goal.replay(&[Move::Right]).is_none());
    }

    #[test]
    fn test_solvability_parity() {
        assert!(Board::solved(3, 3).unwrap().is_solvable());
        assert!(Board::solved(4, 4).unwrap().is_solvable());
        assert!(!board(3, 3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]).is_solvable());
        let swapped_tail = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0];
        assert!(!board(4, 4, &swapped_tail).is_solvable());
        // Moving the blank up a row on an even-width board keeps it solvable.
        let moved = Board::solved(4, 4).unwrap().apply(Move::Up).unwrap();
        assert!(moved.is_solvable());
    }

    #[test]
    fn test_packed_key_is_injective_on_reachable_states() {
        let mut frontier = vec![Board::solved(2, 3).unwrap()];
        let mut boards = HashSet::new();
        let mut keys = HashSet::new();
        while let Some(b) = frontier.pop() {
            if !boards.insert(b.clone()) {
                continue;
            }
            keys.insert(b.packed_key());
            frontier.extend(b.successors().into_iter().map(|(_, next)| next));
        }
        // Half of the 6! layouts are reachable.
        assert_eq!(boards.len(), 360);
        assert_eq!(keys.len(), boards.len());
    }

    #[test]
    fn test_random_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(2, 2), (3, 3), (4, 4), (3, 4), (5, 5)] {
            for _ in 0..20 {
                let b = Board::random(rows, cols, &mut rng).unwrap();
                assert!(b.is_solvable());
                assert_eq!(b.tiles().len(), rows * cols);
            }
        }
    }

    #[test]
    fn test_display() {
        let b = Board::solved(2, 2).unwrap();
        assert_eq!(b.to_string(), "1 2\n3 .\n");
    }
}
