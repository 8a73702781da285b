//! A* over lazily expanded boards.

use super::board::{Board, Move};
use crate::collections::MaxHeap;
use crate::config::{PuzzleConfig, SearchConfig};
use crate::error::Result;
use crate::search::{run, Heuristic, SearchSpace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Boards as a search space: one unit-cost edge per legal move, visited
/// states keyed by [`Board::packed_key`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleSpace;

impl SearchSpace for PuzzleSpace {
    type State = Board;
    type Key = u128;
    type Cost = u32;

    fn key(&self, state: &Board) -> u128 {
        state.packed_key()
    }

    fn successors(&self, state: &Board) -> Result<Vec<(Board, u32)>> {
        Ok(state
            .successors()
            .into_iter()
            .map(|(_, board)| (board, 1))
            .collect())
    }
}

/// Moves and diagnostics of a solved board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Blank moves from the initial board to the goal.
    pub moves: Vec<Move>,
    /// `moves.len()`.
    pub move_count: usize,
    /// Boards expanded by the search.
    pub expanded: usize,
    /// Boards queued by the search.
    pub pushed: usize,
}

/// Outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Solution {
    /// The goal is not reachable from the board.
    Unsolvable,
    /// A shortest move sequence was found.
    Solved(SolveReport),
}

impl Solution {
    /// The report of a solved board.
    pub fn report(&self) -> Option<&SolveReport> {
        match self {
            Solution::Solved(report) => Some(report),
            Solution::Unsolvable => None,
        }
    }

    /// Returns `true` if a move sequence was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }
}

/// Solves `board` with A* and the Manhattan-distance heuristic.
///
/// Unsolvable boards are detected by parity and never searched. The move
/// sequence is rebuilt by walking the result path's parent links.
pub fn solve(board: &Board, config: &SearchConfig) -> Result<Solution> {
    if !board.is_solvable() {
        tracing::debug!(board = ?board, "unsolvable layout");
        return Ok(Solution::Unsolvable);
    }

    let search = run(
        &PuzzleSpace,
        board.clone(),
        Board::is_goal,
        MaxHeap::with_config(config.frontier),
        &Heuristic(Board::manhattan),
    )?;

    let Some(path) = search.path else {
        tracing::warn!(board = ?board, "search exhausted on a solvable layout");
        return Ok(Solution::Unsolvable);
    };
    let states = path.states();
    let moves: Vec<Move> = states
        .windows(2)
        .filter_map(|pair| pair[0].move_to(&pair[1]))
        .collect();

    tracing::debug!(
        moves = moves.len(),
        expanded = search.stats.expanded,
        pushed = search.stats.pushed,
        "puzzle solved"
    );
    Ok(Solution::Solved(SolveReport {
        move_count: moves.len(),
        moves,
        expanded: search.stats.expanded,
        pushed: search.stats.pushed,
    }))
}

/// Generates a random solvable board of the configured size and solves it.
///
/// Generation is deterministic when `config.seed` is set.
pub fn solve_random(config: &PuzzleConfig) -> Result<(Board, Solution)> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = Board::random(config.rows, config.cols, &mut rng)?;
    tracing::debug!(rows = config.rows, cols = config.cols, "generated board\n{board}");
    let solution = solve(&board, &config.search)?;
    Ok((board, solution))
}
