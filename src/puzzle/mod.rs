//! Sliding-tile puzzles solved by the generic search engine.
//!
//! Boards are never materialized as a [`Graph`](crate::graph::Graph):
//! [`PuzzleSpace`] expands each board into its legal moves on demand, and the
//! engine deduplicates boards by [`Board::packed_key`]. A* with the
//! admissible [`Board::manhattan`] estimate yields shortest solutions.
//!
//! ```
//! use wayfinder::config::SearchConfig;
//! use wayfinder::puzzle::{solve, Board};
//!
//! let board = Board::new(3, 3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
//! let solution = solve(&board, &SearchConfig::default()).unwrap();
//! assert_eq!(solution.report().unwrap().move_count, 2);
//! ```

pub mod board;
pub mod solver;

pub use board::{Board, Move};
pub use solver::{solve, solve_random, PuzzleSpace, SolveReport, Solution};
