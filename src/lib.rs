//! Optimal solver for `n x n` sliding-tile puzzles.
//!
//! A [`Board`] is an immutable puzzle configuration. [`Solver`] runs A* with
//! the Manhattan heuristic and detects unsolvable boards by searching the
//! board's [twin](Board::twin) alongside it.
//!
//! ```
//! use slide_solver::{Board, Solver};
//!
//! let board = Board::new(&[[1u32, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
//! let solver = Solver::new(board);
//! assert_eq!(solver.moves(), Some(1));
//! ```

mod board;
mod direction;
pub mod generator;
mod solver;

pub use board::{Board, BoardError, Neighbors, ParseBoardError};
pub use direction::Direction;
pub use generator::Difficulty;
pub use solver::{Solver, SolverError};
