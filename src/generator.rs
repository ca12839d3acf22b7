//! Random puzzle boards.
//!
//! Boards for play come from a random walk of the blank away from the goal,
//! which keeps them solvable. [`random`] shuffles every tile instead and may
//! produce an unsolvable board.

use std::{collections::HashSet, str::FromStr};

use log::warn;
use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};

use crate::{Board, BoardError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    #[default]
    #[display("easy")]
    Easy,
    #[display("medium")]
    Medium,
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Number of random blank moves used to scramble the goal board.
    pub fn steps(self) -> usize {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 80,
            Difficulty::Hard => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {input:?}, expected easy, medium or hard")]
pub struct ParseDifficultyError {
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Walks the blank `steps` random moves away from the goal.
pub fn scrambled<R>(size: usize, steps: usize, rng: &mut R) -> Result<Board, BoardError>
where
    R: Rng + ?Sized,
{
    let mut board = Board::goal(size)?;
    for _ in 0..steps {
        let next = board.neighbors().choose(rng);
        if let Some(next) = next {
            board = next;
        }
    }
    Ok(board)
}

/// Uniformly random arrangement of all tiles.
pub fn random<R>(size: usize, rng: &mut R) -> Result<Board, BoardError>
where
    R: Rng + ?Sized,
{
    let mut tiles: Vec<u32> = (0..(size * size) as u32).collect();
    tiles.shuffle(rng);
    Board::from_tiles(size, tiles)
}

/// Up to `count` distinct scrambled boards.
///
/// Small boards have few reachable arrangements, so generation gives up after
/// a bounded number of attempts and returns what it found.
pub fn generate_set<R>(
    size: usize,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Board>, BoardError>
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::with_capacity(count);
    let mut boards = Vec::with_capacity(count);
    let mut attempts = count.saturating_mul(100);

    while boards.len() < count && attempts > 0 {
        attempts -= 1;
        let board = scrambled(size, difficulty.steps(), rng)?;
        if seen.insert(board.clone()) {
            boards.push(board);
        }
    }

    if boards.len() < count {
        warn!(
            "only {} distinct {difficulty} boards of size {size} found, wanted {count}",
            boards.len()
        );
    }
    Ok(boards)
}
