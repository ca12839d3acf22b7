use std::{cmp::Reverse, collections::BinaryHeap, str::FromStr};

use log::{debug, trace};

use crate::{Board, BoardError, Direction, ParseBoardError};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    #[display("invalid initial board: {_0}")]
    InvalidArgument(#[from] BoardError),
    #[display("unreadable initial board: {_0}")]
    Unreadable(#[from] ParseBoardError),
}

/// Optimal solver for the sliding puzzle.
///
/// Runs A* on the initial board and, in lockstep, on its twin. Exactly one of
/// the two can reach the goal, so whichever search finds it first decides
/// solvability. The whole search runs inside [`Solver::new`].
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    expanded: usize,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        debug!(
            "solving {0}x{0} board, manhattan={1} hamming={2}",
            initial.dimension(),
            initial.manhattan(),
            initial.hamming()
        );

        let mut twin = Search::new(initial.twin());
        let mut primary = Search::new(initial);

        let solution = loop {
            match primary.step() {
                Step::Goal(node) => break Some(primary.path(node)),
                Step::Exhausted => break None,
                Step::Expanded => {}
            }
            if let Step::Goal(_) = twin.step() {
                break None;
            }
        };

        let expanded = primary.nodes.len() + twin.nodes.len();
        match &solution {
            Some(path) => debug!("solved in {} moves, {expanded} nodes", path.len() - 1),
            None => debug!("twin reached the goal, unsolvable, {expanded} nodes"),
        }

        Self { solution, expanded }
    }

    /// Validates `grid` and solves it.
    pub fn from_grid<R: AsRef<[u32]>>(grid: &[R]) -> Result<Self, SolverError> {
        Ok(Self::new(Board::new(grid)?))
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    pub fn unsolvable(&self) -> bool {
        !self.is_solvable()
    }

    /// Minimum number of slides, `None` if the board cannot be solved.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial one to the goal, both included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// The solution as blank moves.
    pub fn solution_moves(&self) -> Option<Vec<Direction>> {
        let path = self.solution.as_ref()?;
        Some(
            path.windows(2)
                .filter_map(|pair| pair[0].move_to(&pair[1]))
                .collect(),
        )
    }

    /// Search nodes created over both frontiers.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

impl FromStr for Solver {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse()?))
    }
}

#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<usize>,
}

enum Step {
    Goal(usize),
    Expanded,
    Exhausted,
}

/// One A* run. Nodes live in an arena and point at their parent by index.
#[derive(Debug)]
struct Search {
    nodes: Vec<SearchNode>,
    // (priority, node index); the index breaks ties in insertion order
    frontier: BinaryHeap<Reverse<(usize, usize)>>,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
        };
        search.push(root, 0, None);
        search
    }

    fn push(&mut self, board: Board, moves: usize, parent: Option<usize>) {
        let priority = moves + board.manhattan();
        let idx = self.nodes.len();
        self.nodes.push(SearchNode {
            board,
            moves,
            parent,
        });
        self.frontier.push(Reverse((priority, idx)));
    }

    fn step(&mut self) -> Step {
        let Some(Reverse((priority, idx))) = self.frontier.pop() else {
            return Step::Exhausted;
        };
        let node = &self.nodes[idx];
        trace!("pop node {idx} priority={priority} moves={}", node.moves);
        if node.board.is_goal() {
            return Step::Goal(idx);
        }

        // skip only the board we just came from
        let parent = node.parent.map(|p| &self.nodes[p].board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .filter(|board| Some(board) != parent)
            .collect();
        let moves = node.moves + 1;
        for board in children {
            self.push(board, moves, Some(idx));
        }
        Step::Expanded
    }

    fn path(&self, goal: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[goal].moves + 1);
        let mut current = Some(goal);
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            path.push(node.board.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}
