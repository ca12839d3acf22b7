use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    str::FromStr,
};

use crate::Direction;

/// Errors raised while building or querying a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("board size {size} is too small, need at least 2x2")]
    TooSmall { size: usize },
    #[display("row {row} has {len} tiles, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[display("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[display("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u32, max: usize },
    #[display("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
    #[display("position ({row}, {col}) is outside a {size}x{size} board")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}

/// Errors raised while reading a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardError {
    #[display("missing board size")]
    MissingSize,
    #[display("invalid number {token:?}")]
    InvalidNumber { token: String },
    #[display("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[display("{_0}")]
    Invalid(#[from] BoardError),
}

/// One immutable configuration of an `n x n` sliding puzzle.
///
/// Tiles are stored row-major with `0` for the blank. The Manhattan and
/// Hamming distances are computed once at construction; every operation that
/// moves a tile returns a new board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
    manhattan: usize,
    hamming: usize,
}

impl Board {
    /// Builds a board from a square grid of rows.
    pub fn new<R: AsRef<[u32]>>(grid: &[R]) -> Result<Self, BoardError> {
        let size = grid.len();
        if size < 2 {
            return Err(BoardError::TooSmall { size });
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, cells) in grid.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(size, tiles)
    }

    /// Builds a board from `size * size` row-major tiles.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall { size });
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (idx, &tile) in tiles.iter().enumerate() {
            if tile as usize >= cells {
                return Err(BoardError::TileOutOfRange {
                    tile,
                    max: cells - 1,
                });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::DuplicateTile { tile });
            }
            if tile == 0 {
                blank = idx;
            }
        }

        Ok(Self::with_blank(size, tiles, blank))
    }

    /// The solved board: `1..n*n` in order with the blank in the last cell.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall { size });
        }
        let last = (size * size) as u32;
        let tiles = (1..last).chain(std::iter::once(0)).collect();
        Ok(Self::with_blank(size, tiles, size * size - 1))
    }

    fn with_blank(size: usize, tiles: Vec<u32>, blank: usize) -> Self {
        let mut manhattan = 0;
        let mut hamming = 0;
        for (idx, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let target = tile as usize - 1;
            if target != idx {
                hamming += 1;
                manhattan += (idx / size).abs_diff(target / size);
                manhattan += (idx % size).abs_diff(target % size);
            }
        }

        Self {
            size,
            tiles,
            blank,
            manhattan,
            hamming,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Result<u32, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.tiles[row * self.size + col])
    }

    /// Row-major tiles, blank included as `0`.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.size)
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// Sum of the grid distances of every tile from its goal cell.
    ///
    /// Admissible and consistent: it never overestimates the remaining moves
    /// and changes by exactly one per slide.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    /// Number of tiles out of place.
    pub fn hamming(&self) -> usize {
        self.hamming
    }

    /// Moves the blank one cell in `direction`.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let (row, col) = self.blank();
        let (row, col) = direction.step(row, col, self.size)?;
        Some(self.swapped(self.blank, row * self.size + col))
    }

    /// Slides the tile at `(row, col)` into the blank when they are adjacent.
    pub fn slide_tile(&self, row: usize, col: usize) -> Option<Self> {
        let (blank_row, blank_col) = self.blank();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(blank_row, blank_col, self.size) == Some((row, col)))
            .and_then(|dir| self.slide(dir))
    }

    /// The blank move that turns `self` into `next`, if they are neighbors.
    pub fn move_to(&self, next: &Board) -> Option<Direction> {
        if next.size != self.size {
            return None;
        }
        let (row, col) = self.blank();
        let dir = Direction::ALL
            .into_iter()
            .find(|dir| dir.step(row, col, self.size) == Some(next.blank()))?;
        self.slide(dir)
            .is_some_and(|board| board == *next)
            .then_some(dir)
    }

    /// Boards one slide away, in `Left, Right, Up, Down` order of the blank.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            directions: Direction::ALL.into_iter(),
        }
    }

    /// The board with one pair of non-blank tiles exchanged.
    ///
    /// Swaps the first two cells of the top row, or the last two cells of the
    /// bottom row when the blank sits in the top pair. Exactly one of a board
    /// and its twin can reach the goal. Applying `twin` twice is not
    /// guaranteed to give back the original board.
    pub fn twin(&self) -> Self {
        let cells = self.size * self.size;
        let (a, b) = if self.tiles[0] == 0 || self.tiles[1] == 0 {
            (cells - 2, cells - 1)
        } else {
            (0, 1)
        };
        self.swapped(a, b)
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Self::with_blank(self.size, tiles, blank)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.tiles.hash(state);
    }
}

/// Lazy iterator over the neighbors of a [`Board`].
#[derive(Debug)]
pub struct Neighbors<'a> {
    board: &'a Board,
    directions: std::array::IntoIter<Direction, 4>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let board = self.board;
        self.directions.find_map(|dir| board.slide(dir))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.directions.len()))
    }
}

impl FusedIterator for Neighbors<'_> {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        write!(f, "{}", self.size)?;
        for row in self.rows() {
            writeln!(f)?;
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", tile)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |token: &str| {
            token.parse::<u32>().map_err(|_| ParseBoardError::InvalidNumber {
                token: token.to_owned(),
            })
        };

        let mut tokens = s.split_whitespace();
        let size = parse(tokens.next().ok_or(ParseBoardError::MissingSize)?)? as usize;
        let tiles = tokens.map(parse).collect::<Result<Vec<_>, _>>()?;
        if tiles.len() != size * size {
            return Err(ParseBoardError::WrongTileCount {
                expected: size * size,
                found: tiles.len(),
            });
        }

        Ok(Board::from_tiles(size, tiles)?)
    }
}
