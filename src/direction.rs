use std::fmt;

/// The way the blank travels when it swaps with an adjacent tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Enumeration order used when generating neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Row and column delta applied to the blank.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Applies this direction to `(row, col)` inside an `size x size` grid.
    pub(crate) fn step(&self, row: usize, col: usize, size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < size && col < size).then_some((row, col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_undoes_offset() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn step_stays_inside_grid() {
        assert_eq!(Direction::Left.step(0, 0, 3), None);
        assert_eq!(Direction::Up.step(0, 2, 3), None);
        assert_eq!(Direction::Right.step(1, 2, 3), None);
        assert_eq!(Direction::Down.step(2, 1, 3), None);
        assert_eq!(Direction::Right.step(0, 0, 3), Some((0, 1)));
        assert_eq!(Direction::Down.step(0, 0, 3), Some((1, 0)));
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["Left", "Right", "Up", "Down"]);
    }
}
