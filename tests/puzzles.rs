use slide_solver::{Board, Direction, Solver};

const PUZZLES: &[(&str, &str, Option<usize>)] = &[
    ("puzzle2x2-06", include_str!("../puzzles/puzzle2x2-06.txt"), Some(6)),
    ("puzzle2x2-unsolvable", include_str!("../puzzles/puzzle2x2-unsolvable.txt"), None),
    ("puzzle3x3-00", include_str!("../puzzles/puzzle3x3-00.txt"), Some(0)),
    ("puzzle3x3-04", include_str!("../puzzles/puzzle3x3-04.txt"), Some(4)),
    ("puzzle3x3-10", include_str!("../puzzles/puzzle3x3-10.txt"), Some(10)),
    ("puzzle3x3-14", include_str!("../puzzles/puzzle3x3-14.txt"), Some(14)),
    ("puzzle3x3-18", include_str!("../puzzles/puzzle3x3-18.txt"), Some(18)),
    ("puzzle3x3-20", include_str!("../puzzles/puzzle3x3-20.txt"), Some(20)),
    ("puzzle3x3-unsolvable", include_str!("../puzzles/puzzle3x3-unsolvable.txt"), None),
    ("puzzle4x4-03", include_str!("../puzzles/puzzle4x4-03.txt"), Some(3)),
    ("puzzle4x4-06", include_str!("../puzzles/puzzle4x4-06.txt"), Some(6)),
];

#[test]
fn solves_fixture_puzzles() {
    for &(name, text, expected) in PUZZLES {
        let initial: Board = text.parse().unwrap_or_else(|e| panic!("{name}: {e}"));
        let solver = Solver::new(initial.clone());
        assert_eq!(solver.moves(), expected, "{name}");
        assert_eq!(solver.is_solvable(), expected.is_some(), "{name}");

        let Some(path) = solver.solution() else {
            continue;
        };
        assert_eq!(path.first(), Some(&initial), "{name}");
        assert!(path.last().is_some_and(Board::is_goal), "{name}");

        let moves = solver.solution_moves().unwrap();
        assert_eq!(moves.len() + 1, path.len(), "{name}");
        let mut board = initial;
        for dir in moves {
            board = board.slide(dir).unwrap();
        }
        assert!(board.is_goal(), "{name}");
    }
}

#[test]
fn fixtures_round_trip_through_text() {
    for &(name, text, _) in PUZZLES {
        let board: Board = text.parse().unwrap();
        let again: Board = board.to_string().parse().unwrap();
        assert_eq!(board, again, "{name}");
    }
}

#[test]
fn twin_of_fixture_flips_outcome() {
    for name in ["puzzle3x3-04", "puzzle3x3-unsolvable", "puzzle2x2-06"] {
        let (_, text, expected) = PUZZLES.iter().find(|(n, ..)| *n == name).unwrap();
        let board: Board = text.parse().unwrap();
        let twin = Solver::new(board.twin());
        assert_eq!(twin.is_solvable(), expected.is_none(), "{name}");
    }
}

#[test]
fn four_by_four_solution_slides_blank_along_edge() {
    let solver: Solver = include_str!("../puzzles/puzzle4x4-06.txt").parse().unwrap();
    use Direction::*;
    assert_eq!(
        solver.solution_moves(),
        Some(vec![Right, Right, Right, Down, Down, Down])
    );
}
