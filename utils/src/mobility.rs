use chess::{Board, Color, MoveGen};

/// Legal-move counts and origin-square concentration for both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mobility {
    pub white_moves: f64,
    pub black_moves: f64,
    pub white_concentration: f64,
    pub black_concentration: f64,
}

/// Measures both sides' mobility from a single position.
///
/// The side to move is counted directly. The opponent is counted through a
/// null move: the turn passes without touching material, the opponent's
/// legal moves are generated, and the original board is left untouched
/// (copy-make).
pub fn measure_mobility(board: &Board) -> Mobility {
    let (mover_moves, mover_concentration) = side_to_move_mobility(board);

    // A null move is illegal while in check; the opponent is then scored
    // as having no mobility at all.
    let (other_moves, other_concentration) = match board.null_move() {
        Some(passed) => side_to_move_mobility(&passed),
        None => (0.0, 1.0),
    };

    match board.side_to_move() {
        Color::White => Mobility {
            white_moves: mover_moves,
            black_moves: other_moves,
            white_concentration: mover_concentration,
            black_concentration: other_concentration,
        },
        Color::Black => Mobility {
            white_moves: other_moves,
            black_moves: mover_moves,
            white_concentration: other_concentration,
            black_concentration: mover_concentration,
        },
    }
}

/// Move count plus the concentration statistic for the side to move.
///
/// Concentration is the raw product of per-origin-square move-group sizes,
/// not a normalized entropy. An empty move set yields 1.0.
fn side_to_move_mobility(board: &Board) -> (f64, f64) {
    let mut groups = [0u32; 64];
    let mut count = 0u32;

    for mv in MoveGen::new_legal(board) {
        groups[mv.get_source().to_index()] += 1;
        count += 1;
    }

    let concentration = groups
        .iter()
        .filter(|&&size| size > 0)
        .fold(1.0, |product, &size| product * size as f64);

    (count as f64, concentration)
}
