use chess::{Board, Color, ALL_PIECES};

/// Counts every (piece type, color) combination on the board.
///
/// The order is fixed: the six white piece types first (pawn, knight,
/// bishop, rook, queen, king), then the same six for black. Evaluation
/// weights and the classifier feature vector both index into this order.
pub fn piece_counts(board: &Board) -> [u32; 12] {
    let mut counts = [0u32; 12];

    let white = board.color_combined(Color::White);
    let black = board.color_combined(Color::Black);

    for (i, piece) in ALL_PIECES.iter().enumerate() {
        counts[i] = (board.pieces(*piece) & white).popcnt();
        counts[i + 6] = (board.pieces(*piece) & black).popcnt();
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_counts() {
        let counts = piece_counts(&Board::default());
        assert_eq!(counts, [8, 2, 2, 2, 1, 1, 8, 2, 2, 2, 1, 1]);
    }

    #[test]
    fn bare_kings() {
        let board = Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let counts = piece_counts(&board);
        assert_eq!(counts, [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
    }
}
