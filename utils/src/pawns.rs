use chess::{Board, Color, Piece};

/// Total advancement of a side's pawns: for each pawn, the number of ranks
/// it has travelled from its starting rank.
pub fn pawn_advancement(board: &Board, color: Color) -> f64 {
    let pawns = board.pieces(Piece::Pawn) & board.color_combined(color);

    pawns
        .map(|sq| {
            let rank = sq.get_rank().to_index();
            match color {
                Color::White => rank.saturating_sub(1),
                Color::Black => 6usize.saturating_sub(rank),
            }
        })
        .sum::<usize>() as f64
}
