use chess::Board;
use utils::{measure_mobility, piece_counts};

/// Width of the classifier input: twelve piece counts plus both sides'
/// legal-move counts.
pub const NUM_FEATURES: usize = 14;

/// Builds the classifier input for a position: the fixed-order piece
/// counts followed by white and black mobility.
pub fn feature_vector(board: &Board) -> [f32; NUM_FEATURES] {
    let counts = piece_counts(board);
    let mobility = measure_mobility(board);

    let mut features = [0.0f32; NUM_FEATURES];
    for (i, &count) in counts.iter().enumerate() {
        features[i] = count as f32;
    }
    features[12] = mobility.white_moves as f32;
    features[13] = mobility.black_moves as f32;

    features
}
