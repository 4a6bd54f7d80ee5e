/// Scaling applied to the white material values to obtain the black ones.
/// Not a plain negation; the asymmetry is intentional and load-bearing.
pub const BLACK_MATERIAL_SCALE: f64 = -0.97;

const WHITE_MATERIAL: [f64; 6] = [1.0, 3.0, 3.3, 4.2, 9.0, 15.0];

/// Weights for the heuristic evaluation terms.
#[derive(Clone, Copy, Debug)]
pub struct Weights {
    /// Material value per (piece type, color), indexed like
    /// [`utils::piece_counts`]: white pawn..king, then black pawn..king.
    pub material: [f64; 12],
    /// Multiplier for the mobility differential.
    pub mobility: f64,
    /// Multiplier for the pawn-advancement differential.
    pub pawn_advance: f64,
    /// Reserved multiplier for the origin-square concentration statistic.
    pub concentration: f64,
}

impl Default for Weights {
    fn default() -> Self {
        let mut material = [0.0; 12];
        for (i, value) in WHITE_MATERIAL.iter().enumerate() {
            material[i] = *value;
            material[i + 6] = BLACK_MATERIAL_SCALE * value;
        }

        Self {
            material,
            mobility: 0.1,
            pawn_advance: 0.05,
            concentration: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_material_is_scaled_not_negated() {
        let weights = Weights::default();

        for i in 0..6 {
            let white = weights.material[i];
            let black = weights.material[i + 6];

            assert_eq!(black, BLACK_MATERIAL_SCALE * white);
            assert_ne!(black, -white);
        }
    }

    #[test]
    fn white_material_is_ordered_by_strength() {
        let weights = Weights::default();
        for i in 0..5 {
            assert!(weights.material[i] < weights.material[i + 1]);
        }
    }
}
