use std::path::{Path, PathBuf};

use candle_core::{DType, Device, Tensor};
use candle_nn::{Module, VarBuilder, VarMap};
use chess::Board;
use evaluation::Evaluator;
use log::info;
use thiserror::Error;

use crate::features::{feature_vector, NUM_FEATURES};
use crate::network::Network;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found at {0}")]
    ArtifactMissing(PathBuf),
    #[error("failed to load model artifact at {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: candle_core::Error,
    },
}

/// Classifier-backed evaluation: the valuation is the probability the
/// trained model assigns to the White-favorable class.
///
/// Unlike the heuristic evaluator, this variant does not consult or
/// populate the valuation cache; cached values are defined only for the
/// heuristic terms.
#[derive(Debug)]
pub struct ModelEvaluator {
    network: Network,
    device: Device,
}

impl ModelEvaluator {
    /// Loads the classifier artifact. A missing artifact is refused here,
    /// before any search starts, rather than when the first leaf is
    /// scored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::ArtifactMissing(path.to_path_buf()));
        }

        let device = Device::Cpu;
        let mut varmap = VarMap::new();
        let vs = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let network = Network::new(&vs).map_err(|err| ModelError::Load {
            path: path.to_path_buf(),
            source: err,
        })?;

        varmap.load(path).map_err(|err| ModelError::Load {
            path: path.to_path_buf(),
            source: err,
        })?;

        info!("loaded model artifact from {}", path.display());

        Ok(Self { network, device })
    }
}

impl Evaluator for ModelEvaluator {
    fn name(&self) -> String {
        "model".to_string()
    }

    fn evaluate(&mut self, board: &Board) -> f64 {
        let features = feature_vector(board);
        let input = Tensor::from_slice(&features, (1, NUM_FEATURES), &self.device)
            .expect("feature tensor has a fixed shape");
        let logit = self
            .network
            .forward(&input)
            .expect("model inference failed");
        let probability = candle_nn::ops::sigmoid(&logit)
            .and_then(|t| t.get(0))
            .and_then(|t| t.get(0))
            .and_then(|t| t.to_scalar::<f32>())
            .expect("model output is a single scalar");

        probability as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_refused_before_any_search() {
        let err = ModelEvaluator::from_file("does/not/exist.safetensors").unwrap_err();
        assert!(matches!(err, ModelError::ArtifactMissing(_)));
    }

    #[test]
    fn saved_artifact_loads_and_scores_in_unit_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.safetensors");

        let varmap = VarMap::new();
        let vs = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
        Network::new(&vs).unwrap();
        varmap.save(&path).unwrap();

        let mut evaluator = ModelEvaluator::from_file(&path).unwrap();
        let valuation = evaluator.evaluate(&Board::default());
        assert!((0.0..=1.0).contains(&valuation));
    }

    #[test]
    fn unreadable_artifact_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.safetensors");
        std::fs::write(&path, b"not a safetensors file").unwrap();

        let err = ModelEvaluator::from_file(&path).unwrap_err();
        assert!(matches!(err, ModelError::Load { .. }));
    }
}
