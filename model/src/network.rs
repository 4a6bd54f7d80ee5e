use candle_core::{Result, Tensor};
use candle_nn::{linear, Linear, Module, VarBuilder};

use crate::features::NUM_FEATURES;

pub const HIDDEN_SIZE: usize = 16;

// Candle-compatible network definition; the artifact stores one tensor
// per layer parameter under the names assigned here.
#[derive(Debug)]
pub struct Network {
    hidden: Linear,
    output: Linear,
}

impl Network {
    pub fn new(vs: &VarBuilder) -> Result<Self> {
        Ok(Self {
            hidden: linear(NUM_FEATURES, HIDDEN_SIZE, vs.pp("hidden"))?,
            output: linear(HIDDEN_SIZE, 1, vs.pp("output"))?,
        })
    }
}

impl Module for Network {
    #[inline]
    fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let x = x.apply(&self.hidden)?.relu()?;
        x.apply(&self.output)
    }
}
