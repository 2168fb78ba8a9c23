//! ONNX model loading and batched inference.
//!
//! Requires the `onnx` feature to be enabled.

use crate::error::OracleError;
use crate::features::{FeatureVector, SQUARES};
use crate::oracle::ScoreOracle;
use std::path::Path;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A model mapping `(N, 64)` piece codes to `N` scores.
pub struct OnnxOracle {
    model: Plan,
    /// Batch size baked into the model, if it is not symbolic
    fixed_batch: Option<usize>,
}

impl OnnxOracle {
    /// Load an ONNX model from the given path.
    pub fn load(path: &Path) -> Result<Self, OracleError> {
        let fail = |stage: &str, e: TractError| {
            OracleError::Model(format!("{stage} {}: {e}", path.display()))
        };
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| fail("failed to load", e))?
            .into_optimized()
            .map_err(|e| fail("failed to optimize", e))?
            .into_runnable()
            .map_err(|e| fail("failed to prepare", e))?;

        let input_fact = model
            .model()
            .input_fact(0)
            .map_err(|e| fail("no input in", e))?;
        let fixed_batch = input_fact
            .shape
            .iter()
            .next()
            .and_then(|d| d.to_i64().ok())
            .map(|d| d as usize);

        Ok(Self { model, fixed_batch })
    }

    fn run(&self, rows: &[FeatureVector]) -> Result<Vec<f32>, OracleError> {
        let data: Vec<f32> = rows
            .iter()
            .flat_map(|fv| fv.iter().map(|&c| c as f32))
            .collect();
        let input: Tensor = tract_ndarray::Array2::from_shape_vec((rows.len(), SQUARES), data)
            .map_err(|e| OracleError::Model(e.to_string()))?
            .into();

        let result = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| OracleError::Model(e.to_string()))?;
        let output = result[0]
            .to_array_view::<f32>()
            .map_err(|e| OracleError::Model(e.to_string()))?;

        // First column of an (N, k) output.
        let per_row = (output.len() / rows.len().max(1)).max(1);
        Ok(output.iter().step_by(per_row).copied().collect())
    }
}

impl ScoreOracle for OnnxOracle {
    fn score(&self, batch: &[FeatureVector]) -> Result<Vec<f32>, OracleError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        match self.fixed_batch {
            Some(n) if n != batch.len() => {
                let mut scores = Vec::with_capacity(batch.len());
                for row in batch {
                    scores.extend(self.run(std::slice::from_ref(row))?);
                }
                Ok(scores)
            }
            _ => self.run(batch),
        }
    }

    fn name(&self) -> &str {
        "onnx"
    }
}
