use crate::error::OracleError;
use crate::features::{FeatureVector, PIECE_CODES, SQUARES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scores a batch of encoded positions.
///
/// Scores come back in batch order, one per vector, each from the point of
/// view of the side that just moved into the position (lowercase pieces).
pub trait ScoreOracle {
    fn score(&self, batch: &[FeatureVector]) -> Result<Vec<f32>, OracleError>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "oracle"
    }
}

/// Linear evaluation: a weight per piece code plus an optional per-square
/// bonus for each code.
///
/// The JSON artifact looks like
/// `{"piece_values": [13 numbers], "square_bonus": [[64 numbers]; 13], "bias": 0.0}`
/// with `square_bonus` and `bias` optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearOracle {
    pub piece_values: [f32; PIECE_CODES],
    #[serde(default)]
    pub square_bonus: Option<Vec<Vec<f32>>>,
    #[serde(default)]
    pub bias: f32,
}

const MATERIAL: [f32; 6] = [100.0, 320.0, 330.0, 500.0, 900.0, 0.0];

impl Default for LinearOracle {
    fn default() -> Self {
        Self::material()
    }
}

impl LinearOracle {
    /// Plain material count: pieces of the side that just moved count for
    /// it, pieces of the side to move count against it.
    pub fn material() -> Self {
        let mut piece_values = [0.0; PIECE_CODES];
        for (i, &v) in MATERIAL.iter().enumerate() {
            piece_values[1 + i] = v;
            piece_values[7 + i] = -v;
        }
        Self {
            piece_values,
            square_bonus: None,
            bias: 0.0,
        }
    }

    /// Parses and validates a JSON weight artifact.
    pub fn from_json(text: &str) -> Result<Self, OracleError> {
        let oracle: LinearOracle = serde_json::from_str(text)?;
        oracle.validate()?;
        Ok(oracle)
    }

    /// Loads a JSON weight artifact from disk.
    pub fn load(path: &Path) -> Result<Self, OracleError> {
        let text = std::fs::read_to_string(path).map_err(|source| OracleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), OracleError> {
        let Some(bonus) = &self.square_bonus else {
            return Ok(());
        };
        if bonus.len() != PIECE_CODES {
            return Err(OracleError::Artifact(format!(
                "square_bonus has {} tables, expected {PIECE_CODES}",
                bonus.len()
            )));
        }
        if let Some((code, table)) = bonus.iter().enumerate().find(|(_, t)| t.len() != SQUARES) {
            return Err(OracleError::Artifact(format!(
                "square_bonus[{code}] has {} entries, expected {SQUARES}",
                table.len()
            )));
        }
        Ok(())
    }

    fn evaluate(&self, features: &FeatureVector) -> f32 {
        let mut total = self.bias;
        for (sq, &code) in features.iter().enumerate() {
            let code = code as usize;
            total += self.piece_values.get(code).copied().unwrap_or(0.0);
            if let Some(bonus) = &self.square_bonus {
                total += bonus
                    .get(code)
                    .and_then(|t| t.get(sq))
                    .copied()
                    .unwrap_or(0.0);
            }
        }
        total
    }
}

impl ScoreOracle for LinearOracle {
    fn score(&self, batch: &[FeatureVector]) -> Result<Vec<f32>, OracleError> {
        Ok(batch.iter().map(|fv| self.evaluate(fv)).collect())
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod oracle_tests;
