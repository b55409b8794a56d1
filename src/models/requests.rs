use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Request to score a set of quiz answers.
///
/// `answers` is a sparse map of dimension name to value; unanswered
/// dimensions are filled from the national average. Keys that are not
/// profile dimensions are ignored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: HashMap<String, f64>,
}

impl Validate for ScoreRequest {
    /// The engine performs no clamping, so the request boundary is where the
    /// [0, 10] contract is enforced.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (key, value) in &self.answers {
            if !value.is_finite() || *value < 0.0 || *value > 10.0 {
                let mut error = ValidationError::new("answer_out_of_range");
                error.message = Some(format!("answer '{}' must be within [0, 10]", key).into());
                errors.add("answers", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
