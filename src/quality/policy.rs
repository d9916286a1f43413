use crate::{
    foundation::error::{DoodleError, DoodleResult},
    quality::validator::Quality,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Acceptance policy applied on top of the validator by batch generation.
pub struct GenerationPolicy {
    /// Valid results scoring below this are discarded.
    pub min_quality: f64,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self { min_quality: 0.30 }
    }
}

impl GenerationPolicy {
    pub fn validate(&self) -> DoodleResult<()> {
        if !(0.0..=1.0).contains(&self.min_quality) {
            return Err(DoodleError::validation("min_quality must be in [0, 1]"));
        }
        Ok(())
    }

    /// True when `quality` is valid and scores at least `min_quality`.
    pub fn admits(&self, quality: &Quality) -> bool {
        quality.is_valid() && quality.score >= self.min_quality
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quality/policy.rs"]
mod tests;
