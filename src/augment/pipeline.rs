use crate::{
    composition::model::Composition,
    foundation::error::{DoodleError, DoodleResult},
    foundation::rng::RandomSource,
    quality::validator::{Quality, QualityValidator},
    transform::StrokeTransform,
};

/// Separator between transform names in a method label.
pub const METHOD_SEPARATOR: &str = "+";

/// Shortest and longest transform chain (inclusive) per attempt.
pub const CHAIN_LEN: (usize, usize) = (1, 3);

#[derive(Clone, Debug, PartialEq)]
/// One accepted augmentation attempt.
pub struct Variation {
    pub composition: Composition,
    /// Transform names in application order, joined with `+`.
    pub method: String,
    pub quality: Quality,
}

impl Variation {
    /// Re-tag as an augmented sample of `word`.
    pub fn into_augmented(self, word: &str) -> Self {
        let tags = vec!["generated".to_string(), "augmented".to_string(), word.to_string()];
        Self {
            composition: self.composition.with_tags(tags),
            ..self
        }
    }

    /// Provenance label stored alongside a persisted variation.
    pub fn generation_method(&self) -> String {
        format!("augmented-{}", self.method)
    }

    /// Transform names, in the order they were applied.
    pub fn transforms(&self) -> impl Iterator<Item = &str> + '_ {
        self.method.split(METHOD_SEPARATOR)
    }
}

/// Chains randomly chosen transforms and keeps results that pass the quality check.
#[derive(Clone, Debug)]
pub struct AugmentationPipeline {
    transforms: Vec<StrokeTransform>,
    validator: QualityValidator,
}

impl Default for AugmentationPipeline {
    fn default() -> Self {
        Self {
            transforms: StrokeTransform::library(),
            validator: QualityValidator::default(),
        }
    }
}

impl AugmentationPipeline {
    /// A pipeline drawing from `transforms`, which must be non-empty and valid.
    pub fn new(transforms: Vec<StrokeTransform>) -> DoodleResult<Self> {
        if transforms.is_empty() {
            return Err(DoodleError::precondition(
                "augmentation pipeline needs at least one transform",
            ));
        }
        for t in &transforms {
            t.validate()?;
        }
        Ok(Self {
            transforms,
            validator: QualityValidator::default(),
        })
    }

    /// Replace the quality validator used to filter attempts.
    pub fn with_validator(mut self, validator: QualityValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn transforms(&self) -> &[StrokeTransform] {
        &self.transforms
    }

    /// Run `count` independent attempts against `source`.
    ///
    /// Each attempt draws a chain length in `1..=3` (capped by the library
    /// size), shuffles the library and applies its prefix in order. Rejected
    /// attempts yield nothing and are not retried, so the result holds at
    /// most `count` variations. The same source, count and seed reproduce the
    /// same output.
    #[tracing::instrument(skip(self, source, rng), fields(transforms = self.transforms.len()))]
    pub fn generate_variations<R: RandomSource>(
        &self,
        source: &Composition,
        count: usize,
        rng: &mut R,
    ) -> Vec<Variation> {
        let mut out = Vec::with_capacity(count);
        for attempt in 0..count {
            let (composition, method) = self.attempt(source, rng);
            let quality = self.validator.validate(&composition);
            match quality.rejection {
                Some(reason) => {
                    tracing::debug!(attempt, %method, %reason, "variation rejected");
                }
                None => {
                    tracing::trace!(attempt, %method, score = quality.score, "variation accepted");
                    out.push(Variation {
                        composition,
                        method,
                        quality,
                    });
                }
            }
        }
        out
    }

    fn attempt<R: RandomSource>(&self, source: &Composition, rng: &mut R) -> (Composition, String) {
        let len = rng
            .range_usize(CHAIN_LEN.0, CHAIN_LEN.1 + 1)
            .min(self.transforms.len());
        let mut order: Vec<&StrokeTransform> = self.transforms.iter().collect();
        rng.shuffle(&mut order);
        let chain = &order[..len];

        let mut current = source.clone();
        for t in chain {
            current = t.apply(&current, rng);
        }
        let method = chain
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(METHOD_SEPARATOR);
        (current, method)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/augment/pipeline.rs"]
mod tests;
