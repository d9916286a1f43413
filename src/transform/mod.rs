//! The stroke transform library.
//!
//! Every transform has a stable kebab-case name (used for provenance labels)
//! and one operation, `apply(&Composition, &mut impl RandomSource)`, that
//! returns a new composition. Transforms never read a global generator and
//! never mutate their input; the same seed replays the same output. Every
//! coordinate a transform moves is clamped to `[0, 1]` and rounded to three
//! decimals, and timing channels are carried through verbatim.

pub(crate) mod affine;
pub(crate) mod jitter;
pub(crate) mod ornament;
pub(crate) mod resample;

use std::str::FromStr;

use crate::{
    composition::model::Composition,
    foundation::error::{DoodleError, DoodleResult},
    foundation::rng::RandomSource,
};

pub use affine::{Rotation, TranslationJitter, UniformScale, mirror_horizontal};
pub use jitter::{PointNoise, StrokeSubsample};
pub use ornament::{EmbellishmentMode, StrokeElaboration, StrokeEmbellishment};
pub use resample::{StrokeRefinement, StrokeSmoothing};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// A named, parameterized transform.
///
/// Serialized as `{"kind": "<name>", ...params}`; omitted parameters take
/// their defaults.
pub enum StrokeTransform {
    /// `x' = 1 - x`. Consumes no randomness.
    HorizontalMirror,
    /// Rotation about the canvas center.
    Rotation(Rotation),
    /// Scale about the composition's own bounding-box center.
    UniformScale(UniformScale),
    /// Translation that keeps the bounding box on the canvas.
    TranslationJitter(TranslationJitter),
    /// Independent Gaussian noise on every coordinate.
    PointNoise(PointNoise),
    /// Drop one or two whole strokes from busy fragments.
    StrokeSubsample(StrokeSubsample),
    /// Catmull-Rom densification.
    StrokeSmoothing(StrokeSmoothing),
    /// Uniform arc-length resampling.
    StrokeRefinement(StrokeRefinement),
    /// Parallel offset copies of every stroke.
    StrokeElaboration(StrokeElaboration),
    /// Shadow, echo or connector decoration.
    StrokeEmbellishment(StrokeEmbellishment),
}

impl StrokeTransform {
    /// Every transform name, in canonical library order.
    pub const NAMES: [&'static str; 10] = [
        "horizontal-mirror",
        "rotation",
        "uniform-scale",
        "translation-jitter",
        "point-noise",
        "stroke-subsample",
        "stroke-smoothing",
        "stroke-refinement",
        "stroke-elaboration",
        "stroke-embellishment",
    ];

    /// The full library with default parameters, in canonical order.
    pub fn library() -> Vec<Self> {
        vec![
            Self::HorizontalMirror,
            Self::Rotation(Rotation::default()),
            Self::UniformScale(UniformScale::default()),
            Self::TranslationJitter(TranslationJitter::default()),
            Self::PointNoise(PointNoise::default()),
            Self::StrokeSubsample(StrokeSubsample::default()),
            Self::StrokeSmoothing(StrokeSmoothing::default()),
            Self::StrokeRefinement(StrokeRefinement::default()),
            Self::StrokeElaboration(StrokeElaboration::default()),
            Self::StrokeEmbellishment(StrokeEmbellishment::default()),
        ]
    }

    /// Stable name used in method labels.
    pub fn name(&self) -> &'static str {
        let idx = match self {
            Self::HorizontalMirror => 0,
            Self::Rotation(_) => 1,
            Self::UniformScale(_) => 2,
            Self::TranslationJitter(_) => 3,
            Self::PointNoise(_) => 4,
            Self::StrokeSubsample(_) => 5,
            Self::StrokeSmoothing(_) => 6,
            Self::StrokeRefinement(_) => 7,
            Self::StrokeElaboration(_) => 8,
            Self::StrokeEmbellishment(_) => 9,
        };
        Self::NAMES[idx]
    }

    /// Apply to `comp`, drawing any randomness from `rng`.
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        match self {
            Self::HorizontalMirror => mirror_horizontal(comp),
            Self::Rotation(t) => t.apply(comp, rng),
            Self::UniformScale(t) => t.apply(comp, rng),
            Self::TranslationJitter(t) => t.apply(comp, rng),
            Self::PointNoise(t) => t.apply(comp, rng),
            Self::StrokeSubsample(t) => t.apply(comp, rng),
            Self::StrokeSmoothing(t) => t.apply(comp),
            Self::StrokeRefinement(t) => t.apply(comp),
            Self::StrokeElaboration(t) => t.apply(comp, rng),
            Self::StrokeEmbellishment(t) => t.apply(comp, rng),
        }
    }

    /// Reject parameter sets that cannot produce sensible output.
    pub fn validate(&self) -> DoodleResult<()> {
        let name = self.name();
        let ensure = |ok: bool, what: &str| {
            if ok {
                Ok(())
            } else {
                Err(DoodleError::validation(format!("{name}: {what}")))
            }
        };
        match self {
            Self::HorizontalMirror => Ok(()),
            Self::Rotation(t) => ensure(
                t.max_degrees.is_finite() && t.max_degrees >= 0.0,
                "max_degrees must be finite and >= 0",
            ),
            Self::UniformScale(t) => ensure(
                ordered_finite(t.min_scale, t.max_scale) && t.min_scale > 0.0,
                "scale range must be finite with 0 < min_scale <= max_scale",
            ),
            Self::TranslationJitter(t) => ensure(
                t.max_offset.is_finite() && t.max_offset >= 0.0,
                "max_offset must be finite and >= 0",
            ),
            Self::PointNoise(t) => ensure(
                t.sigma.is_finite() && t.sigma >= 0.0,
                "sigma must be finite and >= 0",
            ),
            Self::StrokeSubsample(t) => ensure(
                t.max_removed >= 1 && t.min_strokes > t.max_removed,
                "need max_removed >= 1 and min_strokes > max_removed",
            ),
            Self::StrokeSmoothing(t) => ensure(t.resolution >= 1, "resolution must be >= 1"),
            Self::StrokeRefinement(t) => ensure(
                t.multiplier.is_finite() && t.multiplier > 0.0 && t.min_points >= 2,
                "multiplier must be > 0 and min_points >= 2",
            ),
            Self::StrokeElaboration(t) => ensure(
                ordered_finite(t.min_offset, t.max_offset) && t.min_offset >= 0.0,
                "offset range must be finite with 0 <= min_offset <= max_offset",
            ),
            Self::StrokeEmbellishment(t) => ensure(
                ordered_finite(t.min_shadow_offset, t.max_shadow_offset)
                    && t.min_shadow_offset >= 0.0
                    && ordered_finite(t.min_echo_scale, t.max_echo_scale)
                    && t.min_echo_scale > 0.0,
                "shadow and echo ranges must be finite, ordered and positive",
            ),
        }
    }
}

/// Both ends finite and `lo <= hi`.
fn ordered_finite(lo: f64, hi: f64) -> bool {
    lo.is_finite() && hi.is_finite() && lo <= hi
}

impl FromStr for StrokeTransform {
    type Err = DoodleError;

    /// Parse a transform name into its default-parameter variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::library()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| DoodleError::precondition(format!("unknown transform '{name}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/mod.rs"]
mod tests;
