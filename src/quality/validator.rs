//! Structural rejection and heuristic 0..1 quality scoring.
//!
//! A composition is rejected, in this order, when it has no fragments, no
//! strokes, too few points, any coordinate outside `[0, 1]`, or a bounding
//! box covering too little of the canvas. Anything else gets a weighted
//! score of four sub-scores: stroke count, point count, coverage and
//! squareness of the bounding box.

use std::fmt;

use crate::{
    composition::model::Composition,
    foundation::core::round_to,
    foundation::error::{DoodleError, DoodleResult},
    geometry::bounds::{bounding_box, count_points, count_strokes},
};

const SCORE_PRECISION: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Relative weight of each sub-score in the final score.
pub struct ScoreWeights {
    pub stroke: f64,
    pub point: f64,
    pub coverage: f64,
    pub balance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            stroke: 0.15,
            point: 0.15,
            coverage: 0.40,
            balance: 0.30,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunable thresholds and peak targets of the quality heuristic.
pub struct QualityThresholds {
    /// Fewer total points than this is rejected.
    pub min_total_points: usize,
    /// Bounding-box area below this is rejected.
    pub min_bbox_coverage: f64,
    /// Stroke count that earns full stroke credit.
    pub ideal_stroke_count: f64,
    /// Stroke credit lost per stroke away from the ideal, as `1 / falloff`.
    pub stroke_falloff: f64,
    /// Above this many strokes the stroke score is flat.
    pub max_scored_strokes: usize,
    /// Flat stroke score for very busy drawings.
    pub many_strokes_score: f64,
    /// Point count that earns full point credit.
    pub ideal_point_count: f64,
    pub point_falloff: f64,
    /// Above this many points the point score switches to the asymptotic form.
    pub max_linear_points: usize,
    pub many_points_base: f64,
    pub many_points_divisor: f64,
    /// Bounding-box area that earns full coverage credit.
    pub full_coverage: f64,
    pub weights: ScoreWeights,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_total_points: 5,
            min_bbox_coverage: 0.10,
            ideal_stroke_count: 7.0,
            stroke_falloff: 20.0,
            max_scored_strokes: 30,
            many_strokes_score: 0.8,
            ideal_point_count: 80.0,
            point_falloff: 500.0,
            max_linear_points: 200,
            many_points_base: 0.7,
            many_points_divisor: 5000.0,
            full_coverage: 0.6,
            weights: ScoreWeights::default(),
        }
    }
}

impl QualityThresholds {
    /// Reject configurations that would divide by zero or weight negatively.
    pub fn validate(&self) -> DoodleResult<()> {
        for (name, value) in [
            ("stroke_falloff", self.stroke_falloff),
            ("point_falloff", self.point_falloff),
            ("many_points_divisor", self.many_points_divisor),
            ("full_coverage", self.full_coverage),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DoodleError::validation(format!(
                    "quality threshold {name} must be finite and > 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.min_bbox_coverage) {
            return Err(DoodleError::validation(
                "quality threshold min_bbox_coverage must be in [0, 1]",
            ));
        }
        let w = self.weights;
        for (name, value) in [
            ("stroke", w.stroke),
            ("point", w.point),
            ("coverage", w.coverage),
            ("balance", w.balance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DoodleError::validation(format!(
                    "score weight {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Why a composition was rejected.
pub enum Rejection {
    NoFragments,
    NoStrokes,
    TooFewPoints { found: usize, required: usize },
    OutOfBounds,
    InsufficientCoverage { coverage: f64, required: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFragments => f.write_str("no fragments"),
            Self::NoStrokes => f.write_str("no strokes"),
            Self::TooFewPoints { found, required } => {
                write!(f, "{found} points, need at least {required}")
            }
            Self::OutOfBounds => f.write_str("coordinate outside [0, 1]"),
            Self::InsufficientCoverage { coverage, required } => {
                write!(f, "bbox coverage {coverage:.4} below {required}")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of a quality check. Rejection is an ordinary outcome, not an error.
pub struct Quality {
    /// Score in `[0, 1]`, rounded to 4 decimals; 0 when rejected.
    pub score: f64,
    /// Set when the composition must be discarded.
    pub rejection: Option<Rejection>,
}

impl Quality {
    fn rejected(reason: Rejection) -> Self {
        Self {
            score: 0.0,
            rejection: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Scores compositions against a set of [`QualityThresholds`].
#[derive(Clone, Debug, Default)]
pub struct QualityValidator {
    thresholds: QualityThresholds,
}

impl QualityValidator {
    pub fn new(thresholds: QualityThresholds) -> DoodleResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &QualityThresholds {
        &self.thresholds
    }

    /// Reject or score `comp`.
    pub fn validate(&self, comp: &Composition) -> Quality {
        let t = &self.thresholds;

        if comp.doodle_fragments.is_empty() {
            return Quality::rejected(Rejection::NoFragments);
        }
        let strokes = count_strokes(comp);
        if strokes == 0 {
            return Quality::rejected(Rejection::NoStrokes);
        }
        let points = count_points(comp);
        if points < t.min_total_points {
            return Quality::rejected(Rejection::TooFewPoints {
                found: points,
                required: t.min_total_points,
            });
        }
        let in_unit = |v: &f64| (0.0..=1.0).contains(v);
        if comp
            .strokes()
            .any(|s| !s.xs.iter().all(in_unit) || !s.ys.iter().all(in_unit))
        {
            return Quality::rejected(Rejection::OutOfBounds);
        }

        let bbox = bounding_box(comp);
        let (bbox_w, bbox_h) = (bbox.width(), bbox.height());
        let coverage = bbox_w * bbox_h;
        if coverage < t.min_bbox_coverage {
            return Quality::rejected(Rejection::InsufficientCoverage {
                coverage,
                required: t.min_bbox_coverage,
            });
        }

        let stroke_score = if strokes <= t.max_scored_strokes {
            1.0 - (strokes as f64 - t.ideal_stroke_count).abs() / t.stroke_falloff
        } else {
            t.many_strokes_score
        };
        let point_score = if points <= t.max_linear_points {
            1.0 - (points as f64 - t.ideal_point_count).abs() / t.point_falloff
        } else {
            (t.many_points_base + points as f64 / t.many_points_divisor).min(1.0)
        };
        let coverage_score = (coverage / t.full_coverage).min(1.0);
        let balance_score = 1.0 - (bbox_w - bbox_h).abs();

        let w = t.weights;
        let score = (stroke_score * w.stroke
            + point_score * w.point
            + coverage_score * w.coverage
            + balance_score * w.balance)
            .max(0.0);

        Quality {
            score: round_to(score, SCORE_PRECISION),
            rejection: None,
        }
    }
}

/// Reject or score `comp` with the default thresholds.
pub fn validate_composition(comp: &Composition) -> Quality {
    QualityValidator::default().validate(comp)
}

#[cfg(test)]
#[path = "../../tests/unit/quality/validator.rs"]
mod tests;
