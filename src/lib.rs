//! doodlegen turns normalized doodle drawings into training and gallery material.
//!
//! The engine is a pure, single-threaded library:
//!
//! - Load or build a [`Composition`] (normalized `[0, 1]` strokes grouped in fragments)
//! - Score it with the [`QualityValidator`]
//! - Derive randomized variations with an [`AugmentationPipeline`] of [`StrokeTransform`]s
//! - Lay several subjects out on one canvas with [`compose_scene`] and a [`SceneTemplate`]
//!
//! All randomness flows through an explicit [`RandomSource`]; a [`SeededRng`]
//! with the same seed replays the same output.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod augment;
pub(crate) mod composition;
pub(crate) mod geometry;
pub(crate) mod quality;
pub(crate) mod scene;
/// The stroke transform library.
pub mod transform;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use crate::foundation::core::{
    Affine, CANVAS_SIZE, COORDINATE_PRECISION, Point, Rect, Vec2, clamp_coordinate,
    round_coordinate, snap_coordinate,
};
pub use crate::foundation::error::{DoodleError, DoodleResult};
pub use crate::foundation::rng::{RandomSource, SeededRng};

pub use crate::augment::pipeline::{AugmentationPipeline, Variation};
pub use crate::composition::dsl::{CompositionBuilder, FragmentBuilder};
pub use crate::composition::model::{Composition, Fragment, Stroke};
pub use crate::composition::normalize::{
    SIMPLE_SOURCE_TAG, normalize_simple_drawing, normalize_simple_strokes,
};
pub use crate::geometry::bounds::{bounding_box, count_points, count_strokes, has_area};
pub use crate::geometry::placement::{place_in_region, transform_points};
pub use crate::quality::policy::GenerationPolicy;
pub use crate::quality::validator::{
    Quality, QualityThresholds, QualityValidator, Rejection, ScoreWeights, validate_composition,
};
pub use crate::scene::composer::{
    Scene, SlotAssignment, compose_scene, draft_assignments, scene_method,
};
pub use crate::scene::template::{DEFAULT_FILL_FACTOR, SceneSlot, SceneTemplate};
pub use crate::transform::{EmbellishmentMode, StrokeTransform};
