//! Whole-composition affine transforms: mirror, rotation, scale, translation.

use crate::{
    composition::model::Composition,
    foundation::core::{Affine, Point, Vec2, snap_coordinate, snap_point},
    foundation::rng::RandomSource,
    geometry::bounds::{bounding_box, has_area},
    geometry::placement::transform_points,
};

const CANVAS_CENTER: Point = Point::new(0.5, 0.5);

/// `f` conjugated by a translation to `center`.
#[inline]
fn about(center: Point, f: Affine) -> Affine {
    Affine::translate(center.to_vec2()) * f * Affine::translate(-center.to_vec2())
}

fn apply_affine(comp: &Composition, m: Affine) -> Composition {
    transform_points(comp, |p| snap_point(m * p), None)
}

/// `x' = 1 - x`, y unchanged.
pub fn mirror_horizontal(comp: &Composition) -> Composition {
    transform_points(comp, |p| Point::new(snap_coordinate(1.0 - p.x), p.y), None)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Rotate about `(0.5, 0.5)` by a uniform angle in `±max_degrees`.
pub struct Rotation {
    pub max_degrees: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self { max_degrees: 15.0 }
    }
}

impl Rotation {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        let degrees = rng.signed_unit() * self.max_degrees;
        self.rotate_by(comp, degrees)
    }

    /// Rotate by a fixed angle.
    pub fn rotate_by(&self, comp: &Composition, degrees: f64) -> Composition {
        apply_affine(comp, about(CANVAS_CENTER, Affine::rotate(degrees.to_radians())))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Scale about the bounding-box center by a factor in `[min_scale, max_scale)`.
pub struct UniformScale {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for UniformScale {
    fn default() -> Self {
        Self {
            min_scale: 0.6,
            max_scale: 0.9,
        }
    }
}

impl UniformScale {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        // Drawn before the degenerate check so the stream advances either way.
        let factor = rng.uniform(self.min_scale, self.max_scale);
        let bbox = bounding_box(comp);
        if !has_area(bbox) {
            return comp.clone();
        }
        apply_affine(comp, about(bbox.center(), Affine::scale(factor)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Translate by up to `±max_offset` per axis without leaving the canvas.
pub struct TranslationJitter {
    pub max_offset: f64,
}

impl Default for TranslationJitter {
    fn default() -> Self {
        Self { max_offset: 0.15 }
    }
}

impl TranslationJitter {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        let dx = rng.signed_unit() * self.max_offset;
        let dy = rng.signed_unit() * self.max_offset;

        let bbox = bounding_box(comp);
        // `max` then `min` rather than `clamp`: an oversized box yields lo > hi.
        let shift = Vec2::new(
            dx.max(-bbox.x0).min(1.0 - bbox.x1),
            dy.max(-bbox.y0).min(1.0 - bbox.y1),
        );
        apply_affine(comp, Affine::translate(shift))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
