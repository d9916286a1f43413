//! Random perturbations: per-coordinate noise and stroke removal.

use std::f64::consts::TAU;

use crate::{
    composition::model::{Composition, Fragment},
    foundation::core::{Point, snap_point},
    foundation::rng::RandomSource,
    geometry::placement::transform_points,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Independent zero-mean Gaussian noise on every x and y.
pub struct PointNoise {
    pub sigma: f64,
}

impl Default for PointNoise {
    fn default() -> Self {
        Self { sigma: 0.005 }
    }
}

impl PointNoise {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        transform_points(
            comp,
            |p| {
                let nx = p.x + self.sample(rng);
                let ny = p.y + self.sample(rng);
                snap_point(Point::new(nx, ny))
            },
            None,
        )
    }

    /// Box-Muller, sine branch. `u1` is kept in `(0, 1]` so the log is finite.
    fn sample<R: RandomSource>(&self, rng: &mut R) -> f64 {
        let u1 = 1.0 - rng.next_f64();
        let u2 = rng.next_f64();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin() * self.sigma
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Remove `1..=max_removed` whole strokes from fragments with at least
/// `min_strokes` strokes.
pub struct StrokeSubsample {
    pub min_strokes: usize,
    pub max_removed: usize,
}

impl Default for StrokeSubsample {
    fn default() -> Self {
        Self {
            min_strokes: 5,
            max_removed: 2,
        }
    }
}

impl StrokeSubsample {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        comp.map_fragments(|fragment| self.thin(fragment, rng))
    }

    fn thin<R: RandomSource>(&self, fragment: &Fragment, rng: &mut R) -> Fragment {
        let count = fragment.stroke_count();
        if count < self.min_strokes {
            return fragment.clone();
        }

        let remove = rng.range_usize(1, self.max_removed + 1).min(count);
        let mut order: Vec<usize> = (0..count).collect();
        rng.shuffle(&mut order);
        let mut dropped = vec![false; count];
        for &idx in &order[..remove] {
            dropped[idx] = true;
        }

        Fragment::new(
            fragment
                .strokes
                .iter()
                .zip(dropped)
                .filter(|(_, gone)| !gone)
                .map(|(stroke, _)| stroke.clone())
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/jitter.rs"]
mod tests;
