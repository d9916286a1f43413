//! Deterministic resampling: Catmull-Rom densification and arc-length refinement.
//!
//! Neither transform draws from the random source.

use crate::{
    composition::model::{Composition, Stroke},
    foundation::core::{Point, Vec2, snap_point},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Insert `resolution` Catmull-Rom points between each consecutive pair.
pub struct StrokeSmoothing {
    pub resolution: usize,
}

impl Default for StrokeSmoothing {
    fn default() -> Self {
        Self { resolution: 3 }
    }
}

impl StrokeSmoothing {
    pub fn apply(&self, comp: &Composition) -> Composition {
        comp.map_strokes(|stroke| self.smooth(stroke))
    }

    fn smooth(&self, stroke: &Stroke) -> Stroke {
        let pts: Vec<Point> = stroke.points().collect();
        let n = pts.len();
        if n < 3 {
            return stroke.clone();
        }

        let mut out = Vec::with_capacity((n - 1) * (self.resolution + 1) + 1);
        for i in 0..n - 1 {
            let p0 = pts[i.saturating_sub(1)];
            let p1 = pts[i];
            let p2 = pts[(i + 1).min(n - 1)];
            let p3 = pts[(i + 2).min(n - 1)];

            out.push(snap_point(p1));
            for j in 1..=self.resolution {
                let t = j as f64 / (self.resolution + 1) as f64;
                out.push(snap_point(catmull_rom(p0, p1, p2, p3, t)));
            }
        }
        out.push(snap_point(pts[n - 1]));

        stroke.with_points(out)
    }
}

/// Uniform Catmull-Rom segment between `p1` and `p2`.
fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let (p0, p1, p2, p3) = (p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2());
    let t2 = t * t;
    let t3 = t2 * t;
    let v: Vec2 = (p1 * 2.0
        + (-p0 + p2) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * t3)
        * 0.5;
    v.to_point()
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Resample each stroke to `max(n * multiplier, min_points)` points spaced
/// uniformly along its arc length.
pub struct StrokeRefinement {
    pub multiplier: f64,
    pub min_points: usize,
}

impl Default for StrokeRefinement {
    fn default() -> Self {
        Self {
            multiplier: 3.0,
            min_points: 10,
        }
    }
}

impl StrokeRefinement {
    pub fn apply(&self, comp: &Composition) -> Composition {
        comp.map_strokes(|stroke| self.refine(stroke))
    }

    /// Number of points a stroke of `n` points is resampled to.
    pub fn target_count(&self, n: usize) -> usize {
        ((n as f64 * self.multiplier) as usize).max(self.min_points)
    }

    fn refine(&self, stroke: &Stroke) -> Stroke {
        let pts: Vec<Point> = stroke.points().collect();
        let n = pts.len();
        if n < 2 {
            return stroke.clone();
        }

        let cumulative = cumulative_lengths(&pts);
        let total = cumulative[n - 1];
        if total <= 0.0 {
            return stroke.clone();
        }

        let target = self.target_count(n).max(2);
        let out = (0..target).map(|i| {
            let p = match i {
                0 => pts[0],
                _ if i == target - 1 => pts[n - 1],
                _ => point_at_distance(&pts, &cumulative, total * i as f64 / (target - 1) as f64),
            };
            snap_point(p)
        });
        stroke.with_points(out.collect::<Vec<_>>())
    }
}

fn cumulative_lengths(pts: &[Point]) -> Vec<f64> {
    let mut acc = 0.0;
    std::iter::once(0.0)
        .chain(pts.windows(2).map(|w| {
            acc += w[0].distance(w[1]);
            acc
        }))
        .collect()
}

/// Linear interpolation inside the first segment whose end reaches `d`.
fn point_at_distance(pts: &[Point], cumulative: &[f64], d: f64) -> Point {
    for i in 1..cumulative.len() {
        if cumulative[i] >= d {
            let seg = cumulative[i] - cumulative[i - 1];
            if seg <= 0.0 {
                return pts[i];
            }
            let t = (d - cumulative[i - 1]) / seg;
            return pts[i - 1].lerp(pts[i], t);
        }
    }
    pts[pts.len() - 1]
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resample.rs"]
mod tests;
