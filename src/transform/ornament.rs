//! Additive transforms that decorate a drawing with extra strokes.

use crate::{
    composition::model::{Composition, Fragment, Stroke},
    foundation::core::{Point, Vec2, snap_point},
    foundation::rng::RandomSource,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Follow every stroke with one or two copies offset along its normals.
///
/// The offset magnitude and copy count are drawn once per fragment. The
/// first copy sits on the `+normal` side, the second on the `-normal` side.
pub struct StrokeElaboration {
    pub min_offset: f64,
    pub max_offset: f64,
}

impl Default for StrokeElaboration {
    fn default() -> Self {
        Self {
            min_offset: 0.008,
            max_offset: 0.025,
        }
    }
}

impl StrokeElaboration {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        comp.map_fragments(|fragment| self.elaborate(fragment, rng))
    }

    fn elaborate<R: RandomSource>(&self, fragment: &Fragment, rng: &mut R) -> Fragment {
        let offset = rng.uniform(self.min_offset, self.max_offset);
        let parallel = rng.range_usize(1, 3);

        let mut strokes = Vec::with_capacity(fragment.stroke_count() * (parallel + 1));
        for stroke in &fragment.strokes {
            strokes.push(stroke.clone());
            let pts: Vec<Point> = stroke.points().collect();
            if pts.len() < 2 {
                continue;
            }
            let normals = stroke_normals(&pts);
            for copy in 0..parallel {
                let shift = if copy == 0 { offset } else { -offset };
                strokes.push(stroke.with_points(
                    pts.iter()
                        .zip(&normals)
                        .map(|(&p, &n)| snap_point(p + n * shift))
                        .collect::<Vec<_>>(),
                ));
            }
        }
        Fragment::new(strokes)
    }
}

/// Unit left-hand normals; central differences inside, one-sided at the ends.
///
/// A zero-length difference yields a zero normal. `pts` must hold at least
/// two points.
pub(crate) fn stroke_normals(pts: &[Point]) -> Vec<Vec2> {
    let last = pts.len() - 1;
    (0..pts.len())
        .map(|i| {
            let d = match i {
                0 => pts[1] - pts[0],
                _ if i == last => pts[i] - pts[i - 1],
                _ => pts[i + 1] - pts[i - 1],
            };
            let len = d.hypot();
            if len <= 0.0 {
                Vec2::ZERO
            } else {
                Vec2::new(-d.y / len, d.x / len)
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The decoration [`StrokeEmbellishment`] picks for a whole composition.
pub enum EmbellishmentMode {
    /// Offset copies drawn underneath the originals.
    Shadow,
    /// Slightly shrunken copies following each original.
    Echo,
    /// Straight links from each stroke's end to the next stroke's start.
    Connectors,
}

impl EmbellishmentMode {
    const ALL: [Self; 3] = [Self::Shadow, Self::Echo, Self::Connectors];

    /// Uniform pick.
    pub fn draw<R: RandomSource>(rng: &mut R) -> Self {
        Self::ALL[rng.range_usize(0, Self::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shadow, echo or connector decoration; one mode per application.
pub struct StrokeEmbellishment {
    pub min_shadow_offset: f64,
    pub max_shadow_offset: f64,
    pub min_echo_scale: f64,
    pub max_echo_scale: f64,
}

impl Default for StrokeEmbellishment {
    fn default() -> Self {
        Self {
            min_shadow_offset: 0.01,
            max_shadow_offset: 0.02,
            min_echo_scale: 0.93,
            max_echo_scale: 0.97,
        }
    }
}

impl StrokeEmbellishment {
    pub fn apply<R: RandomSource>(&self, comp: &Composition, rng: &mut R) -> Composition {
        let mode = EmbellishmentMode::draw(rng);
        self.apply_mode(comp, mode, rng)
    }

    /// Apply a fixed mode; per-fragment parameters still come from `rng`.
    pub fn apply_mode<R: RandomSource>(
        &self,
        comp: &Composition,
        mode: EmbellishmentMode,
        rng: &mut R,
    ) -> Composition {
        comp.map_fragments(|fragment| match mode {
            EmbellishmentMode::Shadow => self.shadow(fragment, rng),
            EmbellishmentMode::Echo => self.echo(fragment, rng),
            EmbellishmentMode::Connectors => connectors(fragment),
        })
    }

    fn shadow<R: RandomSource>(&self, fragment: &Fragment, rng: &mut R) -> Fragment {
        let dx = rng.uniform(self.min_shadow_offset, self.max_shadow_offset);
        let dy = rng.uniform(self.min_shadow_offset, self.max_shadow_offset);
        let shift = Vec2::new(dx, dy);

        let shadows = fragment
            .strokes
            .iter()
            .map(|s| s.map_points(|p| snap_point(p + shift)));
        Fragment::new(shadows.chain(fragment.strokes.iter().cloned()).collect())
    }

    fn echo<R: RandomSource>(&self, fragment: &Fragment, rng: &mut R) -> Fragment {
        let factor = rng.uniform(self.min_echo_scale, self.max_echo_scale);

        let mut strokes = Vec::with_capacity(fragment.stroke_count() * 2);
        for stroke in &fragment.strokes {
            strokes.push(stroke.clone());
            let n = stroke.point_count();
            if n < 2 {
                continue;
            }
            let centroid = (stroke.points().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2())
                / n as f64)
                .to_point();
            strokes.push(stroke.map_points(|p| snap_point(centroid + (p - centroid) * factor)));
        }
        Fragment::new(strokes)
    }
}

fn connectors(fragment: &Fragment) -> Fragment {
    if fragment.stroke_count() < 2 {
        return fragment.clone();
    }
    let links = fragment.strokes.windows(2).filter_map(|pair| {
        let from = snap_point(pair[0].last_point()?);
        let to = snap_point(pair[1].first_point()?);
        Some(Stroke::fresh(vec![from.x, to.x], vec![from.y, to.y]))
    });
    Fragment::new(fragment.strokes.iter().cloned().chain(links).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/ornament.rs"]
mod tests;
