use crate::foundation::{
    core::Point,
    error::{DoodleError, DoodleResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A normalized drawing: one fragment per placed subject.
///
/// A composition is an immutable value. Every operation in this crate takes
/// `&Composition` and returns a freshly built one; nothing is shared or
/// mutated between input and output.
///
/// The JSON shape is the one external mappers produce:
///
/// ```json
/// {"width":255,"height":255,
///  "doodleFragments":[{"strokes":[{"data":[[0.1,0.5],[0.2,0.6],[0]]}]}],
///  "tags":["quickdraw-simple","cat"]}
/// ```
pub struct Composition {
    /// Nominal canvas width in source pixels.
    pub width: u32,
    /// Nominal canvas height in source pixels.
    pub height: u32,
    /// Fragments in render (z) order.
    pub doodle_fragments: Vec<Fragment>,
    /// Provenance tags first, subject/category tags after.
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The strokes of one placed subject.
pub struct Fragment {
    /// Strokes in drawing order.
    pub strokes: Vec<Stroke>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "StrokeRepr", into = "StrokeRepr")]
/// One continuous pen movement as parallel coordinate channels.
///
/// Coordinates are normalized to `[0, 1]`. `timing` is carried through every
/// operation untouched; the engine never interprets it.
pub struct Stroke {
    /// X channel.
    pub xs: Vec<f64>,
    /// Y channel, same length as `xs` in well-formed data.
    pub ys: Vec<f64>,
    /// Timing/style channel, `[0]` when unused.
    pub timing: Vec<f64>,
}

/// Wire form: `{"data": [[xs], [ys], [timing]?]}`.
#[derive(serde::Serialize, serde::Deserialize)]
struct StrokeRepr {
    data: Vec<Vec<f64>>,
}

impl TryFrom<StrokeRepr> for Stroke {
    type Error = String;

    fn try_from(repr: StrokeRepr) -> Result<Self, Self::Error> {
        let channels = repr.data.len();
        if !(2..=3).contains(&channels) {
            return Err(format!(
                "stroke data must have 2 or 3 channels, got {channels}"
            ));
        }
        let mut data = repr.data.into_iter();
        let xs = data.next().unwrap_or_default();
        let ys = data.next().unwrap_or_default();
        let timing = data.next().unwrap_or_else(|| vec![0.0]);
        Ok(Self { xs, ys, timing })
    }
}

impl From<Stroke> for StrokeRepr {
    fn from(stroke: Stroke) -> Self {
        Self {
            data: vec![stroke.xs, stroke.ys, stroke.timing],
        }
    }
}

impl Stroke {
    /// Build a stroke from all three channels.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, timing: Vec<f64>) -> Self {
        Self { xs, ys, timing }
    }

    /// Build a brand-new stroke with a synthesized `[0]` timing channel.
    pub fn fresh(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self::new(xs, ys, vec![0.0])
    }

    /// Number of usable points.
    ///
    /// Mismatched channels count only their common prefix.
    pub fn point_count(&self) -> usize {
        self.xs.len().min(self.ys.len())
    }

    /// Iterate the usable points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Point at `idx`, if it exists in both channels.
    pub fn point(&self, idx: usize) -> Option<Point> {
        Some(Point::new(*self.xs.get(idx)?, *self.ys.get(idx)?))
    }

    pub fn first_point(&self) -> Option<Point> {
        self.point(0)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.point_count()
            .checked_sub(1)
            .and_then(|idx| self.point(idx))
    }

    /// A new stroke with the given points and this stroke's timing channel.
    pub fn with_points(&self, points: impl IntoIterator<Item = Point>) -> Self {
        let (xs, ys) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self::new(xs, ys, self.timing.clone())
    }

    /// Map every usable point, keeping timing verbatim.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        self.with_points(self.points().map(&mut f).collect::<Vec<_>>())
    }
}

impl Fragment {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::point_count).sum()
    }
}

impl Composition {
    pub fn new(width: u32, height: u32, doodle_fragments: Vec<Fragment>, tags: Vec<String>) -> Self {
        Self {
            width,
            height,
            doodle_fragments,
            tags,
        }
    }

    /// Same canvas and tags, different fragments.
    pub fn with_fragments(&self, doodle_fragments: Vec<Fragment>) -> Self {
        Self {
            width: self.width,
            height: self.height,
            doodle_fragments,
            tags: self.tags.clone(),
        }
    }

    /// Same canvas and fragments, different tags.
    pub fn with_tags(&self, tags: Vec<String>) -> Self {
        Self {
            width: self.width,
            height: self.height,
            doodle_fragments: self.doodle_fragments.clone(),
            tags,
        }
    }

    /// Apply `f` to every fragment, preserving order.
    pub fn map_fragments(&self, f: impl FnMut(&Fragment) -> Fragment) -> Self {
        self.with_fragments(self.doodle_fragments.iter().map(f).collect())
    }

    /// Apply `f` to every stroke, preserving fragment and stroke order.
    pub fn map_strokes(&self, mut f: impl FnMut(&Stroke) -> Stroke) -> Self {
        self.map_fragments(|fragment| Fragment::new(fragment.strokes.iter().map(&mut f).collect()))
    }

    /// Iterate every stroke of every fragment.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.doodle_fragments.iter().flat_map(|f| f.strokes.iter())
    }

    pub fn is_scene(&self) -> bool {
        self.doodle_fragments.len() > 1
    }

    /// Validate structural invariants of externally produced data.
    ///
    /// This is not the quality check (see [`crate::QualityValidator`]); it
    /// only rejects data no operation can meaningfully consume.
    pub fn validate(&self) -> DoodleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DoodleError::validation("canvas width/height must be > 0"));
        }
        for (fi, fragment) in self.doodle_fragments.iter().enumerate() {
            for (si, stroke) in fragment.strokes.iter().enumerate() {
                if stroke.xs.len() != stroke.ys.len() {
                    return Err(DoodleError::validation(format!(
                        "fragment {fi} stroke {si}: x/y channel lengths differ ({} vs {})",
                        stroke.xs.len(),
                        stroke.ys.len()
                    )));
                }
                if stroke
                    .xs
                    .iter()
                    .chain(&stroke.ys)
                    .chain(&stroke.timing)
                    .any(|v| !v.is_finite())
                {
                    return Err(DoodleError::validation(format!(
                        "fragment {fi} stroke {si}: values must be finite"
                    )));
                }
            }
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(DoodleError::validation("tags must be non-empty strings"));
        }
        Ok(())
    }

    /// Decode from the JSON wire shape.
    pub fn from_json(json: &str) -> DoodleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode to the JSON wire shape.
    pub fn to_json(&self) -> DoodleResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
