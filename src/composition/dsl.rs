use crate::{
    composition::model::{Composition, Fragment, Stroke},
    foundation::core::CANVAS_SIZE,
    foundation::error::{DoodleError, DoodleResult},
};

/// Builder for [`Composition`](crate::Composition).
pub struct CompositionBuilder {
    width: u32,
    height: u32,
    fragments: Vec<Fragment>,
    tags: Vec<String>,
}

impl CompositionBuilder {
    /// Create a builder for a composition on a `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fragments: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Create a builder on the standard 255x255 canvas.
    pub fn normalized() -> Self {
        Self::new(CANVAS_SIZE, CANVAS_SIZE)
    }

    /// Append one tag. Duplicates are rejected at build time.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append a fragment.
    pub fn fragment(mut self, fragment: FragmentBuilder) -> Self {
        self.fragments.push(fragment.build());
        self
    }

    /// Build and validate the final [`Composition`](crate::Composition).
    pub fn build(self) -> DoodleResult<Composition> {
        for (idx, tag) in self.tags.iter().enumerate() {
            if self.tags[..idx].contains(tag) {
                return Err(DoodleError::validation(format!("duplicate tag '{tag}'")));
            }
        }
        let comp = Composition::new(self.width, self.height, self.fragments, self.tags);
        comp.validate()?;
        Ok(comp)
    }
}

/// Builder for one [`Fragment`](crate::Fragment).
#[derive(Default)]
pub struct FragmentBuilder {
    strokes: Vec<Stroke>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke with the default `[0]` timing channel.
    pub fn stroke(mut self, xs: impl Into<Vec<f64>>, ys: impl Into<Vec<f64>>) -> Self {
        self.strokes.push(Stroke::fresh(xs.into(), ys.into()));
        self
    }

    /// Append a stroke with an explicit timing channel.
    pub fn timed_stroke(
        mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        timing: impl Into<Vec<f64>>,
    ) -> Self {
        self.strokes
            .push(Stroke::new(xs.into(), ys.into(), timing.into()));
        self
    }

    pub fn build(self) -> Fragment {
        Fragment::new(self.strokes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
