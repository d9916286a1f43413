use crate::{
    foundation::core::Rect,
    foundation::error::{DoodleError, DoodleResult},
    foundation::rng::RandomSource,
};

/// Fill factor used by slots that do not override it.
pub const DEFAULT_FILL_FACTOR: f64 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A rectangular region of the canvas plus how much of it a subject may fill.
pub struct SceneSlot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_factor: f64,
}

impl SceneSlot {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::with_fill(x, y, width, height, DEFAULT_FILL_FACTOR)
    }

    pub const fn with_fill(x: f64, y: f64, width: f64, height: f64, fill_factor: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_factor,
        }
    }

    /// The slot region in normalized canvas coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A named, read-only arrangement of slots.
pub struct SceneTemplate {
    pub name: &'static str,
    pub slots: &'static [SceneSlot],
}

static CATALOG: [SceneTemplate; 5] = [
    SceneTemplate {
        name: "duo-horizontal",
        slots: &[
            SceneSlot::new(0.0, 0.05, 0.48, 0.9),
            SceneSlot::new(0.52, 0.05, 0.48, 0.9),
        ],
    },
    SceneTemplate {
        name: "duo-vertical",
        slots: &[
            SceneSlot::new(0.05, 0.0, 0.9, 0.48),
            SceneSlot::new(0.05, 0.52, 0.9, 0.48),
        ],
    },
    SceneTemplate {
        name: "trio-triangle",
        slots: &[
            SceneSlot::new(0.25, 0.0, 0.5, 0.48),
            SceneSlot::new(0.0, 0.52, 0.48, 0.48),
            SceneSlot::new(0.52, 0.52, 0.48, 0.48),
        ],
    },
    SceneTemplate {
        name: "quad-grid",
        slots: &[
            SceneSlot::new(0.0, 0.0, 0.48, 0.48),
            SceneSlot::new(0.52, 0.0, 0.48, 0.48),
            SceneSlot::new(0.0, 0.52, 0.48, 0.48),
            SceneSlot::new(0.52, 0.52, 0.48, 0.48),
        ],
    },
    SceneTemplate {
        name: "featured-with-accents",
        slots: &[
            SceneSlot::with_fill(0.15, 0.15, 0.7, 0.7, 0.85),
            SceneSlot::with_fill(0.0, 0.0, 0.28, 0.28, 0.65),
            SceneSlot::with_fill(0.72, 0.0, 0.28, 0.28, 0.65),
        ],
    },
];

impl SceneTemplate {
    /// The canonical templates.
    pub fn catalog() -> &'static [SceneTemplate] {
        &CATALOG
    }

    pub fn by_name(name: &str) -> DoodleResult<&'static SceneTemplate> {
        CATALOG
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| DoodleError::precondition(format!("unknown scene template '{name}'")))
    }

    /// Uniform pick from the catalog.
    pub fn pick<R: RandomSource>(rng: &mut R) -> &'static SceneTemplate {
        &CATALOG[rng.range_usize(0, CATALOG.len())]
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/template.rs"]
mod tests;
