use std::collections::BTreeMap;

use crate::{
    composition::model::Composition,
    foundation::core::CANVAS_SIZE,
    foundation::error::{DoodleError, DoodleResult},
    foundation::rng::RandomSource,
    geometry::placement::place_in_region,
    quality::validator::{Quality, validate_composition},
    scene::template::SceneTemplate,
};

#[derive(Clone, Debug, PartialEq)]
/// A source drawing bound to one template slot, with its subject label.
pub struct SlotAssignment {
    pub source: Composition,
    pub label: String,
}

impl SlotAssignment {
    pub fn new(source: Composition, label: impl Into<String>) -> Self {
        Self {
            source,
            label: label.into(),
        }
    }
}

/// Provenance label for a scene built from `template`.
pub fn scene_method(template: &SceneTemplate) -> String {
    format!("scene-{}", template.name)
}

/// Place each assignment into its slot and merge the results into one composition.
///
/// Assignments are matched to slots by position; a count mismatch is an
/// error. Fragments appear in slot order, and tags are
/// `["generated", "scene", <template>]` followed by each distinct label in
/// first-seen order. The canvas is always 255x255.
#[tracing::instrument(skip(template, assignments), fields(template = template.name, slots = assignments.len()))]
pub fn compose_scene(
    template: &SceneTemplate,
    assignments: &[SlotAssignment],
) -> DoodleResult<Composition> {
    if assignments.len() != template.slot_count() {
        return Err(DoodleError::precondition(format!(
            "template '{}' has {} slots, got {} assignments",
            template.name,
            template.slot_count(),
            assignments.len()
        )));
    }

    let mut fragments = Vec::new();
    let mut tags = vec![
        "generated".to_string(),
        "scene".to_string(),
        template.name.to_string(),
    ];
    for (slot, assignment) in template.slots.iter().zip(assignments) {
        let placed = place_in_region(&assignment.source, slot.rect(), slot.fill_factor);
        tracing::trace!(label = %assignment.label, fragments = placed.doodle_fragments.len(), "slot placed");
        fragments.extend(placed.doodle_fragments);
        if !tags.contains(&assignment.label) {
            tags.push(assignment.label.clone());
        }
    }

    Ok(Composition::new(CANVAS_SIZE, CANVAS_SIZE, fragments, tags))
}

#[derive(Clone, Debug, PartialEq)]
/// A composed and scored scene together with its provenance.
pub struct Scene {
    pub composition: Composition,
    pub template: &'static str,
    /// `scene-<template>`.
    pub method: String,
    pub quality: Quality,
}

impl Scene {
    /// Compose and score. A rejected scene is still returned; check [`Scene::is_valid`].
    pub fn compose(template: &SceneTemplate, assignments: &[SlotAssignment]) -> DoodleResult<Self> {
        let composition = compose_scene(template, assignments)?;
        let quality = validate_composition(&composition);
        if let Some(reason) = quality.rejection {
            tracing::debug!(template = template.name, %reason, "scene rejected");
        }
        Ok(Self {
            composition,
            template: template.name,
            method: scene_method(template),
            quality,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.quality.is_valid()
    }

    /// Label of the first slot's subject.
    pub fn primary_label(&self) -> Option<&str> {
        self.composition.tags.get(3).map(String::as_str)
    }
}

/// Pick a subject label and then one of its drawings for every slot.
///
/// Labels are drawn uniformly from the pool in key order, then a drawing
/// uniformly from that label's candidates. The same label may fill several
/// slots.
pub fn draft_assignments<R: RandomSource>(
    template: &SceneTemplate,
    pool: &BTreeMap<String, Vec<Composition>>,
    rng: &mut R,
) -> DoodleResult<Vec<SlotAssignment>> {
    if pool.is_empty() {
        return Err(DoodleError::precondition("scene pool has no subjects"));
    }
    if let Some((label, _)) = pool.iter().find(|(_, candidates)| candidates.is_empty()) {
        return Err(DoodleError::precondition(format!(
            "subject '{label}' has no candidate drawings"
        )));
    }

    let labels: Vec<&String> = pool.keys().collect();
    let mut out = Vec::with_capacity(template.slot_count());
    for _ in template.slots {
        let label = labels[rng.range_usize(0, labels.len())];
        let candidates = &pool[label];
        let source = &candidates[rng.range_usize(0, candidates.len())];
        out.push(SlotAssignment::new(source.clone(), label.as_str()));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
