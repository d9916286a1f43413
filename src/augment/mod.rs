//! Randomized generation of quality-checked variations of one source drawing.

pub(crate) mod pipeline;
