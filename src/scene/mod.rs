//! Multi-subject scenes: fixed slot layouts and the composer that fills them.

pub(crate) mod composer;
pub(crate) mod template;
