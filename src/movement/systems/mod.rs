//! Movement domain: system modules for the per-frame step.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::apply_movement;
