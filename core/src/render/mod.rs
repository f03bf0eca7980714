//! Rendering — thumbnail boxes and the grid that holds them.

pub mod boxes;
pub mod compose;
