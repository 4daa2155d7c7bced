//! Value types shared by the listing, rendering, and presentation layers.

pub mod file;
pub mod render;
