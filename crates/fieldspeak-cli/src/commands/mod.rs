//! CLI commands

mod render;
mod split;

pub use render::{render, RenderArgs};
pub use split::{split, SplitArgs};
