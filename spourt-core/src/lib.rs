//! Core model of a growing ASCII tree.
//!
//! Main components:
//! - [`stem`]: trunk segments and the taper formula.
//! - [`shoot`]: side branches growing in layers.
//! - [`tree`]: the stem chain and the tree-wide shape.
//! - [`treetop`]: the crown drawn above the tip.
//! - [`phases`]: per-frame growth pipeline.
//! - [`render`]: the text render pass.
//! - [`config`]: constants for taper, glyphs, chances and pacing.
//! - [`error`]: errors raised by tree edits.
//! - [`types`]: shared id aliases.

pub mod config;
pub mod error;
pub mod phases;
pub mod render;
pub mod shoot;
pub mod stem;
pub mod tree;
pub mod treetop;
pub mod types;
