//! Source reconstitution for the jshake bundler core.
//!
//! The renderer patches the original module text so that only nodes marked by
//! the inclusion pass survive, keeping the untouched parts byte-identical.
//! `PatchedSource` is the edit buffer; the comment-aware scanning helpers
//! compute statement boundaries that a naive line split would get wrong.

pub mod patched;
pub use patched::PatchedSource;

pub mod helpers;
pub use helpers::{
    find_first_line_break_outside_comment, find_first_occurrence_outside_comment, treeshake_node,
};

pub mod render;
pub use render::{NodeRenderOptions, RenderOptions, Renderer};
