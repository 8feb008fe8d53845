//! Semantic analysis and dead-code-elimination core for a JavaScript module
//! bundler.
//!
//! Given a parsed tree in the arena form of [`jshake_ast`], this crate runs
//! the fixed pass order over a module: initialization (fails fast on error
//! nodes), top-level effect scan, inclusion propagation, and source
//! reconstitution into a [`PatchedSource`]. Parsing, module-graph resolution
//! and chunk emission are external collaborators; scope information enters
//! through the [`ScopeResolver`] seam.

pub mod logging;
pub mod module;

pub use jshake_analyze::{
    ConservativeResolver, EffectAnalyzer, EffectContext, IncludeChildren, Includer,
    InclusionContext, ScopeResolver, ShakeState, UNKNOWN_PATH, initialise,
};
pub use jshake_ast::{NodeArena, NodeIndex, NodeList, SyntaxKind};
pub use jshake_common::{Diagnostic, DiagnosticCategory, JsxMode, ShakeOptions, log_codes};
pub use jshake_render::{NodeRenderOptions, PatchedSource, RenderOptions, Renderer};
pub use module::Module;
