//! The per-module driver: ties initialization, effect analysis, inclusion
//! and rendering together in their fixed order.
//!
//! A `Module` owns the arena, the source text and the analysis state. The
//! construction step runs initialization and fails fast on parse/panic error
//! nodes, so analysis never observes a malformed tree.

use jshake_analyze::{
    CachedEffect, EffectAnalyzer, EffectContext, IncludeChildren, Includer, InclusionContext,
    ScopeResolver, ShakeState, UNKNOWN_PATH, initialise,
};
use jshake_ast::{NodeArena, NodeIndex};
use jshake_common::diagnostics::log_codes;
use jshake_common::{Diagnostic, LineMap, ShakeOptions};
use jshake_render::{PatchedSource, RenderOptions, Renderer};
use tracing::debug;

pub struct Module {
    arena: NodeArena,
    root: NodeIndex,
    source: String,
    id: String,
    options: ShakeOptions,
    state: ShakeState,
    has_logged_effect: bool,
}

impl Module {
    /// Build a module and run the initialization pass. Fails with the parse
    /// or panic diagnostic when the tree contains an error node.
    pub fn new(
        arena: NodeArena,
        root: NodeIndex,
        source: impl Into<String>,
        id: impl Into<String>,
        options: ShakeOptions,
    ) -> Result<Self, Diagnostic> {
        let source = source.into();
        let id = id.into();
        let mut state = ShakeState::new(arena.len());
        initialise(&arena, root, &source, &id, &mut state)?;
        debug!(module = %id, nodes = arena.len(), "module initialised");
        Ok(Self {
            arena,
            root,
            source,
            id,
            options,
            state,
            has_logged_effect: false,
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn state(&self) -> &ShakeState {
        &self.state
    }

    /// Advisories collected so far (invalid annotations, side-effect logs).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.state.diagnostics
    }

    /// Whether the module body has any top-level side effect. Memoized: the
    /// tree cannot change between passes, so the scan runs at most once.
    pub fn has_effects(&mut self, resolver: &dyn ScopeResolver) -> bool {
        if let Some(cached) = self.state.cached_effect {
            return cached.has_effects;
        }
        let trigger = {
            let analyzer = EffectAnalyzer::new(&self.arena, resolver, &self.state);
            analyzer.program_first_effect(self.root, &mut EffectContext::new())
        };
        self.state.cached_effect = Some(CachedEffect {
            has_effects: trigger.is_some(),
            trigger: trigger.unwrap_or(NodeIndex::NONE),
        });
        if let Some(node) = trigger {
            if self.options.experimental_log_side_effects && !self.has_logged_effect {
                self.has_logged_effect = true;
                self.log_first_side_effect(node);
            }
        }
        trigger.is_some()
    }

    fn log_first_side_effect(&mut self, node: NodeIndex) {
        let pos = self.arena.get(node).map_or(0, |node| node.pos);
        let location = LineMap::new(&self.source).location(pos);
        self.state.diagnostics.push(Diagnostic::info(
            log_codes::FIRST_SIDE_EFFECT,
            self.id.as_str(),
            Some(pos),
            format!(
                "First side effect in {} is at ({}:{})",
                self.id, location.line, location.column
            ),
        ));
    }

    /// Run the inclusion pass from the program root.
    pub fn include(&mut self, resolver: &dyn ScopeResolver) {
        let mut includer = Includer::new(&self.arena, resolver, &mut self.state);
        let mut context = InclusionContext::new();
        includer.include_path(
            self.root,
            UNKNOWN_PATH,
            &mut context,
            IncludeChildren::Normal,
        );
    }

    /// Patch the source so only included nodes survive. Always renders into a
    /// fresh buffer; repeated calls produce identical output.
    pub fn render(&self) -> PatchedSource {
        let mut code = PatchedSource::new(self.source.clone());
        let options = RenderOptions {
            jsx: self.options.jsx,
        };
        Renderer::new(&self.arena, &self.state, &self.source).render(
            self.root,
            &mut code,
            &options,
            None,
        );
        code
    }

    /// The full driver order over an initialised module: effect scan (for the
    /// memo and the optional side-effect log), inclusion, render.
    pub fn shake(&mut self, resolver: &dyn ScopeResolver) -> PatchedSource {
        self.has_effects(resolver);
        self.include(resolver);
        self.render()
    }
}
