//! Per-module analysis state shared by the passes.
//!
//! Inclusion marks live here rather than on the nodes so the effect analyzer
//! can borrow the arena immutably while the includer mutates marks. The state
//! also carries the switch default-case index table and the root-level cached
//! effect result computed during initialization and the first effect query.

use jshake_ast::NodeIndex;
use jshake_common::Diagnostic;
use rustc_hash::FxHashMap;

/// Tri-state inclusion mark. Monotonic within one analysis run: marks only
/// ever go up (`NotIncluded` → `SelfOnly` → `WithChildren`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Included {
    #[default]
    NotIncluded,
    SelfOnly,
    WithChildren,
}

/// The program root's memoized effect answer and the statement that
/// triggered it. Children cannot change between the effect query and the
/// inclusion pass within one compilation, so this is computed at most once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CachedEffect {
    pub has_effects: bool,
    /// First statement found to have an effect, when `has_effects`.
    pub trigger: NodeIndex,
}

pub struct ShakeState {
    included: Vec<Included>,
    /// Per-switch index of the `default:` clause within its case list.
    pub default_cases: FxHashMap<NodeIndex, u32>,
    /// Source ranges to delete at render time (stripped annotations).
    pub strip_ranges: Vec<(u32, u32)>,
    /// Advisory diagnostics collected during analysis.
    pub diagnostics: Vec<Diagnostic>,
    pub cached_effect: Option<CachedEffect>,
}

impl ShakeState {
    pub fn new(node_count: usize) -> Self {
        Self {
            included: vec![Included::NotIncluded; node_count],
            default_cases: FxHashMap::default(),
            strip_ranges: Vec::new(),
            diagnostics: Vec::new(),
            cached_effect: None,
        }
    }

    #[inline]
    pub fn is_included(&self, index: NodeIndex) -> bool {
        self.included
            .get(index.0 as usize)
            .is_some_and(|&mark| mark != Included::NotIncluded)
    }

    #[inline]
    pub fn mark(&self, index: NodeIndex) -> Included {
        self.included
            .get(index.0 as usize)
            .copied()
            .unwrap_or(Included::NotIncluded)
    }

    /// Raise a node's mark to at least `SelfOnly`. Never lowers a mark.
    #[inline]
    pub fn include(&mut self, index: NodeIndex) {
        if let Some(mark) = self.included.get_mut(index.0 as usize) {
            if *mark == Included::NotIncluded {
                *mark = Included::SelfOnly;
            }
        }
    }

    /// Raise a node's mark to `WithChildren`. Never lowers a mark.
    #[inline]
    pub fn include_with_children(&mut self, index: NodeIndex) {
        if let Some(mark) = self.included.get_mut(index.0 as usize) {
            *mark = Included::WithChildren;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_are_monotonic() {
        let mut state = ShakeState::new(4);
        let node = NodeIndex(2);
        assert!(!state.is_included(node));

        state.include(node);
        assert_eq!(state.mark(node), Included::SelfOnly);

        state.include_with_children(node);
        assert_eq!(state.mark(node), Included::WithChildren);

        // A weaker include never lowers the mark.
        state.include(node);
        assert_eq!(state.mark(node), Included::WithChildren);
    }
}
