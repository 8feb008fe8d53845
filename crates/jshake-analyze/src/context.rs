//! Traversal contexts threaded through the effect and inclusion passes.
//!
//! Contexts are created fresh per top-level query and mutated in place as
//! recursion descends. Every pass that mutates a flag around a recursive call
//! saves and restores it, so flags set in one branch are invisible to
//! siblings. `broken_flow` is the one flag deliberately left set by jump
//! statements: it tells the enclosing statement list that everything after
//! this point on the current path is unreachable.

use bitflags::bitflags;

bitflags! {
    /// Jump kinds that the current construct absorbs as plain control flow
    /// rather than observable effects. A loop body scan sets BREAKS and
    /// CONTINUES; a switch-case scan sets BREAKS; a function body would set
    /// RETURN_YIELD.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct IgnoredFlags: u8 {
        const BREAKS = 1 << 0;
        const CONTINUES = 1 << 1;
        const RETURN_YIELD = 1 << 2;
        const LABELS = 1 << 3;
    }
}

/// Context for `EffectAnalyzer::has_effects`.
#[derive(Clone, Debug)]
pub struct EffectContext {
    /// All paths from here unconditionally exit the current branch.
    pub broken_flow: bool,
    /// An unlabeled `break` was absorbed at this nesting level.
    pub has_break: bool,
    /// An unlabeled `continue` was absorbed at this nesting level.
    pub has_continue: bool,
    pub ignore: IgnoredFlags,
}

impl EffectContext {
    pub fn new() -> Self {
        Self {
            broken_flow: false,
            has_break: false,
            has_continue: false,
            ignore: IgnoredFlags::empty(),
        }
    }
}

impl Default for EffectContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context for `Includer::include_path`.
#[derive(Clone, Debug)]
pub struct InclusionContext {
    pub broken_flow: bool,
    pub has_break: bool,
    pub has_continue: bool,
}

impl InclusionContext {
    pub fn new() -> Self {
        Self {
            broken_flow: false,
            has_break: false,
            has_continue: false,
        }
    }
}

impl Default for InclusionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an include call must force the whole subtree in, regardless of
/// per-node effect analysis. Used when a containing construct cannot be
/// partially eliminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IncludeChildren {
    Normal,
    Recursive,
}

impl IncludeChildren {
    #[inline]
    pub fn is_recursive(self) -> bool {
        self == IncludeChildren::Recursive
    }
}
