//! Seam to the scope/binding resolution service.
//!
//! Binding resolution is an external collaborator: the analyzer only asks
//! three questions about identifiers it encounters. The default answers are
//! the conservative ones for module-level code: reads of resolved bindings
//! are safe, writes may escape the local scope, calls are unknown.

use jshake_ast::NodeIndex;

pub trait ScopeResolver {
    /// Whether reading the given identifier can be observed (e.g. a global
    /// that may not exist and would throw on access).
    fn reference_has_effects(&self, _reference: NodeIndex) -> bool {
        false
    }

    /// Whether assigning to the given target mutates state outside the local
    /// scope.
    fn assignment_has_effects(&self, _target: NodeIndex) -> bool {
        true
    }

    /// Whether a call through the given callee is known side-effect free
    /// (e.g. annotated `@__PURE__` or a recognized builtin).
    fn call_is_pure(&self, _callee: NodeIndex) -> bool {
        false
    }
}

/// The resolver used when no binding information is available: every call is
/// an unknown call, every assignment escapes.
#[derive(Default)]
pub struct ConservativeResolver;

impl ScopeResolver for ConservativeResolver {}
