//! Inclusion propagation: marks the nodes that must survive into the output.
//!
//! Starting from the program root (or any node the driver knows is needed),
//! `include_path` marks the node and decides, per kind, which children are
//! reachable. Nodes whose necessity is conditional are settled by asking the
//! effect analyzer under a fresh context. Marks are monotonic: a later call
//! with a weaker `IncludeChildren` never un-marks anything.

use jshake_ast::{Node, NodeArena, NodeIndex, SyntaxKind};
use tracing::trace;

use crate::context::{EffectContext, IgnoredFlags, IncludeChildren, InclusionContext};
use crate::effects::EffectAnalyzer;
use crate::path::{PathSegment, UNKNOWN_PATH};
use crate::resolver::ScopeResolver;
use crate::state::ShakeState;

pub struct Includer<'a> {
    arena: &'a NodeArena,
    resolver: &'a dyn ScopeResolver,
    pub state: &'a mut ShakeState,
}

impl<'a> Includer<'a> {
    pub fn new(
        arena: &'a NodeArena,
        resolver: &'a dyn ScopeResolver,
        state: &'a mut ShakeState,
    ) -> Self {
        Self {
            arena,
            resolver,
            state,
        }
    }

    /// Whether a statement must be part of the output: already marked, or on
    /// a live path and effectful under a fresh context.
    pub fn should_be_included(&self, context: &InclusionContext, index: NodeIndex) -> bool {
        self.state.is_included(index)
            || (!context.broken_flow && self.has_fresh_effects(index))
    }

    fn has_fresh_effects(&self, index: NodeIndex) -> bool {
        EffectAnalyzer::new(self.arena, self.resolver, self.state)
            .has_effects(index, &mut EffectContext::new())
    }

    /// Mark `index` (and the reachable part of its subtree) as included.
    pub fn include_path(
        &mut self,
        index: NodeIndex,
        path: &[PathSegment<'_>],
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        let Some(node) = self.arena.get(index) else {
            return;
        };
        if include_children.is_recursive() {
            self.state.include_with_children(index);
        } else {
            self.state.include(index);
        }
        match node.kind {
            k if k == SyntaxKind::Program as u16 => {
                let Some(data) = self.arena.get_program(node) else {
                    return;
                };
                self.include_statement_list(&data.statements.nodes.clone(), context, include_children);
            }
            k if k == SyntaxKind::Block as u16 => {
                let Some(data) = self.arena.get_block(node) else {
                    return;
                };
                self.include_statement_list(&data.statements.nodes.clone(), context, include_children);
            }
            k if k == SyntaxKind::DoWhileStatement as u16
                || k == SyntaxKind::WhileStatement as u16 =>
            {
                let Some(data) = self.arena.get_loop(node) else {
                    return;
                };
                // The test always evaluates.
                self.include_path(data.test, UNKNOWN_PATH, context, include_children);
                self.include_loop_body(data.body, context, include_children);
            }
            k if k == SyntaxKind::SwitchStatement as u16 => {
                self.include_switch(index, context, include_children);
            }
            k if k == SyntaxKind::CaseClause as u16 => {
                let Some(data) = self.arena.get_case_clause(node) else {
                    return;
                };
                let test = data.test;
                let statements = data.statements.nodes.clone();
                if test.is_some() {
                    self.include_path(test, UNKNOWN_PATH, context, include_children);
                }
                self.include_statement_list(&statements, context, include_children);
            }
            k if k == SyntaxKind::BreakStatement as u16 => {
                self.include_jump_label(node, context, include_children);
                context.has_break = true;
                context.broken_flow = true;
            }
            k if k == SyntaxKind::ContinueStatement as u16 => {
                self.include_jump_label(node, context, include_children);
                context.has_continue = true;
                context.broken_flow = true;
            }
            k if k == SyntaxKind::ReturnStatement as u16 => {
                let Some(data) = self.arena.get_return(node) else {
                    return;
                };
                if data.expression.is_some() {
                    self.include_path(data.expression, UNKNOWN_PATH, context, include_children);
                }
                context.broken_flow = true;
            }
            // Template literals, expression statements, variable statements,
            // calls, assignments, imports, JSX: mark self and include all
            // children. Quasis carry no evaluable effect but are mandatory
            // output text, so they are included with everything else.
            _ => {
                let _ = path;
                self.include_all_children(index, context, include_children);
            }
        }
    }

    /// A labeled jump keeps its label identifier in the output.
    fn include_jump_label(
        &mut self,
        node: &Node,
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        let Some(label) = self.arena.get_jump(node).map(|data| data.label) else {
            return;
        };
        if label.is_some() {
            self.include_path(label, UNKNOWN_PATH, context, include_children);
        }
    }

    /// The shared statement-list policy: include what is forced or necessary.
    fn include_statement_list(
        &mut self,
        statements: &[NodeIndex],
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        for &statement in statements {
            if include_children.is_recursive() || self.should_be_included(context, statement) {
                self.include_path(statement, UNKNOWN_PATH, context, include_children);
            }
        }
    }

    /// The shared loop-body policy: break/continue flags are scoped to the
    /// loop, as is any flow break produced inside the body.
    fn include_loop_body(
        &mut self,
        body: NodeIndex,
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        let broken_flow = context.broken_flow;
        let has_break = context.has_break;
        let has_continue = context.has_continue;
        context.has_break = false;
        context.has_continue = false;
        self.include_path(body, UNKNOWN_PATH, context, include_children);
        context.has_break = has_break;
        context.has_continue = has_continue;
        context.broken_flow = broken_flow;
    }

    /// Switch inclusion scans cases in reverse source order: reaching any
    /// included case from above means control can fall through from every
    /// case before it, so a preceding case becomes included as soon as a
    /// later one is.
    fn include_switch(
        &mut self,
        index: NodeIndex,
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        let Some(data) = self
            .arena
            .get(index)
            .and_then(|node| self.arena.get_switch(node))
        else {
            return;
        };
        let discriminant = data.discriminant;
        let cases = data.cases.nodes.clone();
        let default_case = self.state.default_cases.get(&index).copied();

        self.include_path(discriminant, UNKNOWN_PATH, context, include_children);

        let broken_flow = context.broken_flow;
        let has_break = context.has_break;
        context.has_break = false;
        let mut only_has_broken_flow = true;
        // A default case anywhere before the last case forces everything
        // after it in, since control entering the default can fall through.
        let mut is_case_included = include_children.is_recursive()
            || default_case.is_some_and(|default| (default as usize) < cases.len() - 1);
        for &case in cases.iter().rev() {
            if self.state.is_included(case) {
                is_case_included = true;
            }
            if !is_case_included {
                let mut effect_context = EffectContext::new();
                effect_context.ignore.insert(IgnoredFlags::BREAKS);
                is_case_included = EffectAnalyzer::new(self.arena, self.resolver, self.state)
                    .has_effects(case, &mut effect_context);
            }
            if is_case_included {
                trace!(case = case.0, "including switch case");
                self.include_path(case, UNKNOWN_PATH, context, include_children);
                let case_breaks_flow = context.broken_flow;
                only_has_broken_flow &= context.broken_flow && !context.has_break;
                context.has_break = false;
                context.broken_flow = broken_flow;
                // A case that unconditionally exits seals fallthrough from
                // above: earlier cases stay included only on their own
                // account.
                if case_breaks_flow && !include_children.is_recursive() {
                    is_case_included = false;
                }
            } else {
                only_has_broken_flow = broken_flow;
            }
        }
        if is_case_included && default_case.is_some() {
            context.broken_flow = only_has_broken_flow;
        }
        context.has_break = has_break;
    }

    /// Default inclusion: recurse into every child in source order.
    fn include_all_children(
        &mut self,
        index: NodeIndex,
        context: &mut InclusionContext,
        include_children: IncludeChildren,
    ) {
        let mut children = Vec::new();
        self.arena.collect_children(index, &mut children);
        for child in children {
            self.include_path(child, UNKNOWN_PATH, context, include_children);
        }
    }
}
