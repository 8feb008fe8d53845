//! Effect analysis: per-node-kind answers to "can evaluating this node be
//! observed outside of it".
//!
//! The analyzer is a pure query over the arena plus the analysis state; all
//! mutation is confined to the caller-provided `EffectContext`, which is
//! saved and restored around every construct that absorbs jumps, so repeated
//! queries with fresh contexts always agree.

use jshake_ast::{NodeArena, NodeIndex, SyntaxKind};
use tracing::trace;

use crate::context::{EffectContext, IgnoredFlags};
use crate::path::PathSegment;
use crate::resolver::ScopeResolver;
use crate::state::ShakeState;
use crate::values::{StringMemberEffect, string_member};

/// How a value node is being used by its surroundings when an interaction
/// query is made.
#[derive(Copy, Clone, Debug)]
pub enum NodeInteraction<'a> {
    Accessed,
    Called { arguments: &'a [NodeIndex] },
}

pub struct EffectAnalyzer<'a> {
    arena: &'a NodeArena,
    resolver: &'a dyn ScopeResolver,
    state: &'a ShakeState,
}

impl<'a> EffectAnalyzer<'a> {
    pub fn new(
        arena: &'a NodeArena,
        resolver: &'a dyn ScopeResolver,
        state: &'a ShakeState,
    ) -> Self {
        Self {
            arena,
            resolver,
            state,
        }
    }

    /// Whether evaluating `index` can be observed externally.
    pub fn has_effects(&self, index: NodeIndex, context: &mut EffectContext) -> bool {
        let Some(node) = self.arena.get(index) else {
            return false;
        };
        match node.kind {
            k if k == SyntaxKind::Program as u16 => {
                self.program_first_effect(index, context).is_some()
            }
            k if k == SyntaxKind::ExpressionStatement as u16 => self
                .arena
                .get_expr_statement(node)
                .is_some_and(|data| self.has_effects(data.expression, context)),
            k if k == SyntaxKind::VariableStatement as u16 => {
                let Some(data) = self.arena.get_variable_statement(node) else {
                    return false;
                };
                data.declarations
                    .iter()
                    .any(|declaration| self.has_effects(declaration, context))
            }
            k if k == SyntaxKind::VariableDeclaration as u16 => {
                let Some(data) = self.arena.get_variable_declaration(node) else {
                    return false;
                };
                data.initializer.is_some() && self.has_effects(data.initializer, context)
            }
            k if k == SyntaxKind::Block as u16 => {
                let Some(data) = self.arena.get_block(node) else {
                    return false;
                };
                for statement in data.statements.iter() {
                    if context.broken_flow {
                        break;
                    }
                    if self.has_effects(statement, context) {
                        return true;
                    }
                }
                false
            }
            k if k == SyntaxKind::BreakStatement as u16 => {
                if !context.ignore.contains(IgnoredFlags::BREAKS) {
                    return true;
                }
                context.has_break = true;
                context.broken_flow = true;
                false
            }
            k if k == SyntaxKind::ContinueStatement as u16 => {
                if !context.ignore.contains(IgnoredFlags::CONTINUES) {
                    return true;
                }
                context.has_continue = true;
                context.broken_flow = true;
                false
            }
            k if k == SyntaxKind::ReturnStatement as u16 => {
                let Some(data) = self.arena.get_return(node) else {
                    return true;
                };
                if !context.ignore.contains(IgnoredFlags::RETURN_YIELD)
                    || (data.expression.is_some() && self.has_effects(data.expression, context))
                {
                    return true;
                }
                context.broken_flow = true;
                false
            }
            k if k == SyntaxKind::DoWhileStatement as u16
                || k == SyntaxKind::WhileStatement as u16 =>
            {
                let Some(data) = self.arena.get_loop(node) else {
                    return false;
                };
                if self.has_effects(data.test, context) {
                    return true;
                }
                self.has_loop_body_effects(data.body, context)
            }
            k if k == SyntaxKind::SwitchStatement as u16 => {
                self.switch_has_effects(index, context)
            }
            k if k == SyntaxKind::CaseClause as u16 => {
                let Some(data) = self.arena.get_case_clause(node) else {
                    return false;
                };
                if data.test.is_some() && self.has_effects(data.test, context) {
                    return true;
                }
                for statement in data.statements.iter() {
                    if context.broken_flow {
                        break;
                    }
                    if self.has_effects(statement, context) {
                        return true;
                    }
                }
                false
            }
            k if k == SyntaxKind::TemplateLiteral as u16 => {
                let Some(data) = self.arena.get_template_literal(node) else {
                    return false;
                };
                data.expressions
                    .iter()
                    .any(|expression| self.has_effects(expression, context))
            }
            k if k == SyntaxKind::CallExpression as u16 => {
                let Some(data) = self.arena.get_call_expr(node) else {
                    return true;
                };
                if self.has_effects(data.expression, context) {
                    return true;
                }
                if data
                    .arguments
                    .iter()
                    .any(|argument| self.has_effects(argument, context))
                {
                    return true;
                }
                !self.resolver.call_is_pure(data.expression)
            }
            k if k == SyntaxKind::AssignmentExpression as u16 => {
                let Some(data) = self.arena.get_assignment_expr(node) else {
                    return true;
                };
                self.resolver.assignment_has_effects(data.left)
                    || self.has_effects(data.right, context)
            }
            k if k == SyntaxKind::Identifier as u16 => {
                self.resolver.reference_has_effects(index)
            }
            // Error nodes abort during initialization; if one is ever reached
            // here the only safe answer is "effectful".
            k if k == SyntaxKind::ParseError as u16 || k == SyntaxKind::PanicError as u16 => true,
            // Literals, template elements, import declarations/specifiers and
            // JSX leaves: no effect on evaluation.
            _ => false,
        }
    }

    /// Program-level effect scan: the first body statement with an effect, or
    /// `None`. The driver caches the answer on the analysis state.
    pub fn program_first_effect(
        &self,
        index: NodeIndex,
        context: &mut EffectContext,
    ) -> Option<NodeIndex> {
        let node = self.arena.get(index)?;
        let data = self.arena.get_program(node)?;
        for statement in data.statements.iter() {
            if self.has_effects(statement, context) {
                trace!(node = statement.0, "first side effect");
                return Some(statement);
            }
        }
        None
    }

    /// Loop-body scan: breaks and continues are local control flow here, not
    /// observable effects. Everything touched is restored afterwards,
    /// including `broken_flow` (a loop body that exits does not break the
    /// flow after the loop).
    pub fn has_loop_body_effects(&self, body: NodeIndex, context: &mut EffectContext) -> bool {
        let broken_flow = context.broken_flow;
        let has_break = context.has_break;
        let has_continue = context.has_continue;
        let ignore = context.ignore;
        context.ignore.insert(IgnoredFlags::BREAKS | IgnoredFlags::CONTINUES);
        context.has_break = false;
        context.has_continue = false;
        if self.has_effects(body, context) {
            return true;
        }
        context.ignore = ignore;
        context.has_break = has_break;
        context.has_continue = has_continue;
        context.broken_flow = broken_flow;
        false
    }

    fn switch_has_effects(&self, index: NodeIndex, context: &mut EffectContext) -> bool {
        let Some(data) = self
            .arena
            .get(index)
            .and_then(|node| self.arena.get_switch(node))
        else {
            return false;
        };
        if self.has_effects(data.discriminant, context) {
            return true;
        }
        let broken_flow = context.broken_flow;
        let has_break = context.has_break;
        let ignore = context.ignore;
        context.ignore.insert(IgnoredFlags::BREAKS);
        context.has_break = false;
        // A switch only breaks the flow after it when every case (including a
        // present default) unconditionally exits without an observable break.
        let mut only_has_broken_flow = true;
        for case in data.cases.iter() {
            if self.has_effects(case, context) {
                return true;
            }
            only_has_broken_flow &= context.broken_flow && !context.has_break;
            context.has_break = false;
            context.broken_flow = broken_flow;
        }
        if self.state.default_cases.contains_key(&index) {
            context.broken_flow = only_has_broken_flow;
        }
        context.ignore = ignore;
        context.has_break = has_break;
        false
    }

    /// Effects of using a value node through `path` in the given way.
    ///
    /// Only template literals (string values) have a non-conservative answer
    /// in this excerpt: shallow property access is safe, and calls through a
    /// one-segment path defer to the known string-member table.
    pub fn has_effects_on_interaction_at_path(
        &self,
        index: NodeIndex,
        path: &[PathSegment<'_>],
        interaction: NodeInteraction<'_>,
        context: &mut EffectContext,
    ) -> bool {
        let Some(node) = self.arena.get(index) else {
            return true;
        };
        match node.kind {
            k if k == SyntaxKind::TemplateLiteral as u16
                || k == SyntaxKind::StringLiteral as u16 =>
            {
                match interaction {
                    NodeInteraction::Accessed => path.len() > 1,
                    NodeInteraction::Called { arguments } => {
                        if path.len() != 1 {
                            return true;
                        }
                        let PathSegment::Key(member) = path[0] else {
                            return true;
                        };
                        self.has_member_effect_when_called(member, arguments, context)
                    }
                }
            }
            _ => true,
        }
    }

    fn has_member_effect_when_called(
        &self,
        member: &str,
        arguments: &[NodeIndex],
        context: &mut EffectContext,
    ) -> bool {
        match string_member(member) {
            Some(StringMemberEffect::Pure) => arguments
                .iter()
                .any(|&argument| self.has_effects(argument, context)),
            // May invoke its argument; treat as an unknown call.
            Some(StringMemberEffect::CallsArgument) => true,
            None => true,
        }
    }
}
