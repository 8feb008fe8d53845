//! Per-kind source reconstitution.
//!
//! Rendering patches the original text instead of printing the tree: included
//! nodes keep their original bytes, excluded statements are removed together
//! with their line, and the few constructs with bespoke boundaries (case
//! clauses, template literals, the program header) adjust around that.

use jshake_analyze::ShakeState;
use jshake_ast::{NodeArena, NodeIndex, SyntaxKind};
use jshake_common::JsxMode;
use memchr::memchr;
use tracing::trace;

use crate::helpers::{
    find_first_line_break_outside_comment, find_first_occurrence_outside_comment, treeshake_node,
};
use crate::patched::PatchedSource;

/// Module-wide rendering configuration.
#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    pub jsx: JsxMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            jsx: JsxMode::Preserve,
        }
    }
}

/// Boundaries and overrides a parent hands to a child that cannot render from
/// its own `[pos, end)` alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NodeRenderOptions {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub jsx_mode: Option<JsxMode>,
}

pub struct Renderer<'a> {
    arena: &'a NodeArena,
    state: &'a ShakeState,
    source: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(arena: &'a NodeArena, state: &'a ShakeState, source: &'a str) -> Self {
        Self {
            arena,
            state,
            source,
        }
    }

    #[inline]
    fn pos(&self, index: NodeIndex) -> u32 {
        self.arena.get(index).map_or(0, |node| node.pos)
    }

    #[inline]
    fn end(&self, index: NodeIndex) -> u32 {
        self.arena.get(index).map_or(0, |node| node.end)
    }

    #[inline]
    fn needs_boundaries(&self, index: NodeIndex) -> bool {
        self.arena
            .get(index)
            .and_then(|node| SyntaxKind::from_u16(node.kind))
            .is_some_and(SyntaxKind::needs_boundaries)
    }

    /// Render an included node into the buffer. Rendering a node the
    /// inclusion pass never marked is a programming error.
    pub fn render(
        &self,
        index: NodeIndex,
        code: &mut PatchedSource,
        options: &RenderOptions,
        node_options: Option<&NodeRenderOptions>,
    ) {
        debug_assert!(
            self.state.is_included(index),
            "rendering a node the inclusion pass did not mark"
        );
        let Some(node) = self.arena.get(index) else {
            return;
        };
        match node.kind {
            k if k == SyntaxKind::Program as u16 => self.render_program(index, code, options),
            k if k == SyntaxKind::SwitchStatement as u16 => {
                self.render_switch(index, code, options);
            }
            k if k == SyntaxKind::CaseClause as u16 => {
                self.render_case_clause(index, code, options, node_options);
            }
            k if k == SyntaxKind::TemplateLiteral as u16 => {
                code.indent_exclusion_ranges.push((node.pos, node.end));
                self.render_children(index, code, options);
            }
            k if k == SyntaxKind::JsxOpeningElement as u16 => {
                self.render_jsx_opening(index, code, options, node_options);
            }
            _ => self.render_children(index, code, options),
        }
    }

    /// Default rendering: recurse into included children, no removal.
    fn render_children(
        &self,
        index: NodeIndex,
        code: &mut PatchedSource,
        options: &RenderOptions,
    ) {
        for child in self.arena.children(index) {
            if self.state.is_included(child) {
                self.render(child, code, options, None);
            }
        }
    }

    fn render_program(&self, index: NodeIndex, code: &mut PatchedSource, options: &RenderOptions) {
        let Some(node) = self.arena.get(index) else {
            return;
        };
        let Some(data) = self.arena.get_program(node) else {
            return;
        };
        // Annotations recorded for stripping during initialization.
        for &(start, end) in &self.state.strip_ranges {
            code.remove(start, end);
        }
        let bytes = self.source.as_bytes();
        let mut start = node.pos;
        if self.source.starts_with("#!") {
            start = memchr(b'\n', bytes)
                .map_or(0, |line_break| line_break as u32 + 1)
                .min(node.end);
            trace!(upto = start, "stripping shebang line");
            code.remove(0, start);
        }
        if let Some(&first) = data.statements.nodes.first() {
            // Keep all consecutive leading lines that start with a comment
            // (license headers).
            let first_start = self.pos(first);
            while start < first_start
                && bytes.get(start as usize) == Some(&b'/')
                && matches!(bytes.get(start as usize + 1), Some(b'*' | b'/'))
            {
                let gap = &self.source[start as usize..first_start as usize];
                let Some(line_break) = find_first_line_break_outside_comment(gap) else {
                    break;
                };
                start += line_break as u32;
            }
            self.render_statement_list(&data.statements.nodes, code, start, node.end, options);
        } else {
            self.render_children(index, code, options);
        }
    }

    fn render_switch(&self, index: NodeIndex, code: &mut PatchedSource, options: &RenderOptions) {
        let Some(data) = self
            .arena
            .get(index)
            .and_then(|node| self.arena.get_switch(node))
        else {
            return;
        };
        let end = self.end(index);
        if self.state.is_included(data.discriminant) {
            self.render(data.discriminant, code, options, None);
        }
        if let Some(&first_case) = data.cases.nodes.first() {
            // Cases render between the opening and closing braces.
            self.render_statement_list(
                &data.cases.nodes,
                code,
                self.pos(first_case),
                end - 1,
                options,
            );
        }
    }

    fn render_case_clause(
        &self,
        index: NodeIndex,
        code: &mut PatchedSource,
        options: &RenderOptions,
        node_options: Option<&NodeRenderOptions>,
    ) {
        let Some(node) = self.arena.get(index) else {
            return;
        };
        let Some(data) = self.arena.get_case_clause(node) else {
            return;
        };
        if data.statements.nodes.is_empty() {
            self.render_children(index, code, options);
            return;
        }
        if data.test.is_some() {
            self.render(data.test, code, options, None);
        }
        // The label ends at its colon, but a comment between the label and
        // the colon may itself contain one.
        let test_end = if data.test.is_some() {
            self.end(data.test) as usize
        } else {
            match find_first_occurrence_outside_comment(self.source, "default", node.pos as usize)
            {
                Some(keyword) => keyword + "default".len(),
                None => node.pos as usize,
            }
        };
        let consequent_start =
            match find_first_occurrence_outside_comment(self.source, ":", test_end) {
                Some(colon) => (colon + 1) as u32,
                None => test_end as u32,
            };
        let end = node_options.and_then(|options| options.end).unwrap_or(node.end);
        self.render_statement_list(&data.statements.nodes, code, consequent_start, end, options);
    }

    fn render_jsx_opening(
        &self,
        index: NodeIndex,
        code: &mut PatchedSource,
        options: &RenderOptions,
        node_options: Option<&NodeRenderOptions>,
    ) {
        let Some(data) = self
            .arena
            .get(index)
            .and_then(|node| self.arena.get_jsx_opening(node))
        else {
            return;
        };
        let jsx_mode = node_options
            .and_then(|options| options.jsx_mode)
            .unwrap_or(options.jsx);
        if self.state.is_included(data.name) {
            self.render(data.name, code, options, None);
        }
        let attribute_options = NodeRenderOptions {
            jsx_mode: Some(jsx_mode),
            ..NodeRenderOptions::default()
        };
        for attribute in data.attributes.iter() {
            if self.state.is_included(attribute) {
                self.render(attribute, code, options, Some(&attribute_options));
            }
        }
    }

    /// Walk consecutive statements between `start` and `end`, removing the
    /// text of excluded ones along line-break boundaries computed outside
    /// comments, and handing `{start, end}` boundaries to nodes that need
    /// them.
    pub fn render_statement_list(
        &self,
        statements: &[NodeIndex],
        code: &mut PatchedSource,
        start: u32,
        end: u32,
        options: &RenderOptions,
    ) {
        let Some(&first) = statements.first() else {
            return;
        };
        let mut next = first;
        let mut next_needs_boundaries =
            !self.state.is_included(next) || self.needs_boundaries(next);
        let mut next_start = start;
        if next_needs_boundaries {
            next_start = start + self.line_break_after(start, self.pos(next));
        }
        for next_index in 1..=statements.len() {
            let current = next;
            let current_start = next_start;
            let current_needs_boundaries = next_needs_boundaries;
            let upcoming = statements.get(next_index).copied();
            next_needs_boundaries = upcoming
                .is_some_and(|node| !self.state.is_included(node) || self.needs_boundaries(node));
            if current_needs_boundaries || next_needs_boundaries {
                let current_end = self.end(current);
                let gap_end = upcoming.map_or(end, |node| self.pos(node));
                next_start = current_end + self.line_break_after(current_end, gap_end);
                if self.state.is_included(current) {
                    if current_needs_boundaries {
                        let boundaries = NodeRenderOptions {
                            start: Some(current_start),
                            end: Some(next_start),
                            ..NodeRenderOptions::default()
                        };
                        self.render(current, code, options, Some(&boundaries));
                    } else {
                        self.render(current, code, options, None);
                    }
                } else {
                    trace!(node = current.0, "removing excluded statement");
                    treeshake_node(code, current_start, next_start);
                }
            } else {
                self.render(current, code, options, None);
            }
            if let Some(node) = upcoming {
                next = node;
            }
        }
    }

    /// Bytes from `from` up to and including the first line break outside
    /// comments before `to`, or zero when the gap has none.
    fn line_break_after(&self, from: u32, to: u32) -> u32 {
        if from >= to {
            return 0;
        }
        let gap = &self.source[from as usize..to as usize];
        find_first_line_break_outside_comment(gap).map_or(0, |past| past as u32)
    }
}
