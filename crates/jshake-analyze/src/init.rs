//! Initialization pass.
//!
//! Runs once, strictly before the effect/inclusion/render passes. It is the
//! only step allowed to record tree-shape changes (annotation stripping) and
//! the only place a module compilation can fail: parse/panic error nodes
//! surface as an `Err(Diagnostic)` checked by the driver, and analysis never
//! starts on such a module.

use jshake_ast::{AnnotationKind, NodeArena, NodeIndex, SyntaxKind};
use jshake_common::diagnostics::{Diagnostic, log_codes, module_parse_error};
use tracing::debug;

use crate::state::ShakeState;

/// Initialize the analysis state for a module: index switch default cases,
/// record invalid-annotation strip ranges (with a warning for pragma-style
/// annotations), and abort on parse/panic error nodes.
pub fn initialise(
    arena: &NodeArena,
    root: NodeIndex,
    source: &str,
    module_id: &str,
    state: &mut ShakeState,
) -> Result<(), Diagnostic> {
    let mut stack = vec![root];
    let mut children = Vec::new();
    while let Some(index) = stack.pop() {
        let Some(node) = arena.get(index) else {
            continue;
        };
        match node.kind {
            k if k == SyntaxKind::ParseError as u16 => {
                let message = arena
                    .get_error(node)
                    .map(|data| data.message.as_str())
                    .unwrap_or("unknown parse error");
                return Err(module_parse_error(module_id, message, Some(node.pos)));
            }
            k if k == SyntaxKind::PanicError as u16 => {
                let message = arena
                    .get_error(node)
                    .map(|data| data.message.as_str())
                    .unwrap_or("internal error");
                return Err(module_parse_error(module_id, message, None));
            }
            k if k == SyntaxKind::SwitchStatement as u16 => {
                if let Some(data) = arena.get_switch(node) {
                    for (case_index, case) in data.cases.iter().enumerate() {
                        let is_default = arena
                            .get(case)
                            .and_then(|case_node| arena.get_case_clause(case_node))
                            .is_some_and(|case_data| case_data.test.is_none());
                        if is_default {
                            state.default_cases.insert(index, case_index as u32);
                            break;
                        }
                    }
                }
            }
            k if k == SyntaxKind::Program as u16 => {
                if let Some(data) = arena.get_program(node) {
                    for annotation in &data.invalid_annotations {
                        state
                            .strip_ranges
                            .push((annotation.start, annotation.end));
                        let text = source
                            .get(annotation.start as usize..annotation.end as usize)
                            .unwrap_or("");
                        debug!(start = annotation.start, %text, "stripping invalid annotation");
                        match annotation.kind {
                            AnnotationKind::Pure | AnnotationKind::NoSideEffects => {
                                state.diagnostics.push(Diagnostic::warning(
                                    log_codes::INVALID_ANNOTATION,
                                    module_id,
                                    Some(annotation.start),
                                    format!(
                                        "A comment \"{text}\" contains an annotation that cannot \
                                         be interpreted because of the position of the comment"
                                    ),
                                ));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
        children.clear();
        arena.collect_children(index, &mut children);
        // Push in reverse so the walk visits children in source order.
        for &child in children.iter().rev() {
            stack.push(child);
        }
    }
    Ok(())
}
