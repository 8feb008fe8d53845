//! Known literal values and the string-member side-effect table.
//!
//! Template literals and string/numeric literals can surface a statically
//! known value; calls through a recognized `String.prototype` member defer to
//! the table below instead of being treated as unknown calls.

use jshake_ast::{NodeArena, NodeIndex, SyntaxKind};

use crate::path::PathSegment;

/// A statically known literal value, or unknown (`None` at the query site).
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue<'a> {
    String(&'a str),
    Number(f64),
}

/// Effect signature of a `String.prototype` member when called.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StringMemberEffect {
    /// The call itself is side-effect free; only argument evaluation counts.
    Pure,
    /// The member may invoke one of its arguments (`replace` with a function
    /// replacer); treated as an unknown call.
    CallsArgument,
}

/// Members of `String.prototype` with known call behavior. Anything not
/// listed is an unknown call and therefore an effect.
static STRING_MEMBERS: &[(&str, StringMemberEffect)] = &[
    ("at", StringMemberEffect::Pure),
    ("charAt", StringMemberEffect::Pure),
    ("charCodeAt", StringMemberEffect::Pure),
    ("codePointAt", StringMemberEffect::Pure),
    ("concat", StringMemberEffect::Pure),
    ("endsWith", StringMemberEffect::Pure),
    ("includes", StringMemberEffect::Pure),
    ("indexOf", StringMemberEffect::Pure),
    ("lastIndexOf", StringMemberEffect::Pure),
    ("localeCompare", StringMemberEffect::Pure),
    ("normalize", StringMemberEffect::Pure),
    ("padEnd", StringMemberEffect::Pure),
    ("padStart", StringMemberEffect::Pure),
    ("repeat", StringMemberEffect::Pure),
    ("replace", StringMemberEffect::CallsArgument),
    ("replaceAll", StringMemberEffect::CallsArgument),
    ("slice", StringMemberEffect::Pure),
    ("split", StringMemberEffect::Pure),
    ("startsWith", StringMemberEffect::Pure),
    ("substring", StringMemberEffect::Pure),
    ("toLowerCase", StringMemberEffect::Pure),
    ("toString", StringMemberEffect::Pure),
    ("toUpperCase", StringMemberEffect::Pure),
    ("trim", StringMemberEffect::Pure),
    ("trimEnd", StringMemberEffect::Pure),
    ("trimStart", StringMemberEffect::Pure),
    ("valueOf", StringMemberEffect::Pure),
];

pub fn string_member(name: &str) -> Option<StringMemberEffect> {
    STRING_MEMBERS
        .iter()
        .find(|(member, _)| *member == name)
        .map(|&(_, effect)| effect)
}

/// Statically known value of a node reached through `path`, or `None` when
/// the value is unknown.
///
/// A template literal only has a known value for the empty path and exactly
/// one quasi (no interpolations); the cooked string is returned.
pub fn get_literal_value_at_path<'a>(
    arena: &'a NodeArena,
    index: NodeIndex,
    path: &[PathSegment<'_>],
) -> Option<LiteralValue<'a>> {
    let node = arena.get(index)?;
    if !path.is_empty() {
        return None;
    }
    match node.kind {
        k if k == SyntaxKind::TemplateLiteral as u16 => {
            let data = arena.get_template_literal(node)?;
            if data.quasis.len() != 1 {
                return None;
            }
            let quasi = arena.get_template_element(arena.get(data.quasis.nodes[0])?)?;
            quasi.cooked.as_deref().map(LiteralValue::String)
        }
        k if k == SyntaxKind::StringLiteral as u16 => {
            arena.get_literal(node).map(|data| LiteralValue::String(&data.text))
        }
        k if k == SyntaxKind::NumericLiteral as u16 => arena
            .get_literal(node)
            .and_then(|data| data.value)
            .map(LiteralValue::Number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::EMPTY_PATH;
    use jshake_ast::{NodeList, TemplateElementData, TemplateLiteralData};

    fn single_quasi_template(arena: &mut NodeArena, cooked: &str) -> NodeIndex {
        let quasi = arena.add_template_element(
            1,
            1 + cooked.len() as u32,
            TemplateElementData {
                cooked: Some(cooked.to_string()),
                raw: cooked.to_string(),
                tail: true,
            },
        );
        arena.add_template_literal(
            0,
            2 + cooked.len() as u32,
            TemplateLiteralData {
                quasis: NodeList::new(vec![quasi]),
                expressions: NodeList::empty(),
            },
        )
    }

    #[test]
    fn template_with_single_quasi_has_cooked_value() {
        let mut arena = NodeArena::new();
        let template = single_quasi_template(&mut arena, "hello");
        assert_eq!(
            get_literal_value_at_path(&arena, template, EMPTY_PATH),
            Some(LiteralValue::String("hello"))
        );
    }

    #[test]
    fn non_empty_path_is_unknown() {
        let mut arena = NodeArena::new();
        let template = single_quasi_template(&mut arena, "hello");
        assert_eq!(
            get_literal_value_at_path(&arena, template, &[PathSegment::Key("length")]),
            None
        );
        assert_eq!(
            get_literal_value_at_path(&arena, template, &[PathSegment::Unknown]),
            None
        );
    }

    #[test]
    fn template_with_interpolation_is_unknown() {
        let mut arena = NodeArena::new();
        let head = arena.add_template_element(
            1,
            3,
            TemplateElementData {
                cooked: Some("a".into()),
                raw: "a".into(),
                tail: false,
            },
        );
        let expression = arena.add_identifier(
            5,
            6,
            jshake_ast::IdentifierData {
                escaped_text: "x".into(),
            },
        );
        let tail = arena.add_template_element(
            7,
            8,
            TemplateElementData {
                cooked: Some("b".into()),
                raw: "b".into(),
                tail: true,
            },
        );
        let template = arena.add_template_literal(
            0,
            9,
            TemplateLiteralData {
                quasis: NodeList::new(vec![head, tail]),
                expressions: NodeList::new(vec![expression]),
            },
        );
        assert_eq!(get_literal_value_at_path(&arena, template, EMPTY_PATH), None);
    }

    #[test]
    fn known_string_members() {
        assert_eq!(string_member("slice"), Some(StringMemberEffect::Pure));
        assert_eq!(
            string_member("replace"),
            Some(StringMemberEffect::CallsArgument)
        );
        assert_eq!(string_member("notAMethod"), None);
    }
}
