//! Thin node header and typed data pools.
//!
//! Each node is exactly 16 bytes (4 nodes per 64-byte cache line): kind,
//! flags, source range, and an index into the kind-specific data pool.
//! Common data stays inline; everything else is reached through `data_index`.

use crate::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};

/// A thin 16-byte node header.
///
/// Layout:
/// - `kind`: 2 bytes (`SyntaxKind` value)
/// - `flags`: 2 bytes (reserved)
/// - `pos`: 4 bytes (start offset into the original source)
/// - `end`: 4 bytes (end offset, exclusive)
/// - `data_index`: 4 bytes (index into the kind's pool, `u32::MAX` = no data)
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: u16,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

/// Per-node info kept out of the hot 16-byte header.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    /// Non-owning back-pointer, for traversal context only.
    pub parent: NodeIndex,
}

// =============================================================================
// Typed data pools
// =============================================================================

/// A `@__PURE__` / `@__NO_SIDE_EFFECTS__` comment annotation recorded by the
/// parser. Annotations in invalid positions are attached to the program node
/// and stripped during initialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: u32,
    pub end: u32,
    pub kind: AnnotationKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    Pure,
    NoSideEffects,
}

/// Data for the program root.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgramData {
    pub statements: NodeList,
    /// Annotations found in positions where they have no meaning.
    pub invalid_annotations: Vec<Annotation>,
}

/// Data for identifiers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for string/numeric literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
    /// For numeric literals only.
    pub value: Option<f64>,
}

/// Data for call expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Data for assignment expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssignmentExprData {
    pub left: NodeIndex,
    /// Operator token kind, for compound assignments.
    pub operator_token: u16,
    pub right: NodeIndex,
}

/// Data for template literals: interleaved quasis and expressions.
/// `quasis.len() == expressions.len() + 1` always holds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateLiteralData {
    pub quasis: NodeList,
    pub expressions: NodeList,
}

/// Data for a single quasi (literal text segment) of a template literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateElementData {
    /// Escape-processed value; `None` when the raw text contains an invalid
    /// escape (only legal in tagged templates).
    pub cooked: Option<String>,
    pub raw: String,
    pub tail: bool,
}

/// Data for expression statements.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Data for variable statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub declarations: NodeList,
}

/// Data for a single variable declaration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for block statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for break/continue statements.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JumpData {
    pub label: NodeIndex,
}

/// Data for return statements.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

/// Data for do-while and while loops.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub test: NodeIndex,
    pub body: NodeIndex,
}

/// Data for switch statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub discriminant: NodeIndex,
    pub cases: NodeList,
}

/// Data for case/default clauses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    /// `NodeIndex::NONE` for the default clause.
    pub test: NodeIndex,
    pub statements: NodeList,
}

/// Data for import declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclData {
    pub specifiers: NodeList,
    pub source: NodeIndex,
}

/// Data for named import specifiers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ImportSpecifierData {
    pub imported: NodeIndex,
    pub local: NodeIndex,
}

/// Data for JSX opening elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxOpeningData {
    pub name: NodeIndex,
    pub attributes: NodeList,
    pub self_closing: bool,
}

/// Data for JSX attributes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JsxAttributeData {
    pub name: NodeIndex,
    pub value: NodeIndex,
}

/// Data for parse/panic error nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorNodeData {
    pub message: String,
}
