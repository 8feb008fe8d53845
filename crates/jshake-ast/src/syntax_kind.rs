//! Closed enumeration of node kinds covered by this core.
//!
//! Stored as `u16` in the node header so the catalog can grow toward the
//! full grammar without changing the header layout.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // Expressions
    Identifier,
    StringLiteral,
    NumericLiteral,
    CallExpression,
    AssignmentExpression,
    TemplateLiteral,
    TemplateElement,

    // Statements
    ExpressionStatement,
    VariableStatement,
    VariableDeclaration,
    Block,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    DoWhileStatement,
    WhileStatement,
    SwitchStatement,
    CaseClause,

    // Modules
    ImportDeclaration,
    ImportSpecifier,

    // JSX
    JsxOpeningElement,
    JsxAttribute,

    // Roots and error nodes
    Program,
    ParseError,
    PanicError,
}

impl SyntaxKind {
    /// Recover the enum from a stored node header kind.
    pub fn from_u16(value: u16) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        Some(match value {
            v if v == Unknown as u16 => Unknown,
            v if v == Identifier as u16 => Identifier,
            v if v == StringLiteral as u16 => StringLiteral,
            v if v == NumericLiteral as u16 => NumericLiteral,
            v if v == CallExpression as u16 => CallExpression,
            v if v == AssignmentExpression as u16 => AssignmentExpression,
            v if v == TemplateLiteral as u16 => TemplateLiteral,
            v if v == TemplateElement as u16 => TemplateElement,
            v if v == ExpressionStatement as u16 => ExpressionStatement,
            v if v == VariableStatement as u16 => VariableStatement,
            v if v == VariableDeclaration as u16 => VariableDeclaration,
            v if v == Block as u16 => Block,
            v if v == BreakStatement as u16 => BreakStatement,
            v if v == ContinueStatement as u16 => ContinueStatement,
            v if v == ReturnStatement as u16 => ReturnStatement,
            v if v == DoWhileStatement as u16 => DoWhileStatement,
            v if v == WhileStatement as u16 => WhileStatement,
            v if v == SwitchStatement as u16 => SwitchStatement,
            v if v == CaseClause as u16 => CaseClause,
            v if v == ImportDeclaration as u16 => ImportDeclaration,
            v if v == ImportSpecifier as u16 => ImportSpecifier,
            v if v == JsxOpeningElement as u16 => JsxOpeningElement,
            v if v == JsxAttribute as u16 => JsxAttribute,
            v if v == Program as u16 => Program,
            v if v == ParseError as u16 => ParseError,
            v if v == PanicError as u16 => PanicError,
            _ => return None,
        })
    }

    /// Whether nodes of this kind must receive explicit start/end boundaries
    /// from the statement-list renderer instead of using their own range.
    /// Case clauses need this: their rendered extent runs to the start of the
    /// next case, not to their own `end`.
    #[inline]
    pub fn needs_boundaries(self) -> bool {
        matches!(self, SyntaxKind::CaseClause)
    }
}
