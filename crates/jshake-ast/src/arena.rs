//! NodeArena: node creation (`add_*`), access (`get_*`), and child traversal.
//!
//! Nodes are built bottom-up by the parser collaborator: children exist
//! before their parent, so `add_*` can wire parent back-pointers immediately.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

#[derive(Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,

    programs: Vec<ProgramData>,
    identifiers: Vec<IdentifierData>,
    literals: Vec<LiteralData>,
    call_exprs: Vec<CallExprData>,
    assignment_exprs: Vec<AssignmentExprData>,
    template_literals: Vec<TemplateLiteralData>,
    template_elements: Vec<TemplateElementData>,
    expr_statements: Vec<ExprStatementData>,
    variables: Vec<VariableData>,
    variable_declarations: Vec<VariableDeclarationData>,
    blocks: Vec<BlockData>,
    jump_data: Vec<JumpData>,
    return_data: Vec<ReturnData>,
    loops: Vec<LoopData>,
    switch_data: Vec<SwitchData>,
    case_clauses: Vec<CaseClauseData>,
    import_decls: Vec<ImportDeclData>,
    specifiers: Vec<ImportSpecifierData>,
    jsx_opening: Vec<JsxOpeningData>,
    jsx_attributes: Vec<JsxAttributeData>,
    error_data: Vec<ErrorNodeData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Parent mapping helpers
    // =========================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes
            .push(Node::with_data(kind as u16, pos, end, data_index));
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    pub fn add_program(&mut self, pos: u32, end: u32, data: ProgramData) -> NodeIndex {
        let statements = data.statements.clone();
        let data_index = self.programs.len() as u32;
        self.programs.push(data);
        let parent = self.push_node(SyntaxKind::Program, pos, end, data_index);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_identifier(&mut self, pos: u32, end: u32, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(SyntaxKind::Identifier, pos, end, data_index)
    }

    pub fn add_literal(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: LiteralData,
    ) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_call_expr(&mut self, pos: u32, end: u32, data: CallExprData) -> NodeIndex {
        let expression = data.expression;
        let arguments = data.arguments.clone();
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(SyntaxKind::CallExpression, pos, end, data_index);
        self.set_parent(expression, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    pub fn add_assignment_expr(
        &mut self,
        pos: u32,
        end: u32,
        data: AssignmentExprData,
    ) -> NodeIndex {
        let left = data.left;
        let right = data.right;
        let data_index = self.assignment_exprs.len() as u32;
        self.assignment_exprs.push(data);
        let parent = self.push_node(SyntaxKind::AssignmentExpression, pos, end, data_index);
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_template_literal(
        &mut self,
        pos: u32,
        end: u32,
        data: TemplateLiteralData,
    ) -> NodeIndex {
        debug_assert_eq!(data.quasis.len(), data.expressions.len() + 1);
        let quasis = data.quasis.clone();
        let expressions = data.expressions.clone();
        let data_index = self.template_literals.len() as u32;
        self.template_literals.push(data);
        let parent = self.push_node(SyntaxKind::TemplateLiteral, pos, end, data_index);
        self.set_parent_list(&quasis, parent);
        self.set_parent_list(&expressions, parent);
        parent
    }

    pub fn add_template_element(
        &mut self,
        pos: u32,
        end: u32,
        data: TemplateElementData,
    ) -> NodeIndex {
        let data_index = self.template_elements.len() as u32;
        self.template_elements.push(data);
        self.push_node(SyntaxKind::TemplateElement, pos, end, data_index)
    }

    pub fn add_expr_statement(&mut self, pos: u32, end: u32, data: ExprStatementData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent = self.push_node(SyntaxKind::ExpressionStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        parent
    }

    pub fn add_variable_statement(&mut self, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        let declarations = data.declarations.clone();
        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let parent = self.push_node(SyntaxKind::VariableStatement, pos, end, data_index);
        self.set_parent_list(&declarations, parent);
        parent
    }

    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let name = data.name;
        let initializer = data.initializer;
        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent = self.push_node(SyntaxKind::VariableDeclaration, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_block(&mut self, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();
        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(SyntaxKind::Block, pos, end, data_index);
        self.set_parent_list(&statements, parent);
        parent
    }

    /// Add a break or continue statement.
    pub fn add_jump(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: JumpData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement
        ));
        let label = data.label;
        let data_index = self.jump_data.len() as u32;
        self.jump_data.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(label, parent);
        parent
    }

    pub fn add_return(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(SyntaxKind::ReturnStatement, pos, end, data_index);
        self.set_parent(expression, parent);
        parent
    }

    /// Add a do-while or while loop.
    pub fn add_loop(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LoopData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::DoWhileStatement | SyntaxKind::WhileStatement
        ));
        let test = data.test;
        let body = data.body;
        let data_index = self.loops.len() as u32;
        self.loops.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(test, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_switch(&mut self, pos: u32, end: u32, data: SwitchData) -> NodeIndex {
        let discriminant = data.discriminant;
        let cases = data.cases.clone();
        let data_index = self.switch_data.len() as u32;
        self.switch_data.push(data);
        let parent = self.push_node(SyntaxKind::SwitchStatement, pos, end, data_index);
        self.set_parent(discriminant, parent);
        self.set_parent_list(&cases, parent);
        parent
    }

    pub fn add_case_clause(&mut self, pos: u32, end: u32, data: CaseClauseData) -> NodeIndex {
        let test = data.test;
        let statements = data.statements.clone();
        let data_index = self.case_clauses.len() as u32;
        self.case_clauses.push(data);
        let parent = self.push_node(SyntaxKind::CaseClause, pos, end, data_index);
        self.set_parent(test, parent);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_import_decl(&mut self, pos: u32, end: u32, data: ImportDeclData) -> NodeIndex {
        let specifiers = data.specifiers.clone();
        let source = data.source;
        let data_index = self.import_decls.len() as u32;
        self.import_decls.push(data);
        let parent = self.push_node(SyntaxKind::ImportDeclaration, pos, end, data_index);
        self.set_parent_list(&specifiers, parent);
        self.set_parent(source, parent);
        parent
    }

    pub fn add_import_specifier(
        &mut self,
        pos: u32,
        end: u32,
        data: ImportSpecifierData,
    ) -> NodeIndex {
        let imported = data.imported;
        let local = data.local;
        let data_index = self.specifiers.len() as u32;
        self.specifiers.push(data);
        let parent = self.push_node(SyntaxKind::ImportSpecifier, pos, end, data_index);
        self.set_parent(imported, parent);
        self.set_parent(local, parent);
        parent
    }

    pub fn add_jsx_opening(&mut self, pos: u32, end: u32, data: JsxOpeningData) -> NodeIndex {
        let name = data.name;
        let attributes = data.attributes.clone();
        let data_index = self.jsx_opening.len() as u32;
        self.jsx_opening.push(data);
        let parent = self.push_node(SyntaxKind::JsxOpeningElement, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent_list(&attributes, parent);
        parent
    }

    pub fn add_jsx_attribute(&mut self, pos: u32, end: u32, data: JsxAttributeData) -> NodeIndex {
        let name = data.name;
        let value = data.value;
        let data_index = self.jsx_attributes.len() as u32;
        self.jsx_attributes.push(data);
        let parent = self.push_node(SyntaxKind::JsxAttribute, pos, end, data_index);
        self.set_parent(name, parent);
        self.set_parent(value, parent);
        parent
    }

    /// Add a parse or panic error node.
    pub fn add_error(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: ErrorNodeData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ParseError | SyntaxKind::PanicError
        ));
        let data_index = self.error_data.len() as u32;
        self.error_data.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get extended info for a node.
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, or `NodeIndex::NONE` for the root.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index).map_or(NodeIndex::NONE, |i| i.parent)
    }

    #[inline]
    pub fn get_program(&self, node: &Node) -> Option<&ProgramData> {
        if node.has_data() && node.kind == SyntaxKind::Program as u16 {
            self.programs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_program_mut(&mut self, index: NodeIndex) -> Option<&mut ProgramData> {
        let node = *self.get(index)?;
        if node.has_data() && node.kind == SyntaxKind::Program as u16 {
            self.programs.get_mut(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && matches!(node.kind,
                k if k == SyntaxKind::StringLiteral as u16
                    || k == SyntaxKind::NumericLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == SyntaxKind::CallExpression as u16 {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_assignment_expr(&self, node: &Node) -> Option<&AssignmentExprData> {
        if node.has_data() && node.kind == SyntaxKind::AssignmentExpression as u16 {
            self.assignment_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template_literal(&self, node: &Node) -> Option<&TemplateLiteralData> {
        if node.has_data() && node.kind == SyntaxKind::TemplateLiteral as u16 {
            self.template_literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template_element(&self, node: &Node) -> Option<&TemplateElementData> {
        if node.has_data() && node.kind == SyntaxKind::TemplateElement as u16 {
            self.template_elements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_expr_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        if node.has_data() && node.kind == SyntaxKind::ExpressionStatement as u16 {
            self.expr_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_statement(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == SyntaxKind::VariableStatement as u16 {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        if node.has_data() && node.kind == SyntaxKind::VariableDeclaration as u16 {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == SyntaxKind::Block as u16 {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_jump(&self, node: &Node) -> Option<&JumpData> {
        if node.has_data()
            && matches!(node.kind,
                k if k == SyntaxKind::BreakStatement as u16
                    || k == SyntaxKind::ContinueStatement as u16)
        {
            self.jump_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_return(&self, node: &Node) -> Option<&ReturnData> {
        if node.has_data() && node.kind == SyntaxKind::ReturnStatement as u16 {
            self.return_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_loop(&self, node: &Node) -> Option<&LoopData> {
        if node.has_data()
            && matches!(node.kind,
                k if k == SyntaxKind::DoWhileStatement as u16
                    || k == SyntaxKind::WhileStatement as u16)
        {
            self.loops.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_switch(&self, node: &Node) -> Option<&SwitchData> {
        if node.has_data() && node.kind == SyntaxKind::SwitchStatement as u16 {
            self.switch_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_case_clause(&self, node: &Node) -> Option<&CaseClauseData> {
        if node.has_data() && node.kind == SyntaxKind::CaseClause as u16 {
            self.case_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_import_decl(&self, node: &Node) -> Option<&ImportDeclData> {
        if node.has_data() && node.kind == SyntaxKind::ImportDeclaration as u16 {
            self.import_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_import_specifier(&self, node: &Node) -> Option<&ImportSpecifierData> {
        if node.has_data() && node.kind == SyntaxKind::ImportSpecifier as u16 {
            self.specifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_jsx_opening(&self, node: &Node) -> Option<&JsxOpeningData> {
        if node.has_data() && node.kind == SyntaxKind::JsxOpeningElement as u16 {
            self.jsx_opening.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_jsx_attribute(&self, node: &Node) -> Option<&JsxAttributeData> {
        if node.has_data() && node.kind == SyntaxKind::JsxAttribute as u16 {
            self.jsx_attributes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_error(&self, node: &Node) -> Option<&ErrorNodeData> {
        if node.has_data()
            && matches!(node.kind,
                k if k == SyntaxKind::ParseError as u16
                    || k == SyntaxKind::PanicError as u16)
        {
            self.error_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    // =========================================================================
    // Child traversal
    // =========================================================================

    /// Collect the children of a node in source order. Used by the default
    /// include/render behavior for kinds without bespoke pass logic.
    pub fn collect_children(&self, index: NodeIndex, out: &mut Vec<NodeIndex>) {
        let Some(node) = self.get(index) else {
            return;
        };
        let mut push = |child: NodeIndex| {
            if child.is_some() {
                out.push(child);
            }
        };
        match node.kind {
            k if k == SyntaxKind::Program as u16 => {
                if let Some(data) = self.get_program(node) {
                    out.extend(data.statements.iter());
                }
            }
            k if k == SyntaxKind::CallExpression as u16 => {
                if let Some(data) = self.get_call_expr(node) {
                    push(data.expression);
                    out.extend(data.arguments.iter());
                }
            }
            k if k == SyntaxKind::AssignmentExpression as u16 => {
                if let Some(data) = self.get_assignment_expr(node) {
                    push(data.left);
                    push(data.right);
                }
            }
            k if k == SyntaxKind::TemplateLiteral as u16 => {
                if let Some(data) = self.get_template_literal(node) {
                    // Interleave quasis and expressions back into source order.
                    let mut expressions = data.expressions.iter();
                    for quasi in data.quasis.iter() {
                        push(quasi);
                        if let Some(expression) = expressions.next() {
                            push(expression);
                        }
                    }
                }
            }
            k if k == SyntaxKind::ExpressionStatement as u16 => {
                if let Some(data) = self.get_expr_statement(node) {
                    push(data.expression);
                }
            }
            k if k == SyntaxKind::VariableStatement as u16 => {
                if let Some(data) = self.get_variable_statement(node) {
                    out.extend(data.declarations.iter());
                }
            }
            k if k == SyntaxKind::VariableDeclaration as u16 => {
                if let Some(data) = self.get_variable_declaration(node) {
                    push(data.name);
                    push(data.initializer);
                }
            }
            k if k == SyntaxKind::Block as u16 => {
                if let Some(data) = self.get_block(node) {
                    out.extend(data.statements.iter());
                }
            }
            k if k == SyntaxKind::BreakStatement as u16
                || k == SyntaxKind::ContinueStatement as u16 =>
            {
                if let Some(data) = self.get_jump(node) {
                    push(data.label);
                }
            }
            k if k == SyntaxKind::ReturnStatement as u16 => {
                if let Some(data) = self.get_return(node) {
                    push(data.expression);
                }
            }
            k if k == SyntaxKind::DoWhileStatement as u16 => {
                if let Some(data) = self.get_loop(node) {
                    // Body precedes the test in a do-while.
                    push(data.body);
                    push(data.test);
                }
            }
            k if k == SyntaxKind::WhileStatement as u16 => {
                if let Some(data) = self.get_loop(node) {
                    push(data.test);
                    push(data.body);
                }
            }
            k if k == SyntaxKind::SwitchStatement as u16 => {
                if let Some(data) = self.get_switch(node) {
                    push(data.discriminant);
                    out.extend(data.cases.iter());
                }
            }
            k if k == SyntaxKind::CaseClause as u16 => {
                if let Some(data) = self.get_case_clause(node) {
                    push(data.test);
                    out.extend(data.statements.iter());
                }
            }
            k if k == SyntaxKind::ImportDeclaration as u16 => {
                if let Some(data) = self.get_import_decl(node) {
                    for specifier in data.specifiers.iter() {
                        push(specifier);
                    }
                    push(data.source);
                }
            }
            k if k == SyntaxKind::ImportSpecifier as u16 => {
                if let Some(data) = self.get_import_specifier(node) {
                    push(data.imported);
                    push(data.local);
                }
            }
            k if k == SyntaxKind::JsxOpeningElement as u16 => {
                if let Some(data) = self.get_jsx_opening(node) {
                    push(data.name);
                    out.extend(data.attributes.iter());
                }
            }
            k if k == SyntaxKind::JsxAttribute as u16 => {
                if let Some(data) = self.get_jsx_attribute(node) {
                    push(data.name);
                    push(data.value);
                }
            }
            // Leaves: identifiers, literals, template elements, error nodes.
            _ => {}
        }
    }

    /// Convenience wrapper over `collect_children`.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.collect_children(index, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_wired_on_creation() {
        let mut arena = NodeArena::new();
        let callee = arena.add_identifier(
            0,
            1,
            IdentifierData {
                escaped_text: "f".into(),
            },
        );
        let call = arena.add_call_expr(
            0,
            3,
            CallExprData {
                expression: callee,
                arguments: NodeList::empty(),
            },
        );
        let statement = arena.add_expr_statement(0, 4, ExprStatementData { expression: call });
        let program = arena.add_program(
            0,
            4,
            ProgramData {
                statements: NodeList::new(vec![statement]),
                invalid_annotations: Vec::new(),
            },
        );

        assert_eq!(arena.parent(callee), call);
        assert_eq!(arena.parent(call), statement);
        assert_eq!(arena.parent(statement), program);
        assert_eq!(arena.parent(program), NodeIndex::NONE);
    }

    #[test]
    fn template_children_interleave_in_source_order() {
        let mut arena = NodeArena::new();
        let head = arena.add_template_element(
            1,
            7,
            TemplateElementData {
                cooked: Some("head ".into()),
                raw: "head ".into(),
                tail: false,
            },
        );
        let expression = arena.add_identifier(
            9,
            10,
            IdentifierData {
                escaped_text: "x".into(),
            },
        );
        let tail = arena.add_template_element(
            11,
            16,
            TemplateElementData {
                cooked: Some(" tail".into()),
                raw: " tail".into(),
                tail: true,
            },
        );
        let template = arena.add_template_literal(
            0,
            17,
            TemplateLiteralData {
                quasis: NodeList::new(vec![head, tail]),
                expressions: NodeList::new(vec![expression]),
            },
        );

        assert_eq!(arena.children(template), vec![head, expression, tail]);
    }

    #[test]
    fn import_children_are_specifiers_then_source() {
        // import { a as b } from "m"
        let mut arena = NodeArena::new();
        let imported = arena.add_identifier(
            9,
            10,
            IdentifierData {
                escaped_text: "a".into(),
            },
        );
        let local = arena.add_identifier(
            14,
            15,
            IdentifierData {
                escaped_text: "b".into(),
            },
        );
        let specifier = arena.add_import_specifier(9, 15, ImportSpecifierData { imported, local });
        let source = arena.add_literal(
            SyntaxKind::StringLiteral,
            23,
            26,
            LiteralData {
                text: "m".into(),
                value: None,
            },
        );
        let import = arena.add_import_decl(
            0,
            26,
            ImportDeclData {
                specifiers: NodeList::new(vec![specifier]),
                source,
            },
        );

        assert_eq!(arena.children(import), vec![specifier, source]);
    }

    #[test]
    fn accessors_reject_wrong_kinds() {
        let mut arena = NodeArena::new();
        let ident = arena.add_identifier(
            0,
            1,
            IdentifierData {
                escaped_text: "a".into(),
            },
        );
        let node = *arena.get(ident).unwrap();
        assert!(arena.get_identifier(&node).is_some());
        assert!(arena.get_switch(&node).is_none());
        assert!(arena.get_loop(&node).is_none());
    }
}
