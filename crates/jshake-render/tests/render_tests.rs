//! End-to-end render behavior over analyzed fixtures.

use jshake_analyze::{
    ConservativeResolver, IncludeChildren, Includer, InclusionContext, ShakeState, UNKNOWN_PATH,
    initialise,
};
use jshake_ast::*;
use jshake_render::{PatchedSource, RenderOptions, Renderer};

static RESOLVER: ConservativeResolver = ConservativeResolver;

fn ident(arena: &mut NodeArena, pos: u32, name: &str) -> NodeIndex {
    arena.add_identifier(
        pos,
        pos + name.len() as u32,
        IdentifierData {
            escaped_text: name.into(),
        },
    )
}

/// `name();` with its trailing semicolon.
fn call_statement(arena: &mut NodeArena, pos: u32, name: &str) -> NodeIndex {
    let callee = ident(arena, pos, name);
    let call_end = pos + name.len() as u32 + 2;
    let call = arena.add_call_expr(
        pos,
        call_end,
        CallExprData {
            expression: callee,
            arguments: NodeList::empty(),
        },
    );
    arena.add_expr_statement(pos, call_end + 1, ExprStatementData { expression: call })
}

/// `name;` with its trailing semicolon.
fn reference_statement(arena: &mut NodeArena, pos: u32, name: &str) -> NodeIndex {
    let reference = ident(arena, pos, name);
    let end = pos + name.len() as u32;
    arena.add_expr_statement(pos, end + 1, ExprStatementData { expression: reference })
}

fn program(arena: &mut NodeArena, end: u32, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.add_program(
        0,
        end,
        ProgramData {
            statements: NodeList::new(statements),
            invalid_annotations: Vec::new(),
        },
    )
}

/// initialise + include from the root, then render into a fresh buffer.
fn shake(arena: &NodeArena, root: NodeIndex, source: &str) -> (String, Vec<(u32, u32)>) {
    let mut state = ShakeState::new(arena.len());
    initialise(arena, root, source, "test.js", &mut state).unwrap();
    let mut includer = Includer::new(arena, &RESOLVER, &mut state);
    let mut context = InclusionContext::new();
    includer.include_path(root, UNKNOWN_PATH, &mut context, IncludeChildren::Normal);

    let renderer = Renderer::new(arena, &state, source);
    let mut code = PatchedSource::new(source.to_owned());
    renderer.render(root, &mut code, &RenderOptions::default(), None);
    let ranges = code.indent_exclusion_ranges.clone();
    (code.materialize(), ranges)
}

#[test]
fn dead_statement_is_removed_with_its_line() {
    let source = "f();\nunused;\n";
    let mut arena = NodeArena::new();
    let live = call_statement(&mut arena, 0, "f");
    let dead = reference_statement(&mut arena, 5, "unused");
    let root = program(&mut arena, source.len() as u32, vec![live, dead]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "f();\n");
}

#[test]
fn shebang_is_stripped_and_license_comment_preserved() {
    let source = "#!/usr/bin/env node\n/* license */\nf();\nunused;\n";
    let mut arena = NodeArena::new();
    let live = call_statement(&mut arena, 34, "f");
    let dead = reference_statement(&mut arena, 39, "unused");
    let root = program(&mut arena, source.len() as u32, vec![live, dead]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "/* license */\nf();\n");
}

#[test]
fn multiple_leading_comment_lines_are_preserved() {
    let source = "// Copyright\n/* terms */\nunused;\nf();\n";
    let mut arena = NodeArena::new();
    let dead = reference_statement(&mut arena, 25, "unused");
    let live = call_statement(&mut arena, 33, "f");
    let root = program(&mut arena, source.len() as u32, vec![dead, live]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "// Copyright\n/* terms */\nf();\n");
}

#[test]
fn license_comment_survives_when_every_statement_is_dead() {
    let source = "#!/usr/bin/env node\n// license\nconst x = 1;";
    let mut arena = NodeArena::new();
    let name = ident(&mut arena, 37, "x");
    let init = arena.add_literal(
        SyntaxKind::NumericLiteral,
        41,
        42,
        LiteralData {
            text: "1".into(),
            value: Some(1.0),
        },
    );
    let declaration = arena.add_variable_declaration(
        37,
        42,
        VariableDeclarationData {
            name,
            initializer: init,
        },
    );
    let statement = arena.add_variable_statement(
        31,
        43,
        VariableData {
            declarations: NodeList::new(vec![declaration]),
        },
    );
    let root = program(&mut arena, source.len() as u32, vec![statement]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "// license\n");
}

#[test]
fn effect_free_switch_case_is_removed() {
    let source = "switch (x) {\n  case 0:\n    f();\n  case 1:\n    unused;\n}\n";
    let mut arena = NodeArena::new();
    let discriminant = ident(&mut arena, 8, "x");
    let test_a = arena.add_literal(
        SyntaxKind::NumericLiteral,
        20,
        21,
        LiteralData {
            text: "0".into(),
            value: Some(0.0),
        },
    );
    let live = call_statement(&mut arena, 27, "f");
    let case_a = arena.add_case_clause(
        15,
        31,
        CaseClauseData {
            test: test_a,
            statements: NodeList::new(vec![live]),
        },
    );
    let test_b = arena.add_literal(
        SyntaxKind::NumericLiteral,
        39,
        40,
        LiteralData {
            text: "1".into(),
            value: Some(1.0),
        },
    );
    let dead = reference_statement(&mut arena, 46, "unused");
    let case_b = arena.add_case_clause(
        34,
        53,
        CaseClauseData {
            test: test_b,
            statements: NodeList::new(vec![dead]),
        },
    );
    let switch = arena.add_switch(
        0,
        55,
        SwitchData {
            discriminant,
            cases: NodeList::new(vec![case_a, case_b]),
        },
    );
    let root = program(&mut arena, source.len() as u32, vec![switch]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "switch (x) {\n  case 0:\n    f();\n}\n");
}

#[test]
fn case_consequent_starts_after_the_real_colon() {
    // The comment between the label and its colon contains a colon itself.
    let source = "switch (x) {\n  case 0 /* : */:\n    unused;\n    f();\n}\n";
    let mut arena = NodeArena::new();
    let discriminant = ident(&mut arena, 8, "x");
    let test = arena.add_literal(
        SyntaxKind::NumericLiteral,
        20,
        21,
        LiteralData {
            text: "0".into(),
            value: Some(0.0),
        },
    );
    let dead = reference_statement(&mut arena, 35, "unused");
    let live = call_statement(&mut arena, 47, "f");
    let case = arena.add_case_clause(
        15,
        51,
        CaseClauseData {
            test,
            statements: NodeList::new(vec![dead, live]),
        },
    );
    let switch = arena.add_switch(
        0,
        53,
        SwitchData {
            discriminant,
            cases: NodeList::new(vec![case]),
        },
    );
    let root = program(&mut arena, source.len() as u32, vec![switch]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "switch (x) {\n  case 0 /* : */:\n    f();\n}\n");
}

#[test]
fn default_case_keyword_is_located_outside_comments() {
    let source = "switch (x) {\n  default:\n    unused;\n    f();\n}\n";
    let mut arena = NodeArena::new();
    let discriminant = ident(&mut arena, 8, "x");
    let dead = reference_statement(&mut arena, 28, "unused");
    let live = call_statement(&mut arena, 40, "f");
    let case = arena.add_case_clause(
        15,
        44,
        CaseClauseData {
            test: NodeIndex::NONE,
            statements: NodeList::new(vec![dead, live]),
        },
    );
    let switch = arena.add_switch(
        0,
        46,
        SwitchData {
            discriminant,
            cases: NodeList::new(vec![case]),
        },
    );
    let root = program(&mut arena, source.len() as u32, vec![switch]);

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "switch (x) {\n  default:\n    f();\n}\n");
}

#[test]
fn template_literal_records_an_indent_exclusion_range() {
    let source = "x = `foo`;\n";
    let mut arena = NodeArena::new();
    let left = ident(&mut arena, 0, "x");
    let quasi = arena.add_template_element(
        5,
        8,
        TemplateElementData {
            cooked: Some("foo".into()),
            raw: "foo".into(),
            tail: true,
        },
    );
    let template = arena.add_template_literal(
        4,
        9,
        TemplateLiteralData {
            quasis: NodeList::new(vec![quasi]),
            expressions: NodeList::empty(),
        },
    );
    let assignment = arena.add_assignment_expr(
        0,
        9,
        AssignmentExprData {
            left,
            operator_token: 0,
            right: template,
        },
    );
    let statement = arena.add_expr_statement(0, 10, ExprStatementData { expression: assignment });
    let root = program(&mut arena, source.len() as u32, vec![statement]);

    let (output, ranges) = shake(&arena, root, source);
    assert_eq!(output, source);
    assert_eq!(ranges, vec![(4, 9)]);
}

#[test]
fn stripped_annotations_are_removed_from_the_output() {
    let source = "unused; /*@__PURE__*/\nf();\n";
    let mut arena = NodeArena::new();
    let dead = reference_statement(&mut arena, 0, "unused");
    let live = call_statement(&mut arena, 22, "f");
    let root = arena.add_program(
        0,
        source.len() as u32,
        ProgramData {
            statements: NodeList::new(vec![dead, live]),
            invalid_annotations: vec![Annotation {
                start: 8,
                end: 21,
                kind: AnnotationKind::Pure,
            }],
        },
    );

    let (output, _) = shake(&arena, root, source);
    assert_eq!(output, "f();\n");
}

#[test]
fn rendering_twice_is_idempotent() {
    let source = "f();\nunused;\ng();\n";
    let mut arena = NodeArena::new();
    let first = call_statement(&mut arena, 0, "f");
    let dead = reference_statement(&mut arena, 5, "unused");
    let second = call_statement(&mut arena, 13, "g");
    let root = program(&mut arena, source.len() as u32, vec![first, dead, second]);

    let mut state = ShakeState::new(arena.len());
    initialise(&arena, root, source, "test.js", &mut state).unwrap();
    let mut includer = Includer::new(&arena, &RESOLVER, &mut state);
    let mut context = InclusionContext::new();
    includer.include_path(root, UNKNOWN_PATH, &mut context, IncludeChildren::Normal);

    let renderer = Renderer::new(&arena, &state, source);
    let mut first_pass = PatchedSource::new(source.to_owned());
    renderer.render(root, &mut first_pass, &RenderOptions::default(), None);
    let mut second_pass = PatchedSource::new(source.to_owned());
    renderer.render(root, &mut second_pass, &RenderOptions::default(), None);

    assert_eq!(first_pass.materialize(), "f();\ng();\n");
    assert_eq!(first_pass.materialize(), second_pass.materialize());
}
