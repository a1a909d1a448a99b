//! End-to-end parsing of SCOPE sources into the tagged tree view.
//!
//! Each case goes through the public `parse_source` entry point and
//! compares the indented outline of the resulting forest.

use rstest::rstest;
use scopelang::ast::TreeNode;
use scopelang::{parse_source, Config, FrontendError, NodeKind};

fn outline(source: &str) -> String {
    let forest = parse_source(source, &Config::default())
        .unwrap_or_else(|err| panic!("failed to parse {:?}: {}", source, err));
    TreeNode::forest(&forest)
        .iter()
        .map(|tree| tree.to_string())
        .collect()
}

fn trees(source: &str) -> Vec<TreeNode> {
    TreeNode::forest(&parse_source(source, &Config::default()).unwrap())
}

#[rstest]
#[case::for_loop(
    "for(3){ out(1); }",
    "Scope \"for\"\n  Condition\n    Expression \"3\"\n  Operator \"out\"\n    Expression \"1\"\n"
)]
#[case::named_scope("foo{}", "NamedScope \"foo\"\n")]
#[case::unnamed_scope("{}", "UnnamedScope\n")]
#[case::nested_unnamed("{{}}", "UnnamedScope\n  UnnamedScope\n")]
#[case::anonymous_struct(
    "struct{ int a; }",
    "Scope \"struct\"\n  Member \"a\"\n    Type \"int\"\n"
)]
#[case::labeled_scope(
    "if ready { out(1); }",
    "Scope \"if\"\n  Identifier \"ready\"\n  Operator \"out\"\n    Expression \"1\"\n"
)]
#[case::empty_source("", "")]
#[case::comments_only("// nothing\n/* here */", "")]
fn single_source_outlines(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(outline(source), expected);
}

#[test]
fn full_program_outline() {
    let source = "\
struct Point { int x; int y; }

implement Point {
    function shift(int dx): int {
        x = x + dx;
        return x;
    }
}

function main() {
    int total = 0;
    for (10 - total) {
        inc(total);
        out(total, 2 * total);
    }
    while { jump(0); }
    shift(1);
}
";

    let expected = "\
Scope \"struct\"
  Identifier \"Point\"
  Member \"x\"
    Type \"int\"
  Member \"y\"
    Type \"int\"
Scope \"implement\"
  Identifier \"Point\"
  Scope \"function\"
    Identifier \"shift\"
    Parameters
      Parameter \"dx\"
        Type \"int\"
    ReturnType \"int\"
    Assignment \"x\"
      Operator \"+\"
        Expression \"x\"
        Expression \"dx\"
    ReturnStatement \"return\"
      Expression \"x\"
Scope \"function\"
  Identifier \"main\"
  Parameters
  VariableDeclaration \"total\"
    Type \"int\"
    Expression \"0\"
  Scope \"for\"
    Condition
      Operator \"-\"
        Expression \"10\"
        Expression \"total\"
    Operator \"inc\"
      Expression \"total\"
    Operator \"out\"
      Expression \"total\"
      Operator \"*\"
        Expression \"2\"
        Expression \"total\"
  NamedScope \"while\"
    Operator \"jump\"
      Expression \"0\"
  FunctionCall \"shift\"
    Expression \"1\"
";

    assert_eq!(outline(source), expected);
}

#[test]
fn for_condition_stops_at_comparison() {
    // `<` is a symbol but not an arithmetic operator, so it cannot continue
    // the condition expression.
    let err = parse_source("for (a < b) { }", &Config::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected ')' to close 'for' loop condition, found symbol '<'"
    );
}

#[rstest]
#[case::unclosed_for_body("for(3){ out(1); ")]
#[case::unclosed_unnamed("{")]
#[case::stray_close("}")]
#[case::identifier_with_parameters("foo(int i){ int a = i; }")]
#[case::function_without_name("function { }")]
#[case::member_without_semicolon("struct { int a }")]
#[case::implement_with_statement("implement { x = 1; }")]
#[case::trailing_comma("out(1,);")]
#[case::leading_comma("out(,1);")]
#[case::bare_identifier("foo;")]
#[case::top_level_assignment("x = 1;")]
#[case::top_level_call("foo(1);")]
#[case::top_level_return("return 1;")]
#[case::return_as_scope_name("return { }")]
#[case::declaration_without_value("int x;")]
fn malformed_sources_are_rejected(#[case] source: &str) {
    let result = parse_source(source, &Config::default());
    assert!(
        matches!(result, Err(FrontendError::Parse(_))),
        "expected a parse error for {:?}, got {:?}",
        source,
        result
    );
}

#[rstest]
#[case("function f(int a, int b, int c) { }")]
#[case("struct { int a; int b; }")]
#[case("implement { function g(int x): int { return x; } }")]
fn parameters_and_members_carry_one_type(#[case] source: &str) {
    for tree in trees(source) {
        for node in tree.walk() {
            if matches!(node.kind, NodeKind::Parameter | NodeKind::Member) {
                assert_eq!(node.children.len(), 1, "{:?}", node);
                assert_eq!(node.children[0].kind, NodeKind::Type);
            }
        }
    }
}

#[rstest]
#[case("function f(int a) { } g { } { } int x = 1;")]
#[case("implement { function h(int q) { } }")]
fn parameters_never_reach_the_top_level(#[case] source: &str) {
    for tree in trees(source) {
        assert!(
            !matches!(tree.kind, NodeKind::Parameters | NodeKind::Parameter),
            "{:?}",
            tree
        );
    }
}

#[test]
fn arithmetic_folds_left_to_right() {
    let forest = trees("{ x = 1 + 2 * 3; }");
    let assignment = &forest[0].children[0];
    let product = &assignment.children[0];

    assert_eq!(product.kind, NodeKind::Operator);
    assert_eq!(product.value, "*");
    assert_eq!(product.children[0].value, "+");
    assert_eq!(product.children[1].value, "3");
}

#[test]
fn forest_serializes_to_json() {
    let forest = parse_source("foo { out(1); }", &Config::default()).unwrap();
    let json = serde_json::to_value(TreeNode::forest(&forest)).unwrap();

    assert_eq!(json[0]["kind"], "NamedScope");
    assert_eq!(json[0]["value"], "foo");
    assert_eq!(json[0]["children"][0]["value"], "out");
}
