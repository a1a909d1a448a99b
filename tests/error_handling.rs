//! Error reporting across the tokenize → parse pipeline.

use rstest::rstest;
use scopelang::diagnostics::DiagnosticPrinter;
use scopelang::error::Found;
use scopelang::config::DEFAULT_MAX_DEPTH;
use scopelang::span::Span;
use scopelang::{parse_source, Config, FrontendError, LexError, ParseError, UnmatchedInput};

fn fail(source: &str) -> FrontendError {
    parse_source(source, &Config::default()).unwrap_err()
}

#[test]
fn unexpected_character_is_a_lex_error() {
    let err = fail("x = 1 $ 2;");
    assert_eq!(
        err,
        FrontendError::Lex(LexError::UnexpectedCharacter {
            ch: '$',
            span: Span::new(1, 6),
        })
    );
    assert_eq!(err.code(), "L0001");
    assert_eq!(err.to_string(), "unexpected character '$'");
    assert!(err.help().is_some());
}

#[test]
fn unterminated_comment_is_a_lex_error() {
    let err = fail("out(1);\n  /* open");
    assert_eq!(
        err,
        FrontendError::Lex(LexError::UnterminatedComment {
            span: Span::new(2, 2),
        })
    );
    assert_eq!(err.code(), "L0002");
}

#[test]
fn running_out_of_input_points_at_the_end() {
    let err = fail("for(3){ out(1); ");
    let FrontendError::Parse(parse) = &err else {
        panic!("expected a parse error, got {:?}", err);
    };

    assert!(matches!(parse, ParseError::Expected { .. }));
    assert_eq!(parse.found(), &Found::EndOfStream(Span::new(1, 16)));
    assert_eq!(
        err.to_string(),
        "expected '}' to close 'for' loop body, found end of input"
    );
    assert_eq!(err.code(), "P0001");
    assert!(err.help().is_some());
}

#[test]
fn stray_token_is_unexpected() {
    let err = fail("foo { }\n}");
    assert_eq!(err.to_string(), "unexpected symbol '}' at start of statement");
    assert_eq!(err.code(), "P0002");
    assert_eq!(err.span(), Span::new(2, 0));
    assert_eq!(err.help(), None);
}

#[rstest]
#[case("{ x = ; }", "expected primary expression, found symbol ';'")]
#[case("{ x = 1", "expected ';' after variable assignment, found end of input")]
#[case("int = 1;", "expected an identifier after type keyword, found symbol '='")]
#[case("function f: x { }", "expected return type after ':', found identifier 'x'")]
#[case("{ foo 1 }", "expected '=', '{' or '(' after 'foo', found integer literal '1'")]
#[case("foo 1", "expected '{' to start named scope, found integer literal '1'")]
#[case("x = 1;", "expected '{' to start named scope, found symbol '='")]
#[case("return 1;", "unexpected identifier 'return' outside a scope body")]
#[case("if ready;", "expected '{' to start if body, found symbol ';'")]
#[case(
    "implement { int a = 1; }",
    "expected 'function' inside implement scope, found type keyword 'int'"
)]
fn parse_error_messages(#[case] source: &str, #[case] message: &str) {
    assert_eq!(fail(source).to_string(), message);
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let braces = "{".repeat(200_000) + &"}".repeat(200_000);
    let err = fail(&braces);
    assert_eq!(err.code(), "P0003");
    assert_eq!(
        err.to_string(),
        format!("nesting exceeds {} levels at symbol '{{'", DEFAULT_MAX_DEPTH)
    );

    let parens = format!("{{ x = {}1{}; }}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(fail(&parens).code(), "P0003");
}

#[test]
fn nesting_limit_is_configurable() {
    let config = Config::default().with_max_depth(3);
    assert!(parse_source("{{{}}}", &config).is_ok());

    let err = parse_source("{{{{}}}}", &config).unwrap_err();
    assert_eq!(err.span(), Span::new(1, 3));
    assert!(err.help().is_some());
}

#[test]
fn lenient_policy_drops_stray_characters() {
    let config = Config::default().with_unmatched(UnmatchedInput::Skip);
    let forest = parse_source("{ x$ = 1 @; }", &config).unwrap();
    assert_eq!(forest.len(), 1);

    // Skipping stops at lexing, structure is still checked
    assert!(matches!(
        parse_source("{ x = 1 $ 2; }", &config),
        Err(FrontendError::Parse(_))
    ));
}

#[test]
fn printer_renders_location_and_caret() {
    let source = "x = 1;\ny = $;";
    let err = fail(source);
    let report = DiagnosticPrinter::new("demo.scope", source).render(&err);

    assert!(report.starts_with("error[L0001]: unexpected character '$'\n"));
    assert!(report.contains("  --> demo.scope:2:5\n"));
    assert!(report.contains("  2 | y = $;\n"));
    assert!(report.contains("   |     ^\n"));
    assert!(report.contains("help: "));
}

#[test]
fn printer_handles_end_of_input() {
    let source = "main {";
    let err = fail(source);
    let report = DiagnosticPrinter::new("<eval>", source).render(&err);

    assert!(report.starts_with("error[P0001]: expected '}' to close named scope"));
    assert!(report.contains("  --> <eval>:1:7\n"));
    assert!(report.contains("  1 | main {\n"));
}
