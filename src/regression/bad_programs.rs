use super::diagnostics;
use crate::parser::{Construct, Diagnostic};
use crate::scanner::TokenKind;

#[test]
fn duplicate_case() {
    assert_eq!(
        vec![Diagnostic::DuplicateCase { line: 4, value: 1 }],
        diagnostics(
            "begin
            switch x
                case 1: write(1) break;
                case 1: write(2) break;
            default: write(3)
            endswitch
            end"
        )
    );
}

#[test]
fn duplicate_negative_case() {
    assert_eq!(
        vec![Diagnostic::DuplicateCase { line: 1, value: -2 }],
        diagnostics("begin switch x case -2: break; case -2: break; default: endswitch end")
    );

    // 2 and -2 are different constants
    assert!(crate::parser::compile(
        "begin switch x case -2: break; case 2: break; default: endswitch end"
    )
    .is_ok());
}

#[test]
fn missing_then() {
    // recovery skips to the end of file looking for THEN
    assert_eq!(
        Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::Write,
            expected: TokenKind::Then,
        },
        diagnostics("begin if x = 1 write(1) fi end")[0]
    );
}

#[test]
fn independent_errors_in_one_pass() {
    assert_eq!(
        vec![
            Diagnostic::Expected {
                line: 2,
                what: Construct::Expression,
            },
            Diagnostic::Unexpected {
                line: 3,
                found: TokenKind::Number,
                expected: TokenKind::RParen,
            },
            Diagnostic::Expected {
                line: 4,
                what: Construct::Comparison,
            },
        ],
        diagnostics("begin\nx := ;\nwrite(1 2);\nif x then write(1) fi\nend")
    );
}

#[test]
fn illegal_character() {
    assert_eq!(
        vec![Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::Illegal,
            expected: TokenKind::End,
        }],
        diagnostics("begin x := 1 # 2 end")
    );
}

#[test]
fn missing_break() {
    assert_eq!(
        vec![Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::Default,
            expected: TokenKind::Break,
        }],
        diagnostics("begin switch 1 case 1: write(1) default: write(2) endswitch end")
    );
}

#[test]
fn missing_semicolon_after_break() {
    assert_eq!(
        vec![Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::Default,
            expected: TokenKind::Semicolon,
        }],
        diagnostics("begin switch 1 case 1: break default: endswitch end")
    );
}

#[test]
fn missing_default() {
    let found = diagnostics("begin switch 1 case 1: break; endswitch end");
    assert_eq!(
        Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::EndSwitch,
            expected: TokenKind::Default,
        },
        found[0]
    );
}

#[test]
fn case_needs_number() {
    assert_eq!(
        Diagnostic::Expected {
            line: 1,
            what: Construct::Number,
        },
        diagnostics("begin switch 1 case x: break; default: endswitch end")[0]
    );
}

#[test]
fn minus_only_before_number() {
    assert_eq!(
        vec![
            Diagnostic::Expected {
                line: 1,
                what: Construct::Number,
            },
            Diagnostic::Unexpected {
                line: 1,
                found: TokenKind::Identifier,
                expected: TokenKind::End,
            },
        ],
        diagnostics("begin x := -y end")
    );
}

#[test]
fn missing_endloop() {
    assert_eq!(
        vec![Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::End,
            expected: TokenKind::EndLoop,
        }],
        diagnostics("begin loop write(1) end")[..1].to_vec()
    );
}

#[test]
fn unterminated_comment() {
    assert_eq!(
        vec![Diagnostic::Unexpected {
            line: 1,
            found: TokenKind::Eof,
            expected: TokenKind::End,
        }],
        diagnostics("begin x := 1 /* end")
    );
}

#[test]
fn not_a_statement() {
    assert_eq!(
        vec![
            Diagnostic::Expected {
                line: 1,
                what: Construct::Statement,
            },
            Diagnostic::Unexpected {
                line: 1,
                found: TokenKind::Read,
                expected: TokenKind::End,
            },
        ],
        diagnostics("begin x := 1; read end")
    );
}

#[test]
fn messages() {
    let error = crate::parser::compile("begin\nwrite(1 2)\nend").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Line 2: number found while ')' expected."
    );

    let error =
        crate::parser::compile("begin switch 1 case 3: break; case 3: break; default: endswitch end")
            .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Line 1: unique constant after 'case' expected, 3 is already used."
    );
}
