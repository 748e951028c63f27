use jot_core::{parse, JotError};

// ============================================================================
// Lexical failures
// ============================================================================

#[test]
fn unterminated_string() {
    let err = parse("[\"abc").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnterminatedString { line: 1, column: 2 }
    ));
}

#[test]
fn unterminated_block_comment() {
    let err = parse("[1,\n   /* no end").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnterminatedComment { line: 2, column: 4 }
    ));
}

#[test]
fn invalid_escape_sequence() {
    let err = parse(r#""bad \x escape""#).unwrap_err();
    assert!(matches!(err, JotError::InvalidEscape { found: 'x', .. }));
}

#[test]
fn unexpected_character() {
    let err = parse("@").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedCharacter {
            line: 1,
            column: 1,
            found: '@',
        }
    ));
}

#[test]
fn bare_minus_is_rejected() {
    let err = parse("[-]").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedCharacter { found: '-', .. }
    ));
}

#[test]
fn fraction_needs_digits() {
    assert!(parse("1.").is_err());
    assert!(parse("[1.x]").is_err());
    assert!(parse("1e").is_err());
}

// ============================================================================
// Syntactic failures
// ============================================================================

#[test]
fn missing_closing_bracket() {
    let err = parse("[1, 2\n").unwrap_err();
    match err {
        JotError::UnexpectedToken {
            line,
            column,
            expected,
            found,
        } => {
            assert_eq!((line, column), (2, 1));
            assert_eq!(expected, "',' or ']'");
            assert_eq!(found, "end of input");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn missing_closing_brace() {
    let err = parse(r#"{"a" : 1"#).unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedToken {
            expected: "',' or '}'",
            ..
        }
    ));
}

#[test]
fn missing_member_colon() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedToken { expected: "':'", .. }
    ));
}

#[test]
fn member_name_must_be_a_string() {
    let err = parse("{a : 1}").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedToken {
            expected: "a member name",
            ..
        }
    ));
}

#[test]
fn identifier_is_not_a_value() {
    let err = parse("[foobar]").unwrap_err();
    match err {
        JotError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(expected, "a value");
            assert_eq!(found, "identifier 'foobar'");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn empty_input_is_an_error() {
    let err = parse("").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedToken {
            expected: "a value",
            ..
        }
    ));
    assert!(parse("   \n\t").is_err());
}

#[test]
fn comment_alone_is_an_error() {
    // a comment must precede a value
    assert!(parse("/* nothing follows */").is_err());
}

#[test]
fn trailing_content_is_rejected() {
    let err = parse("1 2").unwrap_err();
    assert!(matches!(
        err,
        JotError::UnexpectedToken {
            expected: "end of input",
            ..
        }
    ));
    assert!(parse("[] []").is_err());
}

#[test]
fn errors_carry_a_position() {
    let err = parse("[1,\n 2,\n ?]").unwrap_err();
    assert_eq!(err.position(), Some((3, 2)));
}

#[test]
fn no_partial_tree_on_failure() {
    // the error surfaces even though a prefix of the document is well formed
    assert!(parse(r#"{"a" : 1, "b" : }"#).is_err());
    assert!(parse("[1, 2, ,]").is_err());
}

#[test]
fn error_messages_name_the_position() {
    let message = parse("[\"abc").unwrap_err().to_string();
    assert!(message.contains("line 1"), "message was: {message}");
    assert!(message.contains("column 2"), "message was: {message}");
}
