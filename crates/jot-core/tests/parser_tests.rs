use jot_core::{parse, parse_reader, Array, Null, Object, Undefined, Value};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn parse_reserved_literals() {
    assert_eq!(parse("undefined").unwrap(), Value::from(Undefined::new()));
    assert_eq!(parse("null").unwrap(), Value::from(Null::new()));
    assert_eq!(parse("true").unwrap(), Value::from(true));
    assert_eq!(parse("false").unwrap(), Value::from(false));
}

#[test]
fn parse_numbers() {
    assert_eq!(parse("42").unwrap(), Value::from(42));
    assert_eq!(parse("-56").unwrap(), Value::from(-56));
    assert_eq!(parse("56.5").unwrap(), Value::from(56.5));
    assert_eq!(parse("-0.25").unwrap(), Value::from(-0.25));
    assert_eq!(parse("1e3").unwrap(), Value::from(1000.0));
    assert_eq!(parse("2.5E-2").unwrap(), Value::from(0.025));
}

#[test]
fn int_and_double_stay_distinct() {
    assert!(parse("4").unwrap().is_int());
    assert!(parse("4.0").unwrap().is_double());
    assert_ne!(parse("4").unwrap(), parse("4.0").unwrap());
}

#[test]
fn parse_strings() {
    assert_eq!(parse(r#""foobar""#).unwrap(), Value::from("foobar"));
    assert_eq!(parse("'single'").unwrap(), Value::from("single"));
    assert_eq!(
        parse(r#""tab\there""#).unwrap(),
        Value::from("tab\there")
    );
    // a quote of the other flavor may appear unescaped
    assert_eq!(parse(r#"'say "hi"'"#).unwrap(), Value::from("say \"hi\""));
}

#[test]
fn parse_string_line_continuation() {
    assert_eq!(parse("\"split\\\nline\"").unwrap(), Value::from("splitline"));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_empty_array() {
    assert_eq!(parse("[]").unwrap(), Value::from(Array::new()));
    assert_eq!(parse("[ ]").unwrap(), Value::from(Array::new()));
}

#[test]
fn parse_array_preserves_order() {
    let value = parse(r#"[4, 5.6, true, false, "foo", Null, undefined]"#).unwrap();
    assert_eq!(
        value.to_string(),
        r#"[4, 5.6, true, false, "foo", Null, undefined]"#
    );
}

#[test]
fn trailing_comma_in_array() {
    assert_eq!(parse("[1,2,3,]").unwrap(), parse("[1,2,3]").unwrap());
    assert_eq!(parse("[1,]").unwrap(), parse("[1]").unwrap());
}

#[test]
fn parse_nested_arrays() {
    let value = parse("[[1, 2], [], [[3]]]").unwrap();
    assert_eq!(value.to_string(), "[[1, 2], [], [[3]]]");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_empty_object() {
    assert_eq!(parse("{}").unwrap(), Value::from(Object::new()));
}

#[test]
fn parse_object_members_in_order() {
    let value = parse(r#"{"foo" : 1, "bar" : "two", "baz" : Null}"#).unwrap();
    let mut expected = Object::new();
    expected.set("foo", 1);
    expected.set("bar", "two");
    expected.set("baz", Null::new());
    assert_eq!(value, Value::from(expected));
    assert_eq!(
        value.to_string(),
        r#"{"foo" : 1, "bar" : "two", "baz" : Null}"#
    );
}

#[test]
fn trailing_comma_in_object() {
    assert_eq!(
        parse(r#"{"a" : 1, "b" : 2,}"#).unwrap(),
        parse(r#"{"a" : 1, "b" : 2}"#).unwrap()
    );
}

#[test]
fn single_quoted_member_names() {
    let value = parse("{'a' : 1}").unwrap();
    assert_eq!(value["a"], Value::from(1));
}

#[test]
fn duplicate_member_keeps_first_position() {
    let value = parse(r#"{"foo" : 1, "bar" : 2, "foo" : 3}"#).unwrap();
    assert_eq!(value.to_string(), r#"{"foo" : 3, "bar" : 2}"#);
}

#[test]
fn parse_nested_document() {
    let value = parse(
        r#"{
            "server" : {
                "host" : "localhost",
                "ports" : [8080, 8081,],
            },
            "debug" : false,
        }"#,
    )
    .unwrap();

    assert_eq!(value["server"]["host"].as_str().unwrap(), "localhost");
    assert_eq!(value["server"]["ports"].as_array().unwrap().len(), 2);
    assert_eq!(value["debug"].as_bool().unwrap(), false);
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn block_comment_attaches_to_following_value() {
    let value = parse("/* note */ 5").unwrap();
    assert_eq!(value, Value::from(5));
    assert_eq!(value.comment(), Some(" note "));
}

#[test]
fn line_comment_attaches_to_following_value() {
    let value = parse("// note\ntrue").unwrap();
    assert_eq!(value.as_bool().unwrap(), true);
    assert_eq!(value.comment(), Some(" note"));
}

#[test]
fn outermost_comment_wins() {
    let value = parse("// outer\n/* inner */ 1").unwrap();
    assert_eq!(value.comment(), Some(" outer"));
}

#[test]
fn comment_attaches_inside_containers() {
    let value = parse("[/* first */ 1, 2]").unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array[0].comment(), Some(" first "));
    assert_eq!(array[1].comment(), None);

    let value = parse(r#"{"a" : /* one */ 1}"#).unwrap();
    assert_eq!(value["a"].comment(), Some(" one "));
}

#[test]
fn comment_on_container_value() {
    let value = parse("/* whole */ [1, 2]").unwrap();
    assert_eq!(value.comment(), Some(" whole "));
    assert_eq!(value.to_string(), "[1, 2]");
}

#[test]
fn trailing_comment_after_document_is_ignored() {
    let value = parse("5 // done").unwrap();
    assert_eq!(value, Value::from(5));
    assert_eq!(parse("5 /* done */").unwrap(), Value::from(5));
}

#[test]
fn comments_survive_parsing_but_not_rendering() {
    let value = parse("/* note */ 5").unwrap();
    assert_eq!(value.to_string(), "5");
}

// ============================================================================
// Entry points
// ============================================================================

#[test]
fn parse_from_reader() {
    let input = r#"{"a" : [1, 2]}"#;
    let value = parse_reader(input.as_bytes()).unwrap();
    assert_eq!(value, parse(input).unwrap());
}

#[test]
fn parse_via_from_str() {
    let value: Value = "[1, 2]".parse().unwrap();
    assert_eq!(value.to_string(), "[1, 2]");
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(
        parse("\t[ 1 ,\r\n 2 ]\n").unwrap(),
        parse("[1,2]").unwrap()
    );
}
