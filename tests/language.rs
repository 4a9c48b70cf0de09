use std::fs;

use tomlette::{
    convert,
    dsl::{
        preprocess::strip_comments,
        value::{ConstantTable, Value},
    },
    error::{ConvertError, EvaluatorError, ParseError},
    resolve,
};
use walkdir::WalkDir;

fn table(src: &str) -> ConstantTable {
    resolve(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_converts(src: &str, expected: &str) {
    match convert(src) {
        Ok(toml) => assert_eq!(toml, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match resolve(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(ConvertError::Parse(e)) => e,
        Err(ConvertError::Eval(e)) => panic!("Expected a parse error, got: {e}"),
    }
}

fn eval_failure(src: &str) -> EvaluatorError {
    match resolve(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(ConvertError::Eval(e)) => e,
        Err(ConvertError::Parse(e)) => panic!("Expected an evaluator error, got: {e}"),
    }
}

#[test]
fn demo_scripts_convert() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "conf"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("toml");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match convert(&source) {
            Ok(toml) => assert_eq!(toml, expected.trim_end(), "Mismatch for {path:?}"),
            Err(e) => panic!("Demo script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn integer_literals() {
    assert_eq!(table("x := 0")["x"], Value::Integer(0));
    assert_eq!(table("x := 41758")["x"], Value::Integer(41758));
    assert_eq!(table("x := 007")["x"], Value::Integer(7));
    assert!(table("x := .{ len q(ab) }.")["x"].is_integer());
}

#[test]
fn rebinding_keeps_last_write_and_position() {
    let constants = table("x := 1\ny := 9\nx := 2");

    assert_eq!(constants.len(), 2);
    assert_eq!(constants["x"], Value::Integer(2));
    assert_eq!(constants.get_index(0), Some((&"x".to_string(), &Value::Integer(2))));
}

#[test]
fn constant_references_resolve_in_order() {
    let constants = table("x := 1\ny := x");
    assert_eq!(constants["y"], Value::Integer(1));

    // A rebinding may reference the previous binding of the same name.
    assert_eq!(table("x := 1\nx := .{ + x, 1 }.")["x"], Value::Integer(2));
}

#[test]
fn references_copy_the_bound_value() {
    let constants = table("a := [1, 2]\nb := a\na := 3");

    assert_eq!(constants["a"], Value::Integer(3));
    assert_eq!(constants["b"],
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));
}

#[test]
fn forward_references_fail() {
    let err = parse_failure("y := x");
    assert!(matches!(err, ParseError::UnknownConstant { .. }));

    // A name is not available within its own first definition either.
    let err = parse_failure("x := .{ + x, 1 }.");
    assert!(matches!(err, ParseError::UnknownConstant { .. }));
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_eq!(table("x := .{ + 1, 2, 3 }.")["x"], Value::Integer(6));
    assert_eq!(table("x := .{ - 10, 3, 2 }.")["x"], Value::Integer(5));
    assert_eq!(table("x := .{ * 2, 3, 4 }.")["x"], Value::Integer(24));
}

#[test]
fn commas_between_computation_arguments_are_optional() {
    assert_eq!(table("x := .{ + 1 2 3 }.")["x"], Value::Integer(6));
    assert_eq!(table("x := .{ concat q(a) q(b), q(c) }.")["x"], Value::from("abc"));
}

#[test]
fn arithmetic_requires_two_integer_arguments() {
    assert!(matches!(eval_failure("x := .{ + 1 }."),
                     EvaluatorError::NotEnoughArguments { .. }));
    assert!(matches!(eval_failure("x := .{ - 1 }."),
                     EvaluatorError::NotEnoughArguments { .. }));
    assert!(matches!(eval_failure("x := .{ + 1, q(a) }."),
                     EvaluatorError::ExpectedInteger { .. }));
    // The first argument is type-checked like all the others.
    assert!(matches!(eval_failure("x := .{ + q(a), 1 }."),
                     EvaluatorError::ExpectedInteger { .. }));
    assert!(matches!(eval_failure("x := .{ * [1], 1 }."),
                     EvaluatorError::ExpectedInteger { .. }));
}

#[test]
fn arithmetic_overflow_is_an_error() {
    assert!(matches!(eval_failure("x := .{ + 9223372036854775807, 1 }."),
                     EvaluatorError::Overflow { .. }));
    assert!(matches!(eval_failure("x := .{ * 9223372036854775807, 2 }."),
                     EvaluatorError::Overflow { .. }));
}

#[test]
fn concat_joins_text_in_order() {
    assert_eq!(table("x := .{ concat q(a), q(b) }.")["x"], Value::from("ab"));
    assert_eq!(table("x := .{ concat }.")["x"], Value::from(""));
    assert!(matches!(eval_failure("x := .{ concat q(a), 1 }."),
                     EvaluatorError::ExpectedText { .. }));
}

#[test]
fn len_counts_characters_and_elements() {
    assert_eq!(table("x := .{ len q(abc) }.")["x"], Value::Integer(3));
    assert_eq!(table("x := .{ len q(драм) }.")["x"], Value::Integer(4));
    assert_eq!(table("x := .{ len [1, 2, 3] }.")["x"], Value::Integer(3));
    assert_eq!(table("x := .{ len [] }.")["x"], Value::Integer(0));

    assert!(matches!(eval_failure("x := .{ len [1, 2, 3], 1 }."),
                     EvaluatorError::ArgumentCountMismatch { .. }));
    assert!(matches!(eval_failure("x := .{ len }."),
                     EvaluatorError::ArgumentCountMismatch { .. }));
    assert!(matches!(eval_failure("x := .{ len 5 }."),
                     EvaluatorError::ExpectedTextOrArray { .. }));
}

#[test]
fn unknown_operations_fail() {
    assert!(matches!(eval_failure("x := .{ foo 1, 2 }."),
                     EvaluatorError::UnknownOperation { .. }));

    // Arguments are parsed before the operation is looked up, so an
    // undefined constant among them wins.
    assert!(matches!(parse_failure("x := .{ foo bar }."),
                     ParseError::UnknownConstant { .. }));
}

#[test]
fn arrays_nest_and_mix_types() {
    let constants = table("x := [1, q(a), [2, 3]]");
    let expected = Value::from(vec![
        Value::Integer(1),
        Value::from("a"),
        Value::from(vec![Value::Integer(2), Value::Integer(3)]),
    ]);

    assert_eq!(constants["x"], expected);
}

#[test]
fn array_delimiters() {
    assert_eq!(table("x := []")["x"], Value::from(vec![]));
    assert_eq!(table("x := [1, 2,]")["x"],
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));

    assert!(matches!(parse_failure("x := [,1]"),
                     ParseError::InvalidValueToken { .. }));
    assert!(matches!(parse_failure("x := [1,,2]"),
                     ParseError::InvalidValueToken { .. }));
    assert!(matches!(parse_failure("x := [1 2]"),
                     ParseError::ExpectedCommaOrBracket { .. }));
    assert!(matches!(parse_failure("x := [1, 2"),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn nested_computations_resolve_inside_out() {
    assert_eq!(table("x := .{ + 1, .{ * 2, 3 }. }.")["x"], Value::Integer(7));
    assert_eq!(table("x := .{ len [.{ + 1, 1 }., 2] }.")["x"], Value::Integer(2));
}

#[test]
fn quote_layer_is_stripped_once() {
    assert!(table("x := q(hi)")["x"].is_text());
    assert_eq!(table("x := q(hi)")["x"], Value::from("hi"));
    assert_eq!(table("x := q(\"hi\")")["x"], Value::from("hi"));
    assert_eq!(table("x := q('hi')")["x"], Value::from("hi"));
    assert_eq!(table("x := q()")["x"], Value::from(""));

    // Only one layer goes, and only a matching pair.
    assert_eq!(table("x := q(\"'hi'\")")["x"], Value::from("'hi'"));
    assert_eq!(table("x := q(\"hi')")["x"], Value::from("\"hi'"));
    assert_eq!(table("x := q(\" hi \")")["x"], Value::from(" hi "));
}

#[test]
fn line_comments_drop_whole_lines() {
    let constants = table("# leading comment x := 9\nx := 1\n  * trailing := junk\ny := 2");

    assert_eq!(constants.len(), 2);
    assert_eq!(constants["x"], Value::Integer(1));
    assert_eq!(constants["y"], Value::Integer(2));
}

#[test]
fn block_comments_span_lines_and_are_non_greedy() {
    let constants = table("x := {{!-- gone\nstill gone --}} 1\ny := {{!-- a --}} 2 {{!-- b --}}");

    assert_eq!(constants["x"], Value::Integer(1));
    assert_eq!(constants["y"], Value::Integer(2));
}

#[test]
fn comment_stripping_is_idempotent_on_clean_input() {
    let clean = "x := 1\ny := [2, 3]";
    assert_eq!(strip_comments(clean), clean);
    assert_eq!(strip_comments(&strip_comments("# c\nx := 1")),
               strip_comments("# c\nx := 1"));
}

#[test]
fn statement_syntax_errors() {
    assert!(matches!(parse_failure("5 := 1"),
                     ParseError::ExpectedIdentifier { .. }));
    assert!(matches!(parse_failure("x = 5"), ParseError::ExpectedAssign { .. }));
    assert!(matches!(parse_failure("x :="),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("x := :="),
                     ParseError::InvalidValueToken { .. }));
    assert!(matches!(parse_failure("x := .{ + 1, 2"),
                     ParseError::ExpectedComputationClose { .. }));
}

#[test]
fn operator_keywords_are_not_constant_names() {
    assert!(matches!(parse_failure("len := 1"),
                     ParseError::ExpectedIdentifier { .. }));
}

#[test]
fn unrecognized_input_is_a_lexical_error() {
    let err = parse_failure("x := 1\ny := @");
    match err {
        ParseError::UnrecognizedToken { token, line } => {
            assert_eq!(token, "@");
            assert_eq!(line, 2);
        },
        other => panic!("Expected an unrecognized-token error, got: {other}"),
    }

    assert!(matches!(parse_failure("x := 99999999999999999999"),
                     ParseError::UnrecognizedToken { .. }));
}

#[test]
fn errors_carry_source_lines() {
    let err = parse_failure("x := 1\n\nz := missing");
    assert!(matches!(err, ParseError::UnknownConstant { line: 3, .. }),
            "got: {err}");

    // Dropped comment lines still count towards line numbers.
    let err = parse_failure("# comment\nz := missing");
    assert!(matches!(err, ParseError::UnknownConstant { line: 2, .. }),
            "got: {err}");
}

#[test]
fn toml_rendering() {
    assert_converts("port := 8080", "port = 8080");
    assert_converts("x := q('say \"hi\"')", "x = \"say \\\"hi\\\"\"");
    assert_converts("x := [1, q(a), [2, 3]]", "x = [1, \"a\", [2, 3]]");
    assert_converts("a := 1\nb := q(two)\nc := [a, b]",
                    "a = 1\nb = \"two\"\nc = [1, \"two\"]");
    assert_converts("", "");
}
