//! # tomlette
//!
//! tomlette is a converter from a small constant-definition language to TOML.
//! It strips comments, tokenizes, parses constant assignments, resolves inline
//! computations and constant references, and renders the result as a flat TOML
//! document.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    dsl::{lexer, parser::Parser, preprocess, value::ConstantTable},
    error::ConvertError,
};

/// The front end of the constant-definition language.
///
/// This module ties together comment stripping, lexing, parsing, value
/// representations and computation evaluation to turn raw source text into a
/// resolved constant table.
///
/// # Responsibilities
/// - Coordinates the core components: preprocessor, lexer, parser, evaluator.
/// - Defines the value types produced by resolution.
/// - Manages the flow of data and errors between phases.
pub mod dsl;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a script. It standardizes error reporting and carries the source
/// line of each failure for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Renders a resolved constant table as a TOML document.
///
/// The formatter is a thin serialization layer over the core's output: it
/// walks the constant table in insertion order and emits one `key = value`
/// line per constant.
///
/// # Responsibilities
/// - Renders integers, strings and (nested) arrays in TOML syntax.
/// - Escapes double quotes inside string values.
pub mod format;

/// Resolves a script into its constant table.
///
/// This is the entry point of the core: the source is stripped of comments,
/// tokenized, and parsed in a single left-to-right pass during which every
/// computation and constant reference is resolved eagerly. The returned table
/// maps constant names to their final values in definition order.
///
/// # Errors
/// Returns a [`ConvertError`] if the source fails to lex or parse, or if a
/// computation is invalid.
///
/// # Examples
/// ```
/// use tomlette::{dsl::value::Value, resolve};
///
/// let table = resolve("answer := .{ * 6, 7 }.").unwrap();
/// assert_eq!(table["answer"], Value::Integer(42));
/// ```
pub fn resolve(source: &str) -> Result<ConstantTable, ConvertError> {
    let clean = preprocess::strip_comments(source);
    let tokens = lexer::tokenize(&clean)?;

    Parser::new(&tokens).parse()
}

/// Converts a script into a TOML document.
///
/// Equivalent to [`resolve`] followed by [`format::to_toml`]. The output has
/// one `key = value` line per constant, in definition order, with no trailing
/// newline.
///
/// # Errors
/// Returns a [`ConvertError`] if the source fails to lex or parse, or if a
/// computation is invalid.
///
/// # Examples
/// ```
/// use tomlette::convert;
///
/// let toml = convert("name := q(\"tomlette\")\nport := 8080").unwrap();
/// assert_eq!(toml, "name = \"tomlette\"\nport = 8080");
/// ```
pub fn convert(source: &str) -> Result<String, ConvertError> {
    let constants = resolve(source)?;

    Ok(format::to_toml(&constants))
}
