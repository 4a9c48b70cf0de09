/// The evaluator module executes computations against resolved values.
///
/// A computation is an operator applied to already-resolved argument values.
/// The evaluator implements the fixed operation table of the language:
/// arithmetic folds, string concatenation and length.
///
/// # Responsibilities
/// - Applies an operator to its argument values and returns the result.
/// - Enforces arity and argument types for every operation.
/// - Reports evaluation errors such as unknown operations or overflow.
pub mod eval;
/// The lexer module tokenizes preprocessed source text.
///
/// The lexer reads the comment-free source and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a quoted
/// literal, a number, punctuation, an operator keyword or an identifier.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles quoted literals that may span newlines.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module resolves the token stream into a constant table.
///
/// The parser consumes tokens via recursive descent, building a mapping from
/// constant name to value. Computations and constant references are resolved
/// eagerly during the same pass, so no syntax tree is ever materialized.
///
/// # Responsibilities
/// - Parses `name := value` statements until the stream is exhausted.
/// - Resolves arrays, computations and constant references recursively.
/// - Validates grammar and reports errors with line information.
pub mod parser;
/// The preprocessor module strips comments from raw source text.
///
/// Comment removal happens before tokenization: whole lines starting with `*`
/// or `#` are dropped first, then `{{!--` ... `--}}` block comments are
/// deleted wherever they appear.
///
/// # Responsibilities
/// - Removes line comments on the original line structure.
/// - Removes non-nesting block comments, which may span newlines.
/// - Preserves line numbering for later diagnostics.
pub mod preprocess;
/// The value module defines the data types produced by resolution.
///
/// This module declares the `Value` enum covering integers, text and
/// heterogeneous arrays, and the insertion-ordered constant table that is the
/// sole output of the core.
///
/// # Responsibilities
/// - Defines the `Value` enum and conversions into it.
/// - Defines the `ConstantTable` mapping type.
pub mod value;
