/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a
/// computation. Evaluator errors include wrong arities, argument type
/// mismatches, unknown operations and arithmetic overflow.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized input, unexpected end of input,
/// missing required tokens and references to undefined constants.
pub mod parse_error;

pub use eval_error::EvaluatorError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// The top-level error returned by a conversion run.
///
/// Both kinds are fatal: a failure anywhere aborts the whole run and no
/// partial constant table is ever emitted.
pub enum ConvertError {
    /// The source failed to lex or parse.
    Parse(ParseError),
    /// A computation was invalid.
    Eval(EvaluatorError),
}

impl From<ParseError> for ConvertError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvaluatorError> for ConvertError {
    fn from(e: EvaluatorError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
