#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found input that matches no token pattern.
    UnrecognizedToken {
        /// The offending input slice.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement did not begin with a constant name.
    ExpectedIdentifier {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The `:=` operator was expected but not found.
    ExpectedAssign {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token that cannot begin a value was found where a value was
    /// expected.
    InvalidValueToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A constant was referenced before being defined.
    UnknownConstant {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array element was not followed by `,` or `]`.
    ExpectedCommaOrBracket {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A computation was not closed with `}.`.
    ExpectedComputationClose {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognized token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedIdentifier { token, line } => write!(f,
                                                               "Error on line {line}: Expected a constant name, found {token}."),

            Self::ExpectedAssign { token, line } => {
                write!(f, "Error on line {line}: Expected ':=', found {token}.")
            },

            Self::InvalidValueToken { token, line } => {
                write!(f, "Error on line {line}: Invalid token for a value: {token}.")
            },

            Self::UnknownConstant { name, line } => {
                write!(f, "Error on line {line}: Unknown constant '{name}'.")
            },

            Self::ExpectedCommaOrBracket { token, line } => write!(f,
                                                                   "Error on line {line}: Expected ',' or ']' while parsing an array, found {token}."),

            Self::ExpectedComputationClose { line } => write!(f,
                                                              "Error on line {line}: Expected '}}.' to close a computation."),
        }
    }
}

impl std::error::Error for ParseError {}
