#[derive(Debug)]
/// Represents all errors that can occur while evaluating a computation.
pub enum EvaluatorError {
    /// An arithmetic operation received fewer than two arguments.
    NotEnoughArguments {
        /// The name of the operation.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operation received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the operation.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic operation received a non-integer argument.
    ExpectedInteger {
        /// The name of the operation.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `concat` received a non-text argument.
    ExpectedText {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `len` received an argument that is neither text nor an array.
    ExpectedTextOrArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator name is not in the operation table.
    UnknownOperation {
        /// The name of the operation.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic fold overflowed the integer width.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughArguments { op, line } => write!(f,
                                                            "Error on line {line}: Operation '{op}' requires at least 2 arguments."),

            Self::ArgumentCountMismatch { op, line } => write!(f,
                                                               "Error on line {line}: Operation '{op}' requires exactly 1 argument."),

            Self::ExpectedInteger { op, line } => write!(f,
                                                         "Error on line {line}: Operation '{op}' supports only integers."),

            Self::ExpectedText { line } => write!(f,
                                                  "Error on line {line}: Operation 'concat' supports only text."),

            Self::ExpectedTextOrArray { line } => write!(f,
                                                         "Error on line {line}: Operation 'len' supports only text or an array."),

            Self::UnknownOperation { name, line } => {
                write!(f, "Error on line {line}: Unknown operation '{name}'.")
            },

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvaluatorError {}
