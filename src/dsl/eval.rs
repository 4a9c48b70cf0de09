use crate::{dsl::value::Value, error::EvaluatorError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvaluatorError`] describing the failure.
pub type EvalResult<T> = Result<T, EvaluatorError>;

/// Applies an operation to already-resolved argument values.
///
/// This is the whole operation table of the language:
///
/// | Operation | Arity | Arguments     | Result                            |
/// |-----------|-------|---------------|-----------------------------------|
/// | `+`       | >= 2  | all integers  | left-fold sum                     |
/// | `-`       | >= 2  | all integers  | left-fold subtraction             |
/// | `*`       | >= 2  | all integers  | left-fold product                 |
/// | `concat`  | >= 0  | all text      | ordered concatenation             |
/// | `len`     | 1     | text or array | character count or element count  |
///
/// Any other operation name is an error.
///
/// # Parameters
/// - `op`: The name of the operation.
/// - `args`: The resolved argument values, in source order.
/// - `line`: Line of the computation's opening marker, for error reporting.
///
/// # Returns
/// The resulting value.
///
/// # Errors
/// Returns an [`EvaluatorError`] for a wrong arity, a wrong argument type, an
/// unknown operation name, or integer overflow.
///
/// # Example
/// ```
/// use tomlette::dsl::{eval::apply, value::Value};
///
/// let args = [Value::Integer(10), Value::Integer(3), Value::Integer(2)];
/// let result = apply("-", &args, 1).unwrap();
///
/// assert_eq!(result, Value::Integer(5));
/// ```
pub fn apply(op: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    match op {
        "+" => fold_integers(op, args, line, i64::checked_add),
        "-" => fold_integers(op, args, line, i64::checked_sub),
        "*" => fold_integers(op, args, line, i64::checked_mul),
        "concat" => concat(args, line),
        "len" => len(args, line),
        _ => Err(EvaluatorError::UnknownOperation { name: op.to_string(),
                                                    line }),
    }
}

/// Folds at least two integer arguments with a checked arithmetic operation,
/// left to right.
fn fold_integers(op: &str,
                 args: &[Value],
                 line: usize,
                 combine: fn(i64, i64) -> Option<i64>)
                 -> EvalResult<Value> {
    if args.len() < 2 {
        return Err(EvaluatorError::NotEnoughArguments { op: op.to_string(),
                                                        line });
    }

    let mut acc = expect_integer(&args[0], op, line)?;
    for arg in &args[1..] {
        let n = expect_integer(arg, op, line)?;
        acc = combine(acc, n).ok_or(EvaluatorError::Overflow { line })?;
    }

    Ok(Value::Integer(acc))
}

fn expect_integer(value: &Value, op: &str, line: usize) -> EvalResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        _ => Err(EvaluatorError::ExpectedInteger { op: op.to_string(),
                                                   line }),
    }
}

/// Concatenates any number of text arguments in order.
///
/// Zero arguments produce empty text.
fn concat(args: &[Value], line: usize) -> EvalResult<Value> {
    let mut result = String::new();
    for arg in args {
        match arg {
            Value::Text(s) => result.push_str(s),
            _ => return Err(EvaluatorError::ExpectedText { line }),
        }
    }

    Ok(Value::Text(result))
}

/// Returns the character count of a text value or the element count of an
/// array. Takes exactly one argument.
fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    let [arg] = args else {
        return Err(EvaluatorError::ArgumentCountMismatch { op: "len".to_string(),
                                                           line });
    };

    let count = match arg {
        Value::Text(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Integer(_) => return Err(EvaluatorError::ExpectedTextOrArray { line }),
    };

    i64::try_from(count).map_or(Err(EvaluatorError::Overflow { line }), |n| Ok(Value::Integer(n)))
}
