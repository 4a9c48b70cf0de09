use std::{iter::Peekable, slice::Iter};

use crate::{
    dsl::{
        eval,
        lexer::Token,
        value::{ConstantTable, Value},
    },
    error::{ConvertError, ParseError},
};

/// Result type used by the parser.
///
/// Parsing can fail with either error kind: a [`ParseError`] for malformed
/// syntax, or an [`EvaluatorError`] surfacing from a computation that is
/// evaluated while parsing.
///
/// [`ParseError`]: crate::error::ParseError
/// [`EvaluatorError`]: crate::error::EvaluatorError
pub type ParseResult<T> = Result<T, ConvertError>;

/// A recursive-descent parser over a token sequence.
///
/// The parser owns the constant table being built and resolves every value
/// eagerly: computations are evaluated and constant references are looked up
/// the moment they are parsed, so a constant must be defined in an earlier
/// statement before it can be referenced.
pub struct Parser<'a> {
    tokens:    Peekable<Iter<'a, (Token, usize)>>,
    constants: ConstantTable,
    last_line: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token sequence with an empty constant table.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               constants: ConstantTable::new(),
               last_line: 1, }
    }

    /// Parses the whole token sequence into a constant table.
    ///
    /// The top-level loop parses one `name := value` statement at a time
    /// until the stream is exhausted. Each statement inserts or overwrites
    /// one entry; rebinding an existing name wins silently.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for malformed syntax or a reference to an
    /// undefined constant, and an [`EvaluatorError`] for an invalid
    /// computation. Both abort parsing immediately.
    ///
    /// [`ParseError`]: crate::error::ParseError
    /// [`EvaluatorError`]: crate::error::EvaluatorError
    pub fn parse(mut self) -> ParseResult<ConstantTable> {
        while self.tokens.peek().is_some() {
            self.parse_statement()?;
        }

        Ok(self.constants)
    }

    /// Consumes the next token, remembering its line for later diagnostics.
    fn advance(&mut self) -> Option<&'a (Token, usize)> {
        let item = self.tokens.next();
        if let Some((_, line)) = item {
            self.last_line = *line;
        }

        item
    }

    /// Parses one `name := value` statement and records the binding.
    fn parse_statement(&mut self) -> ParseResult<()> {
        let name = match self.advance() {
            Some((Token::Identifier(name), _)) => name.clone(),
            Some((tok, line)) => {
                return Err(ParseError::ExpectedIdentifier { token: tok.lexeme(),
                                                            line:  *line, }.into());
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line: self.last_line }.into());
            },
        };

        match self.advance() {
            Some((Token::Assign, _)) => {},
            Some((tok, line)) => {
                return Err(ParseError::ExpectedAssign { token: tok.lexeme(),
                                                        line:  *line, }.into());
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line: self.last_line }.into());
            },
        }

        let value = self.parse_value()?;
        self.constants.insert(name, value);

        Ok(())
    }

    /// Parses one value, dispatching on the current token.
    ///
    /// A value is an integer literal, a quoted literal, an array, a
    /// computation, or a reference to an already-defined constant. A
    /// reference resolves to a copy of the stored value; a computation
    /// resolves to its result.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.tokens.peek() {
            Some((Token::Integer(n), _)) => {
                let n = *n;
                self.advance();

                Ok(Value::Integer(n))
            },
            Some((Token::Quoted(raw), _)) => {
                let text = strip_quote_layer(raw).to_string();
                self.advance();

                Ok(Value::Text(text))
            },
            Some((Token::LBracket, _)) => {
                self.advance();
                self.parse_array()
            },
            Some((Token::ComputeOpen, line)) => {
                let line = *line;
                self.advance();
                self.parse_computation(line)
            },
            Some((Token::Identifier(name), line)) => {
                let (name, line) = (name.clone(), *line);
                self.advance();

                self.constants
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| ParseError::UnknownConstant { name, line }.into())
            },
            Some((tok, line)) => Err(ParseError::InvalidValueToken { token: tok.lexeme(),
                                                                     line:  *line, }.into()),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.last_line }.into()),
        }
    }

    /// Parses the remainder of an array after its `[`.
    ///
    /// Elements are comma-separated; empty arrays and a trailing comma before
    /// `]` are accepted, but a comma where a value is expected is not, so two
    /// consecutive commas or a comma directly after `[` fail.
    fn parse_array(&mut self) -> ParseResult<Value> {
        let mut items = Vec::new();

        loop {
            if let Some((Token::RBracket, _)) = self.tokens.peek() {
                self.advance();
                break;
            }

            items.push(self.parse_value()?);

            match self.tokens.peek() {
                Some((Token::Comma, _)) => {
                    self.advance();
                },
                Some((Token::RBracket, _)) => {
                    self.advance();
                    break;
                },
                Some((tok, line)) => {
                    return Err(ParseError::ExpectedCommaOrBracket { token: tok.lexeme(),
                                                                    line:  *line, }.into());
                },
                None => {
                    return Err(ParseError::UnexpectedEndOfInput { line: self.last_line }.into());
                },
            }
        }

        Ok(Value::from(items))
    }

    /// Parses and immediately evaluates a computation after its `.{`.
    ///
    /// The first token names the operation; argument values follow until the
    /// closing `}.`. A comma between arguments is consumed when present but
    /// not required. Only the evaluated result is kept.
    fn parse_computation(&mut self, line: usize) -> ParseResult<Value> {
        let op = match self.advance() {
            Some((tok, _)) => tok.lexeme(),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line: self.last_line }.into());
            },
        };

        let mut args = Vec::new();
        loop {
            match self.tokens.peek() {
                Some((Token::ComputeClose, _)) | None => break,
                _ => {},
            }

            args.push(self.parse_value()?);

            if let Some((Token::Comma, _)) = self.tokens.peek() {
                self.advance();
            }
        }

        match self.tokens.peek() {
            Some((Token::ComputeClose, _)) => {
                self.advance();
            },
            _ => {
                return Err(ParseError::ExpectedComputationClose { line: self.last_line }.into());
            },
        }

        Ok(eval::apply(&op, &args, line)?)
    }
}

/// Strips one layer of enclosing quote characters from a quoted literal's
/// interior, if present.
///
/// Both `'...'` and `"..."` count, the pair must match, and the strip happens
/// exactly once; no recursive unquoting and no escape processing beyond it.
fn strip_quote_layer(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &raw[1..raw.len() - 1];
        }
    }

    raw
}
