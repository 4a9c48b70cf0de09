use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the preprocessed input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Quoted literal tokens such as `q(hello)`, carrying the raw interior.
    /// The literal runs to the next `)` and may span newlines.
    #[regex(r"q\([^)]*\)", parse_quoted)]
    Quoted(String),
    /// `.{`
    #[token(".{")]
    ComputeOpen,
    /// `}.`
    #[token("}.")]
    ComputeClose,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `=`
    #[token("=")]
    Equals,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `concat`
    #[token("concat")]
    Concat,
    /// `len`
    #[token("len")]
    Len,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// Identifier tokens; constant names such as `host` or `max_retries`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Newlines are insignificant but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text of the token, as written in a script.
    ///
    /// Used for error messages and to name the operator of a computation.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::Quoted(raw) => format!("q({raw})"),
            Self::ComputeOpen => ".{".to_string(),
            Self::ComputeClose => "}.".to_string(),
            Self::Assign => ":=".to_string(),
            Self::Equals => "=".to_string(),
            Self::LBracket => "[".to_string(),
            Self::RBracket => "]".to_string(),
            Self::Comma => ",".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Concat => "concat".to_string(),
            Self::Len => "len".to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Star => "*".to_string(),
            Self::Identifier(name) => name.clone(),
            Self::NewLine | Self::Ignored => String::new(),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Extracts the interior of a `q(...)` literal from the current token slice.
///
/// The `q(` and `)` delimiters are stripped here; a single layer of enclosing
/// quote characters, if any, is stripped later by the parser. Newlines inside
/// the literal are counted towards the line number.
fn parse_quoted(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[2..slice.len() - 1];

    lex.extras.line += inner.chars().filter(|&c| c == '\n').count();
    inner.to_string()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit sequence does not fit the integer width, which
///   turns the slice into a lexical error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes preprocessed source text into a sequence of token/line pairs.
///
/// Whitespace is insignificant and never produces a token. Input that matches
/// no token pattern is a lexical error rather than being skipped silently.
///
/// # Parameters
/// - `source`: Comment-free source text.
///
/// # Returns
/// The ordered token sequence, each token paired with the line it ends on.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedToken`] for unlexable input.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnrecognizedToken { token: slice.to_string(),
                                                       line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
