use std::rc::Rc;

use indexmap::IndexMap;

/// The insertion-ordered mapping from constant name to resolved value.
///
/// The table is created empty at parse start, mutated exactly once per
/// `name := value` statement (insert-or-overwrite, so rebinding a name keeps
/// its original position), and handed to the caller complete once the token
/// stream is exhausted.
pub type ConstantTable = IndexMap<String, Value>;

/// Represents a fully-resolved value of the language.
///
/// Computations never appear here: a computation is evaluated the moment it
/// is parsed, so only its result is ever stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A non-negative 64-bit integer parsed from a digit sequence.
    Integer(i64),
    /// A sequence of characters, with the literal delimiters and one layer of
    /// enclosing quotes already stripped.
    Text(String),
    /// An ordered, heterogeneous sequence of values.
    Array(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Text`].
    ///
    /// [`Text`]: Value::Text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }
}
