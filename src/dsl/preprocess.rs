/// The marker that opens a block comment.
pub const BLOCK_OPEN: &str = "{{!--";
/// The marker that closes a block comment.
pub const BLOCK_CLOSE: &str = "--}}";

/// Strips all comments from raw source text.
///
/// Line comments are removed first, on the original line structure, then
/// block comments. There is no escaping mechanism for the comment markers,
/// and comment removal does not know about quoted literals: a marker inside a
/// `q(...)` literal is removed like any other.
///
/// The result is idempotent: stripping an already-clean text changes nothing
/// but dropped comment content.
///
/// # Parameters
/// - `source`: Raw source text.
///
/// # Returns
/// The text with all comments removed.
///
/// # Example
/// ```
/// use tomlette::dsl::preprocess::strip_comments;
///
/// let text = "# a comment\nx := 1 {{!-- inline --}}\n";
/// assert_eq!(strip_comments(text), "\nx := 1 \n");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    strip_block_comments(&strip_line_comments(source))
}

/// Drops every line whose first non-whitespace character is `*` or `#`.
///
/// The whole line is dropped regardless of its trailing content; comments
/// cannot start mid-line. Dropped lines are replaced by empty lines so that
/// the line numbers of the remaining text stay aligned with the input.
#[must_use]
pub fn strip_line_comments(source: &str) -> String {
    source.split('\n')
          .map(|line| {
              let trimmed = line.trim_start();
              if trimmed.starts_with('*') || trimmed.starts_with('#') {
                  ""
              } else {
                  line
              }
          })
          .collect::<Vec<_>>()
          .join("\n")
}

/// Deletes every `{{!--` ... `--}}` span, including the markers.
///
/// Block comments do not nest and may span newlines; the match is non-greedy,
/// so the first close marker terminates the span. Newlines inside a deleted
/// span are kept so that later line numbers stay aligned with the input. An
/// open marker without a matching close marker is left in place.
#[must_use]
pub fn strip_block_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find(BLOCK_OPEN) {
        out.push_str(&rest[..start]);

        let body = &rest[start + BLOCK_OPEN.len()..];
        match body.find(BLOCK_CLOSE) {
            Some(end) => {
                out.extend(body[..end].chars().filter(|&c| c == '\n'));
                rest = &body[end + BLOCK_CLOSE.len()..];
            },
            None => {
                // Unterminated block comment; leave the tail untouched.
                out.push_str(&rest[start..]);
                return out;
            },
        }
    }

    out.push_str(rest);
    out
}
