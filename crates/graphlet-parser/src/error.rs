use std::fmt;
use thiserror::Error;

/// Distinguishes the two observable failure modes of the parser.
///
/// [`UnexpectedCharacters`] means the characters at the reported position
/// could not form a token acceptable where the parser was; it covers both
/// malformed literals (`"unterminated`, `01`) and characters that cannot
/// start anything the grammar would take at that point (`schema @ {`).
/// [`UnexpectedToken`] means a well-formed token was produced but the
/// grammar forbids it at that position, including running out of input.
///
/// [`UnexpectedCharacters`]: SyntaxErrorKind::UnexpectedCharacters
/// [`UnexpectedToken`]: SyntaxErrorKind::UnexpectedToken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    UnexpectedCharacters,
    UnexpectedToken,
}

/// A lexical or syntactic error, terminal for the parse that raised it.
///
/// Carries the offending source slice and its position; `line` and `column`
/// are 1-based, `index` is a byte offset into the input.
#[derive(Error, Clone, PartialEq, Eq)]
#[error("{message} at {line}:{column}")]
pub struct SyntaxError {
    pub(crate) kind: SyntaxErrorKind,
    pub(crate) message: String,
    pub(crate) data: String,
    pub(crate) index: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl SyntaxError {
    pub(crate) fn new<S: Into<String>>(
        kind: SyntaxErrorKind,
        message: S,
        data: String,
        index: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            data,
            index,
            line,
            column,
        }
    }

    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }

    /// The source slice the parser found to be lexically or syntactically
    /// incorrect. Empty at end of input.
    pub fn data(&self) -> &str {
        self.data.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Byte offset where the error begins.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line of the error position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the error position, counted in characters.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Debug for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}@{}:{} {:?} {}",
            self.kind, self.line, self.column, self.message, self.data
        )
    }
}
