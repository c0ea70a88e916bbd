/// The raw kind of a lexed token.
///
/// The lexer never distinguishes keywords: every word is a [`Name`] and the
/// parser decides per position whether it acts as a keyword. `Error` marks
/// the position where lexing failed; the error itself travels separately.
///
/// [`Name`]: TokenKind::Name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Comma,
    Name,
    Int,
    Float,
    StringValue,
    BlockStringValue,
    Bang,
    Dollar,
    Amp,
    LParen,
    RParen,
    Spread,
    Colon,
    Eq,
    At,
    LBracket,
    RBracket,
    LCurly,
    RCurly,
    Pipe,
    Error,
    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma
        )
    }
}
