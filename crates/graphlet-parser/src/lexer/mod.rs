mod cursor;
mod token;
mod token_kind;

use crate::error::SyntaxError;
use crate::error::SyntaxErrorKind;
use cursor::Cursor;

pub use token::Token;
pub use token_kind::TokenKind;

/// Tokenizes text into a stream of tokens on demand.
///
/// Trivia (whitespace including a BOM, commas, `#` comments) are yielded as
/// tokens of their own so the parser can keep the syntax tree lossless. A
/// final `Eof` token is yielded before the stream ends. Lexing errors are
/// [`UnexpectedCharacters`] errors and terminate the stream.
///
/// [`UnexpectedCharacters`]: SyntaxErrorKind::UnexpectedCharacters
#[derive(Debug, Clone)]
pub(crate) struct Lexer<'a> {
    input: &'a str,
    index: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    fn advance_position(&mut self, data: &str) {
        let mut chars = data.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let rest = &self.input[self.index..];
        if rest.is_empty() {
            self.finished = true;
            return Some(Ok(Token {
                kind: TokenKind::Eof,
                data: "",
                index: self.index,
                line: self.line,
                column: self.column,
            }));
        }

        let mut cursor = Cursor::new(rest);
        let scanned = scan_token(&mut cursor);
        let len = cursor.len_consumed();
        let data = &rest[..len];
        let (index, line, column) = (self.index, self.line, self.column);
        self.index += len;
        self.advance_position(data);

        match scanned {
            Ok(kind) => Some(Ok(Token {
                kind,
                data,
                index,
                line,
                column,
            })),
            Err(message) => {
                self.finished = true;
                Some(Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedCharacters,
                    message,
                    data.to_string(),
                    index,
                    line,
                    column,
                )))
            }
        }
    }
}

fn scan_token(cursor: &mut Cursor<'_>) -> Result<TokenKind, String> {
    let first = match cursor.bump() {
        Some(c) => c,
        None => return Ok(TokenKind::Eof),
    };
    match first {
        c if is_whitespace(c) => {
            while is_whitespace(cursor.first()) {
                cursor.bump();
            }
            Ok(TokenKind::Whitespace)
        }
        ',' => Ok(TokenKind::Comma),
        '#' => {
            while !cursor.is_eof() && !is_line_terminator(cursor.first()) {
                cursor.bump();
            }
            Ok(TokenKind::Comment)
        }
        '"' => scan_string(cursor),
        '.' => {
            if cursor.first() == '.' && cursor.second() == '.' {
                cursor.bump();
                cursor.bump();
                Ok(TokenKind::Spread)
            } else {
                Err("Unterminated spread operator, expected `...`".to_string())
            }
        }
        c if c == '-' || is_digit(c) => scan_number(cursor, c),
        c if is_ident_start(c) => {
            while is_ident_continue(cursor.first()) {
                cursor.bump();
            }
            Ok(TokenKind::Name)
        }
        '!' => Ok(TokenKind::Bang),
        '$' => Ok(TokenKind::Dollar),
        '&' => Ok(TokenKind::Amp),
        '(' => Ok(TokenKind::LParen),
        ')' => Ok(TokenKind::RParen),
        ':' => Ok(TokenKind::Colon),
        '=' => Ok(TokenKind::Eq),
        '@' => Ok(TokenKind::At),
        '[' => Ok(TokenKind::LBracket),
        ']' => Ok(TokenKind::RBracket),
        '{' => Ok(TokenKind::LCurly),
        '}' => Ok(TokenKind::RCurly),
        '|' => Ok(TokenKind::Pipe),
        c => Err(format!("Unexpected character `{c}`")),
    }
}

fn scan_number(cursor: &mut Cursor<'_>, first: char) -> Result<TokenKind, String> {
    let int_start = if first == '-' {
        let c = cursor.first();
        if !is_digit(c) {
            return Err(format!("Unexpected character `{c}`, expected a digit after `-`"));
        }
        cursor.bump();
        c
    } else {
        first
    };
    if int_start == '0' && is_digit(cursor.first()) {
        return Err(format!(
            "Unexpected character `{}`, the integer part of a number cannot have a leading zero",
            cursor.first()
        ));
    }
    while is_digit(cursor.first()) {
        cursor.bump();
    }

    let mut kind = TokenKind::Int;
    if cursor.first() == '.' {
        cursor.bump();
        if !is_digit(cursor.first()) {
            return Err(format!(
                "Unexpected character `{}`, expected a digit after `.`",
                cursor.first()
            ));
        }
        while is_digit(cursor.first()) {
            cursor.bump();
        }
        kind = TokenKind::Float;
    }
    if matches!(cursor.first(), 'e' | 'E') {
        cursor.bump();
        if matches!(cursor.first(), '+' | '-') {
            cursor.bump();
        }
        if !is_digit(cursor.first()) {
            return Err(format!(
                "Unexpected character `{}`, expected a digit in the exponent",
                cursor.first()
            ));
        }
        while is_digit(cursor.first()) {
            cursor.bump();
        }
        kind = TokenKind::Float;
    }
    Ok(kind)
}

/// The opening `"` has already been consumed.
fn scan_string(cursor: &mut Cursor<'_>) -> Result<TokenKind, String> {
    if cursor.first() == '"' {
        cursor.bump();
        if cursor.first() == '"' {
            cursor.bump();
            return scan_block_string(cursor);
        }
        // empty string ""
        return Ok(TokenKind::StringValue);
    }
    loop {
        match cursor.bump() {
            None => return Err("unterminated string value, missing closing `\"`".to_string()),
            Some('"') => return Ok(TokenKind::StringValue),
            Some('\\') => match cursor.bump() {
                Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {}
                Some('u') => {
                    for _ in 0..4 {
                        let c = cursor.first();
                        if !c.is_ascii_hexdigit() {
                            return Err(format!(
                                "Unexpected character `{c}`, expected four hex digits after `\\u`"
                            ));
                        }
                        cursor.bump();
                    }
                }
                Some(c) => return Err(format!("unsupported string escape `\\{c}`")),
                None => return Err("unterminated string value, missing closing `\"`".to_string()),
            },
            Some(c) if is_line_terminator(c) => {
                return Err("unexpected line terminator inside a string value".to_string())
            }
            Some(_) => {}
        }
    }
}

/// The opening `"""` has already been consumed.
fn scan_block_string(cursor: &mut Cursor<'_>) -> Result<TokenKind, String> {
    loop {
        match cursor.bump() {
            None => {
                return Err("unterminated block string, missing closing `\"\"\"`".to_string())
            }
            Some('\\') => {
                // \""" is the only escape block strings recognize
                if cursor.first() == '"' && cursor.second() == '"' && cursor.third() == '"' {
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                }
            }
            Some('"') => {
                if cursor.first() == '"' && cursor.second() == '"' {
                    cursor.bump();
                    cursor.bump();
                    return Ok(TokenKind::BlockStringValue);
                }
            }
            Some(_) => {}
        }
    }
}

fn is_whitespace(c: char) -> bool {
    // ASCII whitespace, line terminators, and the Unicode BOM
    matches!(
        c,
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\r' | '\n' | '\u{FEFF}'
    )
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_ident_start(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}

fn is_ident_continue(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
}
