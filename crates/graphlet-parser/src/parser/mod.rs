pub(crate) mod grammar;
mod language;
mod syntax_tree;
#[cfg(test)]
pub(crate) mod utils;

use crate::error::SyntaxError;
use crate::error::SyntaxErrorKind;
use crate::lexer::Lexer;
use crate::lexer::Token;
use crate::lexer::TokenKind;
use crate::LimitTracker;
use crate::SyntaxKind;
use std::cell::RefCell;
use std::rc::Rc;

pub use language::GraphletLanguage;
pub use language::SyntaxElement;
pub use language::SyntaxNode;
pub use language::SyntaxNodeChildren;
pub use language::SyntaxToken;
pub use syntax_tree::SyntaxTree;
pub(crate) use syntax_tree::SyntaxTreeBuilder;

/// Deep nesting is bounded to keep the recursive descent off the end of the
/// call stack; the default leaves a comfortable margin below where stack
/// overflow was observed experimentally.
const DEFAULT_RECURSION_LIMIT: usize = 500;

/// Parse GraphQL schemas or executable documents into a typed syntax tree.
///
/// The same entry point parses both: SDL definitions and operations may
/// even be mixed in one document.
///
/// ## Example
/// ```rust
/// use graphlet_parser::Parser;
///
/// let sdl = "
/// schema {
///     query: Query
/// }
/// type Query {
///     me: User
/// }
/// ";
/// let tree = Parser::new(sdl).parse().expect("schema parses");
/// let document = tree.document();
/// // walk `document` or hand the tree to a lowering layer
/// ```
#[derive(Debug)]
pub struct Parser<'input> {
    input: &'input str,
    lexer: Lexer<'input>,
    /// One token of lookahead, always a significant token.
    current: Option<Token<'input>>,
    /// Trivia seen before `current`, not yet in the tree.
    pending_trivia: Vec<Token<'input>>,
    /// The in-progress tree.
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
    /// Error reported by the lexer, surfaced when the parser reaches it.
    lex_error: Option<SyntaxError>,
    /// Whether the last consumed token was consumed as a name. Error
    /// classification depends on it, see [`Parser::unexpected`].
    prev_was_name: bool,
    pub(crate) recursion_limit: LimitTracker,
}

impl<'input> Parser<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            current: None,
            pending_trivia: Vec::new(),
            builder: Rc::new(RefCell::new(SyntaxTreeBuilder::new())),
            lex_error: None,
            prev_was_name: false,
            recursion_limit: LimitTracker::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// Configure the recursion limit to use while parsing.
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = LimitTracker::new(limit);
        self
    }

    /// Parse the input. The first syntax error aborts the parse.
    pub fn parse(mut self) -> Result<SyntaxTree, SyntaxError> {
        grammar::document::document(&mut self)?;

        let builder = Rc::try_unwrap(self.builder)
            .expect("more than one reference to builder left")
            .into_inner();
        Ok(builder.finish())
    }

    /// Pull tokens from the lexer until a significant one, buffering trivia.
    fn lex_next(&mut self) -> Token<'input> {
        loop {
            match self.lexer.next() {
                Some(Ok(token)) if token.kind().is_trivia() => self.pending_trivia.push(token),
                Some(Ok(token)) => return token,
                Some(Err(err)) => {
                    let token = Token {
                        kind: TokenKind::Error,
                        data: "",
                        index: err.index(),
                        line: err.line(),
                        column: err.column(),
                    };
                    self.lex_error = Some(err);
                    return token;
                }
                None => {
                    // The lexer always yields an Eof token before ending,
                    // and Eof is never consumed, so this is unreachable in
                    // practice; synthesize an Eof defensively anyway.
                    return Token {
                        kind: TokenKind::Eof,
                        data: "",
                        index: self.input.len(),
                        line: 1,
                        column: 1,
                    };
                }
            }
        }
    }

    fn peek_token(&mut self) -> Token<'input> {
        if self.current.is_none() {
            self.current = Some(self.lex_next());
        }
        self.current.unwrap_or_else(|| unreachable!())
    }

    /// Consume the current token. `Eof` and `Error` are sticky.
    fn pop(&mut self) -> Token<'input> {
        let token = self.peek_token();
        if !matches!(token.kind(), TokenKind::Eof | TokenKind::Error) {
            self.current = None;
        }
        token
    }

    /// Peek the current token's kind.
    pub(crate) fn peek(&mut self) -> TokenKind {
        self.peek_token().kind()
    }

    /// Peek the current token's source slice.
    pub(crate) fn peek_data(&mut self) -> &'input str {
        self.peek_token().data()
    }

    /// Peek the `n`th upcoming significant token.
    pub(crate) fn peek_token_n(&self, n: usize) -> Option<Token<'input>> {
        self.current
            .into_iter()
            .map(Ok)
            .chain(self.lexer.clone())
            .filter_map(Result::ok)
            .filter(|token| !token.kind().is_trivia())
            .nth(n - 1)
    }

    /// Peek the `n`th upcoming significant token's source slice.
    pub(crate) fn peek_data_n(&self, n: usize) -> Option<&'input str> {
        self.peek_token_n(n).map(|token| token.data())
    }

    pub(crate) fn at(&mut self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    /// Whether the current token is the given word.
    pub(crate) fn at_word(&mut self, word: &str) -> bool {
        self.at(TokenKind::Name) && self.peek_data() == word
    }

    /// Push buffered trivia into the tree at the current position.
    pub(crate) fn flush_trivia(&mut self) {
        let tokens = std::mem::take(&mut self.pending_trivia);
        for token in tokens {
            let kind = match token.kind() {
                TokenKind::Whitespace => SyntaxKind::WHITESPACE,
                TokenKind::Comment => SyntaxKind::COMMENT,
                TokenKind::Comma => SyntaxKind::COMMA,
                _ => unreachable!("only trivia is buffered"),
            };
            self.builder.borrow_mut().token(kind, token.data());
        }
    }

    /// Consume the current token into the tree under the given kind.
    pub(crate) fn bump(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        let token = self.pop();
        self.builder.borrow_mut().token(kind, token.data());
        self.prev_was_name = false;
    }

    /// Like [`bump`][Self::bump], for tokens consumed in name position.
    pub(crate) fn bump_as_name(&mut self, kind: SyntaxKind) {
        self.bump(kind);
        self.prev_was_name = true;
    }

    /// Consume the current token if it has the expected kind, or fail.
    pub(crate) fn expect(
        &mut self,
        token: TokenKind,
        kind: SyntaxKind,
        what: &str,
    ) -> Result<(), SyntaxError> {
        if self.at(token) {
            self.bump(kind);
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consume the current token if it is the expected word, or fail.
    pub(crate) fn expect_word(
        &mut self,
        word: &str,
        kind: SyntaxKind,
        what: &str,
    ) -> Result<(), SyntaxError> {
        if self.at_word(word) {
            self.bump(kind);
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Build the error for a parse failure at the current position.
    ///
    /// Classification mirrors the engine's observable behavior:
    /// end of input is always `UnexpectedToken`; a failure directly after a
    /// token consumed as a name is `UnexpectedToken` (after a name, almost
    /// any token can be formed, so the grammar is what rejects it); any
    /// other failure is `UnexpectedCharacters` (the expectation is narrow
    /// and the characters cannot start an acceptable token). Lexing errors
    /// pass through as `UnexpectedCharacters`.
    pub(crate) fn unexpected(&mut self, what: &str) -> SyntaxError {
        let token = self.peek_token();
        match token.kind() {
            TokenKind::Error => self.lex_error.take().unwrap_or_else(|| {
                SyntaxError::new(
                    SyntaxErrorKind::UnexpectedCharacters,
                    what,
                    String::new(),
                    token.index(),
                    token.line(),
                    token.column(),
                )
            }),
            TokenKind::Eof => SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken,
                format!("{what}, found end of input"),
                String::new(),
                token.index(),
                token.line(),
                token.column(),
            ),
            _ if self.prev_was_name => SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken,
                format!("{what}, found `{}`", token.data()),
                token.data().to_string(),
                token.index(),
                token.line(),
                token.column(),
            ),
            _ => SyntaxError::new(
                SyntaxErrorKind::UnexpectedCharacters,
                format!("{what}, found `{}`", token.data()),
                token.data().to_string(),
                token.index(),
                token.line(),
                token.column(),
            ),
        }
    }

    pub(crate) fn limit_error(&mut self) -> SyntaxError {
        let token = self.peek_token();
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken,
            "parser recursion limit reached",
            token.data().to_string(),
            token.index(),
            token.line(),
            token.column(),
        )
    }

    /// Start a node and make it current.
    ///
    /// The returned `NodeGuard` closes the node when dropped, so nodes
    /// cannot be left open on early returns.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) -> NodeGuard {
        self.flush_trivia();
        self.builder.borrow_mut().start_node(kind);
        NodeGuard::new(self.builder.clone())
    }

    /// Set a checkpoint for *maybe* wrapping the following parse tree in
    /// some other node.
    pub(crate) fn checkpoint_node(&mut self) -> Checkpoint {
        self.flush_trivia();
        let checkpoint = self.builder.borrow().checkpoint();
        Checkpoint::new(self.builder.clone(), checkpoint)
    }
}

/// A wrapper around the SyntaxTreeBuilder used to self-close nodes.
///
/// When the NodeGuard goes out of scope, it automatically runs
/// `finish_node()` on the SyntaxTreeBuilder.
#[must_use]
pub(crate) struct NodeGuard {
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
}

impl NodeGuard {
    fn new(builder: Rc<RefCell<SyntaxTreeBuilder>>) -> Self {
        Self { builder }
    }

    pub(crate) fn finish_node(self) {
        drop(self);
    }
}

impl Drop for NodeGuard {
    fn drop(&mut self) {
        self.builder.borrow_mut().finish_node();
    }
}

/// A rowan Checkpoint that can retroactively wrap nodes parsed since it was
/// taken. Used for the postfix `!` of non-null types.
pub(crate) struct Checkpoint {
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
    checkpoint: rowan::Checkpoint,
}

impl Checkpoint {
    fn new(builder: Rc<RefCell<SyntaxTreeBuilder>>, checkpoint: rowan::Checkpoint) -> Self {
        Self {
            builder,
            checkpoint,
        }
    }

    /// Wrap the nodes parsed since this checkpoint in a new parent node of
    /// kind `kind`. More children can be added while the guard is live.
    pub(crate) fn wrap_node(self, kind: SyntaxKind) -> NodeGuard {
        self.builder.borrow_mut().wrap_node(self.checkpoint, kind);
        NodeGuard::new(self.builder)
    }
}
