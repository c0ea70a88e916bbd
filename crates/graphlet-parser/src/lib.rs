//! Parser for GraphQL schema definition language and executable documents.
//!
//! Tokenizes and parses input into a lossless concrete syntax tree: every
//! token of the source, trivia included, is kept, so positions and the
//! original text can always be recovered. The logical tree shape — rule
//! nodes, name/keyword/literal tokens, in grammar order — is stable and is
//! what downstream lowering consumes.
//!
//! Parsing is deterministic and fail-fast: the same input always yields the
//! same tree, and the first lexical or syntactic error aborts the parse.
//!
//! ## Example
//! ```rust
//! use graphlet_parser::Parser;
//!
//! let sdl = "
//! type Business implements NamedEntity {
//!   name: String
//! }
//! ";
//! let tree = Parser::new(sdl).parse().expect("valid SDL");
//! assert_eq!(tree.text(), sdl);
//! ```

mod error;
mod lexer;
mod limit;
mod parser;
mod syntax_kind;

pub use crate::error::SyntaxError;
pub use crate::error::SyntaxErrorKind;
pub use crate::lexer::Token;
pub use crate::lexer::TokenKind;
pub use crate::limit::LimitTracker;
pub use crate::parser::GraphletLanguage;
pub use crate::parser::Parser;
pub use crate::parser::SyntaxElement;
pub use crate::parser::SyntaxNode;
pub use crate::parser::SyntaxNodeChildren;
pub use crate::parser::SyntaxToken;
pub use crate::parser::SyntaxTree;
pub use crate::syntax_kind::SyntaxKind;
