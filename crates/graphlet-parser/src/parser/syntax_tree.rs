use std::fmt;

use rowan::GreenNodeBuilder;

use crate::parser::language::GraphletLanguage;
use crate::parser::language::SyntaxElement;
use crate::parser::language::SyntaxNode;
use crate::SyntaxKind;

/// A lossless syntax tree produced by a successful parse.
///
/// The tree keeps every token of the input, trivia included, so byte
/// offsets and the original text can always be recovered from it. The
/// *logical* tree — the shape fixed by the grammar, without trivia and
/// punctuators — is what [`shape`][SyntaxTree::shape] renders.
#[derive(Clone)]
pub struct SyntaxTree {
    pub(crate) syntax: SyntaxNode,
}

impl SyntaxTree {
    /// The root `document` node.
    pub fn document(&self) -> SyntaxNode {
        self.syntax.clone()
    }

    /// Reconstruct the original source text.
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }

    /// Render the logical tree: rule labels in lowercase, token kinds in
    /// uppercase with the token's exact lexeme; trivia and punctuator
    /// tokens omitted. Two parses are equivalent iff their shapes are
    /// equal.
    pub fn shape(&self) -> String {
        let mut out = String::new();
        render(&mut out, 0, self.syntax.clone().into());
        out
    }
}

fn render(out: &mut String, indent: usize, element: SyntaxElement) {
    let kind: SyntaxKind = element.kind();
    match element {
        rowan::NodeOrToken::Node(node) => {
            out.push_str(&format!("{:indent$}- {}\n", "", kind.label(), indent = indent));
            for child in node.children_with_tokens() {
                render(out, indent + 4, child);
            }
        }
        rowan::NodeOrToken::Token(token) => {
            if kind.is_trivia() || kind.is_punctuator() {
                return;
            }
            out.push_str(&format!(
                "{:indent$}- {} {:?}\n",
                "",
                kind.label(),
                token.text(),
                indent = indent
            ));
        }
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(f: &mut fmt::Formatter<'_>, indent: usize, element: SyntaxElement) -> fmt::Result {
            let kind: SyntaxKind = element.kind();
            write!(f, "{:indent$}", "", indent = indent)?;
            match element {
                rowan::NodeOrToken::Node(node) => {
                    writeln!(f, "- {:?}@{:?}", kind, node.text_range())?;
                    for child in node.children_with_tokens() {
                        print(f, indent + 4, child)?;
                    }
                    Ok(())
                }
                rowan::NodeOrToken::Token(token) => {
                    writeln!(f, "- {:?}@{:?} {:?}", kind, token.text_range(), token.text())
                }
            }
        }

        print(f, 0, self.syntax.clone().into())
    }
}

#[derive(Debug, Default)]
pub(crate) struct SyntaxTreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl SyntaxTreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Start a new node and make it current.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(rowan::SyntaxKind(kind as u16));
    }

    /// Finish the current branch and restore the previous branch as current.
    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn checkpoint(&self) -> rowan::Checkpoint {
        self.builder.checkpoint()
    }

    pub(crate) fn wrap_node(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind) {
        self.builder
            .start_node_at(checkpoint, rowan::SyntaxKind(kind as u16));
    }

    /// Add a token to the current branch.
    pub(crate) fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(rowan::SyntaxKind(kind as u16), text);
    }

    pub(crate) fn finish(self) -> SyntaxTree {
        SyntaxTree {
            syntax: rowan::SyntaxNode::<GraphletLanguage>::new_root(self.builder.finish()),
        }
    }
}
