use crate::sources::SourceSpan;
use std::fmt;
use std::hash;
use std::ops::Deref;
use triomphe::Arc;

/// A thread-safe reference-counted smart pointer for AST nodes.
///
/// Cloning is cheap, so subtrees can be shared between documents and the
/// schema without deep copies. Each node optionally carries the source
/// position of its first token. Equality and hashing ignore that position:
/// two nodes with the same content are the same node.
#[derive(Clone)]
pub struct Node<T>(Arc<NodeInner<T>>);

#[derive(Clone)]
struct NodeInner<T> {
    span: Option<SourceSpan>,
    node: T,
}

impl<T> Node<T> {
    pub fn new(node: T) -> Self {
        Self(Arc::new(NodeInner { span: None, node }))
    }

    pub fn with_span(node: T, span: SourceSpan) -> Self {
        Self(Arc::new(NodeInner {
            span: Some(span),
            node,
        }))
    }

    /// Source position of the node's first token, if it was parsed.
    pub fn span(&self) -> Option<SourceSpan> {
        self.0.span
    }

    /// Returns a mutable reference to `T`, cloning it first if this node is
    /// shared (copy-on-write semantics).
    pub fn make_mut(&mut self) -> &mut T
    where
        T: Clone,
    {
        &mut Arc::make_mut(&mut self.0).node
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0.node
    }
}

impl<T> AsRef<T> for Node<T> {
    fn as_ref(&self) -> &T {
        &self.0.node
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.node.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.node.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        // pointer equality is a cheap win for shared subtrees
        Arc::ptr_eq(&self.0, &other.0) || self.0.node == other.0.node
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: hash::Hash> hash::Hash for Node<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.node.hash(state)
    }
}

impl<T> From<T> for Node<T> {
    fn from(node: T) -> Self {
        Self::new(node)
    }
}
