//! Executable documents: operations and fragments, indexed for execution.

use crate::ast;
use crate::ast::Name;
use crate::response::RequestError;
use crate::Node;
use crate::ParseError;
use indexmap::IndexMap;
use thiserror::Error;

/// The operations and fragments of a parsed executable document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutableDocument {
    pub operations: Vec<Node<ast::OperationDefinition>>,
    pub fragments: IndexMap<Name, Node<ast::FragmentDefinition>>,
}

/// Why an executable document could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("type system definitions are not allowed in an executable document")]
    UnexpectedTypeSystemDefinition,

    #[error("the document defines the fragment `{0}` more than once")]
    DuplicateFragmentName(Name),
}

impl ExecutableDocument {
    /// Parse an executable document.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        Self::from_ast(&ast::Document::parse(input)?)
    }

    pub fn from_ast(document: &ast::Document) -> Result<Self, DocumentError> {
        let mut executable = Self::default();
        for definition in &document.definitions {
            match definition {
                ast::Definition::OperationDefinition(operation) => {
                    executable.operations.push(operation.clone())
                }
                ast::Definition::FragmentDefinition(fragment) => {
                    if executable.fragments.contains_key(&fragment.name) {
                        return Err(DocumentError::DuplicateFragmentName(fragment.name.clone()));
                    }
                    executable
                        .fragments
                        .insert(fragment.name.clone(), fragment.clone());
                }
                _ => return Err(DocumentError::UnexpectedTypeSystemDefinition),
            }
        }
        Ok(executable)
    }

    /// Select the operation to execute: by name, or the only one when no
    /// name is given.
    pub fn get_operation(
        &self,
        name: Option<&str>,
    ) -> Result<&Node<ast::OperationDefinition>, RequestError> {
        match name {
            Some(name) => self
                .operations
                .iter()
                .find(|operation| operation.name.as_deref() == Some(name))
                .ok_or_else(|| {
                    RequestError::new(format!("Unknown operation named \"{name}\"."), None)
                }),
            None => match self.operations.as_slice() {
                [operation] => Ok(operation),
                [] => Err(RequestError::new(
                    "The document does not contain any operation.",
                    None,
                )),
                _ => Err(RequestError::new(
                    "An operation name is required when the document contains \
                     more than one operation.",
                    None,
                )),
            },
        }
    }
}
