//! High-level representation of a GraphQL schema.

use crate::ast;
use crate::ast::DirectiveDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::Node;
use crate::ParseError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use thiserror::Error;

mod from_ast;

pub use self::from_ast::SchemaBuilder;

/// An immutable GraphQL type system: every named type, the root operation
/// types, and directive definitions.
///
/// Built once from an SDL document; after that, readers may share it freely
/// across threads without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Built-in scalars and explicit types, with extensions folded in.
    pub types: IndexMap<NamedType, ExtendedType>,

    /// Built-in and explicit directive definitions.
    pub directive_definitions: IndexMap<Name, Node<DirectiveDefinition>>,

    /// Name of the object type for the `query` root operation.
    pub query_type: Option<NamedType>,

    /// Name of the object type for the `mutation` root operation.
    pub mutation_type: Option<NamedType>,

    /// Name of the object type for the `subscription` root operation.
    pub subscription_type: Option<NamedType>,
}

/// The definition of a named type, with all extensions folded in.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtendedType {
    Scalar(Node<ScalarType>),
    Object(Node<ObjectType>),
    Interface(Node<InterfaceType>),
    Union(Node<UnionType>),
    Enum(Node<EnumType>),
    InputObject(Node<InputObjectType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: Name,
    pub description: Option<String>,
    pub directives: Vec<Node<ast::Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: Name,
    pub description: Option<String>,
    pub implements_interfaces: IndexSet<Name>,
    pub directives: Vec<Node<ast::Directive>>,
    pub fields: IndexMap<Name, Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: Name,
    pub description: Option<String>,
    pub directives: Vec<Node<ast::Directive>>,
    pub fields: IndexMap<Name, Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: Name,
    pub description: Option<String>,
    pub directives: Vec<Node<ast::Directive>>,
    pub members: IndexSet<NamedType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: Name,
    pub description: Option<String>,
    pub directives: Vec<Node<ast::Directive>>,
    pub values: IndexMap<Name, Node<ast::EnumValueDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    pub name: Name,
    pub description: Option<String>,
    pub directives: Vec<Node<ast::Directive>>,
    pub fields: IndexMap<Name, Node<InputValueDefinition>>,
}

/// Why a schema could not be built. Terminal: no partial schema is
/// produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("the document defines the type `{0}` more than once")]
    DuplicateTypeName(Name),

    #[error("the document defines the directive `@{0}` more than once")]
    DuplicateDirectiveName(Name),

    #[error("the document contains more than one schema definition")]
    DuplicateSchemaDefinition,

    #[error("the schema definition declares the `{0}` root more than once")]
    DuplicateRootOperation(&'static str),

    #[error("`extend` of undefined type `{0}`")]
    OrphanExtension(Name),

    #[error("`extend` of `{0}` does not match the kind of its definition")]
    ExtensionKindMismatch(Name),

    #[error("reference to undefined type `{0}`")]
    UndefinedType(Name),

    #[error("executable definitions are not allowed in a schema document")]
    UnexpectedExecutableDefinition,
}

/// Could not find the requested field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLookupError {
    NoSuchType,
    NoSuchField,
}

impl Schema {
    /// Parse SDL text and build the schema. Syntax errors and schema build
    /// errors are both terminal.
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let document = ast::Document::parse(sdl)?;
        SchemaBuilder::new().add_document(&document)?.build()
    }

    /// Returns a new builder, initialized with the built-in scalars and
    /// directives.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_object(&self, name: &str) -> Option<&Node<ObjectType>> {
        if let Some(ExtendedType::Object(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    pub fn get_interface(&self, name: &str) -> Option<&Node<InterfaceType>> {
        if let Some(ExtendedType::Interface(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    pub fn get_union(&self, name: &str) -> Option<&Node<UnionType>> {
        if let Some(ExtendedType::Union(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    pub fn get_enum(&self, name: &str) -> Option<&Node<EnumType>> {
        if let Some(ExtendedType::Enum(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    pub fn get_input_object(&self, name: &str) -> Option<&Node<InputObjectType>> {
        if let Some(ExtendedType::InputObject(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// The name of the object type serving the given root operation.
    pub fn root_operation(&self, operation_type: ast::OperationType) -> Option<&NamedType> {
        match operation_type {
            ast::OperationType::Query => &self.query_type,
            ast::OperationType::Mutation => &self.mutation_type,
            ast::OperationType::Subscription => &self.subscription_type,
        }
        .as_ref()
    }

    /// The definition of a field on an object or interface type. Argument
    /// coercion reads the field's `InputValueDefinition` list from here.
    pub fn type_field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<&Node<FieldDefinition>, FieldLookupError> {
        let ty = self
            .types
            .get(type_name)
            .ok_or(FieldLookupError::NoSuchType)?;
        match ty {
            ExtendedType::Object(ty) => ty.fields.get(field_name),
            ExtendedType::Interface(ty) => ty.fields.get(field_name),
            ExtendedType::Scalar(_)
            | ExtendedType::Union(_)
            | ExtendedType::Enum(_)
            | ExtendedType::InputObject(_) => None,
        }
        .ok_or(FieldLookupError::NoSuchField)
    }

    /// Whether the named type is one of the five built-in scalars.
    pub fn is_built_in_scalar(name: &str) -> bool {
        matches!(name, "Int" | "Float" | "String" | "Boolean" | "ID")
    }
}

impl ExtendedType {
    pub fn name(&self) -> &Name {
        match self {
            ExtendedType::Scalar(ty) => &ty.name,
            ExtendedType::Object(ty) => &ty.name,
            ExtendedType::Interface(ty) => &ty.name,
            ExtendedType::Union(ty) => &ty.name,
            ExtendedType::Enum(ty) => &ty.name,
            ExtendedType::InputObject(ty) => &ty.name,
        }
    }

    /// Whether values of this type may be used as inputs.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            ExtendedType::Scalar(_) | ExtendedType::Enum(_) | ExtendedType::InputObject(_)
        )
    }
}

/// Iterate every named type reference a type definition makes, for the
/// undefined-reference check at build time.
pub(crate) fn referenced_types(ty: &ExtendedType) -> Vec<NamedType> {
    fn push_type(out: &mut Vec<NamedType>, ty: &Type) {
        out.push(ty.inner_named_type().clone());
    }

    fn push_fields(out: &mut Vec<NamedType>, fields: &IndexMap<Name, Node<FieldDefinition>>) {
        for field in fields.values() {
            push_type(out, &field.ty);
            for argument in &field.arguments {
                push_type(out, &argument.ty);
            }
        }
    }

    let mut out = Vec::new();
    match ty {
        ExtendedType::Scalar(_) | ExtendedType::Enum(_) => {}
        ExtendedType::Object(ty) => {
            out.extend(ty.implements_interfaces.iter().cloned());
            push_fields(&mut out, &ty.fields);
        }
        ExtendedType::Interface(ty) => push_fields(&mut out, &ty.fields),
        ExtendedType::Union(ty) => out.extend(ty.members.iter().cloned()),
        ExtendedType::InputObject(ty) => {
            for field in ty.fields.values() {
                push_type(&mut out, &field.ty);
            }
        }
    }
    out
}
