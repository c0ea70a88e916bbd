//! Abstract syntax tree for GraphQL documents.
//!
//! The AST is the lowered form of the parser's concrete syntax tree:
//! trivia, punctuators and the keyword/ident distinction are gone, string
//! escapes are resolved, and numbers are parsed. Documents may hold both
//! type-system and executable definitions.
//!
//! Nodes are wrapped in [`Node`], a reference-counted smart pointer that
//! also carries the source position used for error locations.

use crate::Node;
use ordered_float::OrderedFloat;

mod from_cst;
mod impls;

/// A GraphQL identifier.
pub type Name = String;

/// Refers to the name of a GraphQL type defined elsewhere.
pub type NamedType = Name;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Definition {
    OperationDefinition(Node<OperationDefinition>),
    FragmentDefinition(Node<FragmentDefinition>),
    SchemaDefinition(Node<SchemaDefinition>),
    DirectiveDefinition(Node<DirectiveDefinition>),
    ScalarTypeDefinition(Node<ScalarTypeDefinition>),
    ObjectTypeDefinition(Node<ObjectTypeDefinition>),
    InterfaceTypeDefinition(Node<InterfaceTypeDefinition>),
    UnionTypeDefinition(Node<UnionTypeDefinition>),
    EnumTypeDefinition(Node<EnumTypeDefinition>),
    InputObjectTypeDefinition(Node<InputObjectTypeDefinition>),
    ScalarTypeExtension(Node<ScalarTypeExtension>),
    ObjectTypeExtension(Node<ObjectTypeExtension>),
    InterfaceTypeExtension(Node<InterfaceTypeExtension>),
    UnionTypeExtension(Node<UnionTypeExtension>),
    EnumTypeExtension(Node<EnumTypeExtension>),
    InputObjectTypeExtension(Node<InputObjectTypeExtension>),
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<Name>,
    pub variables: Vec<Node<VariableDefinition>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Vec<Selection>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Vec<Selection>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SchemaDefinition {
    pub directives: Vec<Node<Directive>>,
    pub root_operations: Vec<(OperationType, NamedType)>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub locations: Vec<DirectiveLocation>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ScalarTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub implements_interfaces: Vec<NamedType>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub members: Vec<NamedType>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub values: Vec<Node<EnumValueDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub value: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<InputValueDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ScalarTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ObjectTypeExtension {
    pub name: Name,
    pub implements_interfaces: Vec<NamedType>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InterfaceTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UnionTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub members: Vec<NamedType>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct EnumTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub values: Vec<Node<EnumValueDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InputObjectTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<InputValueDefinition>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub ty: Type,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Node<Value>>,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VariableDefinition {
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Node<Value>>,
}

/// A type reference. Non-null cannot wrap non-null by construction.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Type {
    Named(NamedType),
    NonNullNamed(NamedType),
    List(Box<Type>),
    NonNullList(Box<Type>),
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<(Name, Node<Value>)>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Selection {
    Field(Node<Field>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<(Name, Node<Value>)>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Vec<Selection>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Vec<Selection>,
}

/// A value literal. Variables survive lowering as [`Value::Variable`] and
/// are substituted during coercion.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Value {
    Null,
    Enum(Name),
    Variable(Name),
    String(String),
    Float(OrderedFloat<f64>),
    Int(i64),
    Boolean(bool),
    List(Vec<Node<Value>>),
    Object(Vec<(Name, Node<Value>)>),
}
