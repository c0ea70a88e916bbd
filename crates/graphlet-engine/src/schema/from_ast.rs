use super::*;
use crate::ast::Definition;
use crate::ast::DirectiveLocation;
use crate::ast::OperationType;
use crate::ast::Value;

/// Builds a [`Schema`] from AST documents.
///
/// Definitions are registered in document order; named references stay
/// unresolved until [`build`][SchemaBuilder::build], so a type may be used
/// before it is defined and extensions may precede the type they extend.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    types: IndexMap<NamedType, ExtendedType>,
    directive_definitions: IndexMap<Name, Node<DirectiveDefinition>>,
    schema_definition: Option<Node<ast::SchemaDefinition>>,
    extensions: Vec<Definition>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// A builder pre-registered with the five built-in scalars and the
    /// `@skip`, `@include` and `@deprecated` directives.
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            types.insert(
                name.to_string(),
                ExtendedType::Scalar(Node::new(ScalarType {
                    name: name.to_string(),
                    description: None,
                    directives: Vec::new(),
                })),
            );
        }

        let mut directive_definitions = IndexMap::new();
        for definition in built_in_directives() {
            directive_definitions.insert(definition.name.clone(), Node::new(definition));
        }

        Self {
            types,
            directive_definitions,
            schema_definition: None,
            extensions: Vec::new(),
        }
    }

    /// Register every definition of `document`. Executable definitions are
    /// rejected: a schema document holds type-system definitions only.
    pub fn add_document(mut self, document: &ast::Document) -> Result<Self, SchemaError> {
        for definition in &document.definitions {
            match definition {
                Definition::OperationDefinition(_) | Definition::FragmentDefinition(_) => {
                    return Err(SchemaError::UnexpectedExecutableDefinition)
                }
                Definition::SchemaDefinition(node) => {
                    if self.schema_definition.is_some() {
                        return Err(SchemaError::DuplicateSchemaDefinition);
                    }
                    self.schema_definition = Some(node.clone());
                }
                Definition::DirectiveDefinition(node) => {
                    let redefines_built_in = built_in_directive_names().contains(&node.name.as_str());
                    if self.directive_definitions.contains_key(&node.name) && !redefines_built_in {
                        return Err(SchemaError::DuplicateDirectiveName(node.name.clone()));
                    }
                    self.directive_definitions
                        .insert(node.name.clone(), node.clone());
                }
                Definition::ScalarTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::Scalar(Node::new(ScalarType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        directives: node.directives.clone(),
                    })),
                )?,
                Definition::ObjectTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::Object(Node::new(ObjectType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        implements_interfaces: node.implements_interfaces.iter().cloned().collect(),
                        directives: node.directives.clone(),
                        fields: field_map(&node.fields),
                    })),
                )?,
                Definition::InterfaceTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::Interface(Node::new(InterfaceType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        directives: node.directives.clone(),
                        fields: field_map(&node.fields),
                    })),
                )?,
                Definition::UnionTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::Union(Node::new(UnionType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        directives: node.directives.clone(),
                        members: node.members.iter().cloned().collect(),
                    })),
                )?,
                Definition::EnumTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::Enum(Node::new(EnumType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        directives: node.directives.clone(),
                        values: value_map(&node.values),
                    })),
                )?,
                Definition::InputObjectTypeDefinition(node) => self.insert_type(
                    &node.name,
                    ExtendedType::InputObject(Node::new(InputObjectType {
                        name: node.name.clone(),
                        description: node.description.clone(),
                        directives: node.directives.clone(),
                        fields: input_field_map(&node.fields),
                    })),
                )?,
                Definition::ScalarTypeExtension(_)
                | Definition::ObjectTypeExtension(_)
                | Definition::InterfaceTypeExtension(_)
                | Definition::UnionTypeExtension(_)
                | Definition::EnumTypeExtension(_)
                | Definition::InputObjectTypeExtension(_) => {
                    self.extensions.push(definition.clone())
                }
            }
        }
        Ok(self)
    }

    /// Resolve extensions and named references and produce the schema.
    pub fn build(mut self) -> Result<Schema, SchemaError> {
        let extensions = std::mem::take(&mut self.extensions);
        for extension in &extensions {
            self.apply_extension(extension)?;
        }

        let (query_type, mutation_type, subscription_type) = self.root_operations()?;

        let schema = Schema {
            types: self.types,
            directive_definitions: self.directive_definitions,
            query_type,
            mutation_type,
            subscription_type,
        };

        for ty in schema.types.values() {
            for reference in referenced_types(ty) {
                if !schema.types.contains_key(&reference) {
                    return Err(SchemaError::UndefinedType(reference));
                }
            }
        }
        for root in [
            &schema.query_type,
            &schema.mutation_type,
            &schema.subscription_type,
        ]
        .into_iter()
        .flatten()
        {
            if !schema.types.contains_key(root) {
                return Err(SchemaError::UndefinedType(root.clone()));
            }
        }

        Ok(schema)
    }

    fn insert_type(&mut self, name: &Name, ty: ExtendedType) -> Result<(), SchemaError> {
        let replaces_built_in =
            Schema::is_built_in_scalar(name) && matches!(ty, ExtendedType::Scalar(_));
        if self.types.contains_key(name) && !replaces_built_in {
            return Err(SchemaError::DuplicateTypeName(name.clone()));
        }
        self.types.insert(name.clone(), ty);
        Ok(())
    }

    fn apply_extension(&mut self, extension: &Definition) -> Result<(), SchemaError> {
        match extension {
            Definition::ScalarTypeExtension(ext) => {
                match self.existing(&ext.name)? {
                    ExtendedType::Scalar(ty) => {
                        ty.make_mut().directives.extend(ext.directives.iter().cloned());
                    }
                    _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
                }
            }
            Definition::ObjectTypeExtension(ext) => match self.existing(&ext.name)? {
                ExtendedType::Object(ty) => {
                    let ty = ty.make_mut();
                    ty.implements_interfaces
                        .extend(ext.implements_interfaces.iter().cloned());
                    ty.directives.extend(ext.directives.iter().cloned());
                    ty.fields.extend(field_map(&ext.fields));
                }
                _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
            },
            Definition::InterfaceTypeExtension(ext) => match self.existing(&ext.name)? {
                ExtendedType::Interface(ty) => {
                    let ty = ty.make_mut();
                    ty.directives.extend(ext.directives.iter().cloned());
                    ty.fields.extend(field_map(&ext.fields));
                }
                _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
            },
            Definition::UnionTypeExtension(ext) => match self.existing(&ext.name)? {
                ExtendedType::Union(ty) => {
                    let ty = ty.make_mut();
                    ty.directives.extend(ext.directives.iter().cloned());
                    ty.members.extend(ext.members.iter().cloned());
                }
                _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
            },
            Definition::EnumTypeExtension(ext) => match self.existing(&ext.name)? {
                ExtendedType::Enum(ty) => {
                    let ty = ty.make_mut();
                    ty.directives.extend(ext.directives.iter().cloned());
                    ty.values.extend(value_map(&ext.values));
                }
                _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
            },
            Definition::InputObjectTypeExtension(ext) => match self.existing(&ext.name)? {
                ExtendedType::InputObject(ty) => {
                    let ty = ty.make_mut();
                    ty.directives.extend(ext.directives.iter().cloned());
                    ty.fields.extend(input_field_map(&ext.fields));
                }
                _ => return Err(SchemaError::ExtensionKindMismatch(ext.name.clone())),
            },
            _ => {}
        }
        Ok(())
    }

    fn existing(&mut self, name: &Name) -> Result<&mut ExtendedType, SchemaError> {
        self.types
            .get_mut(name)
            .ok_or_else(|| SchemaError::OrphanExtension(name.clone()))
    }

    /// Root operation types: explicit from the schema definition, or the
    /// conventional `Query`/`Mutation`/`Subscription` names when no schema
    /// definition is present and such types exist.
    fn root_operations(
        &self,
    ) -> Result<(Option<NamedType>, Option<NamedType>, Option<NamedType>), SchemaError> {
        let Some(definition) = &self.schema_definition else {
            let by_convention = |name: &str| {
                self.types
                    .contains_key(name)
                    .then(|| name.to_string())
            };
            return Ok((
                by_convention("Query"),
                by_convention("Mutation"),
                by_convention("Subscription"),
            ));
        };

        let mut query = None;
        let mut mutation = None;
        let mut subscription = None;
        for (operation_type, type_name) in &definition.root_operations {
            let slot = match operation_type {
                OperationType::Query => &mut query,
                OperationType::Mutation => &mut mutation,
                OperationType::Subscription => &mut subscription,
            };
            if slot.is_some() {
                return Err(SchemaError::DuplicateRootOperation(operation_type.name()));
            }
            *slot = Some(type_name.clone());
        }
        Ok((query, mutation, subscription))
    }
}

fn field_map(fields: &[Node<FieldDefinition>]) -> IndexMap<Name, Node<FieldDefinition>> {
    fields
        .iter()
        .map(|field| (field.name.clone(), field.clone()))
        .collect()
}

fn input_field_map(
    fields: &[Node<InputValueDefinition>],
) -> IndexMap<Name, Node<InputValueDefinition>> {
    fields
        .iter()
        .map(|field| (field.name.clone(), field.clone()))
        .collect()
}

fn value_map(
    values: &[Node<ast::EnumValueDefinition>],
) -> IndexMap<Name, Node<ast::EnumValueDefinition>> {
    values
        .iter()
        .map(|value| (value.value.clone(), value.clone()))
        .collect()
}

fn built_in_directive_names() -> [&'static str; 3] {
    ["skip", "include", "deprecated"]
}

fn built_in_directives() -> Vec<DirectiveDefinition> {
    let selection_locations = vec![
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];
    let boolean_if = Node::new(InputValueDefinition {
        description: None,
        name: "if".to_string(),
        ty: Type::NonNullNamed("Boolean".to_string()),
        default_value: None,
        directives: Vec::new(),
    });

    vec![
        DirectiveDefinition {
            description: None,
            name: "skip".to_string(),
            arguments: vec![boolean_if.clone()],
            locations: selection_locations.clone(),
        },
        DirectiveDefinition {
            description: None,
            name: "include".to_string(),
            arguments: vec![boolean_if],
            locations: selection_locations,
        },
        DirectiveDefinition {
            description: None,
            name: "deprecated".to_string(),
            arguments: vec![Node::new(InputValueDefinition {
                description: None,
                name: "reason".to_string(),
                ty: Type::Named("String".to_string()),
                default_value: Some(Node::new(Value::String(
                    "No longer supported".to_string(),
                ))),
                directives: Vec::new(),
            })],
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ],
        },
    ]
}
