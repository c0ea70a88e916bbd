//! Lowering from the parser's concrete syntax tree to the AST.

use super::*;
use crate::sources::LineIndex;
use crate::sources::SourceSpan;
use crate::ParseError;
use graphlet_parser::SyntaxKind as K;
use graphlet_parser::SyntaxNode;
use graphlet_parser::SyntaxTree;

impl Document {
    /// Parse a document, SDL or executable or mixed.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let tree = graphlet_parser::Parser::new(input).parse()?;
        document_from_tree(&tree)
    }
}

fn document_from_tree(tree: &SyntaxTree) -> Result<Document, ParseError> {
    let lowerer = Lowerer {
        line_index: LineIndex::new(tree.text()),
    };
    let mut definitions = Vec::new();
    for child in tree.document().children() {
        match child.kind() {
            K::TYPE_SYSTEM_DEFINITION => definitions.push(lowerer.type_system_definition(&child)?),
            K::OPERATION_DEFINITION => definitions.push(Definition::OperationDefinition(
                lowerer.operation_definition(&child)?,
            )),
            K::FRAGMENT_DEFINITION => definitions.push(Definition::FragmentDefinition(
                lowerer.fragment_definition(&child)?,
            )),
            _ => {}
        }
    }
    Ok(Document { definitions })
}

struct Lowerer {
    line_index: LineIndex,
}

impl Lowerer {
    fn span(&self, syntax: &SyntaxNode) -> SourceSpan {
        let offset: u32 = syntax.text_range().start().into();
        self.line_index.span_at(offset as usize)
    }

    fn node<T>(&self, syntax: &SyntaxNode, node: T) -> Node<T> {
        Node::with_span(node, self.span(syntax))
    }

    fn type_system_definition(&self, syntax: &SyntaxNode) -> Result<Definition, ParseError> {
        // type_system_definition wraps exactly one of schema_definition,
        // directive_definition, type_definition or type_extension
        for child in syntax.children() {
            return match child.kind() {
                K::SCHEMA_DEFINITION => Ok(Definition::SchemaDefinition(
                    self.schema_definition(&child)?,
                )),
                K::DIRECTIVE_DEFINITION => Ok(Definition::DirectiveDefinition(
                    self.directive_definition(&child)?,
                )),
                K::TYPE_DEFINITION | K::TYPE_EXTENSION => self.type_definition(&child),
                _ => continue,
            };
        }
        Ok(Definition::SchemaDefinition(Node::new(SchemaDefinition {
            directives: Vec::new(),
            root_operations: Vec::new(),
        })))
    }

    fn type_definition(&self, syntax: &SyntaxNode) -> Result<Definition, ParseError> {
        for child in syntax.children() {
            return Ok(match child.kind() {
                K::SCALAR_TYPE_DEFINITION => Definition::ScalarTypeDefinition(self.node(
                    &child,
                    ScalarTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                    },
                )),
                K::OBJECT_TYPE_DEFINITION => Definition::ObjectTypeDefinition(self.node(
                    &child,
                    ObjectTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        implements_interfaces: implements_interfaces(&child),
                        directives: self.directives(&child)?,
                        fields: self.field_definitions(&child)?,
                    },
                )),
                K::INTERFACE_TYPE_DEFINITION => Definition::InterfaceTypeDefinition(self.node(
                    &child,
                    InterfaceTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        fields: self.field_definitions(&child)?,
                    },
                )),
                K::UNION_TYPE_DEFINITION => Definition::UnionTypeDefinition(self.node(
                    &child,
                    UnionTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        members: union_members(&child),
                    },
                )),
                K::ENUM_TYPE_DEFINITION => Definition::EnumTypeDefinition(self.node(
                    &child,
                    EnumTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        values: self.enum_values(&child)?,
                    },
                )),
                K::INPUT_OBJECT_TYPE_DEFINITION => Definition::InputObjectTypeDefinition(self.node(
                    &child,
                    InputObjectTypeDefinition {
                        description: description(&child),
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        fields: self.input_value_definitions(&child, K::INPUT_FIELDS_DEFINITION)?,
                    },
                )),
                K::SCALAR_TYPE_EXTENSION => Definition::ScalarTypeExtension(self.node(
                    &child,
                    ScalarTypeExtension {
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                    },
                )),
                K::OBJECT_TYPE_EXTENSION => Definition::ObjectTypeExtension(self.node(
                    &child,
                    ObjectTypeExtension {
                        name: name_of(&child),
                        implements_interfaces: implements_interfaces(&child),
                        directives: self.directives(&child)?,
                        fields: self.field_definitions(&child)?,
                    },
                )),
                K::INTERFACE_TYPE_EXTENSION => Definition::InterfaceTypeExtension(self.node(
                    &child,
                    InterfaceTypeExtension {
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        fields: self.field_definitions(&child)?,
                    },
                )),
                K::UNION_TYPE_EXTENSION => Definition::UnionTypeExtension(self.node(
                    &child,
                    UnionTypeExtension {
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        members: union_members(&child),
                    },
                )),
                K::ENUM_TYPE_EXTENSION => Definition::EnumTypeExtension(self.node(
                    &child,
                    EnumTypeExtension {
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        values: self.enum_values(&child)?,
                    },
                )),
                K::INPUT_OBJECT_TYPE_EXTENSION => Definition::InputObjectTypeExtension(self.node(
                    &child,
                    InputObjectTypeExtension {
                        name: name_of(&child),
                        directives: self.directives(&child)?,
                        fields: self.input_value_definitions(&child, K::INPUT_FIELDS_DEFINITION)?,
                    },
                )),
                _ => continue,
            });
        }
        // An empty wrapper cannot come out of a successful parse.
        Ok(Definition::SchemaDefinition(Node::new(SchemaDefinition {
            directives: Vec::new(),
            root_operations: Vec::new(),
        })))
    }

    fn schema_definition(&self, syntax: &SyntaxNode) -> Result<Node<SchemaDefinition>, ParseError> {
        let mut root_operations = Vec::new();
        for child in syntax.children() {
            let operation_type = match child.kind() {
                K::QUERY_OPERATION_TYPE_DEFINITION => OperationType::Query,
                K::MUTATION_OPERATION_TYPE_DEFINITION => OperationType::Mutation,
                K::SUBSCRIPTION_OPERATION_TYPE_DEFINITION => OperationType::Subscription,
                _ => continue,
            };
            if let Some(named) = child_of(&child, K::NAMED_TYPE) {
                root_operations.push((operation_type, name_of(&named)));
            }
        }
        Ok(self.node(
            syntax,
            SchemaDefinition {
                directives: self.directives(syntax)?,
                root_operations,
            },
        ))
    }

    fn directive_definition(
        &self,
        syntax: &SyntaxNode,
    ) -> Result<Node<DirectiveDefinition>, ParseError> {
        let mut locations = Vec::new();
        if let Some(list) = child_of(syntax, K::DIRECTIVE_LOCATIONS) {
            for token in list.children_with_tokens().filter_map(|e| e.into_token()) {
                if matches!(
                    token.kind(),
                    K::EXECUTABLE_DIRECTIVE_LOCATION | K::TYPE_SYSTEM_DIRECTIVE_LOCATION
                ) {
                    if let Some(location) = DirectiveLocation::from_name(token.text()) {
                        locations.push(location);
                    }
                }
            }
        }
        Ok(self.node(
            syntax,
            DirectiveDefinition {
                description: description(syntax),
                name: name_of(syntax),
                arguments: self.input_value_definitions(syntax, K::ARGUMENTS_DEFINITION)?,
                locations,
            },
        ))
    }

    fn field_definitions(
        &self,
        syntax: &SyntaxNode,
    ) -> Result<Vec<Node<FieldDefinition>>, ParseError> {
        let Some(fields) = child_of(syntax, K::FIELDS_DEFINITION) else {
            return Ok(Vec::new());
        };
        children_of(&fields, K::FIELD_DEFINITION)
            .map(|field| {
                Ok(self.node(
                    &field,
                    FieldDefinition {
                        description: description(&field),
                        name: name_of(&field),
                        arguments: self
                            .input_value_definitions(&field, K::ARGUMENTS_DEFINITION)?,
                        ty: ty(&field),
                        directives: self.directives(&field)?,
                    },
                ))
            })
            .collect()
    }

    fn input_value_definitions(
        &self,
        syntax: &SyntaxNode,
        wrapper: K,
    ) -> Result<Vec<Node<InputValueDefinition>>, ParseError> {
        let Some(wrapper) = child_of(syntax, wrapper) else {
            return Ok(Vec::new());
        };
        children_of(&wrapper, K::INPUT_VALUE_DEFINITION)
            .map(|input| {
                Ok(self.node(
                    &input,
                    InputValueDefinition {
                        description: description(&input),
                        name: name_of(&input),
                        ty: ty(&input),
                        default_value: self.default_value(&input)?,
                        directives: self.directives(&input)?,
                    },
                ))
            })
            .collect()
    }

    fn enum_values(&self, syntax: &SyntaxNode) -> Result<Vec<Node<EnumValueDefinition>>, ParseError> {
        let Some(values) = child_of(syntax, K::ENUM_VALUES_DEFINITION) else {
            return Ok(Vec::new());
        };
        children_of(&values, K::ENUM_VALUE_DEFINITION)
            .map(|value| {
                let name = child_of(&value, K::ENUM_VALUE)
                    .map(|enum_value| name_of(&enum_value))
                    .unwrap_or_default();
                Ok(self.node(
                    &value,
                    EnumValueDefinition {
                        description: description(&value),
                        value: name,
                        directives: self.directives(&value)?,
                    },
                ))
            })
            .collect()
    }

    fn directives(&self, syntax: &SyntaxNode) -> Result<Vec<Node<Directive>>, ParseError> {
        let Some(directives) = child_of(syntax, K::DIRECTIVES) else {
            return Ok(Vec::new());
        };
        children_of(&directives, K::DIRECTIVE)
            .map(|directive| {
                Ok(self.node(
                    &directive,
                    Directive {
                        name: name_of(&directive),
                        arguments: self.arguments(&directive)?,
                    },
                ))
            })
            .collect()
    }

    fn arguments(&self, syntax: &SyntaxNode) -> Result<Vec<(Name, Node<Value>)>, ParseError> {
        let Some(arguments) = child_of(syntax, K::ARGUMENTS) else {
            return Ok(Vec::new());
        };
        children_of(&arguments, K::ARGUMENT)
            .map(|argument| {
                let value = match child_of(&argument, K::VALUE) {
                    Some(value) => self.value(&value)?,
                    None => Node::new(Value::Null),
                };
                Ok((name_of(&argument), value))
            })
            .collect()
    }

    fn default_value(&self, syntax: &SyntaxNode) -> Result<Option<Node<Value>>, ParseError> {
        let Some(default) = child_of(syntax, K::DEFAULT_VALUE) else {
            return Ok(None);
        };
        match child_of(&default, K::VALUE) {
            Some(value) => Ok(Some(self.value(&value)?)),
            None => Ok(None),
        }
    }

    /// Lower a `value` wrapper node.
    fn value(&self, syntax: &SyntaxNode) -> Result<Node<Value>, ParseError> {
        for child in syntax.children() {
            let value = match child.kind() {
                K::INT_VALUE => {
                    let text = token_text(&child);
                    Value::Int(text.parse().map_err(|_| ParseError::NumberOutOfRange {
                        value: text.clone(),
                    })?)
                }
                K::FLOAT_VALUE => {
                    let text = token_text(&child);
                    Value::Float(OrderedFloat(text.parse().map_err(|_| {
                        ParseError::NumberOutOfRange {
                            value: text.clone(),
                        }
                    })?))
                }
                K::STRING_VALUE => Value::String(string_contents(&token_text(&child))),
                K::TRUE_VALUE => Value::Boolean(true),
                K::FALSE_VALUE => Value::Boolean(false),
                K::NULL_VALUE => Value::Null,
                K::ENUM_VALUE => Value::Enum(name_of(&child)),
                K::VARIABLE => Value::Variable(name_of(&child)),
                K::LIST_VALUE => Value::List(
                    children_of(&child, K::VALUE)
                        .map(|item| self.value(&item))
                        .collect::<Result<_, _>>()?,
                ),
                K::OBJECT_VALUE => Value::Object(
                    children_of(&child, K::OBJECT_FIELD)
                        .map(|field| {
                            let value = match child_of(&field, K::VALUE) {
                                Some(value) => self.value(&value)?,
                                None => Node::new(Value::Null),
                            };
                            Ok::<_, ParseError>((name_of(&field), value))
                        })
                        .collect::<Result<_, _>>()?,
                ),
                _ => continue,
            };
            return Ok(self.node(&child, value));
        }
        Ok(self.node(syntax, Value::Null))
    }

    fn operation_definition(
        &self,
        syntax: &SyntaxNode,
    ) -> Result<Node<OperationDefinition>, ParseError> {
        let operation_type = syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find_map(|token| match token.kind() {
                K::query_KW => Some(OperationType::Query),
                K::mutation_KW => Some(OperationType::Mutation),
                K::subscription_KW => Some(OperationType::Subscription),
                _ => None,
            })
            // the shorthand form is a query
            .unwrap_or(OperationType::Query);

        let mut variables = Vec::new();
        if let Some(defs) = child_of(syntax, K::VARIABLE_DEFINITIONS) {
            for def in children_of(&defs, K::VARIABLE_DEFINITION) {
                let name = child_of(&def, K::VARIABLE)
                    .map(|variable| name_of(&variable))
                    .unwrap_or_default();
                variables.push(self.node(
                    &def,
                    VariableDefinition {
                        name,
                        ty: ty(&def),
                        default_value: self.default_value(&def)?,
                    },
                ));
            }
        }

        Ok(self.node(
            syntax,
            OperationDefinition {
                operation_type,
                name: child_of(syntax, K::NAME).map(|name| name_of_name(&name)),
                variables,
                directives: self.directives(syntax)?,
                selection_set: self.selection_set(syntax)?,
            },
        ))
    }

    fn fragment_definition(
        &self,
        syntax: &SyntaxNode,
    ) -> Result<Node<FragmentDefinition>, ParseError> {
        Ok(self.node(
            syntax,
            FragmentDefinition {
                name: name_of(syntax),
                type_condition: type_condition(syntax).unwrap_or_default(),
                directives: self.directives(syntax)?,
                selection_set: self.selection_set(syntax)?,
            },
        ))
    }

    fn selection_set(&self, syntax: &SyntaxNode) -> Result<Vec<Selection>, ParseError> {
        let Some(set) = child_of(syntax, K::SELECTION_SET) else {
            return Ok(Vec::new());
        };
        set.children()
            .filter_map(|child| match child.kind() {
                K::FIELD | K::FRAGMENT_SPREAD | K::INLINE_FRAGMENT => Some(child),
                _ => None,
            })
            .map(|child| self.selection(&child))
            .collect()
    }

    fn selection(&self, syntax: &SyntaxNode) -> Result<Selection, ParseError> {
        Ok(match syntax.kind() {
            K::FIELD => Selection::Field(self.node(
                syntax,
                Field {
                    alias: child_of(syntax, K::ALIAS).map(|alias| name_of(&alias)),
                    name: name_of(syntax),
                    arguments: self.arguments(syntax)?,
                    directives: self.directives(syntax)?,
                    selection_set: self.selection_set(syntax)?,
                },
            )),
            K::FRAGMENT_SPREAD => Selection::FragmentSpread(self.node(
                syntax,
                FragmentSpread {
                    fragment_name: name_of(syntax),
                    directives: self.directives(syntax)?,
                },
            )),
            _ => Selection::InlineFragment(self.node(
                syntax,
                InlineFragment {
                    type_condition: type_condition(syntax),
                    directives: self.directives(syntax)?,
                    selection_set: self.selection_set(syntax)?,
                },
            )),
        })
    }
}

fn child_of(node: &SyntaxNode, kind: K) -> Option<SyntaxNode> {
    node.children().find(|child| child.kind() == kind)
}

fn children_of(node: &SyntaxNode, kind: K) -> impl Iterator<Item = SyntaxNode> {
    node.children().filter(move |child| child.kind() == kind)
}

/// The text of the first significant token of `node`.
fn token_text(node: &SyntaxNode) -> String {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|token| !token.kind().is_trivia())
        .map(|token| token.text().to_string())
        .unwrap_or_default()
}

/// The text inside a `name` node.
fn name_of_name(name: &SyntaxNode) -> Name {
    token_text(name)
}

/// The text of the `name` child of `node`.
fn name_of(node: &SyntaxNode) -> Name {
    child_of(node, K::NAME).map(|name| token_text(&name)).unwrap_or_default()
}

fn description(node: &SyntaxNode) -> Option<String> {
    child_of(node, K::DESCRIPTION).map(|description| string_contents(&token_text(&description)))
}

fn implements_interfaces(node: &SyntaxNode) -> Vec<NamedType> {
    let Some(implements) = child_of(node, K::IMPLEMENTS_INTERFACES) else {
        return Vec::new();
    };
    children_of(&implements, K::NAMED_TYPE)
        .map(|named| name_of(&named))
        .collect()
}

fn union_members(node: &SyntaxNode) -> Vec<NamedType> {
    let Some(members) = child_of(node, K::UNION_MEMBER_TYPES) else {
        return Vec::new();
    };
    children_of(&members, K::NAMED_TYPE)
        .map(|named| name_of(&named))
        .collect()
}

fn type_condition(node: &SyntaxNode) -> Option<NamedType> {
    let condition = child_of(node, K::TYPE_CONDITION)?;
    child_of(&condition, K::NAMED_TYPE).map(|named| name_of(&named))
}

/// Lower the `type` wrapper child of `node`.
fn ty(node: &SyntaxNode) -> Type {
    child_of(node, K::TYPE)
        .map(|wrapper| ty_of_wrapper(&wrapper))
        .unwrap_or_else(|| Type::Named(Name::default()))
}

fn ty_of_wrapper(wrapper: &SyntaxNode) -> Type {
    for child in wrapper.children() {
        return match child.kind() {
            K::NAMED_TYPE => Type::Named(name_of(&child)),
            K::LIST_TYPE => Type::List(Box::new(ty(&child))),
            K::NON_NULL_TYPE => match child_of(&child, K::NAMED_TYPE) {
                Some(named) => Type::NonNullNamed(name_of(&named)),
                None => match child_of(&child, K::LIST_TYPE) {
                    Some(list) => Type::NonNullList(Box::new(ty(&list))),
                    None => Type::Named(Name::default()),
                },
            },
            _ => continue,
        };
    }
    Type::Named(Name::default())
}

/// Resolve a string token's contents: quotes stripped, escapes resolved,
/// block strings dedented.
fn string_contents(lexeme: &str) -> String {
    if let Some(inner) = lexeme
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
    {
        block_string_value(inner)
    } else {
        let inner = lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(lexeme);
        unescape_string(inner)
    }
}

fn unescape_string(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0xFFFD);
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => {}
        }
    }
    out
}

/// The BlockStringValue algorithm: `\"""` unescaped, common indentation
/// of the continuation lines removed, blank first and last lines dropped.
fn block_string_value(inner: &str) -> String {
    let raw = inner.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = raw.split('\n').map(|line| line.trim_end_matches('\r')).collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if indent < line.len() {
            common_indent = Some(common_indent.map_or(indent, |common| common.min(indent)));
        }
    }

    let mut result: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                let cut = common_indent.unwrap_or(0).min(line.len());
                &line[cut..]
            }
        })
        .collect();

    while result.first().is_some_and(|line| line.trim().is_empty()) {
        result.remove(0);
    }
    while result.last().is_some_and(|line| line.trim().is_empty()) {
        result.pop();
    }
    result.join("\n")
}
