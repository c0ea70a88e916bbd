use crate::ast;
use crate::ast::Name;
use crate::executable::ExecutableDocument;
use crate::execution::input_coercion::coerce_argument_values;
use crate::execution::resolver::ObjectValue;
use crate::execution::resolver::ResolveError;
use crate::execution::result_coercion::complete_value;
use crate::response::GraphQLError;
use crate::response::JsonMap;
use crate::response::JsonValue;
use crate::response::PathSegment;
use crate::schema::ExtendedType;
use crate::schema::ObjectType;
use crate::schema::Schema;
use crate::Node;
use indexmap::IndexMap;
use std::collections::HashSet;

/// How the root selection set is driven.
#[derive(Debug, Copy, Clone)]
pub(crate) enum ExecutionMode {
    /// Fields may be resolved in any order.
    Normal,
    /// Top-level fields of a mutation must be executed in order.
    #[allow(unused)]
    Sequential,
}

/// Returned in `Err` when a field error occurred at a non-nullable place
/// and the null must propagate to the nearest nullable ancestor.
pub(crate) struct PropagateNull;

/// Linked-list version of an error path, living on the call stack.
pub(crate) type LinkedPath<'a> = Option<&'a LinkedPathElement<'a>>;

pub(crate) struct LinkedPathElement<'a> {
    pub(crate) element: PathSegment,
    pub(crate) next: LinkedPath<'a>,
}

pub(crate) struct ExecutionContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a ExecutableDocument,
    pub(crate) variable_values: &'a JsonMap,
    pub(crate) errors: &'a mut Vec<GraphQLError>,
}

/// Execute a selection set against one object value, producing the
/// response object in field order.
pub(crate) fn execute_selection_set<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    mode: ExecutionMode,
    object_type: &ObjectType,
    object_value: &ObjectValue<'_>,
    selections: impl IntoIterator<Item = &'a ast::Selection>,
) -> Result<JsonMap, PropagateNull> {
    let mut grouped_field_set = IndexMap::new();
    collect_fields(
        ctx,
        object_type,
        selections,
        &mut HashSet::new(),
        &mut grouped_field_set,
    );

    match mode {
        ExecutionMode::Normal => {}
        ExecutionMode::Sequential => {
            // the loop below is already sequential in source order
        }
    }

    let mut response_map = JsonMap::with_capacity(grouped_field_set.len());
    for (response_key, fields) in &grouped_field_set {
        let field_name = &fields[0].name;
        let Ok(field_def) = ctx.schema.type_field(&object_type.name, field_name) else {
            if field_name == "__typename" {
                // served below without a definition
                let field_path = LinkedPathElement {
                    element: PathSegment::Field((*response_key).clone()),
                    next: path,
                };
                if let Some(value) = execute_field(
                    ctx,
                    Some(&field_path),
                    mode,
                    object_type,
                    object_value,
                    None,
                    fields,
                )? {
                    response_map.insert((*response_key).clone(), value);
                }
                continue;
            }
            ctx.errors.push(GraphQLError::field_error(
                format!(
                    "Field \"{field_name}\" is not defined on type \"{}\".",
                    object_type.name
                ),
                path_to_vec(path),
                fields[0].span(),
            ));
            continue;
        };
        let field_path = LinkedPathElement {
            element: PathSegment::Field((*response_key).clone()),
            next: path,
        };
        if let Some(value) = execute_field(
            ctx,
            Some(&field_path),
            mode,
            object_type,
            object_value,
            Some(field_def),
            fields,
        )? {
            response_map.insert((*response_key).clone(), value);
        }
    }
    Ok(response_map)
}

/// Group the fields of a selection set by response key, in order,
/// honoring `@skip`/`@include` and fragments.
fn collect_fields<'a>(
    ctx: &mut ExecutionContext<'a>,
    object_type: &ObjectType,
    selections: impl IntoIterator<Item = &'a ast::Selection>,
    visited_fragments: &mut HashSet<&'a Name>,
    grouped_fields: &mut IndexMap<Name, Vec<&'a Node<ast::Field>>>,
) {
    for selection in selections {
        if eval_if_arg(selection, "skip", ctx.variable_values).unwrap_or(false)
            || !eval_if_arg(selection, "include", ctx.variable_values).unwrap_or(true)
        {
            continue;
        }
        match selection {
            ast::Selection::Field(field) => grouped_fields
                .entry(field.response_key().clone())
                .or_default()
                .push(field),
            ast::Selection::FragmentSpread(spread) => {
                let new = visited_fragments.insert(&spread.fragment_name);
                if !new {
                    continue;
                }
                let Some(fragment) = ctx.document.fragments.get(&spread.fragment_name) else {
                    continue;
                };
                if !does_fragment_type_apply(ctx.schema, object_type, &fragment.type_condition) {
                    continue;
                }
                collect_fields(
                    ctx,
                    object_type,
                    &fragment.selection_set,
                    visited_fragments,
                    grouped_fields,
                )
            }
            ast::Selection::InlineFragment(inline) => {
                if let Some(condition) = &inline.type_condition {
                    if !does_fragment_type_apply(ctx.schema, object_type, condition) {
                        continue;
                    }
                }
                collect_fields(
                    ctx,
                    object_type,
                    &inline.selection_set,
                    visited_fragments,
                    grouped_fields,
                )
            }
        }
    }
}

fn does_fragment_type_apply(
    schema: &Schema,
    object_type: &ObjectType,
    fragment_type: &Name,
) -> bool {
    match schema.types.get(fragment_type) {
        Some(ExtendedType::Object(_)) => *fragment_type == object_type.name,
        Some(ExtendedType::Interface(_)) => {
            object_type.implements_interfaces.contains(fragment_type)
        }
        Some(ExtendedType::Union(def)) => def.members.contains(&object_type.name),
        // Undefined or not an output type
        _ => false,
    }
}

fn eval_if_arg(
    selection: &ast::Selection,
    directive_name: &str,
    variable_values: &JsonMap,
) -> Option<bool> {
    let directive = selection
        .directives()
        .iter()
        .find(|directive| directive.name == directive_name)?;
    match directive.argument_by_name("if")?.as_ref() {
        ast::Value::Boolean(value) => Some(*value),
        ast::Value::Variable(name) => variable_values.get(name)?.as_bool(),
        _ => None,
    }
}

/// Execute one grouped field: coerce its arguments, call the resolver,
/// complete the value, and handle nullability.
fn execute_field<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    mode: ExecutionMode,
    object_type: &ObjectType,
    object_value: &ObjectValue<'_>,
    field_def: Option<&Node<ast::FieldDefinition>>,
    fields: &[&'a Node<ast::Field>],
) -> Result<Option<JsonValue>, PropagateNull> {
    let field = fields[0];

    if field.name == "__typename" {
        return Ok(Some(object_type.name.as_str().into()));
    }
    let Some(field_def) = field_def else {
        return Ok(None);
    };

    let argument_values =
        match coerce_argument_values(ctx.schema, ctx.errors, path, ctx.variable_values, field_def, field) {
            Ok(argument_values) => argument_values,
            Err(PropagateNull) if field_def.ty.is_non_null() => return Err(PropagateNull),
            Err(PropagateNull) => return Ok(Some(JsonValue::Null)),
        };

    let resolved_result = object_value.resolve_field(&field.name, &argument_values);

    let completed_result = match resolved_result {
        Ok(resolved) => complete_value(ctx, path, mode, &field_def.ty, resolved, fields),
        Err(ResolveError { message }) => {
            ctx.errors.push(GraphQLError::field_error(
                format!("resolver error: {message}"),
                path_to_vec(path),
                field.span(),
            ));
            Err(PropagateNull)
        }
    };
    try_nullify(&field_def.ty, completed_result).map(Some)
}

/// Try to insert a propagated null if possible, or keep propagating it.
pub(crate) fn try_nullify(
    ty: &ast::Type,
    result: Result<JsonValue, PropagateNull>,
) -> Result<JsonValue, PropagateNull> {
    match result {
        Ok(json) => Ok(json),
        Err(PropagateNull) => {
            if ty.is_non_null() {
                Err(PropagateNull)
            } else {
                Ok(JsonValue::Null)
            }
        }
    }
}

pub(crate) fn path_to_vec(mut link: LinkedPath<'_>) -> Vec<PathSegment> {
    let mut path = Vec::new();
    while let Some(node) = link {
        path.push(node.element.clone());
        link = node.next;
    }
    path.reverse();
    path
}

