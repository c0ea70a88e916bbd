use crate::ast;
use crate::ast::Type;
use crate::execution::engine::execute_selection_set;
use crate::execution::engine::path_to_vec;
use crate::execution::engine::try_nullify;
use crate::execution::engine::ExecutionContext;
use crate::execution::engine::ExecutionMode;
use crate::execution::engine::LinkedPath;
use crate::execution::engine::LinkedPathElement;
use crate::execution::engine::PropagateNull;
use crate::execution::resolver::ResolvedValue;
use crate::response::GraphQLError;
use crate::response::JsonValue;
use crate::response::PathSegment;
use crate::schema::ExtendedType;
use crate::Node;

/// Check a resolved value against the field's declared type, complete
/// object values by executing their sub-selections, and coerce leaves.
///
/// Returns `Err` for a field error being propagated upwards to find a
/// nullable place.
pub(crate) fn complete_value<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    mode: ExecutionMode,
    ty: &Type,
    resolved: ResolvedValue<'_>,
    fields: &[&'a Node<ast::Field>],
) -> Result<JsonValue, PropagateNull> {
    let location = fields[0].span();
    macro_rules! field_error {
        ($($arg: tt)+) => {
            {
                ctx.errors.push(GraphQLError::field_error(
                    format!($($arg)+),
                    path_to_vec(path),
                    location,
                ));
                return Err(PropagateNull);
            }
        };
    }

    if let ResolvedValue::Leaf(JsonValue::Null) = resolved {
        if ty.is_non_null() {
            field_error!("Non-null type {ty} resolved to null")
        } else {
            return Ok(JsonValue::Null);
        }
    }

    if let ResolvedValue::List(iter) = resolved {
        match ty {
            Type::Named(_) | Type::NonNullNamed(_) => {
                field_error!("Non-list type {ty} resolved to a list")
            }
            Type::List(inner_ty) | Type::NonNullList(inner_ty) => {
                let mut completed_list = Vec::with_capacity(iter.size_hint().0);
                for (index, inner_result) in iter.enumerate() {
                    let inner_path = LinkedPathElement {
                        element: PathSegment::ListIndex(index),
                        next: path,
                    };
                    let inner_resolved = inner_result.map_err(|err| {
                        ctx.errors.push(GraphQLError::field_error(
                            format!("resolver error: {}", err.message),
                            path_to_vec(Some(&inner_path)),
                            location,
                        ));
                        PropagateNull
                    })?;
                    let inner_result = complete_value(
                        ctx,
                        Some(&inner_path),
                        mode,
                        inner_ty,
                        inner_resolved,
                        fields,
                    );
                    // On a field error, try to nullify the item first
                    match try_nullify(inner_ty, inner_result) {
                        Ok(inner_value) => completed_list.push(inner_value),
                        // A non-null item propagates to the whole list
                        Err(PropagateNull) => return try_nullify(ty, Err(PropagateNull)),
                    }
                }
                return Ok(completed_list.into());
            }
        }
    }

    let ty_name = match ty {
        Type::List(_) | Type::NonNullList(_) => {
            field_error!("List type {ty} resolved to a single value")
        }
        Type::Named(name) | Type::NonNullNamed(name) => name,
    };
    let Some(ty_def) = ctx.schema.types.get(ty_name) else {
        field_error!("Undefined type {ty_name}")
    };

    let resolved_obj = match resolved {
        ResolvedValue::List(_) => unreachable!("lists returned early above"),
        ResolvedValue::Leaf(json_value) => {
            match ty_def {
                ExtendedType::InputObject(_) => {
                    field_error!("Field with input object type {ty_name}")
                }
                ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
                    field_error!(
                        "Resolver returned a leaf value but expected an object for type {ty_name}"
                    )
                }
                ExtendedType::Enum(enum_def) => {
                    if !json_value
                        .as_str()
                        .is_some_and(|name| enum_def.values.contains_key(name))
                    {
                        field_error!("Resolver returned {json_value}, expected enum {ty_name}")
                    }
                }
                ExtendedType::Scalar(_) => match ty_name.as_str() {
                    "Int" => {
                        if !json_value
                            .as_i64()
                            .is_some_and(|int| i32::try_from(int).is_ok())
                        {
                            field_error!("Resolver returned {json_value}, expected Int")
                        }
                    }
                    "Float" => {
                        if !(json_value.is_f64() || json_value.is_i64()) {
                            field_error!("Resolver returned {json_value}, expected Float")
                        }
                    }
                    "String" => {
                        if !json_value.is_string() {
                            field_error!("Resolver returned {json_value}, expected String")
                        }
                    }
                    "Boolean" => {
                        if !json_value.is_boolean() {
                            field_error!("Resolver returned {json_value}, expected Boolean")
                        }
                    }
                    "ID" => {
                        if !(json_value.is_string() || json_value.is_i64()) {
                            field_error!("Resolver returned {json_value}, expected ID")
                        }
                    }
                    _ => {
                        // custom scalar: any JSON value passes through
                    }
                },
            };
            return Ok(json_value);
        }
        ResolvedValue::Object(resolved_obj) => resolved_obj,
    };

    let object_type = match ty_def {
        ExtendedType::InputObject(_) => {
            field_error!("Field with input object type {ty_name}")
        }
        ExtendedType::Enum(_) | ExtendedType::Scalar(_) => {
            field_error!(
                "Resolver returned an object of type {}, expected {ty_name}",
                resolved_obj.type_name()
            )
        }
        ExtendedType::Interface(_) | ExtendedType::Union(_) => {
            let object_type_name = resolved_obj.type_name();
            if let Some(def) = ctx.schema.get_object(object_type_name) {
                def.clone()
            } else {
                field_error!(
                    "Resolver returned an object of type {object_type_name} \
                     not defined in the schema"
                )
            }
        }
        ExtendedType::Object(def) => def.clone(),
    };

    execute_selection_set(
        ctx,
        path,
        mode,
        &object_type,
        &*resolved_obj,
        fields.iter().flat_map(|field| &field.selection_set),
    )
    .map(JsonValue::Object)
}
