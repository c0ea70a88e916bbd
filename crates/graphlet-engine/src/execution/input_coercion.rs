//! Coercion of variable values and field arguments.
//!
//! Both coercers preserve three-state presence: a coerced map has no entry
//! for an absent variable or argument, a JSON `null` for an explicit null,
//! and a value otherwise. Collapsing absent and null would change which
//! defaults apply downstream, so it never happens here.

use crate::ast::Name;
use crate::ast::OperationDefinition;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::execution::engine::path_to_vec;
use crate::execution::engine::LinkedPath;
use crate::execution::engine::PropagateNull;
use crate::response::GraphQLError;
use crate::response::JsonMap;
use crate::response::JsonValue;
use crate::response::RequestError;
use crate::schema::ExtendedType;
use crate::schema::Schema;
use crate::Node;

/// Coerce the values of variables from a request to the types declared by
/// the operation.
///
/// Applied per variable, in definition order: a missing key falls back to
/// the definition's default value, or fails for a non-null type; an
/// explicit null stays null for nullable types and fails for non-null
/// types; anything else is coerced against the declared type. If coercion
/// fails the request must not be executed.
pub fn coerce_variable_values(
    schema: &Schema,
    operation: &OperationDefinition,
    values: &JsonMap,
) -> Result<JsonMap, RequestError> {
    let mut coerced_values = JsonMap::new();
    for variable_def in &operation.variables {
        let name = variable_def.name.as_str();
        match values.get(name) {
            None => apply_variable_default(&mut coerced_values, variable_def)?,
            Some(JsonValue::Null) => {
                if variable_def.ty.is_non_null() {
                    return Err(RequestError::new(
                        format!(
                            "Variable < ${name} > of non-null type < {} > must not be null.",
                            variable_def.ty
                        ),
                        variable_def.span(),
                    ));
                }
                coerced_values.insert(name.to_string(), JsonValue::Null);
            }
            Some(value) => {
                let coerced = coerce_variable_value(schema, variable_def, &variable_def.ty, value)?;
                coerced_values.insert(name.to_string(), coerced);
            }
        }
    }
    Ok(coerced_values)
}

fn apply_variable_default(
    coerced_values: &mut JsonMap,
    variable_def: &Node<VariableDefinition>,
) -> Result<(), RequestError> {
    let name = variable_def.name.as_str();
    if let Some(default) = &variable_def.default_value {
        let value = graphql_value_to_json(default).map_err(|message| {
            RequestError::new(
                format!("Variable < ${name} > has an invalid default value: {message}"),
                variable_def.span(),
            )
        })?;
        coerced_values.insert(name.to_string(), value);
        return Ok(());
    }
    if variable_def.ty.is_non_null() {
        return Err(RequestError::new(
            format!(
                "Variable < ${name} > of required type < {} > was not provided.",
                variable_def.ty
            ),
            variable_def.span(),
        ));
    }
    // Nullable, no value, no default: the variable stays absent. An absent
    // variable is not the same as an explicit null.
    Ok(())
}

fn coerce_variable_value(
    schema: &Schema,
    variable_def: &Node<VariableDefinition>,
    ty: &Type,
    value: &JsonValue,
) -> Result<JsonValue, RequestError> {
    let invalid = || {
        RequestError::new(
            format!(
                "Variable < ${} > got invalid value < {value} >; Expected type < {ty} >.",
                variable_def.name
            ),
            variable_def.span(),
        )
    };

    if value.is_null() {
        return if ty.is_non_null() {
            Err(invalid())
        } else {
            Ok(JsonValue::Null)
        };
    }

    let ty_name = match ty {
        Type::List(inner) | Type::NonNullList(inner) => {
            // A single non-list value coerces to a one-element list.
            return value
                .as_array()
                .map(Vec::as_slice)
                .unwrap_or(std::slice::from_ref(value))
                .iter()
                .map(|item| coerce_variable_value(schema, variable_def, inner, item))
                .collect();
        }
        Type::Named(name) | Type::NonNullNamed(name) => name,
    };

    let Some(ty_def) = schema.types.get(ty_name) else {
        return Err(RequestError::new(
            format!(
                "Variable < ${} > has undefined type < {ty_name} >.",
                variable_def.name
            ),
            variable_def.span(),
        ));
    };
    match ty_def {
        ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
            Err(RequestError::new(
                format!(
                    "Variable < ${} > has non-input type < {ty_name} >.",
                    variable_def.name
                ),
                variable_def.span(),
            ))
        }
        ExtendedType::Scalar(_) => {
            if coerce_scalar_json(ty_name, value).is_some() {
                Ok(value.clone())
            } else {
                Err(invalid())
            }
        }
        ExtendedType::Enum(ty_def) => match value.as_str() {
            Some(name) if ty_def.values.contains_key(name) => Ok(value.clone()),
            _ => Err(invalid()),
        },
        ExtendedType::InputObject(ty_def) => {
            let Some(object) = value.as_object() else {
                return Err(invalid());
            };
            if let Some(key) = object
                .keys()
                .find(|key| !ty_def.fields.contains_key(key.as_str()))
            {
                return Err(RequestError::new(
                    format!(
                        "Variable < ${} > got an object with the key < {key} > \
                         not defined on type < {ty_name} >.",
                        variable_def.name
                    ),
                    variable_def.span(),
                ));
            }
            let mut coerced = JsonMap::new();
            for (field_name, field_def) in &ty_def.fields {
                match object.get(field_name.as_str()) {
                    Some(JsonValue::Null) if field_def.ty.is_non_null() => {
                        return Err(RequestError::new(
                            format!(
                                "Variable < ${} > must not be null for the non-null \
                                 input field < {ty_name}.{field_name} >.",
                                variable_def.name
                            ),
                            variable_def.span(),
                        ))
                    }
                    Some(field_value) => {
                        let coerced_value = coerce_variable_value(
                            schema,
                            variable_def,
                            &field_def.ty,
                            field_value,
                        )?;
                        coerced.insert(field_name.clone(), coerced_value);
                    }
                    None => {
                        if let Some(default) = &field_def.default_value {
                            let default = graphql_value_to_json(default).map_err(|message| {
                                RequestError::new(
                                    format!(
                                        "Input field < {ty_name}.{field_name} > has an \
                                         invalid default value: {message}"
                                    ),
                                    variable_def.span(),
                                )
                            })?;
                            coerced.insert(field_name.clone(), default);
                        } else if field_def.ty.is_non_null() {
                            return Err(RequestError::new(
                                format!(
                                    "Variable < ${} > is missing the required input \
                                     field < {ty_name}.{field_name} >.",
                                    variable_def.name
                                ),
                                variable_def.span(),
                            ));
                        }
                        // nullable and omitted: stays absent
                    }
                }
            }
            Ok(coerced.into())
        }
    }
}

/// Whether a JSON value is acceptable for the named scalar; `Some` carries
/// no transformation because JSON inputs pass through unchanged.
fn coerce_scalar_json(ty_name: &str, value: &JsonValue) -> Option<()> {
    match ty_name {
        "Int" => value
            .as_i64()
            .filter(|&int| i32::try_from(int).is_ok())
            .map(drop),
        "Float" => (value.is_f64() || value.is_i64()).then_some(()),
        "String" => value.as_str().map(drop),
        "Boolean" => value.as_bool().map(drop),
        "ID" => (value.is_string() || value.is_i64()).then_some(()),
        // custom scalars accept any JSON value
        _ => Some(()),
    }
}

/// Coerce the arguments of one field call into the map handed to the
/// resolver.
///
/// An argument bound to an absent variable falls back to the argument's
/// default value, or stays absent; an argument bound to a present variable
/// passes its coerced value through, explicit null included. A missing
/// argument takes the default; a missing or null value for a non-null
/// argument is a field error.
pub(crate) fn coerce_argument_values(
    schema: &Schema,
    errors: &mut Vec<GraphQLError>,
    path: LinkedPath<'_>,
    variable_values: &JsonMap,
    field_def: &crate::ast::FieldDefinition,
    field: &Node<crate::ast::Field>,
) -> Result<JsonMap, PropagateNull> {
    let mut coerced_values = JsonMap::new();
    for arg_def in &field_def.arguments {
        let arg_name = &arg_def.name;
        if let Some((_, value)) = field
            .arguments
            .iter()
            .find(|(name, _)| name == arg_name)
        {
            if let Some(var_name) = value.as_variable() {
                if let Some(var_value) = variable_values.get(var_name.as_str()) {
                    if var_value.is_null() && arg_def.ty.is_non_null() {
                        errors.push(GraphQLError::field_error(
                            format!("Argument < {arg_name} > of non-null type < {} > must not be null.", arg_def.ty),
                            path_to_vec(path),
                            field.span(),
                        ));
                        return Err(PropagateNull);
                    }
                    coerced_values.insert(arg_name.clone(), var_value.clone());
                    continue;
                }
                // absent variable: fall through to the default-value logic
            } else if value.is_null() && arg_def.ty.is_non_null() {
                errors.push(GraphQLError::field_error(
                    format!(
                        "Argument < {arg_name} > of non-null type < {} > must not be null.",
                        arg_def.ty
                    ),
                    path_to_vec(path),
                    field.span(),
                ));
                return Err(PropagateNull);
            } else {
                let coerced = coerce_argument_value(
                    schema,
                    errors,
                    path,
                    variable_values,
                    arg_name,
                    &arg_def.ty,
                    value,
                    field,
                )?;
                coerced_values.insert(arg_name.clone(), coerced);
                continue;
            }
        }
        if let Some(default) = &arg_def.default_value {
            let value = graphql_value_to_json(default).map_err(|message| {
                errors.push(GraphQLError::field_error(
                    format!("Argument < {arg_name} > has an invalid default value: {message}"),
                    path_to_vec(path),
                    field.span(),
                ));
                PropagateNull
            })?;
            coerced_values.insert(arg_name.clone(), value);
            continue;
        }
        if arg_def.ty.is_non_null() {
            errors.push(GraphQLError::field_error(
                format!(
                    "Argument < {arg_name} > of required type < {} > was not provided.",
                    arg_def.ty
                ),
                path_to_vec(path),
                field.span(),
            ));
            return Err(PropagateNull);
        }
        // nullable, not provided, no default: the argument stays absent
    }
    Ok(coerced_values)
}

#[allow(clippy::too_many_arguments)]
fn coerce_argument_value(
    schema: &Schema,
    errors: &mut Vec<GraphQLError>,
    path: LinkedPath<'_>,
    variable_values: &JsonMap,
    arg_name: &Name,
    ty: &Type,
    value: &Node<Value>,
    field: &Node<crate::ast::Field>,
) -> Result<JsonValue, PropagateNull> {
    let invalid = |errors: &mut Vec<GraphQLError>| {
        errors.push(GraphQLError::field_error(
            format!("Argument < {arg_name} > got an invalid value; Expected type < {ty} >."),
            path_to_vec(path),
            value.span().or_else(|| field.span()),
        ));
        PropagateNull
    };

    if value.is_null() {
        if ty.is_non_null() {
            return Err(invalid(errors));
        }
        return Ok(JsonValue::Null);
    }

    if let Some(var_name) = value.as_variable() {
        return match variable_values.get(var_name.as_str()) {
            Some(var_value) => {
                if var_value.is_null() && ty.is_non_null() {
                    Err(invalid(errors))
                } else {
                    Ok(var_value.clone())
                }
            }
            None if ty.is_non_null() => Err(invalid(errors)),
            None => Ok(JsonValue::Null),
        };
    }

    let ty_name = match ty {
        Type::List(inner) | Type::NonNullList(inner) => {
            // A single non-list value coerces to a one-element list.
            let items = value
                .as_list()
                .unwrap_or(std::slice::from_ref(value));
            return items
                .iter()
                .map(|item| {
                    coerce_argument_value(
                        schema,
                        errors,
                        path,
                        variable_values,
                        arg_name,
                        inner,
                        item,
                        field,
                    )
                })
                .collect();
        }
        Type::Named(name) | Type::NonNullNamed(name) => name,
    };

    let Some(ty_def) = schema.types.get(ty_name) else {
        return Err(invalid(errors));
    };
    match ty_def {
        ExtendedType::Object(_) | ExtendedType::Interface(_) | ExtendedType::Union(_) => {
            Err(invalid(errors))
        }
        ExtendedType::Scalar(_) => coerce_scalar_literal(ty_name, value)
            .ok_or_else(|| invalid(errors)),
        ExtendedType::Enum(ty_def) => match value.as_ref() {
            Value::Enum(name) if ty_def.values.contains_key(name) => {
                Ok(JsonValue::String(name.clone()))
            }
            _ => Err(invalid(errors)),
        },
        ExtendedType::InputObject(ty_def) => {
            let Some(object) = value.as_object() else {
                return Err(invalid(errors));
            };
            if object
                .iter()
                .any(|(key, _)| !ty_def.fields.contains_key(key))
            {
                return Err(invalid(errors));
            }
            let mut coerced = JsonMap::new();
            for (field_name, field_def) in &ty_def.fields {
                if let Some((_, field_value)) =
                    object.iter().find(|(key, _)| key == field_name)
                {
                    let coerced_value = coerce_argument_value(
                        schema,
                        errors,
                        path,
                        variable_values,
                        arg_name,
                        &field_def.ty,
                        field_value,
                        field,
                    )?;
                    coerced.insert(field_name.clone(), coerced_value);
                } else if let Some(default) = &field_def.default_value {
                    let default = graphql_value_to_json(default).map_err(|_| invalid(errors))?;
                    coerced.insert(field_name.clone(), default);
                } else if field_def.ty.is_non_null() {
                    return Err(invalid(errors));
                }
            }
            Ok(coerced.into())
        }
    }
}

/// Coerce a literal against one of the built-in scalars, or pass any value
/// through for a custom scalar.
fn coerce_scalar_literal(ty_name: &str, value: &Node<Value>) -> Option<JsonValue> {
    match ty_name {
        "Int" => match value.as_ref() {
            Value::Int(int) => i32::try_from(*int).ok().map(|int| int.into()),
            _ => None,
        },
        "Float" => match value.as_ref() {
            Value::Float(float) => serde_json::Number::from_f64(float.into_inner()).map(Into::into),
            // int literals widen to Float
            Value::Int(int) => serde_json::Number::from_f64(*int as f64).map(Into::into),
            _ => None,
        },
        "String" => match value.as_ref() {
            Value::String(string) => Some(string.as_str().into()),
            _ => None,
        },
        "Boolean" => match value.as_ref() {
            Value::Boolean(boolean) => Some((*boolean).into()),
            _ => None,
        },
        "ID" => match value.as_ref() {
            // integers are preserved as numbers, consistently
            Value::String(string) => Some(string.as_str().into()),
            Value::Int(int) => Some((*int).into()),
            _ => None,
        },
        _ => graphql_value_to_json(value).ok(),
    }
}

/// Convert a constant GraphQL value (a default value) to JSON.
fn graphql_value_to_json(value: &Node<Value>) -> Result<JsonValue, String> {
    match value.as_ref() {
        Value::Null => Ok(JsonValue::Null),
        Value::Variable(name) => Err(format!("variable < ${name} > in constant position")),
        Value::Enum(name) => Ok(name.as_str().into()),
        Value::String(string) => Ok(string.as_str().into()),
        Value::Boolean(boolean) => Ok((*boolean).into()),
        Value::Int(int) => Ok((*int).into()),
        Value::Float(float) => serde_json::Number::from_f64(float.into_inner())
            .map(Into::into)
            .ok_or_else(|| format!("float value < {float} > cannot be represented in JSON")),
        Value::List(items) => items.iter().map(graphql_value_to_json).collect(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| Ok((key.clone(), graphql_value_to_json(value)?)))
            .collect::<Result<serde_json::Map<_, _>, String>>()
            .map(Into::into),
    }
}
