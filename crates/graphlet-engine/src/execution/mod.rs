//! The execution pipeline: variable coercion, field collection, resolver
//! dispatch, result coercion, and null bubbling.

pub(crate) mod engine;
pub(crate) mod input_coercion;
pub(crate) mod resolver;
pub(crate) mod result_coercion;

use crate::ast::OperationType;
use crate::executable::ExecutableDocument;
use crate::execution::engine::execute_selection_set;
use crate::execution::engine::ExecutionContext;
use crate::execution::engine::ExecutionMode;
use crate::response::JsonMap;
use crate::response::RequestError;
use crate::response::Response;
use crate::schema::Schema;

pub use self::input_coercion::coerce_variable_values;
pub use self::resolver::ResolveError;
pub use self::resolver::ResolvedValue;
pub use self::resolver::Resolver;

/// Execute one operation of a document against a schema.
///
/// Request errors (unknown operation, variable coercion failure, missing
/// root type) abort execution: the response carries `data: null` and a
/// single error. Field errors are localized: the failing field becomes
/// null or bubbles to the nearest nullable ancestor, and sibling fields
/// keep executing.
pub fn execute(
    schema: &Schema,
    document: &ExecutableDocument,
    operation_name: Option<&str>,
    variables: &JsonMap,
    initial_value: &dyn Resolver,
) -> Response {
    execute_request(schema, document, operation_name, variables, initial_value)
        .unwrap_or_else(Response::from)
}

fn execute_request(
    schema: &Schema,
    document: &ExecutableDocument,
    operation_name: Option<&str>,
    variables: &JsonMap,
    initial_value: &dyn Resolver,
) -> Result<Response, RequestError> {
    let operation = document.get_operation(operation_name)?;
    let variable_values = coerce_variable_values(schema, operation, variables)?;

    let root_type_name = schema.root_operation(operation.operation_type).ok_or_else(|| {
        RequestError::new(
            format!(
                "The schema does not define a {} root operation type.",
                operation.operation_type
            ),
            operation.span(),
        )
    })?;
    let root_type = schema.get_object(root_type_name).ok_or_else(|| {
        RequestError::new(
            format!("Root operation type < {root_type_name} > is not an object type."),
            operation.span(),
        )
    })?;

    let mode = match operation.operation_type {
        OperationType::Mutation => ExecutionMode::Sequential,
        OperationType::Query | OperationType::Subscription => ExecutionMode::Normal,
    };

    let mut errors = Vec::new();
    let mut ctx = ExecutionContext {
        schema,
        document,
        variable_values: &variable_values,
        errors: &mut errors,
    };
    let data = execute_selection_set(
        &mut ctx,
        None,
        mode,
        root_type,
        initial_value,
        &operation.selection_set,
    )
    .ok();

    Ok(Response { data, errors })
}
