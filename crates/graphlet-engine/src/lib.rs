//! A GraphQL engine: schema building, input coercion and execution.
//!
//! The pipeline runs in three stages. SDL text is parsed (by
//! [`graphlet-parser`][graphlet_parser]) and lowered to a typed AST, the
//! AST is built into an immutable [`Schema`], and operations are executed
//! against user-supplied [`Resolver`]s. Parsing and schema building are
//! fail-fast; execution localizes field errors and reports them in the
//! [`Response`] envelope.
//!
//! ## Example
//! ```rust
//! use graphlet_engine::execute;
//! use graphlet_engine::ExecutableDocument;
//! use graphlet_engine::JsonMap;
//! use graphlet_engine::ResolveError;
//! use graphlet_engine::ResolvedValue;
//! use graphlet_engine::Resolver;
//! use graphlet_engine::Schema;
//!
//! struct QueryRoot;
//!
//! impl Resolver for QueryRoot {
//!     fn type_name(&self) -> &str {
//!         "Query"
//!     }
//!
//!     fn resolve_field<'a>(
//!         &'a self,
//!         field_name: &'a str,
//!         _arguments: &'a JsonMap,
//!     ) -> Result<ResolvedValue<'a>, ResolveError> {
//!         match field_name {
//!             "hello" => Ok(ResolvedValue::leaf("world")),
//!             _ => Err(ResolveError::unknown_field(field_name, self)),
//!         }
//!     }
//! }
//!
//! let schema = Schema::parse("type Query { hello: String }").unwrap();
//! let document = ExecutableDocument::parse("{ hello }").unwrap();
//! let response = execute(&schema, &document, None, &JsonMap::new(), &QueryRoot);
//! assert_eq!(
//!     serde_json::to_value(&response).unwrap(),
//!     serde_json::json!({"data": {"hello": "world"}})
//! );
//! ```

use thiserror::Error;

pub mod ast;
mod executable;
mod execution;
mod node;
pub mod response;
pub mod schema;
mod sources;

pub use crate::executable::DocumentError;
pub use crate::executable::ExecutableDocument;
pub use crate::execution::coerce_variable_values;
pub use crate::execution::execute;
pub use crate::execution::ResolveError;
pub use crate::execution::ResolvedValue;
pub use crate::execution::Resolver;
pub use crate::node::Node;
pub use crate::response::GraphQLError;
pub use crate::response::JsonMap;
pub use crate::response::JsonValue;
pub use crate::response::RequestError;
pub use crate::response::Response;
pub use crate::schema::Schema;
pub use crate::schema::SchemaError;
pub use crate::sources::SourceSpan;

/// Why a document could not be turned into an AST.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] graphlet_parser::SyntaxError),

    #[error("number literal `{value}` is out of range")]
    NumberOutOfRange { value: String },
}
