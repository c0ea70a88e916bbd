//! The GraphQL response format.

use crate::sources::SourceSpan;
use serde::Deserialize;
use serde::Serialize;

pub type JsonValue = serde_json::Value;
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A GraphQL response.
///
/// `data` is always serialized: a JSON object on (partial) success, JSON
/// `null` when a request error prevented execution or a non-null field
/// error propagated all the way to the root. `errors` is omitted entirely
/// when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub data: Option<JsonMap>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

/// An error as found in the `errors` list of a [`Response`].
///
/// `path` is `null` for request errors and a list of field names and list
/// indices for field errors. `locations` are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub path: Option<Vec<PathSegment>>,
    pub locations: Vec<Location>,
}

/// One element of a field error's `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    ListIndex(usize),
}

/// A 1-based source location attached to a [`GraphQLError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl From<SourceSpan> for Location {
    fn from(span: SourceSpan) -> Self {
        Self {
            line: span.line,
            column: span.column,
        }
    }
}

/// An error raised before execution started: unknown operation, variable
/// coercion failure, missing root type.
///
/// A request error aborts the whole request; the response carries
/// `data: null` and this single error.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub(crate) message: String,
    pub(crate) location: Option<SourceSpan>,
}

impl RequestError {
    pub fn new(message: impl Into<String>, location: Option<SourceSpan>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_graphql_error(self) -> GraphQLError {
        GraphQLError {
            message: self.message,
            path: None,
            locations: self.location.into_iter().map(Location::from).collect(),
        }
    }
}

impl From<RequestError> for Response {
    fn from(error: RequestError) -> Self {
        Self {
            data: None,
            errors: vec![error.into_graphql_error()],
        }
    }
}

impl GraphQLError {
    pub(crate) fn field_error(
        message: impl Into<String>,
        path: Vec<PathSegment>,
        location: Option<SourceSpan>,
    ) -> Self {
        Self {
            message: message.into(),
            path: Some(path),
            locations: location.into_iter().map(Location::from).collect(),
        }
    }
}
