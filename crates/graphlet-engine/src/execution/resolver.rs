use crate::response::JsonMap;
use crate::response::JsonValue;

/// A GraphQL object whose fields can be resolved during execution.
pub type ObjectValue<'a> = dyn Resolver + 'a;

/// Field resolution for one object value.
///
/// The engine calls [`resolve_field`][Resolver::resolve_field] with the
/// coerced argument map of §Coercing Field Arguments; the map contains no
/// entry for an argument that was absent, a JSON `null` for an explicit
/// null, and a value otherwise.
pub trait Resolver {
    /// The name of the concrete object type this value belongs to.
    ///
    /// Consulted when the schema declares an abstract (interface or union)
    /// type for a field this value was resolved from.
    fn type_name(&self) -> &str;

    /// Resolve one field of this object with the given arguments.
    fn resolve_field<'a>(
        &'a self,
        field_name: &'a str,
        arguments: &'a JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError>;
}

/// An error returned by a resolver; recorded as a field error at the
/// field's response path.
#[derive(Debug, Clone)]
pub struct ResolveError {
    pub message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unknown_field(field_name: &str, object: &ObjectValue<'_>) -> Self {
        Self {
            message: format!(
                "unexpected field name: {field_name} in type {}",
                object.type_name()
            ),
        }
    }
}

/// The value of a resolved field.
pub enum ResolvedValue<'a> {
    /// JSON null represents GraphQL null; enum values are JSON strings;
    /// built-in scalars follow their result coercion rules.
    Leaf(JsonValue),

    /// Expected where the schema declares an object, interface, or union
    /// type.
    Object(Box<ObjectValue<'a>>),

    /// Expected for list types.
    List(Box<dyn Iterator<Item = Result<ResolvedValue<'a>, ResolveError>> + 'a>),
}

impl<'a> ResolvedValue<'a> {
    pub fn null() -> Self {
        Self::Leaf(JsonValue::Null)
    }

    pub fn leaf(json: impl Into<JsonValue>) -> Self {
        Self::Leaf(json.into())
    }

    pub fn object(resolver: impl Resolver + 'a) -> Self {
        Self::Object(Box::new(resolver))
    }

    pub fn opt_object(opt_resolver: Option<impl Resolver + 'a>) -> Self {
        match opt_resolver {
            Some(resolver) => Self::Object(Box::new(resolver)),
            None => Self::null(),
        }
    }

    pub fn list<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'a,
    {
        Self::List(Box::new(iter.into_iter().map(Ok)))
    }
}
