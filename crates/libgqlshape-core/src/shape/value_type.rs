use crate::shape::RecordShape;
use crate::shape::TypeResolutionError;

type Result<T> = std::result::Result<T, TypeResolutionError>;

/// The declared value type of a [`FieldDescriptor`](crate::shape::FieldDescriptor).
///
/// Shape files deserialize this with snake_case tags, e.g.
/// `{"list": {"named": {"name": "Episode", "kind": "string"}}}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Boolean,
    Float,
    Int,
    List(Box<ValueType>),

    /// A user-declared type (enum-like or custom scalar) along with the kind
    /// of value it wraps.
    Named {
        name: String,
        kind: Box<ValueType>,
    },

    /// One level of optionality or pointer indirection.
    Optional(Box<ValueType>),
    Record(RecordShape),
    String,
    UnsignedInt,

    /// A kind of value with no GraphQL counterpart (maps, for example).
    Unsupported(String),
}
impl ValueType {
    pub fn list_of(inner: ValueType) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(name: impl Into<String>, kind: ValueType) -> Self {
        Self::Named {
            name: name.into(),
            kind: Box::new(kind),
        }
    }

    pub fn optional(inner: ValueType) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// The record whose fields are selected beneath a field of this type:
    /// a record or a list of records, each through at most one level of
    /// optionality.
    pub fn selection_record(&self) -> Option<&RecordShape> {
        match self.unwrap_optional() {
            Self::Record(shape) => Some(shape),
            Self::List(inner) => match inner.unwrap_optional() {
                Self::Record(shape) => Some(shape),
                _ => None,
            },
            _ => None,
        }
    }

    /// Resolve the GraphQL type name used when declaring a variable of this
    /// type.
    ///
    /// Named types and records (input objects) starting with an upper-case
    /// letter resolve to their own name. Everything else resolves by kind: `Boolean`, `Float`, `Int`
    /// (signed integers only), `String`, and `[T]` for lists.
    pub fn type_name(&self) -> Result<String> {
        let value_type = self.unwrap_optional();
        let declared_name =
            match value_type {
                Self::Named { name, .. } => Some(name.as_str()),
                Self::Record(shape) => Some(shape.type_name()),
                _ => None,
            };
        if let Some(name) = declared_name
            && name.starts_with(char::is_uppercase) {
            return Ok(name.to_owned());
        }
        value_type.kind_type_name()
    }

    /// Strip one level of [`ValueType::Optional`], if present.
    pub fn unwrap_optional(&self) -> &ValueType {
        match self {
            Self::Optional(inner) => inner,
            other => other,
        }
    }

    /// The literal used for an argument of this type when neither its
    /// metadata nor the shape instance supplies a value.
    pub fn zero_literal(&self) -> String {
        match self {
            Self::Boolean => "false".to_string(),
            Self::Float => "0.0".to_string(),
            Self::Int | Self::UnsignedInt => "0".to_string(),
            Self::List(_) => "[]".to_string(),
            Self::String => "\"\"".to_string(),
            Self::Named { .. }
                | Self::Optional(_)
                | Self::Record(_)
                | Self::Unsupported(_) => "null".to_string(),
        }
    }

    fn element_type_name(&self) -> Result<String> {
        self.unwrap_optional().kind_type_name()
    }

    fn kind_type_name(&self) -> Result<String> {
        match self {
            Self::Boolean => Ok("Boolean".to_string()),
            Self::Float => Ok("Float".to_string()),
            Self::Int => Ok("Int".to_string()),
            Self::List(inner) => Ok(format!("[{}]", inner.element_type_name()?)),
            Self::Named { kind, .. } => kind.kind_type_name(),
            Self::Optional(inner) => inner.type_name(),
            Self::String => Ok("String".to_string()),
            Self::Record(_)
                | Self::UnsignedInt
                | Self::Unsupported(_) => Err(TypeResolutionError::NoTypeName {
                type_description: self.to_string(),
            }),
        }
    }
}
impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Float => write!(f, "float"),
            Self::Int => write!(f, "signed integer"),
            Self::List(inner) => write!(f, "list of {inner}"),
            Self::Named { name, .. } => write!(f, "{name}"),
            Self::Optional(inner) => write!(f, "optional {inner}"),
            Self::Record(shape) => write!(f, "record `{}`", shape.type_name()),
            Self::String => write!(f, "string"),
            Self::UnsignedInt => write!(f, "unsigned integer"),
            Self::Unsupported(description) => write!(f, "{description}"),
        }
    }
}
