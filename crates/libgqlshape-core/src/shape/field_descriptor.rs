use crate::FieldDirectives;
use crate::shape::ValueType;
use crate::to_field_name;

/// Identifier of the reserved pseudo-field whose sub-fields declare the
/// arguments of the selection that contains it.
pub const ARGUMENTS_FIELD_NAME: &str = "graphql_arguments";

/// One field of a declared record shape.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(from = "FieldDescriptorDef")]
pub struct FieldDescriptor {
    directives: FieldDirectives,
    embedded: bool,
    ident: String,
    metadata: String,
    name_override: Option<String>,
    value_type: ValueType,
}
impl FieldDescriptor {
    pub fn new(
        ident: impl Into<String>,
        value_type: ValueType,
        metadata: impl Into<String>,
    ) -> Self {
        let metadata = metadata.into();
        Self {
            directives: FieldDirectives::parse(&metadata),
            embedded: false,
            ident: ident.into(),
            metadata,
            name_override: None,
            value_type,
        }
    }

    /// Mark this field as an embedded (anonymous-composition) field. An
    /// embedded field carrying an inline-fragment marker contributes its
    /// record's fields directly to the fragment block.
    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Use `name` instead of the camel-cased identifier when this field is
    /// emitted.
    pub fn with_name_override(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }

    pub fn directives(&self) -> &FieldDirectives {
        &self.directives
    }

    /// The name this field is emitted under: the name override if one was
    /// declared, otherwise [`to_field_name`] of the identifier.
    pub fn field_name(&self) -> String {
        self.name_override
            .clone()
            .unwrap_or_else(|| to_field_name(&self.ident))
    }

    pub fn ident(&self) -> &str {
        self.ident.as_str()
    }

    /// Indicates if this is the reserved argument-container pseudo-field.
    pub fn is_arguments_container(&self) -> bool {
        self.ident == ARGUMENTS_FIELD_NAME
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The raw metadata string this field was declared with.
    pub fn metadata(&self) -> &str {
        self.metadata.as_str()
    }

    pub fn name_override(&self) -> Option<&str> {
        self.name_override.as_deref()
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }
}

#[derive(serde::Deserialize)]
struct FieldDescriptorDef {
    #[serde(default)]
    embed: bool,
    #[serde(alias = "name")]
    ident: String,
    #[serde(alias = "graphql", default)]
    metadata: String,
    #[serde(default)]
    rename: Option<String>,
    #[serde(rename = "type")]
    value_type: ValueType,
}
impl std::convert::From<FieldDescriptorDef> for FieldDescriptor {
    fn from(value: FieldDescriptorDef) -> Self {
        let descriptor =
            FieldDescriptor::new(value.ident, value.value_type, value.metadata)
                .with_embedded(value.embed);

        match value.rename {
            Some(name) => descriptor.with_name_override(name),
            None => descriptor,
        }
    }
}
