use crate::scan::SelectionKey;
use crate::shape::FieldDescriptor;
use crate::shape::FieldValue;
use crate::shape::ValueType;

/// One argument bound to one selection, collected while scanning an
/// argument container.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentSpec {
    pub(super) name: String,
    pub(super) not_null: bool,
    pub(super) owner: SelectionKey,
    pub(super) path: Vec<String>,
    pub(super) value: String,
    pub(super) value_type: ValueType,
    pub(super) variable: Option<String>,
}
impl ArgumentSpec {
    /// Build the spec for one sub-field of an argument container.
    ///
    /// The argument's value is the sub-field's first metadata token when it
    /// has one, otherwise the literal carried by the instance, otherwise the
    /// zero literal of the declared type.
    pub(super) fn from_field(
        owner: SelectionKey,
        field: &FieldDescriptor,
        field_value: &FieldValue,
        path: &[String],
    ) -> Self {
        let directives = field.directives();
        let value =
            directives.positional_value()
                .or_else(|| field_value.as_literal())
                .map(str::to_owned)
                .unwrap_or_else(|| field.value_type().zero_literal());

        Self {
            name: field.field_name(),
            not_null: directives.is_not_null(),
            owner,
            path: path.to_vec(),
            value,
            value_type: field.value_type().to_owned(),
            variable: directives.variable().map(str::to_owned),
        }
    }

    /// The traversal path to the owning selection, joined with `.`, or
    /// `(root)` for operation-level arguments.
    pub fn display_path(&self) -> String {
        if self.path.is_empty() {
            "(root)".to_string()
        } else {
            self.path.join(".")
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn not_null(&self) -> bool {
        self.not_null
    }

    pub fn owner(&self) -> &SelectionKey {
        &self.owner
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The argument as it appears in a selection's argument list.
    pub fn to_graphql_string(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }

    /// The text bound to this argument: a literal token or a `$variable`.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }
}
