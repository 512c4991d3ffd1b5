use crate::shape::FieldDescriptor;

/// The declared shape of one record type: its name and its fields in
/// declaration order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RecordShape {
    #[serde(default)]
    pub(crate) fields: Vec<FieldDescriptor>,
    #[serde(alias = "name")]
    pub(crate) type_name: String,
}
impl RecordShape {
    pub fn new(
        type_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            fields,
            type_name: type_name.into(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
