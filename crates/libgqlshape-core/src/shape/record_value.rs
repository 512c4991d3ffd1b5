static ZERO_FIELD_VALUE: FieldValue = FieldValue::Zero;

/// The instance-level values of one record, parallel to the fields of its
/// [`RecordShape`](crate::shape::RecordShape).
///
/// Only two things are ever read from an instance: nested records (to reach
/// deeper argument containers) and the literal text of argument-container
/// sub-fields. Everything else is [`FieldValue::Zero`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordValue {
    fields: Vec<FieldValue>,
}
impl RecordValue {
    pub fn new(fields: Vec<FieldValue>) -> Self {
        Self { fields }
    }

    /// A record with every field at its zero value.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The value of the field at `index`, or [`FieldValue::Zero`] when the
    /// instance holds nothing there.
    pub fn field(&self, index: usize) -> &FieldValue {
        self.fields.get(index).unwrap_or(&ZERO_FIELD_VALUE)
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// The literal text of an argument value.
    Literal(String),

    Record(RecordValue),

    #[default]
    Zero,
}
impl FieldValue {
    pub fn as_literal(&self) -> Option<&str> {
        if let Self::Literal(literal) = self {
            Some(literal.as_str())
        } else {
            None
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        if let Self::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }
}
