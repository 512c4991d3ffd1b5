use crate::scan::ArgumentIndex;
use crate::scan::ArgumentSpec;
use crate::scan::SelectionKey;
use crate::scan::ShapeError;
use crate::shape::RecordShape;
use crate::shape::RecordValue;
use crate::shape::ValueType;

type Result<T> = std::result::Result<T, ShapeError>;

/// Resolve the record at the root of a dynamically described shape.
pub fn root_record(root: &ValueType) -> Result<&RecordShape> {
    match root.unwrap_optional() {
        ValueType::Record(shape) => Ok(shape),
        other => Err(ShapeError::NotARecord {
            found: other.to_string(),
        }),
    }
}

/// Walk the shape rooted at `root` and collect the arguments declared by
/// every argument container in it.
pub fn scan(root: &ValueType, value: &RecordValue) -> Result<ArgumentIndex> {
    scan_record(root_record(root)?, value)
}

/// Like [`scan()`], for a root that is already known to be a record.
pub fn scan_record(
    shape: &RecordShape,
    value: &RecordValue,
) -> Result<ArgumentIndex> {
    let mut index = ArgumentIndex::default();
    scan_fields(&mut index, shape, value, &SelectionKey::root(), &[])?;
    Ok(index)
}

fn scan_fields(
    index: &mut ArgumentIndex,
    shape: &RecordShape,
    value: &RecordValue,
    key: &SelectionKey,
    path: &[String],
) -> Result<()> {
    for (field_index, field) in shape.fields().iter().enumerate() {
        let Some(nested_shape) = field.value_type().selection_record() else {
            continue
        };

        let zero = RecordValue::zero();
        let nested_value =
            value.field(field_index)
                .as_record()
                .unwrap_or(&zero);

        // Arguments belong to the selection that encloses the container,
        // not to the container itself.
        if field.is_arguments_container() {
            for (arg_index, arg_field) in nested_shape.fields().iter().enumerate() {
                index.insert(ArgumentSpec::from_field(
                    key.to_owned(),
                    arg_field,
                    nested_value.field(arg_index),
                    path,
                ))?;
            }
            continue
        }

        let mut nested_path = path.to_vec();
        nested_path.push(field.ident().to_string());

        // An embedded fragment splices the record's fields into the fragment
        // block, so there is no field left to carry its arguments.
        if field.is_embedded()
            && field.directives().inline_fragment().is_some()
            && nested_shape.fields().iter().any(|f| f.is_arguments_container()) {
            return Err(ShapeError::ArgumentsInEmbeddedFragment {
                path: nested_path.join("."),
            });
        }

        scan_fields(
            index,
            nested_shape,
            nested_value,
            &key.child(field_index),
            &nested_path,
        )?;
    }

    Ok(())
}
