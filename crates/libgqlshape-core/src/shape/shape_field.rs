use crate::shape::FieldValue;
use crate::shape::ValueType;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Implemented by every type that may appear as a field of a record shape.
///
/// Records get an implementation from `#[derive(QueryShape)]` or
/// `#[derive(QueryArguments)]`, user-declared enums and custom scalars from
/// `#[derive(NamedType)]`.
pub trait ShapeField {
    /// The declared value type of a field of this type.
    fn value_type() -> ValueType;

    /// The instance value of a field of this type. Only records produce
    /// anything other than [`FieldValue::Zero`].
    fn field_value(&self) -> FieldValue {
        FieldValue::Zero
    }
}

macro_rules! impl_scalar_shape_field {
    ($value_type:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl ShapeField for $ty {
                fn value_type() -> ValueType {
                    $value_type
                }
            }
        )+
    };
}

impl_scalar_shape_field!(ValueType::Boolean => bool);
impl_scalar_shape_field!(ValueType::Float => f32, f64);
impl_scalar_shape_field!(ValueType::Int => i8, i16, i32, i64, i128, isize);
impl_scalar_shape_field!(ValueType::String => char, String);
impl_scalar_shape_field!(ValueType::UnsignedInt => u8, u16, u32, u64, u128, usize);

impl ShapeField for &str {
    fn value_type() -> ValueType {
        ValueType::String
    }
}

impl<T: ShapeField> ShapeField for Option<T> {
    fn value_type() -> ValueType {
        ValueType::optional(T::value_type())
    }

    fn field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.field_value(),
            None => FieldValue::Zero,
        }
    }
}

impl<T: ShapeField> ShapeField for Box<T> {
    fn value_type() -> ValueType {
        T::value_type()
    }

    fn field_value(&self) -> FieldValue {
        self.as_ref().field_value()
    }
}

// Lists always select through a zero-valued element, so their instance
// values are never read.
impl<T: ShapeField> ShapeField for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list_of(T::value_type())
    }
}

impl<T: ShapeField> ShapeField for VecDeque<T> {
    fn value_type() -> ValueType {
        ValueType::list_of(T::value_type())
    }
}

impl<T: ShapeField, const N: usize> ShapeField for [T; N] {
    fn value_type() -> ValueType {
        ValueType::list_of(T::value_type())
    }
}

impl<K, V> ShapeField for BTreeMap<K, V> {
    fn value_type() -> ValueType {
        ValueType::Unsupported("map".to_string())
    }
}

impl<K, V, S> ShapeField for HashMap<K, V, S> {
    fn value_type() -> ValueType {
        ValueType::Unsupported("map".to_string())
    }
}

impl<T> ShapeField for BTreeSet<T> {
    fn value_type() -> ValueType {
        ValueType::Unsupported("set".to_string())
    }
}

impl<T, S> ShapeField for HashSet<T, S> {
    fn value_type() -> ValueType {
        ValueType::Unsupported("set".to_string())
    }
}
