/// Renders an argument value as the literal token emitted after `name: `.
///
/// Numbers and booleans render as-is, strings are JSON-quoted, `None` renders
/// as `null` and lists as `[a, b]`. User-declared enums render as bare
/// identifiers (see `#[derive(NamedType)]`).
pub trait ArgumentLiteral {
    fn to_argument_literal(&self) -> String;
}

macro_rules! impl_display_argument_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ArgumentLiteral for $ty {
                fn to_argument_literal(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_display_argument_literal!(
    bool,
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

impl ArgumentLiteral for str {
    fn to_argument_literal(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}

impl ArgumentLiteral for String {
    fn to_argument_literal(&self) -> String {
        self.as_str().to_argument_literal()
    }
}

impl ArgumentLiteral for char {
    fn to_argument_literal(&self) -> String {
        self.to_string().to_argument_literal()
    }
}

impl<T: ArgumentLiteral + ?Sized> ArgumentLiteral for &T {
    fn to_argument_literal(&self) -> String {
        (**self).to_argument_literal()
    }
}

impl<T: ArgumentLiteral + ?Sized> ArgumentLiteral for Box<T> {
    fn to_argument_literal(&self) -> String {
        self.as_ref().to_argument_literal()
    }
}

impl<T: ArgumentLiteral> ArgumentLiteral for Option<T> {
    fn to_argument_literal(&self) -> String {
        match self {
            Some(value) => value.to_argument_literal(),
            None => "null".to_string(),
        }
    }
}

impl<T: ArgumentLiteral> ArgumentLiteral for [T] {
    fn to_argument_literal(&self) -> String {
        format!(
            "[{}]",
            self.iter()
                .map(|value| value.to_argument_literal())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl<T: ArgumentLiteral> ArgumentLiteral for Vec<T> {
    fn to_argument_literal(&self) -> String {
        self.as_slice().to_argument_literal()
    }
}
