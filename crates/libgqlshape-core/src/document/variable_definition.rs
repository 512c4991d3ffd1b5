/// One entry of an operation's variable-declaration list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDefinition {
    pub(crate) name: String,
    pub(crate) not_null: bool,
    pub(crate) type_name: String,
}
impl VariableDefinition {
    /// `name` may be given with or without its leading `$`.
    pub fn new(
        name: &str,
        type_name: impl Into<String>,
        not_null: bool,
    ) -> Self {
        Self {
            name: name.strip_prefix('$').unwrap_or(name).to_string(),
            not_null,
            type_name: type_name.into(),
        }
    }

    /// The variable name, without its leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn not_null(&self) -> bool {
        self.not_null
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "${}: {}{}",
            self.name,
            self.type_name,
            if self.not_null { "!" } else { "" },
        )
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
