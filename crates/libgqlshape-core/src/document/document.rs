use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::VariableDefinition;

/// A rendered operation: its kind, optional name, variable declarations and
/// root selection set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    pub(crate) operation_kind: OperationKind,
    pub(crate) operation_name: Option<String>,
    pub(crate) selection_set: Vec<Selection>,
    pub(crate) variables: Vec<VariableDefinition>,
}
impl Document {
    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn selection_set(&self) -> &[Selection] {
        &self.selection_set
    }

    /// Serialize this document with two spaces of indentation per level,
    /// one selection per line and no trailing newline after the final `}`.
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        out.push_str(self.operation_kind.as_keyword());
        if let Some(name) = &self.operation_name {
            out.push(' ');
            out.push_str(name);
        }
        if !self.variables.is_empty() {
            out.push('(');
            out.push_str(
                &self.variables
                    .iter()
                    .map(VariableDefinition::to_graphql_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            out.push(')');
        }
        out.push_str(" {\n");

        for selection in &self.selection_set {
            selection.write_graphql(&mut out, 1);
        }

        out.push('}');
        out
    }

    /// Variable declarations, sorted by their rendered text.
    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }
}
impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
