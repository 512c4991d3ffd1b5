use crate::document::Selection;
use crate::document::selection::write_selection_set;

/// A selected field, optionally aliased, with its argument list, directive
/// and nested selection set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Option<String>,
    pub(crate) directive: Option<String>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<Vec<Selection>>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The rendered argument list, parentheses included.
    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }

    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    /// `None` for leaf (scalar) selections.
    pub fn selection_set(&self) -> Option<&[Selection]> {
        self.selection_set.as_deref()
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        out.push_str(&super::indent(depth));
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(&self.name);
        if let Some(arguments) = &self.arguments {
            out.push_str(arguments);
        }
        if let Some(directive) = &self.directive {
            out.push(' ');
            out.push_str(directive);
        }

        match &self.selection_set {
            Some(selections) => write_selection_set(out, selections, depth),
            None => out.push('\n'),
        }
    }
}
