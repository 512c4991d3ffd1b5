use crate::document::Selection;
use crate::document::selection::write_selection_set;

/// A `... on Type { }` block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InlineFragmentSelection {
    pub(crate) directive: Option<String>,
    pub(crate) marker: String,
    pub(crate) selection_set: Vec<Selection>,
}
impl InlineFragmentSelection {
    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }

    /// The fragment marker as declared, e.g. `... on Droid`.
    pub fn marker(&self) -> &str {
        self.marker.as_str()
    }

    pub fn selection_set(&self) -> &[Selection] {
        &self.selection_set
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        out.push_str(&super::indent(depth));
        out.push_str(&self.marker);
        if let Some(directive) = &self.directive {
            out.push(' ');
            out.push_str(directive);
        }
        write_selection_set(out, &self.selection_set, depth);
    }
}
