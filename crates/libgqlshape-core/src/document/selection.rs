use crate::document::FieldSelection;
use crate::document::InlineFragmentSelection;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentSelection> {
        if let Self::InlineFragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }

    pub(crate) fn write_graphql(&self, out: &mut String, depth: usize) {
        match self {
            Self::Field(field) => field.write_graphql(out, depth),
            Self::InlineFragment(fragment) => fragment.write_graphql(out, depth),
        }
    }
}
impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<InlineFragmentSelection> for Selection {
    fn from(value: InlineFragmentSelection) -> Self {
        Self::InlineFragment(value)
    }
}

/// Write a `{ ... }` block body followed by its closing brace.
pub(super) fn write_selection_set(
    out: &mut String,
    selections: &[Selection],
    depth: usize,
) {
    out.push_str(" {\n");
    for selection in selections {
        selection.write_graphql(out, depth + 1);
    }
    out.push_str(&super::indent(depth));
    out.push_str("}\n");
}
