/// Stable identity of one selection within a shape: the indices of the
/// fields leading to it from the root record.
///
/// Scanning and rendering walk the same shape in the same order, so both
/// derive identical keys for the same selection without either of them
/// holding a reference into the other's traversal.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SelectionKey(Vec<usize>);
impl SelectionKey {
    /// The key of the root record (the operation itself).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, field_index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(field_index);
        Self(indices)
    }

    pub fn field_indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}
