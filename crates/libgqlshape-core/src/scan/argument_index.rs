use crate::scan::ArgumentSpec;
use crate::scan::SelectionKey;
use crate::scan::ShapeError;
use indexmap::IndexMap;

/// Side table from each selection to the arguments declared for it.
///
/// Built once by [`scan()`](crate::scan::scan) and only read afterwards.
/// Entries keep the order in which the scanner found them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentIndex {
    arguments: IndexMap<SelectionKey, IndexMap<String, ArgumentSpec>>,
}
impl ArgumentIndex {
    /// The arguments declared for the selection identified by `key`, keyed
    /// by argument name.
    pub fn arguments_for(
        &self,
        key: &SelectionKey,
    ) -> Option<&IndexMap<String, ArgumentSpec>> {
        self.arguments.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Every registered argument, grouped by selection in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.arguments.values().flat_map(|args| args.values())
    }

    /// The number of registered arguments across all selections.
    pub fn len(&self) -> usize {
        self.arguments.values().map(|args| args.len()).sum()
    }

    pub(super) fn insert(&mut self, spec: ArgumentSpec) -> Result<(), ShapeError> {
        let args = self.arguments.entry(spec.owner().to_owned()).or_default();
        if args.contains_key(spec.name()) {
            return Err(ShapeError::DuplicateArgument {
                argument_name: spec.name().to_string(),
                path: spec.display_path(),
            });
        }

        log::trace!(
            "Registered argument `{}` at {}.",
            spec.to_graphql_string(),
            spec.display_path(),
        );
        args.insert(spec.name().to_string(), spec);
        Ok(())
    }
}
