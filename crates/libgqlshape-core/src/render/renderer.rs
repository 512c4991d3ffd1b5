use crate::document::Document;
use crate::document::FieldSelection;
use crate::document::InlineFragmentSelection;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::VariableDefinition;
use crate::render::RenderError;
use crate::scan::ArgumentIndex;
use crate::scan::SelectionKey;
use crate::shape::FieldDescriptor;
use crate::shape::FieldValue;
use crate::shape::RecordShape;
use crate::shape::RecordValue;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

type Result<T> = std::result::Result<T, RenderError>;

/// Turns a scanned record shape into a [`Document`].
///
/// The renderer walks the shape a second time, in the same order as the
/// scanner, and looks up each selection's arguments in the
/// [`ArgumentIndex`] by its [`SelectionKey`].
#[derive(Debug)]
pub struct Renderer<'index> {
    index: &'index ArgumentIndex,
}
impl<'index> Renderer<'index> {
    pub fn new(index: &'index ArgumentIndex) -> Self {
        Self { index }
    }

    pub fn render(
        &self,
        shape: &RecordShape,
        value: &RecordValue,
        operation_kind: OperationKind,
        operation_name: Option<&str>,
    ) -> Result<Document> {
        Ok(Document {
            operation_kind,
            operation_name: operation_name.map(str::to_owned),
            selection_set: self.selection_set(shape, value, &SelectionKey::root()),
            variables: self.variable_definitions()?,
        })
    }

    /// Declarations for every argument bound to a `$variable`, one per
    /// variable name, sorted by their rendered text.
    ///
    /// Repeated declarations of one variable must agree on its type; the
    /// merged declaration is non-null if any of them is.
    pub fn variable_definitions(&self) -> Result<Vec<VariableDefinition>> {
        let mut by_name: BTreeMap<String, VariableDefinition> = BTreeMap::new();

        for spec in self.index.iter() {
            let Some(variable) = spec.variable() else {
                continue
            };

            let type_name =
                spec.value_type()
                    .type_name()
                    .map_err(|source| RenderError::VariableType {
                        argument_name: spec.name().to_string(),
                        path: spec.display_path(),
                        source,
                    })?;

            let definition =
                VariableDefinition::new(variable, type_name, spec.not_null());

            match by_name.entry(definition.name().to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                },

                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    if existing.type_name() != definition.type_name() {
                        return Err(RenderError::ConflictingVariable {
                            first_declaration: existing.to_graphql_string(),
                            second_declaration: definition.to_graphql_string(),
                            variable_name: definition.name().to_string(),
                        });
                    }
                    existing.not_null |= definition.not_null();
                },
            }
        }

        let mut definitions: Vec<VariableDefinition> = by_name.into_values().collect();
        definitions.sort_by_cached_key(VariableDefinition::to_graphql_string);
        log::trace!("Declaring {} variables.", definitions.len());
        Ok(definitions)
    }

    fn selection_set(
        &self,
        shape: &RecordShape,
        value: &RecordValue,
        key: &SelectionKey,
    ) -> Vec<Selection> {
        shape.fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.is_arguments_container())
            .map(|(field_index, field)| self.selection(
                field,
                value.field(field_index),
                &key.child(field_index),
            ))
            .collect()
    }

    fn selection(
        &self,
        field: &FieldDescriptor,
        value: &FieldValue,
        key: &SelectionKey,
    ) -> Selection {
        let directives = field.directives();
        let directive = directives.directive().map(str::to_owned);

        // Lists (and absent optionals) select through a zero-valued element.
        let nested_selection_set =
            field.value_type()
                .selection_record()
                .map(|nested_shape| {
                    let zero = RecordValue::zero();
                    let nested_value = value.as_record().unwrap_or(&zero);
                    self.selection_set(nested_shape, nested_value, key)
                });

        let Some(marker) = directives.inline_fragment() else {
            return self.field_selection(field, key, directive, nested_selection_set).into();
        };

        let selection_set =
            match nested_selection_set {
                Some(selections) if field.is_embedded() => selections,
                nested_selection_set => vec![
                    self.field_selection(field, key, None, nested_selection_set).into(),
                ],
            };

        InlineFragmentSelection {
            directive,
            marker: marker.to_string(),
            selection_set,
        }.into()
    }

    fn field_selection(
        &self,
        field: &FieldDescriptor,
        key: &SelectionKey,
        directive: Option<String>,
        selection_set: Option<Vec<Selection>>,
    ) -> FieldSelection {
        let field_name = field.field_name();
        let (alias, name) =
            match field.directives().alias_of() {
                Some(underlying_name) => (Some(field_name), underlying_name.to_string()),
                None => (None, field_name),
            };

        FieldSelection {
            alias,
            arguments: self.arguments(field, key),
            directive,
            name,
            selection_set,
        }
    }

    /// Arguments collected from this selection's argument container, sorted
    /// by their rendered text. Falls back to the field's verbatim `(...)`
    /// metadata token.
    fn arguments(
        &self,
        field: &FieldDescriptor,
        key: &SelectionKey,
    ) -> Option<String> {
        if let Some(args) = self.index.arguments_for(key)
            && !args.is_empty() {
            let mut rendered: Vec<String> =
                args.values()
                    .map(|spec| spec.to_graphql_string())
                    .collect();
            rendered.sort();
            return Some(format!("({})", rendered.join(", ")));
        }

        field.directives()
            .argument_list()
            .map(str::to_owned)
    }
}
