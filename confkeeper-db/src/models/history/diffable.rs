use super::history_entity_type::HistoryEntityType;
use crate::models::{
    ApplicationInput, ApplicationModel, EnvironmentInput, EnvironmentModel, VariableInput,
    VariableModel,
};

/// A diffable attribute: its name plus how to read it from the stored entity and from the
/// incoming update
pub struct DiffField<S, N> {
    pub name: &'static str,
    pub current: fn(&S) -> Option<String>,
    pub incoming: fn(&N) -> Option<String>,
}

/// Trait for stored entities whose updates are recorded field by field
///
/// The field list is explicit so that schema changes never silently add or drop audited
/// attributes. Only the listed fields are compared.
pub trait Diffable: Sized + 'static {
    /// The update payload compared against the stored entity
    type Incoming: 'static;

    /// History discriminator of the entity kind
    const ENTITY_TYPE: HistoryEntityType;

    /// Attributes present on both the stored entity and the update payload
    const FIELDS: &'static [DiffField<Self, Self::Incoming>];
}

/// One attribute whose incoming value differs from the stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Compares `current` with `incoming` over the entity's diffable fields.
///
/// Values are compared with plain `Option<String>` equality: `None` and `Some("")` differ.
pub fn diff<T: Diffable>(current: &T, incoming: &T::Incoming) -> Vec<FieldChange> {
    T::FIELDS
        .iter()
        .filter_map(|field| {
            let old_value = (field.current)(current);
            let new_value = (field.incoming)(incoming);
            (old_value != new_value).then_some(FieldChange {
                field: field.name,
                old_value,
                new_value,
            })
        })
        .collect()
}

impl Diffable for ApplicationModel {
    type Incoming = ApplicationInput;

    const ENTITY_TYPE: HistoryEntityType = HistoryEntityType::Applications;

    const FIELDS: &'static [DiffField<Self, Self::Incoming>] = &[
        DiffField {
            name: "name",
            current: |m| Some(m.name.to_string()),
            incoming: |i| Some(i.name.to_string()),
        },
        DiffField {
            name: "description",
            current: |m| m.description.as_ref().map(|d| d.to_string()),
            incoming: |i| i.description.as_ref().map(|d| d.to_string()),
        },
    ];
}

impl Diffable for EnvironmentModel {
    type Incoming = EnvironmentInput;

    const ENTITY_TYPE: HistoryEntityType = HistoryEntityType::Environments;

    const FIELDS: &'static [DiffField<Self, Self::Incoming>] = &[
        DiffField {
            name: "name",
            current: |m| Some(m.name.to_string()),
            incoming: |i| Some(i.name.to_string()),
        },
        DiffField {
            name: "description",
            current: |m| m.description.as_ref().map(|d| d.to_string()),
            incoming: |i| i.description.as_ref().map(|d| d.to_string()),
        },
    ];
}

impl Diffable for VariableModel {
    type Incoming = VariableInput;

    const ENTITY_TYPE: HistoryEntityType = HistoryEntityType::Variables;

    const FIELDS: &'static [DiffField<Self, Self::Incoming>] = &[
        DiffField {
            name: "name",
            current: |m| Some(m.name.to_string()),
            incoming: |i| Some(i.name.to_string()),
        },
        DiffField {
            name: "value",
            current: |m| Some(m.value.clone()),
            incoming: |i| Some(i.value.clone()),
        },
    ];
}
