//! Hidden companion fields holding the selected term's identifiers.
//!
//! A companion of `species` is the input named `species-concept_id` (and so on) inside the
//! same container. It is created right after the primary field on first write.

use crate::{
    core::{
        ChooserError,
        Companion,
        CompanionValues,
    },
    form::{
        FieldHandle,
        Form,
        Input,
    },
};

pub fn set_companion(
    form: &mut Form,
    primary: &FieldHandle,
    companion: Companion,
    value: Option<&str>,
) -> Result<(), ChooserError> {
    let value = value.unwrap_or_default();
    let name = companion.field_name(&primary.name);

    let container = form
        .container_mut(primary.container)
        .ok_or_else(|| ChooserError::UnknownField(primary.name.clone()))?;
    let primary_pos =
        container.position(&primary.name).ok_or_else(|| ChooserError::UnknownField(primary.name.clone()))?;

    match container.find_mut(&name) {
        Some(existing) => existing.value = value.to_string(),
        None => container.inputs.insert(primary_pos + 1, Input::hidden(name, value)),
    }
    Ok(())
}

/// Empty when the companion was never written.
pub fn companion(form: &Form, primary: &FieldHandle, companion: Companion) -> String {
    let name = companion.field_name(&primary.name);
    form.container(primary.container)
        .and_then(|container| container.find(&name))
        .map(|input| input.value.clone())
        .unwrap_or_default()
}

pub fn companions(form: &Form, primary: &FieldHandle) -> CompanionValues {
    CompanionValues {
        concept_id: companion(form, primary, Companion::ConceptId),
        ontology_id: companion(form, primary, Companion::OntologyId),
        ncbo_id: companion(form, primary, Companion::NcboId),
        full_id: companion(form, primary, Companion::FullId),
    }
}

pub fn write_all(
    form: &mut Form,
    primary: &FieldHandle,
    values: &CompanionValues,
) -> Result<(), ChooserError> {
    for name in Companion::ALL {
        set_companion(form, primary, name, Some(values.get(name)))?;
    }
    Ok(())
}

pub fn clear_all(form: &mut Form, primary: &FieldHandle) -> Result<(), ChooserError> {
    for name in Companion::ALL {
        set_companion(form, primary, name, None)?;
    }
    Ok(())
}
