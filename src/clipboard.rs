use tracing::debug;

use crate::{
    chooser::FieldController,
    core::{
        ChooserError,
        ClipboardSlot,
        KeyDisposition,
    },
    form::{
        FieldHandle,
        Form,
    },
    linkage,
};

/// State shared by every field of one page session.
#[derive(Debug, Default)]
pub struct Session {
    clipboard: Option<ClipboardSlot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard(&self) -> Option<&ClipboardSlot> {
        self.clipboard.as_ref()
    }
}

pub struct ClipboardController<'s> {
    session: &'s mut Session,
}

impl<'s> ClipboardController<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        Self { session }
    }

    /// Overwrites the clipboard with the source field's text and companions.
    pub fn copy(&mut self, form: &Form, source: &FieldHandle) -> KeyDisposition {
        let slot = ClipboardSlot {
            source_value: form.value(source).unwrap_or_default().to_string(),
            values: linkage::companions(form, source),
        };
        debug!(field = %source.name, value = %slot.source_value, "copied term");
        self.session.clipboard = Some(slot);
        KeyDisposition::PreventDefault
    }

    /// Pastes into `target` when the clipboard is complete and the target's scope accepts
    /// the copied ontology. Rejected pastes change nothing.
    pub fn paste(
        &mut self,
        form: &mut Form,
        target: &mut FieldController,
    ) -> Result<KeyDisposition, ChooserError> {
        let Some(slot) = self.session.clipboard.as_ref().filter(|slot| slot.is_complete()) else {
            debug!(field = %target.handle().name, "nothing complete to paste");
            return Ok(KeyDisposition::PreventDefault);
        };

        if !target.scope().accepts_ncbo_id(&slot.values.ncbo_id) {
            debug!(
                field = %target.handle().name,
                ncbo_id = %slot.values.ncbo_id,
                "paste rejected, incompatible ontology"
            );
            return Ok(KeyDisposition::PreventDefault);
        }

        let handle = target.handle().clone();
        if !form.set_value(&handle, slot.source_value.as_str()) {
            return Err(ChooserError::UnknownField(handle.name));
        }
        linkage::write_all(form, &handle, &slot.values)?;
        target.suppress_next_search();

        debug!(field = %handle.name, value = %slot.source_value, "pasted term");
        Ok(KeyDisposition::PreventDefault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            Companion,
            CompanionValues,
            FieldScope,
        },
        form::Input,
    };

    fn values(ncbo_id: &str) -> CompanionValues {
        CompanionValues {
            concept_id: "birnlex_161".to_string(),
            ontology_id: "29684".to_string(),
            ncbo_id: ncbo_id.to_string(),
            full_id: "http://example.org/birnlex_161".to_string(),
        }
    }

    fn form_with(source_values: &CompanionValues) -> (Form, FieldHandle, FieldController, FieldController) {
        let mut form = Form::new();
        let source = form.push_input(0, Input::text("source").with_rel("ontology-1494-name"));
        form.set_value(&source, "Mus musculus");
        linkage::write_all(&mut form, &source, source_values).unwrap();

        let any = form.push_input(1, Input::text("any").with_rel("ontology-all-name"));
        let taxon = form.push_input(2, Input::text("taxon").with_rel("ontology-1132-name"));
        let any = FieldController::new(any, FieldScope::parse("ontology-all-name").unwrap());
        let taxon = FieldController::new(taxon, FieldScope::parse("ontology-1132-name").unwrap());
        (form, source, any, taxon)
    }

    #[test]
    fn test_copy_paste_into_wildcard_field() {
        let (mut form, source, mut any, _) = form_with(&values("1494"));
        let mut session = Session::new();
        let mut clipboard = ClipboardController::new(&mut session);

        assert_eq!(clipboard.copy(&form, &source), KeyDisposition::PreventDefault);
        assert_eq!(clipboard.paste(&mut form, &mut any).unwrap(), KeyDisposition::PreventDefault);

        assert_eq!(form.value(any.handle()), Some("Mus musculus"));
        assert_eq!(linkage::companions(&form, any.handle()), values("1494"));
        assert!(any.is_search_suppressed());
    }

    #[test]
    fn test_paste_rejected_for_other_ontology() {
        let (mut form, source, _, mut taxon) = form_with(&values("29684"));
        let mut session = Session::new();
        let mut clipboard = ClipboardController::new(&mut session);
        clipboard.copy(&form, &source);

        let before = form.clone();
        assert_eq!(clipboard.paste(&mut form, &mut taxon).unwrap(), KeyDisposition::PreventDefault);
        assert_eq!(form, before);
        assert!(!taxon.is_search_suppressed());
    }

    #[test]
    fn test_paste_accepted_for_matching_ontology() {
        let (mut form, source, _, mut taxon) = form_with(&values("1132"));
        let mut session = Session::new();
        let mut clipboard = ClipboardController::new(&mut session);
        clipboard.copy(&form, &source);
        clipboard.paste(&mut form, &mut taxon).unwrap();

        assert_eq!(form.value(taxon.handle()), Some("Mus musculus"));
        assert_eq!(linkage::companion(&form, taxon.handle(), Companion::NcboId), "1132");
    }

    #[test]
    fn test_partial_clipboard_is_not_pasted() {
        let mut partial = values("1494");
        partial.full_id.clear();
        let (mut form, source, mut any, _) = form_with(&partial);

        let mut session = Session::new();
        let mut clipboard = ClipboardController::new(&mut session);
        clipboard.copy(&form, &source);

        let before = form.clone();
        clipboard.paste(&mut form, &mut any).unwrap();
        assert_eq!(form, before);
        assert!(!any.is_search_suppressed());
    }

    #[test]
    fn test_empty_clipboard_is_not_pasted() {
        let (mut form, _, mut any, _) = form_with(&values("1494"));
        let mut session = Session::new();

        let before = form.clone();
        ClipboardController::new(&mut session).paste(&mut form, &mut any).unwrap();
        assert_eq!(form, before);
        assert!(session.clipboard().is_none());
    }

    #[test]
    fn test_copy_overwrites_previous_slot() {
        let (mut form, source, any, _) = form_with(&values("1494"));
        form.set_value(any.handle(), "Rattus");

        let mut session = Session::new();
        let mut clipboard = ClipboardController::new(&mut session);
        clipboard.copy(&form, &source);
        clipboard.copy(&form, any.handle());

        let slot = session.clipboard().unwrap();
        assert_eq!(slot.source_value, "Rattus");
        assert_eq!(slot.values, CompanionValues::default());
    }
}
