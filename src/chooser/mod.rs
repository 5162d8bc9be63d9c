pub mod collaborators;
pub mod field;
pub mod keys;

#[cfg(test)]
mod test_support;

pub use collaborators::{
    BusyIndicator,
    Collaborators,
    Reveal,
};
pub use field::{
    FieldController,
    SearchStart,
    SearchTicket,
};
pub use keys::Key;
use tracing::{
    debug,
    warn,
};

use crate::{
    clipboard::{
        ClipboardController,
        Session,
    },
    core::{
        http::{
            SearchPayload,
            TermSearch,
        },
        ChooserError,
        ChooserOptions,
        FieldScope,
        KeyDisposition,
        TermRecord,
    },
    form::{
        FieldHandle,
        Form,
        Input,
    },
};

/// Autocomplete for every ontology field of a form.
///
/// Fields are taken from the form's `rel` attributes and from `ChooserOptions::fields`;
/// configured fields missing from the form are appended in their own container.
pub struct OntologyChooser {
    options: ChooserOptions,
    form: Form,
    fields: Vec<FieldController>,
    session: Session,
    collaborators: Collaborators,
    modifier_held: bool,
}

impl OntologyChooser {
    pub fn new(options: ChooserOptions, mut form: Form) -> Self {
        for descriptor in &options.fields {
            let present = form.ontology_fields().iter().any(|(handle, _)| handle.name == descriptor.name);
            if !present {
                let container = form.add_container();
                form.push_input(container, Input::text(&descriptor.name).with_rel(&descriptor.rel));
            }
        }

        let fields = form
            .ontology_fields()
            .into_iter()
            .filter_map(|(handle, rel)| match FieldScope::parse(&rel) {
                Ok(scope) => Some(FieldController::new(handle, scope)),
                Err(e) => {
                    warn!(field = %handle.name, "skipping field: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!(fields = fields.len(), "ontology chooser initialised");

        Self {
            options,
            form,
            fields,
            session: Session::new(),
            collaborators: Collaborators::default(),
            modifier_held: false,
        }
    }

    /// Nothing is selected yet, so the element starts hidden.
    pub fn with_reveal(mut self, reveal: Box<dyn Reveal>) -> Self {
        self.collaborators.reveal = Some(reveal);
        self.collaborators.hide();
        self
    }

    pub fn with_busy_indicator(mut self, indicator: Box<dyn BusyIndicator>) -> Self {
        self.collaborators.indicator = Some(indicator);
        self
    }

    pub fn options(&self) -> &ChooserOptions {
        &self.options
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// For input typed by the user. Companion fields are managed by the chooser.
    pub fn set_text(&mut self, handle: &FieldHandle, text: &str) -> Result<(), ChooserError> {
        if self.form.set_value(handle, text) {
            Ok(())
        } else {
            Err(ChooserError::UnknownField(handle.name.clone()))
        }
    }

    pub fn into_form(self) -> Form {
        self.form
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn fields(&self) -> &[FieldController] {
        &self.fields
    }

    pub fn field(&self, handle: &FieldHandle) -> Option<&FieldController> {
        self.fields.iter().find(|field| field.handle() == handle)
    }

    /// First registered field with this name.
    pub fn handle_for(&self, name: &str) -> Option<FieldHandle> {
        self.fields.iter().find(|field| field.handle().name == name).map(|field| field.handle().clone())
    }

    fn index_of(&self, handle: &FieldHandle) -> Result<usize, ChooserError> {
        self.fields
            .iter()
            .position(|field| field.handle() == handle)
            .ok_or_else(|| ChooserError::UnknownField(handle.name.clone()))
    }

    pub fn begin_search(&mut self, handle: &FieldHandle, text: &str) -> Result<SearchStart, ChooserError> {
        let idx = self.index_of(handle)?;
        Ok(self.fields[idx].begin_search(text, &self.options, &mut self.collaborators))
    }

    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        payload: &SearchPayload,
    ) -> Result<Option<Vec<TermRecord>>, ChooserError> {
        let idx = self.index_of(&ticket.field)?;
        self.fields[idx].complete_search(ticket, payload, &mut self.form, &mut self.collaborators)
    }

    pub fn fail_search(&mut self, ticket: &SearchTicket, error: &ChooserError) -> Result<(), ChooserError> {
        let idx = self.index_of(&ticket.field)?;
        self.fields[idx].fail_search(ticket, error, &mut self.collaborators);
        Ok(())
    }

    /// Runs a whole search cycle against `source`. `None` when no search ran or a newer
    /// search superseded this one.
    pub async fn search<S: TermSearch>(
        &mut self,
        source: &S,
        handle: &FieldHandle,
        text: &str,
    ) -> Result<Option<Vec<TermRecord>>, ChooserError> {
        let ticket = match self.begin_search(handle, text)? {
            SearchStart::Skipped => return Ok(None),
            SearchStart::Cached(records) => return Ok(Some(records)),
            SearchStart::Fetch(ticket) => ticket,
        };

        match source.search(&ticket.query, &ticket.ontology_filter).await {
            Ok(payload) => self.complete_search(&ticket, &payload),
            Err(e) => {
                self.fail_search(&ticket, &e)?;
                Err(e)
            }
        }
    }

    pub fn select(&mut self, handle: &FieldHandle, record: &TermRecord) -> Result<(), ChooserError> {
        let idx = self.index_of(handle)?;
        self.fields[idx].select(record, &mut self.form, &mut self.collaborators)
    }

    pub fn close(&mut self, handle: &FieldHandle) -> Result<(), ChooserError> {
        let idx = self.index_of(handle)?;
        self.fields[idx].close(&mut self.form, &mut self.collaborators)
    }

    pub fn copy(&mut self, handle: &FieldHandle) -> Result<KeyDisposition, ChooserError> {
        self.index_of(handle)?;
        Ok(ClipboardController::new(&mut self.session).copy(&self.form, handle))
    }

    pub fn paste(&mut self, handle: &FieldHandle) -> Result<KeyDisposition, ChooserError> {
        let idx = self.index_of(handle)?;
        ClipboardController::new(&mut self.session).paste(&mut self.form, &mut self.fields[idx])
    }

    pub fn key_down(&mut self, handle: &FieldHandle, key: Key) -> Result<KeyDisposition, ChooserError> {
        if key.is_modifier() {
            self.modifier_held = true;
        }

        match key {
            // a field never submits its form
            Key::Enter => return Ok(KeyDisposition::PreventDefault),
            Key::Backspace => self.collaborators.hide(),
            _ => {}
        }

        match keys::intent(key, self.modifier_held) {
            Some(keys::KeyIntent::Copy) => self.copy(handle),
            Some(keys::KeyIntent::Paste) => self.paste(handle),
            None => Ok(KeyDisposition::Default),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key.is_modifier() {
            self.modifier_held = false;
        }
    }
}
