use tracing::{
    debug,
    warn,
};

use super::collaborators::Collaborators;
use crate::{
    cache::SuggestionCache,
    core::{
        http::SearchPayload,
        ChooserError,
        ChooserOptions,
        CompanionValues,
        FieldScope,
        FieldState,
        RejectReason,
        TermRecord,
    },
    form::{
        FieldHandle,
        Form,
        ERROR_CLASS,
    },
    linkage,
    parser::parse_response,
};

/// A fetch the host has to perform before calling `complete_search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub field: FieldHandle,
    pub generation: u64,
    pub query: String,
    pub ontology_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStart {
    /// Too short, or swallowed after a paste.
    Skipped,
    Cached(Vec<TermRecord>),
    Fetch(SearchTicket),
}

/// Per-field autocomplete state: selection state machine, suggestion cache and the
/// request generation used to drop stale responses.
#[derive(Debug)]
pub struct FieldController {
    handle: FieldHandle,
    scope: FieldScope,
    cache: SuggestionCache,
    state: FieldState,
    suppress_next_search: bool,
    generation: u64,
}

impl FieldController {
    pub fn new(handle: FieldHandle, scope: FieldScope) -> Self {
        Self {
            handle,
            scope,
            cache: SuggestionCache::new(),
            state: FieldState::Idle,
            suppress_next_search: false,
            generation: 0,
        }
    }

    pub fn handle(&self) -> &FieldHandle {
        &self.handle
    }

    pub fn scope(&self) -> &FieldScope {
        &self.scope
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn is_search_suppressed(&self) -> bool {
        self.suppress_next_search
    }

    /// The next `begin_search` call is swallowed, whatever its input.
    pub fn suppress_next_search(&mut self) {
        self.suppress_next_search = true;
    }

    pub fn begin_search(
        &mut self,
        text: &str,
        options: &ChooserOptions,
        collaborators: &mut Collaborators,
    ) -> SearchStart {
        if std::mem::take(&mut self.suppress_next_search) {
            debug!(field = %self.handle.name, "search skipped after paste");
            return SearchStart::Skipped;
        }

        if text.chars().count() < options.min_length {
            return SearchStart::Skipped;
        }

        self.state = FieldState::Searching;
        self.generation += 1;
        collaborators.busy(&self.handle, options.spinner.as_deref());

        let query = text.trim();
        if let Some(records) = self.cache.get(query) {
            debug!(field = %self.handle.name, query, hits = records.len(), "cache hit");
            collaborators.idle(&self.handle);
            return SearchStart::Cached(records.to_vec());
        }

        debug!(field = %self.handle.name, query, generation = self.generation, "cache miss");
        SearchStart::Fetch(SearchTicket {
            field: self.handle.clone(),
            generation: self.generation,
            query: query.to_string(),
            ontology_filter: self.scope.ontology_filter.as_str().to_string(),
        })
    }

    pub fn is_latest(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Parses and caches the payload. Returns `None` when a newer search has been issued
    /// since the ticket, in which case nothing on the field changes.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        payload: &SearchPayload,
        form: &mut Form,
        collaborators: &mut Collaborators,
    ) -> Result<Option<Vec<TermRecord>>, ChooserError> {
        let records =
            parse_response(payload.data.as_deref().unwrap_or_default(), &ticket.ontology_filter);
        self.cache.put(ticket.query.as_str(), records.clone());

        if !self.is_latest(ticket) {
            debug!(
                field = %self.handle.name,
                query = %ticket.query,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale response"
            );
            return Ok(None);
        }

        collaborators.idle(&self.handle);

        if !payload.has_data() {
            debug!(field = %self.handle.name, query = %ticket.query, "no results");
            collaborators.hide();
            linkage::clear_all(form, &self.handle)?;
        }

        Ok(Some(records))
    }

    pub fn fail_search(
        &mut self,
        ticket: &SearchTicket,
        error: &ChooserError,
        collaborators: &mut Collaborators,
    ) {
        warn!(field = %self.handle.name, query = %ticket.query, "term search failed: {error}");
        if self.is_latest(ticket) {
            collaborators.idle(&self.handle);
        }
    }

    pub fn select(
        &mut self,
        record: &TermRecord,
        form: &mut Form,
        collaborators: &mut Collaborators,
    ) -> Result<(), ChooserError> {
        linkage::write_all(form, &self.handle, &CompanionValues::from(record))?;
        form.remove_class(&self.handle, ERROR_CLASS);
        collaborators.show();

        self.state = FieldState::Selected;
        debug!(field = %self.handle.name, concept_id = %record.concept_id, "term selected");
        Ok(())
    }

    /// The suggestion list closed. Without a pick the field is emptied and flagged.
    pub fn close(&mut self, form: &mut Form, collaborators: &mut Collaborators) -> Result<(), ChooserError> {
        if self.state != FieldState::Searching {
            return Ok(());
        }

        if !form.set_value(&self.handle, "") {
            return Err(ChooserError::UnknownField(self.handle.name.clone()));
        }
        linkage::clear_all(form, &self.handle)?;
        form.add_class(&self.handle, ERROR_CLASS);
        collaborators.hide();

        self.state = FieldState::Rejected(RejectReason::UnfilledSelection);
        debug!(field = %self.handle.name, "suggestions closed without a selection");
        Ok(())
    }
}
