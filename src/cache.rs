use std::collections::HashMap;

use crate::core::TermRecord;

/// Parsed suggestions of one field, keyed by the exact query text.
///
/// Entries live as long as the field does. Trimming the query is up to the caller.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, Vec<TermRecord>>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str) -> Option<&[TermRecord]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    pub fn put(&mut self, query: impl Into<String>, records: Vec<TermRecord>) {
        self.entries.insert(query.into(), records);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
