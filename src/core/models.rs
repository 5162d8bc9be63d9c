use std::sync::OnceLock;

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};

use super::ChooserError;

const WILDCARD_ONTOLOGY: &str = "all";

/// A parsed term suggestion as returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub display_value: String,      // e.g. Mus musculus
    pub annotated_label: String,    // Mus musculus (preferred name) from: BIRNLex
    pub preferred_name: String,
    pub concept_id: String,         // e.g. birnlex_161
    pub ontology_id: String,        // ontology version id, e.g. 29684
    pub full_id: String,            // concept URI
    pub source_ontology_id: String, // ncbo id, e.g. 1494
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OntologyFilter {
    Any,
    Specific(String),
}

impl OntologyFilter {
    /// Path segment sent to the search service, empty for the wildcard.
    pub fn as_str(&self) -> &str {
        match self {
            OntologyFilter::Any => "",
            OntologyFilter::Specific(id) => id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, OntologyFilter::Any)
    }
}

/// Which terms a field accepts, parsed from its `ontology-{filter}-{property}` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldScope {
    pub ontology_filter: OntologyFilter,
    pub property_name: String,
}

impl FieldScope {
    pub fn parse(binding: &str) -> Result<Self, ChooserError> {
        static BINDING: OnceLock<Regex> = OnceLock::new();
        let re = BINDING.get_or_init(|| {
            Regex::new(r"^ontology-([^-\s]+)-(\S+)$").expect("binding pattern is valid")
        });

        let captures =
            re.captures(binding.trim()).ok_or_else(|| ChooserError::InvalidBinding(binding.into()))?;

        let ontology_filter = match &captures[1] {
            WILDCARD_ONTOLOGY => OntologyFilter::Any,
            id => OntologyFilter::Specific(id.to_string()),
        };

        Ok(FieldScope { ontology_filter, property_name: captures[2].to_string() })
    }

    /// Textual compatibility: the wildcard takes anything, otherwise the filter and the
    /// ncbo id must contain one another.
    pub fn accepts_ncbo_id(&self, ncbo_id: &str) -> bool {
        match &self.ontology_filter {
            OntologyFilter::Any => true,
            OntologyFilter::Specific(filter) => {
                !ncbo_id.is_empty() && (filter.contains(ncbo_id) || ncbo_id.contains(filter.as_str()))
            }
        }
    }

    pub fn accepts(&self, record: &TermRecord) -> bool {
        self.accepts_ncbo_id(&record.source_ontology_id)
    }
}

/// The hidden values stored next to a primary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Companion {
    ConceptId,
    OntologyId,
    NcboId,
    FullId,
}

impl Companion {
    pub const ALL: [Companion; 4] =
        [Companion::ConceptId, Companion::OntologyId, Companion::NcboId, Companion::FullId];

    pub fn suffix(&self) -> &'static str {
        match self {
            Companion::ConceptId => "concept_id",
            Companion::OntologyId => "ontology_id",
            Companion::NcboId => "ncbo_id",
            Companion::FullId => "full_id",
        }
    }

    pub fn field_name(&self, primary_name: &str) -> String {
        format!("{}-{}", primary_name, self.suffix())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanionValues {
    pub concept_id: String,
    pub ontology_id: String,
    pub ncbo_id: String,
    pub full_id: String,
}

impl CompanionValues {
    pub fn get(&self, companion: Companion) -> &str {
        match companion {
            Companion::ConceptId => &self.concept_id,
            Companion::OntologyId => &self.ontology_id,
            Companion::NcboId => &self.ncbo_id,
            Companion::FullId => &self.full_id,
        }
    }
}

impl From<&TermRecord> for CompanionValues {
    fn from(record: &TermRecord) -> Self {
        CompanionValues {
            concept_id: record.concept_id.clone(),
            ontology_id: record.ontology_id.clone(),
            ncbo_id: record.source_ontology_id.clone(),
            full_id: record.full_id.clone(),
        }
    }
}

/// The last copied term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSlot {
    pub source_value: String,
    pub values: CompanionValues,
}

impl ClipboardSlot {
    /// `ontology_id` is not required, the other four are.
    pub fn is_complete(&self) -> bool {
        !self.source_value.is_empty()
            && !self.values.concept_id.is_empty()
            && !self.values.ncbo_id.is_empty()
            && !self.values.full_id.is_empty()
    }
}

/// A field to register, as found in markup or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub rel: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnfilledSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Idle,
    Searching,
    Selected,
    Rejected(RejectReason),
}

/// Whether the triggering key event keeps its default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Default,
    PreventDefault,
}
