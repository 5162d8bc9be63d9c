//! Parser for the term search service's response text.
//!
//! Despite the `json_search` name the service returns plain text where `~!~` ends a record
//! and `|` separates columns:
//!
//! ```text
//! Mus musculus|birnlex_161|preferred name|29684|http://.../birnlex#birnlex_161|Mus musculus|Mus musculus|BIRNLex~!~
//! ```
//!
//! Single ontology searches leave out the ncbo id column, so the caller supplies the
//! ontology the query was issued against as a fallback.

use crate::core::TermRecord;

pub const RECORD_SEPARATOR: &str = "~!~";
pub const COLUMN_SEPARATOR: char = '|';

const NCBO_ID_COLUMN: usize = 8;

pub fn parse_response(raw: &str, fallback_ontology_id: &str) -> Vec<TermRecord> {
    raw.split(RECORD_SEPARATOR)
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| parse_record(row, fallback_ontology_id))
        .collect()
}

fn parse_record(row: &str, fallback_ontology_id: &str) -> TermRecord {
    let cols: Vec<&str> = row.split(COLUMN_SEPARATOR).collect();
    let col = |idx: usize| cols.get(idx).copied().unwrap_or("").to_string();

    let source_label = cols.len().checked_sub(2).map(col).unwrap_or_default();
    let ncbo_id = if cols.len() > NCBO_ID_COLUMN {
        col(NCBO_ID_COLUMN)
    } else {
        fallback_ontology_id.to_string()
    };

    let display_value = col(0);
    TermRecord {
        annotated_label: format!("{} ({}) from: {}", display_value, col(2), source_label),
        preferred_name: display_value.clone(),
        display_value,
        concept_id: col(1),
        ontology_id: col(3),
        full_id: col(4),
        source_ontology_id: ncbo_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRNLEX: &str = "Mus musculus|birnlex_161|preferred name|29684|http://example.org/birnlex_161|Mus musculus|Mus musculus|BIRNLex~!~";

    #[test]
    fn test_single_ontology_record_uses_fallback() {
        let records = parse_response(BIRNLEX, "1494");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.display_value, "Mus musculus");
        assert_eq!(record.preferred_name, "Mus musculus");
        assert_eq!(record.concept_id, "birnlex_161");
        assert_eq!(record.ontology_id, "29684");
        assert_eq!(record.full_id, "http://example.org/birnlex_161");
        assert_eq!(record.source_ontology_id, "1494");
        assert_eq!(record.annotated_label, "Mus musculus (preferred name) from: Mus musculus");
    }

    #[test]
    fn test_multi_ontology_record_carries_ncbo_id() {
        let raw = "Mus musculus|birnlex_161|preferred name|29684|http://example.org/birnlex_161|Mus musculus|Mus musculus|BIRNLex|1089|NIF~!~\
                   House mouse|NCBITaxon_10090|synonym|38802|http://purl.org/obo/owl/NCBITaxon#NCBITaxon_10090|Mus musculus|Mus musculus|NCBI organismal classification|1132|NCBITaxon~!~";
        let records = parse_response(raw, "");
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].concept_id, "birnlex_161");
        assert_eq!(records[0].source_ontology_id, "1089");
        assert_eq!(records[0].annotated_label, "Mus musculus (preferred name) from: 1089");

        assert_eq!(records[1].display_value, "House mouse");
        assert_eq!(records[1].ontology_id, "38802");
        assert_eq!(records[1].source_ontology_id, "1132");
    }

    #[test]
    fn test_columns_map_by_position() {
        let raw = "c0|c1|c2|c3|c4|c5|c6|c7|c8";
        let record = &parse_response(raw, "fallback")[0];
        assert_eq!(record.display_value, "c0");
        assert_eq!(record.concept_id, "c1");
        assert_eq!(record.ontology_id, "c3");
        assert_eq!(record.full_id, "c4");
        assert_eq!(record.source_ontology_id, "c8");
        assert_eq!(record.annotated_label, "c0 (c2) from: c7");

        for len in 5..=8 {
            let raw: Vec<String> = (0..len).map(|i| format!("c{i}")).collect();
            let record = &parse_response(&raw.join("|"), "fallback")[0];
            assert_eq!(record.source_ontology_id, "fallback", "{len} columns");
        }
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        assert!(parse_response("", "1494").is_empty());
        assert!(parse_response("   ~!~ \n ~!~", "1494").is_empty());

        let records = parse_response(&format!("~!~{BIRNLEX}  ~!~  "), "1494");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_short_records_fill_with_empty_strings() {
        let records = parse_response("Mus musculus|birnlex_161", "1494");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.concept_id, "birnlex_161");
        assert_eq!(record.ontology_id, "");
        assert_eq!(record.full_id, "");
        assert_eq!(record.source_ontology_id, "1494");
        assert_eq!(record.annotated_label, "Mus musculus () from: Mus musculus");

        let record = &parse_response("lonely", "")[0];
        assert_eq!(record.display_value, "lonely");
        assert_eq!(record.annotated_label, "lonely () from: ");
    }
}
