use serde::{
    Deserialize,
    Serialize,
};

use super::models::FieldDescriptor;

pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_SPINNER: &str = "http://www.ajaxload.info/images/exemples/2.gif";
pub const DEFAULT_SERVICE_URL: &str = "http://bioportal.bioontology.org/search/json_search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChooserOptions {
    pub min_length: usize,         // characters before a search fires
    pub spinner: Option<String>,   // busy indicator resource, None disables it
    pub service_url: String,
    pub timeout_secs: u64,
    pub fields: Vec<FieldDescriptor>,
}

impl Default for ChooserOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            spinner: Some(DEFAULT_SPINNER.to_string()),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_use_defaults() {
        let options: ChooserOptions =
            serde_json::from_str(r#"{ "minLength": 2, "spinner": null }"#).unwrap();
        assert_eq!(options.min_length, 2);
        assert_eq!(options.spinner, None);
        assert_eq!(options.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(options.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(options.fields.is_empty());
    }

    #[test]
    fn test_fields_from_json() {
        let options: ChooserOptions = serde_json::from_str(
            r#"{ "fields": [{ "name": "species", "rel": "ontology-1132-name" }] }"#,
        )
        .unwrap();
        assert_eq!(options.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(options.spinner.as_deref(), Some(DEFAULT_SPINNER));
        assert_eq!(options.fields.len(), 1);
        assert_eq!(options.fields[0].rel, "ontology-1132-name");
    }
}
