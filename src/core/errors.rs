use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChooserError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Service { status: u16, url: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid ontology binding '{0}', expected ontology-<id|all>-<property>")]
    InvalidBinding(String),

    #[error("ChooserError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ChooserError {
    fn from(error: std::io::Error) -> Self {
        ChooserError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ChooserError {
    fn from(error: reqwest::Error) -> Self {
        ChooserError::Reqwest(Box::new(error))
    }
}
