pub mod errors;
pub mod http;
pub mod models;
pub mod options;

pub use errors::ChooserError;
pub use models::{
    ClipboardSlot, Companion, CompanionValues, FieldDescriptor, FieldScope, FieldState,
    KeyDisposition, OntologyFilter, RejectReason, TermRecord,
};
pub use options::ChooserOptions;
