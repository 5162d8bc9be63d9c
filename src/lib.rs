pub mod cache;
pub mod chooser;
pub mod clipboard;
pub mod core;
pub mod form;
pub mod linkage;
pub mod parser;
pub mod persistence;

pub use chooser::OntologyChooser;
pub use crate::core::{
    ChooserError,
    ChooserOptions,
    TermRecord,
};
