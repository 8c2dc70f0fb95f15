//! Serialization and loading for the engine tables.

pub mod format;
pub mod load;

pub use format::{AlphabetRecord, AlphabetRecords, ConfusablesMap};
pub use load::TableLoader;
