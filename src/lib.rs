pub mod error;
pub mod loader;
pub mod lookup;
pub mod table;

pub use error::TableError;
pub use loader::{KeySource, VocabFileLoader, VocabGzFileLoader, VocabTextLoader};
pub use lookup::{Lookup, DEFAULT_VALUE};
pub use table::{DoubleArrayTable, MappingTable, VocabularyTable};
