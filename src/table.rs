mod double_array;
mod mapping;

pub use crate::table::{double_array::DoubleArrayTable, mapping::MappingTable};

/// Trait for an immutable structure mapping string keys to integer codes.
///
/// Keys are compared by exact byte content; no normalization is applied.
/// Implementations never mutate after construction, so a shared table may
/// be queried from any number of callers without locking.
pub trait VocabularyTable {
    /// Looks up a single key, returning its code if present.
    fn get(&self, key: &str) -> Option<i64>;

    /// Gets the number of keys in the table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
