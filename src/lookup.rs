use crate::table::VocabularyTable;

/// Code returned for out-of-vocabulary keys unless configured otherwise.
pub const DEFAULT_VALUE: i64 = -1;

/// Batched lookup over an immutable [`VocabularyTable`].
///
/// Maps an ordered sequence of keys to a same-length ordered sequence of
/// codes, substituting a fixed default for keys absent from the table.
/// A pure function of the table and the keys: no state is carried between
/// calls, and an empty batch yields an empty result.
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    table: T,
    default_value: i64,
}

impl<T: VocabularyTable> Lookup<T> {
    /// Creates a lookup layer returning [`DEFAULT_VALUE`] for unknown keys.
    pub fn new(table: T) -> Self {
        Self::with_default(table, DEFAULT_VALUE)
    }

    /// Creates a lookup layer with an explicit out-of-vocabulary code.
    pub fn with_default(table: T, default_value: i64) -> Self {
        Self {
            table,
            default_value,
        }
    }

    /// Looks up a batch of keys.
    ///
    /// Element `i` of the result is the code of `keys[i]`, or the default
    /// value when `keys[i]` is not in the table.
    pub fn lookup<S: AsRef<str>>(&self, keys: &[S]) -> Vec<i64> {
        keys.iter()
            .map(|key| self.table.get(key.as_ref()).unwrap_or(self.default_value))
            .collect()
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn default_value(&self) -> i64 {
        self.default_value
    }
}
