use thiserror::Error;

/// Errors raised while constructing a vocabulary table.
///
/// Lookups themselves never fail: keys absent from a table resolve to the
/// configured default value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("mapping must contain at least one key")]
    EmptyMapping,

    #[error("empty string is not a valid key")]
    EmptyKey,

    #[error("duplicated key: {0:?}")]
    DuplicatedKey(String),

    /// Key count exceeds what the double-array value field can address.
    #[error("the number of keys must be represented in 31 bits, got {0}")]
    TooManyKeys(usize),

    #[error("failed to build the double-array trie")]
    DoubleArray,
}
