use std::collections::HashMap;

use anyhow::Result;

use crate::error::TableError;
use crate::loader::KeySource;
use crate::table::VocabularyTable;

/// Hash-map implementation of [`VocabularyTable`].
///
/// Codes are arbitrary `i64` values supplied by the caller; they may repeat
/// and need not be contiguous or start at zero.
#[derive(Default, Debug, Clone)]
pub struct MappingTable {
    map: HashMap<String, i64>,
}

impl MappingTable {
    /// Builds a table from an explicit `(key, code)` mapping.
    ///
    /// Fails if the mapping is empty, contains an empty key, or repeats a key.
    pub fn build<I, K>(mapping: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, code) in mapping {
            let key = key.into();
            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }
            if map.insert(key.clone(), code).is_some() {
                return Err(TableError::DuplicatedKey(key));
            }
        }
        if map.is_empty() {
            return Err(TableError::EmptyMapping);
        }
        Ok(Self { map })
    }

    /// Builds a table from an ordered key list, coding each key with its
    /// position in the list.
    pub fn from_keys<I, K>(keys: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::build(
            keys.into_iter()
                .enumerate()
                .map(|(id, key)| (key.into(), id as i64)),
        )
    }

    /// Builds a table from the keys yielded by a [`KeySource`], coding each
    /// key with its position in the source.
    pub fn from_source<S: KeySource>(source: &S) -> Result<Self> {
        let keys = source.iter()?.collect::<Result<Vec<_>>>()?;
        Ok(Self::from_keys(keys)?)
    }

    /// Parses a table from a JSON object of the form `{"key": code, ...}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("expected a JSON object of key to code"))?;
        let mapping = object
            .iter()
            .map(|(key, code)| {
                code.as_i64()
                    .map(|code| (key.clone(), code))
                    .ok_or_else(|| anyhow::anyhow!("code for key {:?} is not an integer", key))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(mapping)?)
    }
}

impl VocabularyTable for MappingTable {
    fn get(&self, key: &str) -> Option<i64> {
        self.map.get(key).copied()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
