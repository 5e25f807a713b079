use anyhow::Result;
use yada::{builder::DoubleArrayBuilder, DoubleArray};

use crate::error::TableError;
use crate::loader::KeySource;
use crate::table::VocabularyTable;

/// Compact double-array-trie implementation of [`VocabularyTable`].
///
/// Codes are positional: the code of a key is its index in the key list the
/// table was built from. Trades the flexibility of explicit codes for a
/// flat byte-array representation.
#[derive(Default, Debug, Clone)]
pub struct DoubleArrayTable {
    data: Vec<u8>,
    len: usize,
}

impl DoubleArrayTable {
    /// Builds a table from an ordered key list, coding each key with its
    /// position in the list.
    pub fn from_keys<I, K>(keys: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut keyset = vec![];
        for (id, key) in keys.into_iter().enumerate() {
            let key = key.into();
            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }
            keyset.push((key.into_bytes(), id as u32));
        }

        if keyset.is_empty() {
            return Err(TableError::EmptyMapping);
        }
        // The double-array stores codes in a 31-bit value field.
        if (keyset.len() >> 31) != 0 {
            return Err(TableError::TooManyKeys(keyset.len()));
        }
        keyset.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

        for i in 1..keyset.len() {
            if keyset[i - 1].0 == keyset[i].0 {
                let key = String::from_utf8_lossy(&keyset[i].0).into_owned();
                return Err(TableError::DuplicatedKey(key));
            }
        }

        let data = DoubleArrayBuilder::build(&keyset[..]).ok_or(TableError::DoubleArray)?;
        Ok(Self {
            data,
            len: keyset.len(),
        })
    }

    /// Builds a table from the keys yielded by a [`KeySource`].
    pub fn from_source<S: KeySource>(source: &S) -> Result<Self> {
        let keys = source.iter()?.collect::<Result<Vec<_>>>()?;
        Ok(Self::from_keys(keys)?)
    }
}

impl VocabularyTable for DoubleArrayTable {
    #[inline(always)]
    fn get(&self, key: &str) -> Option<i64> {
        let da = DoubleArray::new(&self.data[..]);
        da.exact_match_search(key.as_bytes()).map(i64::from)
    }

    fn len(&self) -> usize {
        self.len
    }
}
