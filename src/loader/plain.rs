use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::loader::{KeyLines, KeySource};

/// Loads keys from a plain text file, one key per line.
pub struct VocabFileLoader {
    filepath: PathBuf,
}

impl VocabFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl KeySource for VocabFileLoader {
    type Iter = KeyLines<BufReader<File>>;

    fn iter(&self) -> Result<Self::Iter> {
        let reader = BufReader::new(File::open(&self.filepath)?);
        Ok(KeyLines::new(reader))
    }
}

/// Loads keys from in-memory text, one key per line.
pub struct VocabTextLoader<'a> {
    text: &'a [u8],
}

impl<'a> VocabTextLoader<'a> {
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl<'a> KeySource for VocabTextLoader<'a> {
    type Iter = KeyLines<BufReader<&'a [u8]>>;

    fn iter(&self) -> Result<Self::Iter> {
        let reader = BufReader::new(self.text);
        Ok(KeyLines::new(reader))
    }
}
