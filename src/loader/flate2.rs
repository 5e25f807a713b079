use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Result;
use flate2::read::GzDecoder;

use crate::loader::{KeyLines, KeySource};

/// Loads keys from a gzip-compressed text file, one key per line.
pub struct VocabGzFileLoader {
    filepath: PathBuf,
}

impl VocabGzFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl KeySource for VocabGzFileLoader {
    type Iter = KeyLines<BufReader<GzDecoder<File>>>;

    fn iter(&self) -> Result<Self::Iter> {
        let reader = GzDecoder::new(File::open(&self.filepath)?);
        Ok(KeyLines::new(BufReader::new(reader)))
    }
}
