mod flate2;
mod plain;

use std::io::BufRead;
use std::str::FromStr;

use anyhow::Result;

pub use crate::loader::flate2::VocabGzFileLoader;
pub use crate::loader::plain::{VocabFileLoader, VocabTextLoader};

/// Source of an ordered key list, one key per line.
///
/// The position of a key in the source becomes its code in tables built
/// through [`MappingTable::from_source`](crate::MappingTable::from_source)
/// and [`DoubleArrayTable::from_source`](crate::DoubleArrayTable::from_source).
pub trait KeySource {
    type Iter: Iterator<Item = Result<String>>;

    /// Returns an iterator over fallible keys.
    fn iter(&self) -> Result<Self::Iter>;
}

/// Iterator adapting a buffered reader into one key per line.
pub struct KeyLines<R: BufRead> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> KeyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for KeyLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| Ok(line?))
    }
}

/// Vocabulary file formats supported.
#[derive(Clone, Copy, Debug)]
pub enum VocabFileFormat {
    Plain,
    Gzip,
    Json,
}

impl FromStr for VocabFileFormat {
    type Err = &'static str;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        match fmt {
            "plain" => Ok(Self::Plain),
            "gzip" => Ok(Self::Gzip),
            "json" => Ok(Self::Json),
            _ => Err("Invalid format"),
        }
    }
}
