use anyhow::Result;
use clap::Parser;
use std::{fs, path::PathBuf};

use vocabtable::{
    loader::VocabFileFormat, Lookup, MappingTable, VocabFileLoader, VocabGzFileLoader,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the vocabulary file
    #[arg(short, long)]
    vocab: PathBuf,

    /// Vocabulary file format: "plain" or "gzip" hold one key per line and
    /// code keys by line number; "json" holds an explicit {key: code} object
    #[arg(short, long, default_value = "plain")]
    format: VocabFileFormat,

    /// Code to print for out-of-vocabulary keys
    #[arg(short, long, default_value_t = vocabtable::DEFAULT_VALUE)]
    default_value: i64,

    /// Keys to look up
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = match args.format {
        VocabFileFormat::Plain => MappingTable::from_source(&VocabFileLoader::new(&args.vocab))?,
        VocabFileFormat::Gzip => MappingTable::from_source(&VocabGzFileLoader::new(&args.vocab))?,
        VocabFileFormat::Json => MappingTable::from_json(&fs::read_to_string(&args.vocab)?)?,
    };

    let lookup = Lookup::with_default(table, args.default_value);
    for code in lookup.lookup(&args.keys) {
        println!("{code}");
    }
    Ok(())
}
