//! Data
//!
//! CSV ingestion of labeled categorical records.
//!
//! The first column of the header row names the label; every following
//! column is a categorical attribute. A row is positive when its label
//! field equals the configured positive label.
use crate::errors::Id3Error;
use crate::record::{Dataset, Record};
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl Dataset {
    /// Read a dataset from a CSV file.
    ///
    /// * `path` - Path to the CSV file.
    /// * `positive_label` - Label field value read as `true`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, positive_label: &str) -> Result<Self, Id3Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Self::from_csv_reader(BufReader::new(file), positive_label)
    }

    /// Read a dataset from any CSV source.
    pub fn from_csv_reader<R: Read>(reader: R, positive_label: &str) -> Result<Self, Id3Error> {
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Id3Error::UnableToRead(e.to_string()))?
            .clone();
        if headers.len() < 2 {
            return Err(Id3Error::EmptyHeader);
        }
        let schema: Vec<String> = headers.iter().skip(1).map(String::from).collect();

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
            let label = &row[0] == positive_label;
            let values = row.iter().skip(1).map(String::from);
            records.push(Record::from_pairs(label, schema.iter().cloned().zip(values)));
        }

        info!("Loaded {} records with {} attributes.", records.len(), schema.len());
        Dataset::new(schema, records)
    }
}
