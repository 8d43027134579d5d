//! Decision Tree Classifier
//!
//! Ties configuration, fitting, prediction, rendering and persistence
//! together around a single fitted tree.
use crate::config::TreeConfig;
use crate::errors::Id3Error;
use crate::export::{to_expression, to_predicate, write_predicate};
use crate::metric::accuracy;
use crate::record::{Dataset, Record};
use crate::splitter::InformationGainSplitter;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ID3 decision tree classifier over categorical records.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct DecisionTreeClassifier {
    pub config: TreeConfig,
    pub tree: Option<Tree>,
}

impl DecisionTreeClassifier {
    pub fn new(config: TreeConfig) -> Result<Self, Id3Error> {
        config.validate()?;
        Ok(DecisionTreeClassifier { config, tree: None })
    }

    /// Load a dataset from CSV, reading labels with the configured positive label.
    pub fn read_csv<P: AsRef<Path>>(&self, path: P) -> Result<Dataset, Id3Error> {
        Dataset::from_csv_path(path, &self.config.positive_label)
    }

    /// Fit the tree on every record of `dataset`.
    ///
    /// An empty dataset leaves the classifier unfitted and returns
    /// `Id3Error::EmptyDataset`.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<(), Id3Error> {
        let splitter = InformationGainSplitter::new(self.config.parallel);
        match Tree::fit_dataset(dataset, &splitter)? {
            Some(tree) => {
                self.tree = Some(tree);
                Ok(())
            }
            None => {
                self.tree = None;
                Err(Id3Error::EmptyDataset)
            }
        }
    }

    /// Get the fitted tree.
    pub fn tree(&self) -> Result<&Tree, Id3Error> {
        self.tree.as_ref().ok_or(Id3Error::NotFitted)
    }

    pub fn predict_record(&self, record: &Record) -> Result<bool, Id3Error> {
        self.tree()?.classify(record)
    }

    pub fn predict(&self, records: &[Record]) -> Result<Vec<bool>, Id3Error> {
        self.tree()?.predict(records, self.config.parallel)
    }

    /// Accuracy of the fitted tree on `dataset`.
    pub fn score(&self, dataset: &Dataset) -> Result<f64, Id3Error> {
        let predictions = self.predict(dataset.records())?;
        Ok(accuracy(&predictions, &dataset.labels()))
    }

    /// Render the fitted tree as a boolean expression.
    pub fn to_expression(&self) -> Result<String, Id3Error> {
        to_expression(&self.tree()?.root)
    }

    /// Render the fitted tree as predicate source.
    pub fn to_predicate(&self) -> Result<String, Id3Error> {
        Ok(to_predicate(&self.tree()?.root, &self.config.predicate))
    }

    /// Write the predicate source to `path`.
    pub fn write_predicate<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        write_predicate(&self.tree()?.root, &self.config.predicate, path)
    }

    /// Dump the classifier as a json object.
    pub fn json_dump(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Load a classifier from a json string.
    ///
    /// The configuration and the stored tree are checked the same way as
    /// when the classifier is built and fitted.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let mut model = serde_json::from_str::<DecisionTreeClassifier>(json_str)
            .map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        model.config.validate()?;
        model.tree = model.tree.map(Tree::from_stored).transpose()?;
        Ok(model)
    }

    /// Save the classifier as json.
    ///
    /// * `path` - Path to save the classifier to.
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        let model = self.json_dump()?;
        fs::write(path, model).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Load a classifier from a json file.
    ///
    /// * `path` - Path to load the classifier from.
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}
