//! Splitter
//!
//! Scores candidate attributes by information gain and picks the one a
//! node should branch on.
use crate::entropy::{entropy, information_gain, positive_fraction, Partition};
use crate::errors::Id3Error;
use crate::record::Record;
use hashbrown::HashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The attribute chosen for a split, with its information gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitInfo {
    pub attribute: String,
    pub gain: f64,
}

/// Splitter trait that decides which attribute a node branches on.
pub trait Splitter {
    /// Select the attribute to split `records` on, or `None` when there
    /// is nothing to choose from.
    fn best_split(&self, records: &[&Record], candidates: &[String]) -> Result<Option<SplitInfo>, Id3Error>;
}

/// ID3 splitter maximising information gain.
///
/// Candidates are scored in the order given and the first attribute with
/// the highest gain wins, so equal gains resolve to declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformationGainSplitter {
    pub parallel: bool,
}

impl InformationGainSplitter {
    pub fn new(parallel: bool) -> Self {
        InformationGainSplitter { parallel }
    }
}

impl Splitter for InformationGainSplitter {
    fn best_split(&self, records: &[&Record], candidates: &[String]) -> Result<Option<SplitInfo>, Id3Error> {
        choose_best_attribute(records, candidates, self.parallel)
    }
}

/// Group records by their value of `attribute`.
///
/// Groups come back in the order each value is first seen, and only
/// observed values produce a group, so no group is ever empty.
pub fn partition_records<'a>(
    records: &[&'a Record],
    attribute: &str,
) -> Result<Vec<(&'a str, Vec<&'a Record>)>, Id3Error> {
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a Record>)> = Vec::new();
    for &record in records {
        let value = record.get_attribute(attribute)?;
        match position.get(value) {
            Some(&i) => groups[i].1.push(record),
            None => {
                position.insert(value, groups.len());
                groups.push((value, vec![record]));
            }
        }
    }
    Ok(groups)
}

/// Information gain obtained by splitting `records` on `attribute`.
pub fn attribute_gain(records: &[&Record], attribute: &str) -> Result<f64, Id3Error> {
    let groups = partition_records(records, attribute)?;
    Ok(groups_gain(records, &groups))
}

fn groups_gain(records: &[&Record], groups: &[(&str, Vec<&Record>)]) -> f64 {
    let parent_entropy = entropy(positive_fraction(records.iter().copied()));
    let partitions: Vec<Partition> = groups
        .iter()
        .map(|(_, group)| Partition::new(group.len(), positive_fraction(group.iter().copied())))
        .collect();
    information_gain(parent_entropy, &partitions)
}

/// Gain of `attribute`, or `None` when it takes a single value over
/// `records` and so cannot separate them.
fn candidate_gain(records: &[&Record], attribute: &str) -> Result<Option<f64>, Id3Error> {
    let groups = partition_records(records, attribute)?;
    if groups.len() < 2 {
        Ok(None)
    } else {
        Ok(Some(groups_gain(records, &groups)))
    }
}

/// Score every candidate and return the first one with the maximum gain.
///
/// Attributes taking a single value over `records` are not candidates.
/// Returns `None` when no attribute is left.
///
/// * `records` - Non-empty record subset of the node being split.
/// * `candidates` - Attribute names in schema order.
/// * `parallel` - Score candidates on the rayon pool.
pub fn choose_best_attribute(
    records: &[&Record],
    candidates: &[String],
    parallel: bool,
) -> Result<Option<SplitInfo>, Id3Error> {
    if records.is_empty() {
        return Ok(None);
    }
    let gains: Vec<Option<f64>> = if parallel {
        candidates
            .par_iter()
            .map(|a| candidate_gain(records, a))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        candidates
            .iter()
            .map(|a| candidate_gain(records, a))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut best: Option<SplitInfo> = None;
    for (attribute, gain) in candidates.iter().zip(gains) {
        let Some(gain) = gain else { continue };
        let better = match &best {
            Some(b) => gain > b.gain,
            None => true,
        };
        if better {
            best = Some(SplitInfo {
                attribute: attribute.clone(),
                gain,
            });
        }
    }
    Ok(best)
}
