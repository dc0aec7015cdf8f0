use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// One data record: an ordered mapping from axis name to numeric value.
///
/// Key insertion order is significant. The first record of a dataset defines
/// the axis order used by every layer of the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record(IndexMap<String, f64>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds one axis value, preserving insertion order.
    #[must_use]
    pub fn with_value(mut self, axis: impl Into<String>, value: f64) -> Self {
        self.0.insert(axis.into(), value);
        self
    }

    #[must_use]
    pub fn get(&self, axis: &str) -> Option<f64> {
        self.0.get(axis).copied()
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered sequence of records rendered as one polygon each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    records: Vec<Record>,
}

impl DataSet {
    /// Builds a dataset from records.
    ///
    /// The first record must be non-empty since its keys define the axis set.
    /// Later records are not required to share every key; a missing key reads
    /// as `0.0` through [`KeyAccessor`].
    pub fn new(records: Vec<Record>) -> RadarResult<Self> {
        let first = records
            .first()
            .ok_or_else(|| RadarError::InvalidData("dataset must contain at least one record".to_owned()))?;
        if first.is_empty() {
            return Err(RadarError::InvalidData(
                "first record must define at least one axis".to_owned(),
            ));
        }
        Ok(Self { records })
    }

    /// Axis names in first-record insertion order.
    #[must_use]
    pub fn axis_names(&self) -> Vec<String> {
        self.records[0].axis_names().map(str::to_owned).collect()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Extraction of one axis value from one record.
///
/// The default [`KeyAccessor`] looks values up by key; hosts can substitute
/// their own accessor to read derived or re-scaled values.
pub trait ValueAccessor {
    fn value(&self, record: &Record, axis: &str) -> f64;
}

/// Identity key lookup. A record missing the axis key reads as `0.0`;
/// this is deliberate chart policy, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyAccessor;

impl ValueAccessor for KeyAccessor {
    fn value(&self, record: &Record, axis: &str) -> f64 {
        record.get(axis).unwrap_or(0.0)
    }
}
