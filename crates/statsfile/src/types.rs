use cestats_core::{
    make_array_histogram, make_stats_path, BoolCount, Document, StatsBucket, TypeCount,
    TypedValue,
};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Buckets and their bounds; `bounds` is mandatory whenever a histogram is written.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistogramDefinition {
    pub buckets: Vec<StatsBucket>,
    pub bounds: Vec<TypedValue>,
}

impl HistogramDefinition {
    fn encoded_buckets(&self) -> Vec<Document> {
        self.buckets.iter().map(StatsBucket::to_document).collect()
    }
}

fn split_histogram(
    histogram: Option<&HistogramDefinition>,
) -> (Option<Vec<Document>>, Option<&[TypedValue]>) {
    match histogram {
        Some(histogram) => (
            Some(histogram.encoded_buckets()),
            Some(histogram.bounds.as_slice()),
        ),
        None => (None, None),
    }
}

/// Array-element statistics; one level only, so no nested `array_histogram`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArrayHistogramDefinition {
    pub documents: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_count: Option<BoolCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_count: Option<TypeCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramDefinition>,
}

impl ArrayHistogramDefinition {
    pub fn encode(&self) -> Result<Document> {
        let (buckets, bounds) = split_histogram(self.histogram.as_ref());
        Ok(make_array_histogram(
            self.documents,
            self.bool_count,
            self.type_count.clone(),
            buckets,
            bounds,
        )?)
    }
}

/// Statistics for a single path.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PathDefinition {
    /// Document identifier, e.g. `a.b`.
    pub path: String,

    pub documents: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_count: Option<BoolCount>,

    /// `[typeName, count]` pairs, kept in file order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_count: Option<TypeCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_histogram: Option<ArrayHistogramDefinition>,
}

impl PathDefinition {
    pub fn encode(&self) -> Result<Document> {
        let (buckets, bounds) = split_histogram(self.histogram.as_ref());
        let array_histogram = self
            .array_histogram
            .as_ref()
            .map(ArrayHistogramDefinition::encode)
            .transpose()?;
        Ok(make_stats_path(
            &self.path,
            self.documents,
            self.bool_count,
            self.type_count.clone(),
            buckets,
            bounds,
            array_histogram,
        )?)
    }
}
