//! This module provides the histogram bucket encoder.
//! It includes a `StatsBucket` struct holding the five per-bucket summaries,
//! and `make_stats_bucket`, which encodes them into a flat `StatsBucket` document.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::document::{double_value, fields, Document};

/// Counts describing the observations within one boundary range of a histogram.
///
/// Monotonicity of the cumulative fields is not checked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatsBucket {
    pub boundary_count: f64,
    pub range_count: f64,
    pub range_distincts: f64,
    pub cumulative_count: f64,
    pub cumulative_distincts: f64,
}

impl StatsBucket {
    pub fn new(
        boundary_count: f64,
        range_count: f64,
        range_distincts: f64,
        cumulative_count: f64,
        cumulative_distincts: f64,
    ) -> Self {
        Self {
            boundary_count,
            range_count,
            range_distincts,
            cumulative_count,
            cumulative_distincts,
        }
    }

    /// Encodes the bucket; fields are emitted in schema order and copied unchanged.
    pub fn to_document(&self) -> Document {
        let mut bucket = Document::new();
        bucket.insert(
            fields::BOUNDARY_COUNT.to_owned(),
            double_value(self.boundary_count),
        );
        bucket.insert(fields::RANGE_COUNT.to_owned(), double_value(self.range_count));
        bucket.insert(
            fields::RANGE_DISTINCTS.to_owned(),
            double_value(self.range_distincts),
        );
        bucket.insert(
            fields::CUMULATIVE_COUNT.to_owned(),
            double_value(self.cumulative_count),
        );
        bucket.insert(
            fields::CUMULATIVE_DISTINCTS.to_owned(),
            double_value(self.cumulative_distincts),
        );
        bucket
    }
}

impl From<(f64, f64, f64, f64, f64)> for StatsBucket {
    fn from(
        (boundary_count, range_count, range_distincts, cumulative_count, cumulative_distincts): (
            f64,
            f64,
            f64,
            f64,
            f64,
        ),
    ) -> Self {
        Self::new(
            boundary_count,
            range_count,
            range_distincts,
            cumulative_count,
            cumulative_distincts,
        )
    }
}

impl From<StatsBucket> for Document {
    fn from(bucket: StatsBucket) -> Self {
        bucket.to_document()
    }
}

/// Returns a document matching the `StatsBucket` schema.
pub fn make_stats_bucket(
    boundary_count: f64,
    range_count: f64,
    range_distincts: f64,
    cumulative_count: f64,
    cumulative_distincts: f64,
) -> Document {
    let bucket = StatsBucket::new(
        boundary_count,
        range_count,
        range_distincts,
        cumulative_count,
        cumulative_distincts,
    );
    trace!("encoding bucket {bucket:?}");
    bucket.to_document()
}
