//! Per-path statistics documents.
//!
//! [`make_stats_path`] assembles `{ id, statistics }`. Inside `statistics`,
//! `documents` is always present and each optional component appears only
//! when it was supplied, in the fixed order documents, boolCount, typeCount,
//! scalarHistogram, arrayHistogram. An empty-but-present component is still
//! emitted (`typeCount: []`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    bounds::{convert_bounds, TypedValue},
    document::{double_value, fields, Document},
    error::Error,
    Result,
};

/// Counts of `true` and `false` values observed at a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoolCount {
    pub true_count: f64,
    pub false_count: f64,
}

impl BoolCount {
    pub fn new(true_count: f64, false_count: f64) -> Self {
        Self {
            true_count,
            false_count,
        }
    }

    fn to_document(self) -> Document {
        let mut doc = Document::new();
        doc.insert(fields::TRUE_COUNT.to_owned(), double_value(self.true_count));
        doc.insert(fields::FALSE_COUNT.to_owned(), double_value(self.false_count));
        doc
    }
}

impl From<(f64, f64)> for BoolCount {
    fn from((true_count, false_count): (f64, f64)) -> Self {
        Self::new(true_count, false_count)
    }
}

/// `(typeName, count)` pairs. Order is kept as given; duplicates are allowed.
pub type TypeCount = Vec<(String, f64)>;

fn encode_type_count(type_count: TypeCount) -> Value {
    Value::Array(
        type_count
            .into_iter()
            .map(|(type_name, count)| {
                let mut entry = Document::new();
                entry.insert(fields::TYPE_NAME.to_owned(), Value::String(type_name));
                entry.insert(fields::COUNT.to_owned(), double_value(count));
                Value::Object(entry)
            })
            .collect(),
    )
}

fn bound_kinds(bounds: &[TypedValue]) -> String {
    bounds
        .iter()
        .map(TypedValue::type_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn encode_scalar_histogram(
    context: &str,
    buckets: Vec<Document>,
    bounds: &[TypedValue],
) -> Document {
    // one bound per bucket is expected but not enforced
    if buckets.len() != bounds.len() {
        warn!(
            "{context}: scalar histogram has {} buckets but {} bounds [{}]",
            buckets.len(),
            bounds.len(),
            bound_kinds(bounds)
        );
    }
    let mut histogram = Document::new();
    histogram.insert(
        fields::BUCKETS.to_owned(),
        Value::Array(buckets.into_iter().map(Value::Object).collect()),
    );
    histogram.insert(fields::BOUNDS.to_owned(), convert_bounds(bounds));
    histogram
}

/// Builds the `statistics` body shared by paths and array histograms.
/// `on_missing_bounds` produces the error when buckets arrive without bounds.
fn encode_statistics(
    context: &str,
    documents: f64,
    bool_count: Option<BoolCount>,
    type_count: Option<TypeCount>,
    histogram: Option<Vec<Document>>,
    bounds: Option<&[TypedValue]>,
    on_missing_bounds: impl FnOnce() -> Error,
) -> Result<Document> {
    let mut statistics = Document::new();
    statistics.insert(fields::DOCUMENTS.to_owned(), double_value(documents));

    if let Some(bool_count) = bool_count {
        statistics.insert(
            fields::BOOL_COUNT.to_owned(),
            Value::Object(bool_count.to_document()),
        );
    }

    if let Some(type_count) = type_count {
        statistics.insert(fields::TYPE_COUNT.to_owned(), encode_type_count(type_count));
    }

    if let Some(buckets) = histogram {
        let bounds = bounds.ok_or_else(on_missing_bounds)?;
        statistics.insert(
            fields::SCALAR_HISTOGRAM.to_owned(),
            Value::Object(encode_scalar_histogram(context, buckets, bounds)),
        );
    }

    Ok(statistics)
}

/// Returns a document matching the `StatsPath` schema.
///
/// `histogram` holds buckets already encoded with
/// [`make_stats_bucket`](crate::make_stats_bucket). `bounds` is required
/// whenever `histogram` is given and ignored otherwise; a missing `bounds`
/// yields [`Error::BoundsMissing`]. `array_histogram` is embedded as-is and
/// is expected to have the `statistics` shape (see [`make_array_histogram`]).
pub fn make_stats_path(
    path: &str,
    documents: f64,
    bool_count: Option<BoolCount>,
    type_count: Option<TypeCount>,
    histogram: Option<Vec<Document>>,
    bounds: Option<&[TypedValue]>,
    array_histogram: Option<Document>,
) -> Result<Document> {
    debug!(
        "encoding stats path '{path}' (boolCount: {}, typeCount: {}, scalarHistogram: {}, arrayHistogram: {})",
        bool_count.is_some(),
        type_count.is_some(),
        histogram.is_some(),
        array_histogram.is_some()
    );

    let mut statistics = encode_statistics(
        path,
        documents,
        bool_count,
        type_count,
        histogram,
        bounds,
        || Error::bounds_missing(path),
    )?;
    if let Some(array_histogram) = array_histogram {
        statistics.insert(
            fields::ARRAY_HISTOGRAM.to_owned(),
            Value::Object(array_histogram),
        );
    }

    let mut doc = Document::new();
    doc.insert(fields::ID.to_owned(), Value::String(path.to_owned()));
    doc.insert(fields::STATISTICS.to_owned(), Value::Object(statistics));
    Ok(doc)
}

/// Returns the array-element statistics document embedded as `arrayHistogram`.
///
/// Same rules as the `statistics` body of [`make_stats_path`], without a
/// further `arrayHistogram` level.
pub fn make_array_histogram(
    documents: f64,
    bool_count: Option<BoolCount>,
    type_count: Option<TypeCount>,
    histogram: Option<Vec<Document>>,
    bounds: Option<&[TypedValue]>,
) -> Result<Document> {
    encode_statistics(
        fields::ARRAY_HISTOGRAM,
        documents,
        bool_count,
        type_count,
        histogram,
        bounds,
        || Error::ArrayBoundsMissing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_stats_bucket;
    use serde_json::json;

    fn keys(doc: &Document) -> Vec<&str> {
        doc.keys().map(String::as_str).collect()
    }

    fn statistics(doc: &Document) -> &Document {
        doc[fields::STATISTICS].as_object().unwrap()
    }

    #[test]
    fn encodes_path_without_optionals() {
        let doc = make_stats_path("a.b", 100.0, None, None, None, None, None).unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({ "id": "a.b", "statistics": { "documents": 100.0 } })
        );
    }

    #[test]
    fn encodes_bool_count() {
        let doc = make_stats_path("x", 50.0, Some((30.0, 20.0).into()), None, None, None, None)
            .unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({
                "id": "x",
                "statistics": {
                    "documents": 50.0,
                    "boolCount": { "trueCount": 30.0, "falseCount": 20.0 }
                }
            })
        );
    }

    #[test]
    fn encodes_scalar_histogram_with_unchanged_buckets() {
        let b1 = make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0);
        let b2 = make_stats_bucket(2.0, 3.0, 1.0, 6.0, 3.0);
        let bounds = [TypedValue::Int32(1), TypedValue::Int32(2)];

        let doc = make_stats_path(
            "h",
            6.0,
            None,
            None,
            Some(vec![b1.clone(), b2.clone()]),
            Some(&bounds),
            None,
        )
        .unwrap();

        assert_eq!(
            statistics(&doc)[fields::SCALAR_HISTOGRAM],
            json!({
                "buckets": [Value::Object(b1), Value::Object(b2)],
                "bounds": [1, 2]
            })
        );
    }

    #[test]
    fn type_count_keeps_order_and_duplicates() {
        let type_count = vec![
            ("string".to_owned(), 4.0),
            ("int32".to_owned(), 2.0),
            ("string".to_owned(), 1.0),
        ];
        let doc = make_stats_path("t", 7.0, None, Some(type_count), None, None, None).unwrap();
        assert_eq!(
            statistics(&doc)[fields::TYPE_COUNT],
            json!([
                { "typeName": "string", "count": 4.0 },
                { "typeName": "int32", "count": 2.0 },
                { "typeName": "string", "count": 1.0 }
            ])
        );
    }

    #[test]
    fn empty_type_count_is_not_absent() {
        let doc = make_stats_path("t", 0.0, None, Some(vec![]), None, None, None).unwrap();
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"id":"t","statistics":{"documents":0.0,"typeCount":[]}}"#
        );
    }

    #[test]
    fn empty_histogram_is_not_absent() {
        let doc = make_stats_path("h", 0.0, None, None, Some(vec![]), Some(&[]), None).unwrap();
        assert_eq!(
            statistics(&doc)[fields::SCALAR_HISTOGRAM],
            json!({ "buckets": [], "bounds": [] })
        );
    }

    #[test]
    fn histogram_without_bounds_is_rejected() {
        let err = make_stats_path(
            "p",
            1.0,
            None,
            None,
            Some(vec![make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0)]),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, Error::bounds_missing("p"));
        assert!(err.to_string().contains("'p'"));
    }

    #[test]
    fn bounds_without_histogram_are_ignored() {
        let bounds = [TypedValue::Int32(1)];
        let doc = make_stats_path("p", 1.0, None, None, None, Some(&bounds), None).unwrap();
        assert_eq!(keys(statistics(&doc)), vec!["documents"]);
    }

    #[test]
    fn mismatched_bounds_length_still_encodes() {
        let bounds = [TypedValue::Int32(1), TypedValue::Int32(2)];
        let doc = make_stats_path(
            "p",
            1.0,
            None,
            None,
            Some(vec![make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0)]),
            Some(&bounds),
            None,
        )
        .unwrap();
        assert_eq!(statistics(&doc)[fields::SCALAR_HISTOGRAM]["bounds"], json!([1, 2]));
    }

    #[test]
    fn bound_kinds_lists_type_names_in_order() {
        let bounds = [
            TypedValue::Int32(1),
            TypedValue::from("a"),
            TypedValue::MaxKey,
        ];
        assert_eq!(bound_kinds(&bounds), "int32, string, max_key");
        assert_eq!(bound_kinds(&[]), "");
    }

    #[test]
    fn optional_fields_are_independent_and_ordered() {
        let bounds = [TypedValue::from("m")];
        let bucket = make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0);
        let array_histogram = make_array_histogram(3.0, None, None, None, None).unwrap();

        for mask in 0u8..16 {
            let bool_count = (mask & 1 != 0).then(|| BoolCount::new(1.0, 2.0));
            let type_count = (mask & 2 != 0).then(|| vec![("string".to_owned(), 3.0)]);
            let histogram = (mask & 4 != 0).then(|| vec![bucket.clone()]);
            let array = (mask & 8 != 0).then(|| array_histogram.clone());

            let doc = make_stats_path(
                "p",
                3.0,
                bool_count,
                type_count,
                histogram,
                Some(&bounds),
                array,
            )
            .unwrap();

            let mut expected = vec!["documents"];
            if mask & 1 != 0 {
                expected.push("boolCount");
            }
            if mask & 2 != 0 {
                expected.push("typeCount");
            }
            if mask & 4 != 0 {
                expected.push("scalarHistogram");
            }
            if mask & 8 != 0 {
                expected.push("arrayHistogram");
            }
            assert_eq!(keys(&doc), vec!["id", "statistics"]);
            assert_eq!(keys(statistics(&doc)), expected, "mask {mask:#06b}");
        }
    }

    #[test]
    fn array_histogram_matches_statistics_body() {
        let bounds = [TypedValue::from(1.5), TypedValue::from(true)];
        let buckets = vec![
            make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0),
            make_stats_bucket(1.0, 2.0, 2.0, 4.0, 3.0),
        ];
        let type_count = vec![("double".to_owned(), 3.0), ("bool".to_owned(), 1.0)];

        let array_histogram = make_array_histogram(
            4.0,
            Some(BoolCount::new(1.0, 0.0)),
            Some(type_count.clone()),
            Some(buckets.clone()),
            Some(&bounds),
        )
        .unwrap();
        let path = make_stats_path(
            "arr",
            4.0,
            Some(BoolCount::new(1.0, 0.0)),
            Some(type_count),
            Some(buckets),
            Some(&bounds),
            None,
        )
        .unwrap();

        assert_eq!(&array_histogram, statistics(&path));
    }

    #[test]
    fn array_histogram_is_embedded_as_is() {
        let array_histogram = make_array_histogram(
            2.0,
            None,
            Some(vec![("int32".to_owned(), 2.0)]),
            None,
            None,
        )
        .unwrap();
        let doc = make_stats_path(
            "arr",
            1.0,
            None,
            None,
            None,
            None,
            Some(array_histogram.clone()),
        )
        .unwrap();
        assert_eq!(
            statistics(&doc)[fields::ARRAY_HISTOGRAM],
            Value::Object(array_histogram)
        );
    }

    #[test]
    fn array_histogram_without_bounds_is_rejected() {
        let err = make_array_histogram(
            1.0,
            None,
            None,
            Some(vec![make_stats_bucket(1.0, 0.0, 0.0, 1.0, 1.0)]),
            None,
        )
        .unwrap_err();
        assert_eq!(err, Error::ArrayBoundsMissing);
    }

    #[test]
    fn serializes_full_document_in_schema_order() {
        let bounds = [TypedValue::Int32(5)];
        let doc = make_stats_path(
            "a",
            2.0,
            Some(BoolCount::new(1.0, 1.0)),
            Some(vec![("int32".to_owned(), 2.0)]),
            Some(vec![make_stats_bucket(2.0, 0.0, 0.0, 2.0, 1.0)]),
            Some(&bounds),
            Some(make_array_histogram(0.0, None, None, None, None).unwrap()),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            concat!(
                r#"{"id":"a","statistics":{"documents":2.0,"#,
                r#""boolCount":{"trueCount":1.0,"falseCount":1.0},"#,
                r#""typeCount":[{"typeName":"int32","count":2.0}],"#,
                r#""scalarHistogram":{"buckets":[{"boundaryCount":2.0,"rangeCount":0.0,"rangeDistincts":0.0,"cumulativeCount":2.0,"cumulativeDistincts":1.0}],"bounds":[5]},"#,
                r#""arrayHistogram":{"documents":0.0}}}"#
            )
        );
    }
}
