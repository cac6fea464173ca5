use serde_json::{json, Map, Number, Value};

/// Ordered document; fields serialize in insertion order.
pub type Document = Map<String, Value>;

/// Field names of the statistics schema. Downstream readers match these exactly.
pub mod fields {
    pub const ID: &str = "id";
    pub const STATISTICS: &str = "statistics";
    pub const DOCUMENTS: &str = "documents";

    pub const BOOL_COUNT: &str = "boolCount";
    pub const TRUE_COUNT: &str = "trueCount";
    pub const FALSE_COUNT: &str = "falseCount";

    pub const TYPE_COUNT: &str = "typeCount";
    pub const TYPE_NAME: &str = "typeName";
    pub const COUNT: &str = "count";

    pub const SCALAR_HISTOGRAM: &str = "scalarHistogram";
    pub const ARRAY_HISTOGRAM: &str = "arrayHistogram";
    pub const BUCKETS: &str = "buckets";
    pub const BOUNDS: &str = "bounds";

    pub const BOUNDARY_COUNT: &str = "boundaryCount";
    pub const RANGE_COUNT: &str = "rangeCount";
    pub const RANGE_DISTINCTS: &str = "rangeDistincts";
    pub const CUMULATIVE_COUNT: &str = "cumulativeCount";
    pub const CUMULATIVE_DISTINCTS: &str = "cumulativeDistincts";
}

/// Encodes a double. Non-finite values use the relaxed extended JSON
/// `$numberDouble` wrapper since JSON numbers cannot carry them.
pub fn double_value(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(number) => Value::Number(number),
        None => json!({ "$numberDouble": non_finite_repr(value) }),
    }
}

fn non_finite_repr(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
