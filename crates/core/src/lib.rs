pub mod bounds;
pub mod buckets;
pub mod document;
pub mod error;
pub mod path;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use bounds::{ObjectId, TypedValue};
pub use buckets::{make_stats_bucket, StatsBucket};
pub use document::Document;
pub use error::Error;
pub use path::{make_array_histogram, make_stats_path, BoolCount, TypeCount};
