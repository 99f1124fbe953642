pub mod config;
pub mod data;
pub mod error;
pub mod range;

pub use config::ExtractOptions;
pub use data::model::{Dataset, DatedPoint, Entity, NamedSeries, ResultRecord};
pub use error::{Bound, RangeError};
pub use range::RangeExtractor;
