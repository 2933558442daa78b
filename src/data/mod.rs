//! Domain data for the tracker: weekday categories, data points, and the
//! two tracked series.

mod models;

pub use models::{seed_series, DataPoint, Day, Quantity, Series};
