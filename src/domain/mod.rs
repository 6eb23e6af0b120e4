// Domain layer - Data semantics for seasons, rows, features and classification
pub mod classification;
pub mod feature;
pub mod row;
pub mod season;
pub mod units;
