pub mod alert;
pub mod article;
pub mod bias;
pub mod prediction;
pub mod series;
pub mod signal;
pub mod snapshot;
