pub mod dataset;
pub mod output;
pub mod stats;
