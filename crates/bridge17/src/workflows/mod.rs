pub mod dataset;
pub mod partnership;
