pub mod catalog;
pub mod detail;
pub mod stats;
