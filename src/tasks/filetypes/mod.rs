pub mod structure;
pub mod reports;
