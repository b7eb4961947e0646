pub mod insights;
pub mod waive;
