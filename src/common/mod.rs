pub mod types;
pub mod unicode;
