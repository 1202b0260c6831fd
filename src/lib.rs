pub mod models;
pub mod query;
pub mod source;
