pub mod extractors;
pub mod v1;
