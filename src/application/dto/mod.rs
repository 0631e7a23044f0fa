//! Data transfer objects for the application layer.

mod compare_dto;

pub use compare_dto::{CompareResponse, ResultSource};
