//! Comparison service client.

mod client;
mod dto;

pub use client::{CompareClient, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
