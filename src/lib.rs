//! Lettuce Watch - compare two movie watchlists and swipe through the overlap.
//!
//! This crate provides a terminal client for a watchlist comparison service,
//! built as a small state machine over landing, input, loading, card and
//! summary screens.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, the session state machine, and ports.
pub mod domain;
/// Infrastructure layer containing the HTTP client, browser launcher and config.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "lettucewatch";
