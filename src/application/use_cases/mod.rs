//! Use case implementations.

mod compare_watchlists_use_case;

pub use compare_watchlists_use_case::CompareWatchlistsUseCase;
