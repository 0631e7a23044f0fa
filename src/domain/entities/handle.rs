//! Watchlist handle value objects.

use std::fmt;

/// A pair of submitted watchlist handles, already trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlePair {
    user: String,
    peer: String,
}

impl HandlePair {
    /// Creates a pair, returning `None` if either handle is blank.
    #[must_use]
    pub fn new(user: &str, peer: &str) -> Option<Self> {
        let user = user.trim();
        let peer = peer.trim();

        if user.is_empty() || peer.is_empty() {
            return None;
        }

        Some(Self {
            user: user.to_string(),
            peer: peer.to_string(),
        })
    }

    /// Returns the local user's handle.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the other person's handle.
    #[must_use]
    pub fn peer(&self) -> &str {
        &self.peer
    }
}

impl fmt::Display for HandlePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.user, self.peer)
    }
}
