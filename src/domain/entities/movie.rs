//! Movie entity returned by the comparison service.

/// How a movie's poster should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster<'a> {
    /// Poster hosted at a usable remote URL.
    Remote(&'a str),
    /// Poster URL is missing or unusable; show a captioned placeholder instead.
    Placeholder {
        /// Caption drawn inside the placeholder frame.
        caption: String,
    },
}

/// A movie both watchlists have in common.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    synopsis: String,
    poster_url: String,
    detail_url: String,
}

impl Movie {
    /// Creates a new movie.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        synopsis: impl Into<String>,
        poster_url: impl Into<String>,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            synopsis: synopsis.into(),
            poster_url: poster_url.into(),
            detail_url: detail_url.into(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the synopsis shown on the back of the card.
    #[must_use]
    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    /// Returns the raw poster URL as received.
    #[must_use]
    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    /// Returns the external detail page URL.
    #[must_use]
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }

    /// Returns the poster, falling back to a placeholder for broken URLs.
    #[must_use]
    pub fn poster(&self) -> Poster<'_> {
        if is_web_url(&self.poster_url) {
            Poster::Remote(self.poster_url.trim())
        } else {
            Poster::Placeholder {
                caption: format!("{} Poster", self.title),
            }
        }
    }

    /// Returns the detail URL when it can be opened in a browser.
    #[must_use]
    pub fn openable_detail_url(&self) -> Option<&str> {
        is_web_url(&self.detail_url).then(|| self.detail_url.trim())
    }
}

/// Whether `value` is an absolute http(s) link with something after the scheme.
#[must_use]
pub fn is_web_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && value.len() > scheme.len()
    })
}
