use serde::Deserialize;

use crate::domain::entities::Movie;

/// One row of the `/api/compare` response:
/// `[title, description, poster, url]`.
#[derive(Debug, Deserialize)]
pub struct MovieRow(
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let MovieRow(title, synopsis, poster_url, detail_url) = row;
        Self::new(
            title.unwrap_or_default(),
            synopsis.unwrap_or_default(),
            poster_url.unwrap_or_default(),
            detail_url.unwrap_or_default(),
        )
    }
}

/// Error body of the comparison service.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error detail.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rows() {
        let body = r#"[
            ["Heat", "A group of professional bank robbers...", "https://a.ltrbxd.com/heat.jpg", "https://letterboxd.com/film/heat-1995/"],
            ["Ran", null, "", "https://letterboxd.com/film/ran/"]
        ]"#;

        let rows: Vec<MovieRow> = serde_json::from_str(body).unwrap();
        let movies: Vec<Movie> = rows.into_iter().map(Movie::from).collect();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title(), "Heat");
        assert_eq!(movies[0].detail_url(), "https://letterboxd.com/film/heat-1995/");
        assert_eq!(movies[1].synopsis(), "");
        assert_eq!(movies[1].poster_url(), "");
    }

    #[test]
    fn test_reject_short_rows() {
        let body = r#"[["Heat", "synopsis"]]"#;
        assert!(serde_json::from_str::<Vec<MovieRow>>(body).is_err());
    }

    #[test]
    fn test_decode_error_body() {
        let body = r#"{"detail": "Both usernames are required."}"#;
        let error: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(error.detail, "Both usernames are required.");
    }
}
