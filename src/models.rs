use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub type MovieId = i64;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub year: i64,
}

/// Body of a create request. A client-supplied `id` is dropped.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: i64,
}

impl NewMovie {
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie { id, title: self.title, director: self.director, year: self.year }
    }
}

/// Body of an update request. Absent or `null` fields keep the stored value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
}

impl MovieChanges {
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
    }
}

/// Parses the path segment after `/movies/`. The whole segment must be a decimal integer.
pub fn parse_movie_id(raw: &str) -> AppResult<MovieId> {
    raw.parse().map_err(|_| AppError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie { id: 1, title: "Inception".into(), director: "Nolan".into(), year: 2010 }
    }

    #[test]
    fn new_movie_ignores_client_id() {
        let new: NewMovie =
            serde_json::from_str(r#"{"id":42,"title":"Heat","director":"Mann","year":1995}"#)
                .unwrap();
        let movie = new.into_movie(7);
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 1995);
    }

    #[test]
    fn new_movie_defaults_missing_fields() {
        let new: NewMovie = serde_json::from_str("{}").unwrap();
        let movie = new.into_movie(1);
        assert_eq!(movie.title, "");
        assert_eq!(movie.director, "");
        assert_eq!(movie.year, 0);
    }

    #[test]
    fn new_movie_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewMovie>(r#"{"year":"2010"}"#).is_err());
        assert!(serde_json::from_str::<NewMovie>("not json").is_err());
        assert!(serde_json::from_str::<NewMovie>("").is_err());
    }

    #[test]
    fn changes_overwrite_only_present_fields() {
        let mut movie = inception();
        let changes: MovieChanges = serde_json::from_str(r#"{"year":2011}"#).unwrap();
        changes.apply(&mut movie);
        assert_eq!(movie, Movie { year: 2011, ..inception() });
    }

    #[test]
    fn changes_treat_null_as_absent_and_keep_id() {
        let mut movie = inception();
        let changes: MovieChanges =
            serde_json::from_str(r#"{"id":99,"title":null,"director":"C. Nolan"}"#).unwrap();
        changes.apply(&mut movie);
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.director, "C. Nolan");
    }

    #[test]
    fn parse_movie_id_accepts_only_integers() {
        assert_eq!(parse_movie_id("1").unwrap(), 1);
        assert_eq!(parse_movie_id("-3").unwrap(), -3);
        assert!(matches!(parse_movie_id("abc"), Err(AppError::InvalidId)));
        assert!(matches!(parse_movie_id(""), Err(AppError::InvalidId)));
        assert!(matches!(parse_movie_id("12abc"), Err(AppError::InvalidId)));
        assert!(matches!(parse_movie_id("1/extra"), Err(AppError::InvalidId)));
    }
}
