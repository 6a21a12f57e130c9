use crate::domain::model::{Genre, MpaRating};
use crate::utils::error::{FilmorateError, Result};

/// Read-only genre and MPA rating tables.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    genres: Vec<Genre>,
    ratings: Vec<MpaRating>,
}

impl ReferenceCatalog {
    pub fn new(genres: Vec<Genre>, ratings: Vec<MpaRating>) -> Self {
        Self { genres, ratings }
    }

    /// The fixed tables every deployment ships with.
    pub fn standard() -> Self {
        Self::new(
            vec![
                Genre::new(1, "Comedy"),
                Genre::new(2, "Drama"),
                Genre::new(3, "Animation"),
                Genre::new(4, "Thriller"),
                Genre::new(5, "Documentary"),
                Genre::new(6, "Action"),
            ],
            vec![
                MpaRating::new(1, "G"),
                MpaRating::new(2, "PG"),
                MpaRating::new(3, "PG-13"),
                MpaRating::new(4, "R"),
                MpaRating::new(5, "NC-17"),
            ],
        )
    }

    pub fn list_genres(&self) -> Vec<Genre> {
        self.genres.clone()
    }

    pub fn find_genre(&self, id: i64) -> Result<Genre> {
        self.genres
            .iter()
            .find(|genre| genre.id == id)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!("Unknown genre id {}", id);
                FilmorateError::GenreNotFound(id)
            })
    }

    pub fn list_mpa(&self) -> Vec<MpaRating> {
        self.ratings.clone()
    }

    pub fn find_mpa(&self, id: i64) -> Result<MpaRating> {
        self.ratings
            .iter()
            .find(|rating| rating.id == id)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!("Unknown MPA rating id {}", id);
                FilmorateError::MpaNotFound(id)
            })
    }

    /// Resolves genre references to full records, dropping repeated ids and
    /// keeping the order of first occurrence.
    pub fn resolve_genres(&self, genres: &[Genre]) -> Result<Vec<Genre>> {
        let mut resolved: Vec<Genre> = Vec::with_capacity(genres.len());
        for genre in genres {
            if resolved.iter().any(|g| g.id == genre.id) {
                continue;
            }
            resolved.push(self.find_genre(genre.id)?);
        }
        Ok(resolved)
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
