use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type FilmId = i64;
pub type UserId = i64;

/// Identity value meaning "not assigned yet".
pub const UNSET_ID: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Genre {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpaRating {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl MpaRating {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: FilmId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    #[serde(default)]
    pub rate: i32,
    #[serde(default)]
    pub mpa: Option<MpaRating>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub likes: BTreeSet<UserId>,
}

impl Film {
    pub fn new(name: &str, description: &str, release_date: NaiveDate, duration: i64) -> Self {
        Self {
            id: UNSET_ID,
            name: name.to_string(),
            description: description.to_string(),
            release_date,
            duration,
            rate: 0,
            mpa: None,
            genres: Vec::new(),
            likes: BTreeSet::new(),
        }
    }

    pub fn with_mpa(mut self, mpa_id: i64) -> Self {
        self.mpa = Some(MpaRating::with_id(mpa_id));
        self
    }

    pub fn with_genres(mut self, genre_ids: &[i64]) -> Self {
        self.genres = genre_ids.iter().copied().map(Genre::with_id).collect();
        self
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    pub email: String,
    pub login: String,
    /// Display name. Replaced by `login` on write when blank.
    #[serde(default)]
    pub name: String,
    pub birthday: NaiveDate,
    #[serde(default)]
    pub friends: BTreeSet<UserId>,
}

impl User {
    pub fn new(email: &str, login: &str, name: &str, birthday: NaiveDate) -> Self {
        Self {
            id: UNSET_ID,
            email: email.to_string(),
            login: login.to_string(),
            name: name.to_string(),
            birthday,
            friends: BTreeSet::new(),
        }
    }
}
