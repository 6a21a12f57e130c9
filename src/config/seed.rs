use crate::core::app::Filmorate;
use crate::domain::model::{Film, FilmId, User, UserId};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial data loaded into a fresh process. Ids in `likes` and
/// `friendships` refer to the ids the stores assign, which start at 1 and
/// follow the order of `films` and `users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub films: Vec<Film>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub likes: Vec<LikeSeed>,
    #[serde(default)]
    pub friendships: Vec<FriendshipSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeSeed {
    pub film_id: FilmId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipSeed {
    pub user_id: UserId,
    pub friend_id: UserId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub films: usize,
    pub users: usize,
    pub likes: usize,
    pub friendships: usize,
}

impl SeedData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Stops at the first rejected record.
    pub fn apply(&self, app: &Filmorate) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        for user in &self.users {
            app.create_user(user.clone())?;
            summary.users += 1;
        }
        for film in &self.films {
            app.create_film(film.clone())?;
            summary.films += 1;
        }
        for like in &self.likes {
            app.add_like(like.film_id, like.user_id)?;
            summary.likes += 1;
        }
        for friendship in &self.friendships {
            app.add_friend(friendship.user_id, friendship.friend_id)?;
            summary.friendships += 1;
        }

        tracing::info!(
            "Seeded {} users, {} films, {} likes, {} friendships",
            summary.users,
            summary.films,
            summary.likes,
            summary.friendships
        );
        Ok(summary)
    }
}
