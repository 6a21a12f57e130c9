use crate::core::film_store::InMemoryFilmStorage;
use crate::core::friendship::UserService;
use crate::core::ranking::{FilmService, DEFAULT_POPULAR_COUNT};
use crate::core::reference::ReferenceCatalog;
use crate::core::user_store::InMemoryUserStorage;
use crate::domain::model::{Film, FilmId, Genre, MpaRating, User, UserId};
use crate::domain::ports::{FilmStorage, UserStorage};
use crate::utils::error::Result;
use std::sync::Arc;

/// One per process: owns the stores and the services built on them.
pub struct Filmorate {
    catalog: Arc<ReferenceCatalog>,
    films: FilmService<InMemoryFilmStorage, InMemoryUserStorage>,
    users: UserService<InMemoryUserStorage>,
    default_popular_count: i64,
}

impl Filmorate {
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(ReferenceCatalog::standard()),
            Arc::new(InMemoryUserStorage::new()),
            DEFAULT_POPULAR_COUNT,
        )
    }

    pub fn with_parts(
        catalog: Arc<ReferenceCatalog>,
        user_storage: Arc<InMemoryUserStorage>,
        default_popular_count: i64,
    ) -> Self {
        let film_storage = Arc::new(InMemoryFilmStorage::new(catalog.clone()));
        Self {
            catalog,
            films: FilmService::new(film_storage, user_storage.clone()),
            users: UserService::new(user_storage),
            default_popular_count,
        }
    }

    // Films

    pub fn create_film(&self, film: Film) -> Result<Film> {
        self.films.film_storage().create(film)
    }

    pub fn update_film(&self, film: Film) -> Result<Film> {
        self.films.film_storage().update(film)
    }

    pub fn list_films(&self) -> Vec<Film> {
        self.films.film_storage().list()
    }

    pub fn find_film(&self, id: FilmId) -> Result<Film> {
        self.films.film_storage().find_by_id(id)
    }

    pub fn delete_film(&self, id: FilmId) {
        self.films.film_storage().delete(id)
    }

    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        self.films.add_like(film_id, user_id)
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        self.films.remove_like(film_id, user_id)
    }

    /// `None` falls back to the configured default count.
    pub fn popular_films(&self, count: Option<i64>) -> Result<Vec<Film>> {
        self.films
            .popular_films(count.unwrap_or(self.default_popular_count))
    }

    // Users

    pub fn create_user(&self, user: User) -> Result<User> {
        self.users.user_storage().create(user)
    }

    pub fn update_user(&self, user: User) -> Result<User> {
        self.users.user_storage().update(user)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.user_storage().list()
    }

    pub fn find_user(&self, id: UserId) -> Result<User> {
        self.users.user_storage().find_by_id(id)
    }

    /// Removes the user along with every friend link and like pointing at it.
    pub fn delete_user(&self, id: UserId) {
        // Likes are stripped after the user is gone, so a racing add_like
        // either fails its user check or has its like removed here.
        self.users.user_storage().delete(id);
        self.films.remove_user_likes(id);
    }

    pub fn add_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        self.users.add_friend(id, friend_id)
    }

    pub fn remove_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        self.users.remove_friend(id, friend_id)
    }

    pub fn list_friends(&self, id: UserId) -> Result<Vec<User>> {
        self.users.list_friends(id)
    }

    pub fn common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>> {
        self.users.common_friends(id, other_id)
    }

    // Reference data

    pub fn list_genres(&self) -> Vec<Genre> {
        self.catalog.list_genres()
    }

    pub fn find_genre(&self, id: i64) -> Result<Genre> {
        self.catalog.find_genre(id)
    }

    pub fn list_mpa(&self) -> Vec<MpaRating> {
        self.catalog.list_mpa()
    }

    pub fn find_mpa(&self, id: i64) -> Result<MpaRating> {
        self.catalog.find_mpa(id)
    }
}

impl Default for Filmorate {
    fn default() -> Self {
        Self::new()
    }
}
