use crate::domain::model::{Film, FilmId, User, UserId};
use crate::utils::error::Result;

/// Storage contract for films. An in-memory store and a relational adapter
/// both implement it.
pub trait FilmStorage: Send + Sync {
    fn create(&self, film: Film) -> Result<Film>;

    /// Replaces a stored film. A film with an unset id is created instead.
    fn update(&self, film: Film) -> Result<Film>;

    fn list(&self) -> Vec<Film>;

    fn find_by_id(&self, id: FilmId) -> Result<Film>;

    fn delete(&self, id: FilmId);

    /// Runs `f` on the stored film while holding the store's write lock.
    fn with_film_mut<R, F>(&self, id: FilmId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Film) -> R;

    /// Runs `f` on every stored film under a single write lock.
    fn for_each_film_mut<F>(&self, f: F)
    where
        F: FnMut(&mut Film);
}

/// Storage contract for users.
pub trait UserStorage: Send + Sync {
    fn create(&self, user: User) -> Result<User>;

    /// Replaces a stored user. A user with an unset id is created instead.
    fn update(&self, user: User) -> Result<User>;

    fn list(&self) -> Vec<User>;

    fn find_by_id(&self, id: UserId) -> Result<User>;

    fn delete(&self, id: UserId);

    /// Runs `f` on two distinct stored users under one write lock, so both
    /// sides of a relation change together or not at all.
    fn with_pair_mut<R, F>(&self, a: UserId, b: UserId, f: F) -> Result<R>
    where
        F: FnOnce(&mut User, &mut User) -> R;
}
