use crate::domain::model::{Film, FilmId, UserId};
use crate::domain::ports::{FilmStorage, UserStorage};
use crate::utils::error::{FilmorateError, Result};
use std::sync::Arc;

pub const DEFAULT_POPULAR_COUNT: i64 = 10;

/// Likes and the popularity ranking built on them.
pub struct FilmService<F: FilmStorage, U: UserStorage> {
    films: Arc<F>,
    users: Arc<U>,
}

impl<F: FilmStorage, U: UserStorage> FilmService<F, U> {
    pub fn new(films: Arc<F>, users: Arc<U>) -> Self {
        Self { films, users }
    }

    pub fn film_storage(&self) -> &F {
        &self.films
    }

    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        // The user check runs under the film lock so a concurrent user delete
        // either fails this call or strips the like afterwards.
        self.films.with_film_mut(film_id, |film| {
            self.users.find_by_id(user_id)?;
            film.likes.insert(user_id);
            Ok::<_, FilmorateError>(())
        })??;
        tracing::info!("User with id {} liked film with id {}", user_id, film_id);
        Ok(())
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        let removed = self.films.with_film_mut(film_id, |film| {
            self.users.find_by_id(user_id)?;
            Ok::<_, FilmorateError>(film.likes.remove(&user_id))
        })??;
        if removed {
            tracing::info!(
                "User with id {} deleted like for film with id {}",
                user_id,
                film_id
            );
        }
        Ok(())
    }

    /// Drops `user_id` from every like-set.
    pub fn remove_user_likes(&self, user_id: UserId) {
        self.films.for_each_film_mut(|film| {
            film.likes.remove(&user_id);
        });
    }

    /// Films ordered by like count, most liked first. Equal counts keep
    /// ascending id order.
    pub fn popular_films(&self, count: i64) -> Result<Vec<Film>> {
        if count <= 0 {
            tracing::debug!("Rejected popular films count {}", count);
            return Err(FilmorateError::invalid_argument("count", count));
        }

        let mut films = self.films.list();
        films.sort_by_key(|film| film.id);
        films.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
        films.truncate(usize::try_from(count).unwrap_or(usize::MAX));
        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::film_store::InMemoryFilmStorage;
    use crate::core::user_store::InMemoryUserStorage;
    use crate::domain::model::User;
    use chrono::NaiveDate;

    fn service() -> FilmService<InMemoryFilmStorage, InMemoryUserStorage> {
        let service = FilmService::new(
            Arc::new(InMemoryFilmStorage::default()),
            Arc::new(InMemoryUserStorage::new()),
        );
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for i in 1..=3 {
            service
                .films
                .create(Film::new(&format!("film {}", i), "desc", date, 100))
                .unwrap();
            service
                .users
                .create(User::new(&format!("u{}@mail.ru", i), &format!("u{}", i), "", date))
                .unwrap();
        }
        service
    }

    #[test]
    fn test_like_requires_film_and_user() {
        let service = service();
        assert!(matches!(service.add_like(9, 1), Err(FilmorateError::FilmNotFound(9))));
        assert!(matches!(service.add_like(1, 9), Err(FilmorateError::UserNotFound(9))));
        assert!(service.films.find_by_id(1).unwrap().likes.is_empty());
    }

    #[test]
    fn test_like_is_idempotent_and_unlike_missing_is_noop() {
        let service = service();
        service.add_like(1, 2).unwrap();
        service.add_like(1, 2).unwrap();
        assert_eq!(service.films.find_by_id(1).unwrap().like_count(), 1);

        service.remove_like(1, 3).unwrap();
        service.remove_like(1, 2).unwrap();
        assert_eq!(service.films.find_by_id(1).unwrap().like_count(), 0);
    }

    #[test]
    fn test_popular_films_order_and_ties() {
        let service = service();
        service.add_like(2, 1).unwrap();
        service.add_like(3, 1).unwrap();
        service.add_like(3, 2).unwrap();

        let ids: Vec<_> = service.popular_films(10).unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        service.add_like(1, 1).unwrap();
        service.add_like(1, 3).unwrap();
        let ids: Vec<_> = service.popular_films(2).unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_popular_films_rejects_non_positive_count() {
        let service = service();
        for count in [0, -1, i64::MIN] {
            assert!(matches!(
                service.popular_films(count),
                Err(FilmorateError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_remove_user_likes() {
        let service = service();
        service.add_like(1, 2).unwrap();
        service.add_like(2, 2).unwrap();
        service.add_like(2, 3).unwrap();

        service.remove_user_likes(2);
        assert_eq!(service.films.find_by_id(1).unwrap().like_count(), 0);
        assert_eq!(service.films.find_by_id(2).unwrap().like_count(), 1);
    }
}
