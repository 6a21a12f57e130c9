use crate::core::reference::ReferenceCatalog;
use crate::domain::model::{Film, FilmId, UNSET_ID};
use crate::domain::ports::FilmStorage;
use crate::utils::error::{FilmorateError, Result};
use crate::utils::validation::{
    validate_max_chars, validate_non_empty_string, validate_not_before, validate_positive_number,
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// First public film screening. No release date may precede it.
pub fn cinema_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug)]
struct FilmTable {
    // Ids only grow, so key order is insertion order.
    films: BTreeMap<FilmId, Film>,
    next_id: FilmId,
}

impl FilmTable {
    fn generate_id(&mut self) -> FilmId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert_new(&mut self, mut film: Film) -> Film {
        film.id = self.generate_id();
        film.likes = BTreeSet::new();
        self.films.insert(film.id, film.clone());
        film
    }
}

#[derive(Debug)]
pub struct InMemoryFilmStorage {
    table: RwLock<FilmTable>,
    catalog: Arc<ReferenceCatalog>,
}

impl InMemoryFilmStorage {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self {
            table: RwLock::new(FilmTable {
                films: BTreeMap::new(),
                next_id: 1,
            }),
            catalog,
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks field rules in a fixed order, then resolves reference data.
    fn validate(&self, mut film: Film) -> Result<Film> {
        let checked = validate_non_empty_string("name", &film.name)
            .and_then(|_| {
                validate_max_chars("description", &film.description, MAX_DESCRIPTION_LENGTH)
            })
            .and_then(|_| validate_not_before("release date", film.release_date, cinema_birthday()))
            .and_then(|_| validate_positive_number("duration", film.duration));
        if let Err(e) = checked {
            tracing::debug!("Rejected film {:?}: {}", film.name, e);
            return Err(e);
        }

        if let Some(mpa) = &film.mpa {
            film.mpa = Some(self.catalog.find_mpa(mpa.id)?);
        }
        film.genres = self.catalog.resolve_genres(&film.genres)?;
        Ok(film)
    }
}

impl Default for InMemoryFilmStorage {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceCatalog::standard()))
    }
}

impl FilmStorage for InMemoryFilmStorage {
    fn create(&self, film: Film) -> Result<Film> {
        let film = self.validate(film)?;
        let created = self.table.write().insert_new(film);
        tracing::info!("Film was created with id {}", created.id);
        Ok(created)
    }

    fn update(&self, film: Film) -> Result<Film> {
        let mut film = self.validate(film)?;
        let mut table = self.table.write();

        if film.id == UNSET_ID {
            let created = table.insert_new(film);
            tracing::info!(
                "Film not found in library. The film was added with id {}",
                created.id
            );
            return Ok(created);
        }

        match table.films.get_mut(&film.id) {
            Some(stored) => {
                // Likes are owned by like/unlike, not by the payload.
                film.likes = std::mem::take(&mut stored.likes);
                *stored = film.clone();
                tracing::info!("Film with id {} was updated", film.id);
                Ok(film)
            }
            None => {
                tracing::debug!("Update of unknown film id {}", film.id);
                Err(FilmorateError::FilmNotFound(film.id))
            }
        }
    }

    fn list(&self) -> Vec<Film> {
        self.table.read().films.values().cloned().collect()
    }

    fn find_by_id(&self, id: FilmId) -> Result<Film> {
        self.table.read().films.get(&id).cloned().ok_or_else(|| {
            tracing::debug!("Incorrect film id {}", id);
            FilmorateError::FilmNotFound(id)
        })
    }

    fn delete(&self, id: FilmId) {
        if self.table.write().films.remove(&id).is_some() {
            tracing::info!("Film with id {} was deleted", id);
        }
    }

    fn with_film_mut<R, F>(&self, id: FilmId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Film) -> R,
    {
        let mut table = self.table.write();
        let film = table
            .films
            .get_mut(&id)
            .ok_or(FilmorateError::FilmNotFound(id))?;
        Ok(f(film))
    }

    fn for_each_film_mut<F>(&self, mut f: F)
    where
        F: FnMut(&mut Film),
    {
        let mut table = self.table.write();
        for film in table.films.values_mut() {
            f(film);
        }
    }
}
