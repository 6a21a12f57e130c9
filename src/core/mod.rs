pub mod app;
pub mod film_store;
pub mod friendship;
pub mod ranking;
pub mod reference;
pub mod user_store;

pub use crate::domain::model::{Film, FilmId, Genre, MpaRating, User, UserId};
pub use crate::domain::ports::{FilmStorage, UserStorage};
pub use crate::utils::error::Result;
