use crate::domain::model::{User, UserId, UNSET_ID};
use crate::domain::ports::UserStorage;
use crate::utils::error::{FilmorateError, Result};
use crate::utils::validation::{
    validate_contains, validate_no_whitespace, validate_non_empty_string, validate_not_after,
};
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug)]
struct UserTable {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl UserTable {
    fn generate_id(&mut self) -> UserId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert_new(&mut self, mut user: User) -> User {
        user.id = self.generate_id();
        user.friends = BTreeSet::new();
        self.users.insert(user.id, user.clone());
        user
    }
}

#[derive(Debug)]
pub struct InMemoryUserStorage {
    table: RwLock<UserTable>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Uses `today` as the reference date for birthday checks.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: BTreeMap::new(),
                next_id: 1,
            }),
            today,
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, mut user: User) -> Result<User> {
        let checked = validate_non_empty_string("email", &user.email)
            .and_then(|_| validate_contains("email", &user.email, '@'))
            .and_then(|_| validate_non_empty_string("login", &user.login))
            .and_then(|_| validate_no_whitespace("login", &user.login))
            .and_then(|_| validate_not_after("birthday", user.birthday, (self.today)()));
        if let Err(e) = checked {
            tracing::debug!("Rejected user {:?}: {}", user.login, e);
            return Err(e);
        }

        if user.name.trim().is_empty() {
            user.name = user.login.clone();
            tracing::info!("Name has been changed to value {}", user.login);
        }
        Ok(user)
    }
}

impl Default for InMemoryUserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStorage for InMemoryUserStorage {
    fn create(&self, user: User) -> Result<User> {
        let user = self.validate(user)?;
        let created = self.table.write().insert_new(user);
        tracing::info!("User was created with id {}", created.id);
        Ok(created)
    }

    fn update(&self, user: User) -> Result<User> {
        let mut user = self.validate(user)?;
        let mut table = self.table.write();

        if user.id == UNSET_ID {
            let created = table.insert_new(user);
            tracing::info!(
                "User with id {} not found. Instead of updating the user was created",
                created.id
            );
            return Ok(created);
        }

        match table.users.get_mut(&user.id) {
            Some(stored) => {
                // Friend-sets change only through paired operations.
                user.friends = std::mem::take(&mut stored.friends);
                *stored = user.clone();
                tracing::info!("User with id {} was updated", user.id);
                Ok(user)
            }
            None => {
                tracing::info!("User with id {} not found.", user.id);
                Err(FilmorateError::UserNotFound(user.id))
            }
        }
    }

    fn list(&self) -> Vec<User> {
        self.table.read().users.values().cloned().collect()
    }

    fn find_by_id(&self, id: UserId) -> Result<User> {
        self.table.read().users.get(&id).cloned().ok_or_else(|| {
            tracing::debug!("Incorrect user id {}", id);
            FilmorateError::UserNotFound(id)
        })
    }

    /// Also removes the user from every friend-set.
    fn delete(&self, id: UserId) {
        let mut table = self.table.write();
        let Some(removed) = table.users.remove(&id) else {
            return;
        };
        for friend_id in &removed.friends {
            if let Some(friend) = table.users.get_mut(friend_id) {
                friend.friends.remove(&id);
            }
        }
        tracing::info!("User with id {} was deleted", id);
    }

    fn with_pair_mut<R, F>(&self, a: UserId, b: UserId, f: F) -> Result<R>
    where
        F: FnOnce(&mut User, &mut User) -> R,
    {
        if a == b {
            return Err(FilmorateError::invalid_argument("friend id", b));
        }

        let mut table = self.table.write();
        for id in [a, b] {
            if !table.users.contains_key(&id) {
                tracing::debug!("Incorrect user id {}", id);
                return Err(FilmorateError::UserNotFound(id));
            }
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let mut ends = table
            .users
            .range_mut(lo..=hi)
            .filter(|(id, _)| **id == lo || **id == hi)
            .map(|(_, user)| user);
        let (Some(low), Some(high)) = (ends.next(), ends.next()) else {
            return Err(FilmorateError::UserNotFound(b));
        };
        if a < b {
            Ok(f(low, high))
        } else {
            Ok(f(high, low))
        }
    }
}
