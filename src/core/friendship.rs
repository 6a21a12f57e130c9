use crate::domain::model::{User, UserId};
use crate::domain::ports::UserStorage;
use crate::utils::error::{FilmorateError, Result};
use std::sync::Arc;

/// Symmetric friend relation over a user store.
pub struct UserService<U: UserStorage> {
    users: Arc<U>,
}

impl<U: UserStorage> UserService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub fn user_storage(&self) -> &U {
        &self.users
    }

    pub fn add_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        self.users.with_pair_mut(id, friend_id, |user, friend| {
            user.friends.insert(friend.id);
            friend.friends.insert(user.id);
        })?;
        tracing::info!("Users with id {} and {} are now friends", id, friend_id);
        Ok(())
    }

    pub fn remove_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        let not_a_friend = FilmorateError::FriendNotFound {
            user_id: id,
            friend_id,
        };
        if id == friend_id {
            return Err(not_a_friend);
        }

        let removed = self
            .users
            .with_pair_mut(id, friend_id, |user, friend| {
                if !user.friends.remove(&friend.id) {
                    return false;
                }
                friend.friends.remove(&user.id);
                true
            })
            .map_err(|e| match e {
                // The target missing from the store means it is not a friend either.
                FilmorateError::UserNotFound(missing) if missing == friend_id => {
                    FilmorateError::FriendNotFound {
                        user_id: id,
                        friend_id,
                    }
                }
                other => other,
            })?;

        if !removed {
            tracing::info!("Incorrect friend id {}", friend_id);
            return Err(not_a_friend);
        }
        tracing::info!("Friend with id {} was deleted from user {} list", friend_id, id);
        Ok(())
    }

    /// Friend ids of `id`, ascending. Empty when the user has no friends.
    pub fn friends_of(&self, id: UserId) -> Result<Vec<UserId>> {
        let user = self.users.find_by_id(id)?;
        Ok(user.friends.into_iter().collect())
    }

    pub fn list_friends(&self, id: UserId) -> Result<Vec<User>> {
        let friend_ids = self.friends_of(id)?;
        Ok(self.resolve(friend_ids))
    }

    /// Users who are friends with both `id` and `other_id`, in the order of
    /// `id`'s friend-set.
    pub fn common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>> {
        let user = self.users.find_by_id(id)?;
        let other = self.users.find_by_id(other_id)?;
        let common = user
            .friends
            .iter()
            .copied()
            .filter(|friend_id| other.friends.contains(friend_id));
        Ok(self.resolve(common))
    }

    // Friend-sets are cleaned on delete, so a miss here is a concurrent delete.
    fn resolve(&self, ids: impl IntoIterator<Item = UserId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|friend_id| self.users.find_by_id(friend_id).ok())
            .collect()
    }
}
