use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use abi::errors::Error;
use abi::model::{FriendStatus, Friendship, User, UserUpdate};
use abi::validation::validate_user;
use db::DbRepo;

/// Business logic around users: CRUD orchestration, the email-uniqueness
/// rule and the friendship workflow.
#[derive(Clone)]
pub struct UserService {
    db: Arc<DbRepo>,
}

impl UserService {
    pub fn new(db: Arc<DbRepo>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, Error> {
        self.db.user.find_all().await
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<User, Error> {
        self.db
            .user
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }

    pub async fn create(&self, mut user: User) -> Result<User, Error> {
        validate_user(&user)?;
        if self.db.user.exists_by_email(&user.email).await? {
            return Err(Error::duplicated("this email is already in use"));
        }
        // a blank display name falls back to the login
        if user.name.trim().is_empty() {
            user.name = user.login.clone();
        }
        let created = self.db.user.create(user).await?;
        info!("created user {}", created.id);
        Ok(created)
    }

    /// Merge a partial payload over the stored user, re-validate and
    /// persist. Absent fields keep their stored values.
    pub async fn update(&self, update: UserUpdate) -> Result<User, Error> {
        if update.id == 0 {
            return Err(Error::validation("user id must be provided"));
        }
        let mut user = self.find_by_id(update.id).await?;

        let email_changed = matches!(&update.email, Some(email) if *email != user.email);
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(login) = update.login {
            user.login = login;
        }
        match update.name {
            Some(name) => user.name = name,
            None if user.name.trim().is_empty() => user.name = user.login.clone(),
            None => {}
        }
        if let Some(birthday) = update.birthday {
            user.birthday = birthday;
        }

        validate_user(&user)?;
        if email_changed && self.db.user.exists_by_email(&user.email).await? {
            return Err(Error::duplicated("this email is already in use"));
        }

        let updated = self.db.user.update(user).await?;
        info!("updated user {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, user_id: i64) -> Result<(), Error> {
        self.db.user.delete(user_id).await?;
        info!("deleted user {user_id}");
        Ok(())
    }

    /// Record a one-directional edge with status unconfirmed. Re-adding
    /// an existing edge is a validation error, not an idempotent no-op.
    pub async fn add_friend(&self, user_id: i64, friend_id: i64) -> Result<(), Error> {
        debug!("adding friend: user={user_id}, friend={friend_id}");
        let mut user = self.find_by_id(user_id).await?;
        self.find_by_id(friend_id).await?;

        if user.friends.iter().any(|f| f.friend_id == friend_id) {
            return Err(Error::validation(format!(
                "user with id {friend_id} is already a friend"
            )));
        }

        user.friends.push(Friendship {
            friend_id,
            status: FriendStatus::Unconfirmed,
        });
        self.db.user.update(user).await?;
        Ok(())
    }

    /// flip an unconfirmed outgoing edge to confirmed
    pub async fn confirm_friend(&self, user_id: i64, friend_id: i64) -> Result<(), Error> {
        debug!("confirming friend: user={user_id}, friend={friend_id}");
        let mut user = self.find_by_id(user_id).await?;
        self.find_by_id(friend_id).await?;

        let edge = user
            .friends
            .iter_mut()
            .find(|f| f.friend_id == friend_id)
            .ok_or_else(|| {
                Error::not_found(format!("user {user_id} has no friend edge to {friend_id}"))
            })?;
        if edge.status == FriendStatus::Confirmed {
            return Err(Error::validation(format!(
                "friendship with user {friend_id} is already confirmed"
            )));
        }
        edge.status = FriendStatus::Confirmed;
        self.db.user.update(user).await?;
        Ok(())
    }

    pub async fn remove_friend(&self, user_id: i64, friend_id: i64) -> Result<(), Error> {
        debug!("removing friend: user={user_id}, friend={friend_id}");
        let mut user = self.find_by_id(user_id).await?;
        self.find_by_id(friend_id).await?;

        // removing an absent edge is a silent no-op
        user.friends.retain(|f| f.friend_id != friend_id);
        self.db.user.update(user).await?;
        Ok(())
    }

    /// the full user record behind every outgoing edge; a dangling edge
    /// fails the whole call
    pub async fn get_friends(&self, user_id: i64) -> Result<Vec<User>, Error> {
        let user = self.find_by_id(user_id).await?;

        let mut friends = Vec::with_capacity(user.friends.len());
        for friendship in &user.friends {
            friends.push(self.find_by_id(friendship.friend_id).await?);
        }
        Ok(friends)
    }

    pub async fn get_common_friends(
        &self,
        user_id: i64,
        other_id: i64,
    ) -> Result<Vec<User>, Error> {
        let user = self.find_by_id(user_id).await?;
        let other = self.find_by_id(other_id).await?;

        let other_ids: HashSet<i64> = other.friends.iter().map(|f| f.friend_id).collect();
        let mut common = Vec::new();
        for friendship in &user.friends {
            if other_ids.contains(&friendship.friend_id) {
                common.push(self.find_by_id(friendship.friend_id).await?);
            }
        }
        common.sort_by_key(|u| u.id);
        Ok(common)
    }
}
