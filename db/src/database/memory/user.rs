use async_trait::async_trait;

use abi::errors::Error;
use abi::model::User;

use crate::database::user::UserRepo;

use super::SharedState;

pub struct MemoryUser {
    state: SharedState,
}

impl MemoryUser {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl UserRepo for MemoryUser {
    async fn create(&self, mut user: User) -> Result<User, Error> {
        let mut state = self.state.write().unwrap();
        state.last_user_id += 1;
        user.id = state.last_user_id;
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, Error> {
        let mut state = self.state.write().unwrap();
        if !state.users.contains_key(&user.id) {
            return Err(Error::not_found(format!(
                "user with id {} not found",
                user.id
            )));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user_id: i64) -> Result<(), Error> {
        let mut state = self.state.write().unwrap();
        if state.users.remove(&user_id).is_none() {
            return Err(Error::not_found(format!(
                "user with id {user_id} not found"
            )));
        }
        // mirror the relational ON DELETE CASCADE
        for film in state.films.values_mut() {
            film.likes.remove(&user_id);
        }
        for other in state.users.values_mut() {
            other.friends.retain(|f| f.friend_id != user_id);
        }
        Ok(())
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, Error> {
        Ok(self.state.read().unwrap().users.get(&user_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        let mut users: Vec<User> = self.state.read().unwrap().users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, Error> {
        Ok(self
            .state
            .read()
            .unwrap()
            .users
            .values()
            .any(|u| u.email == email))
    }
}
