use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use abi::errors::Error;
use abi::model::{FriendStatus, Friendship, User};

use crate::database::user::UserRepo;

pub struct PostgresUser {
    pool: PgPool,
}

impl PostgresUser {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_friends(&self, user_id: i64) -> Result<Vec<Friendship>, Error> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT followed_user_id, status FROM friends
             WHERE user_id = $1 ORDER BY followed_user_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(friend_id, status)| {
                let status = FriendStatus::from_str_name(&status).ok_or_else(|| {
                    Error::internal_with_details(format!(
                        "unknown friendship status {status:?} in storage"
                    ))
                })?;
                Ok(Friendship { friend_id, status })
            })
            .collect()
    }

    async fn save_friends(&self, user: &User) -> Result<(), Error> {
        for friendship in &user.friends {
            sqlx::query(
                "INSERT INTO friends (user_id, followed_user_id, status)
                 VALUES ($1, $2, $3)",
            )
            .bind(user.id)
            .bind(friendship.friend_id)
            .bind(friendship.status.as_str())
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

#[derive(FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    login: String,
    name: String,
    birthday: NaiveDate,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.user_id,
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
            friends: Vec::new(),
        }
    }
}

#[async_trait]
impl UserRepo for PostgresUser {
    async fn create(&self, mut user: User) -> Result<User, Error> {
        debug!("creating user {}", user.login);
        // the unique index on email backs up the caller-side check; a
        // violation surfaces as DuplicatedData through the From impl
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, login, name, birthday)
             VALUES ($1, $2, $3, $4) RETURNING user_id",
        )
        .bind(&user.email)
        .bind(&user.login)
        .bind(&user.name)
        .bind(user.birthday)
        .fetch_one(&self.pool)
        .await?;
        user.id = user_id;

        if !user.friends.is_empty() {
            self.save_friends(&user).await?;
        }
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, Error> {
        debug!("updating user {}", user.id);
        let updated = sqlx::query(
            "UPDATE users SET email = $1, login = $2, name = $3, birthday = $4
             WHERE user_id = $5",
        )
        .bind(&user.email)
        .bind(&user.login)
        .bind(&user.name)
        .bind(user.birthday)
        .bind(user.id)
        .execute(&self.pool)
        .await?
        .rows_affected();
        if updated == 0 {
            return Err(Error::not_found(format!(
                "user with id {} not found",
                user.id
            )));
        }

        // full replace of the outgoing friendship edges
        sqlx::query("DELETE FROM friends WHERE user_id = $1")
            .bind(user.id)
            .execute(&self.pool)
            .await?;
        if !user.friends.is_empty() {
            self.save_friends(&user).await?;
        }

        Ok(user)
    }

    async fn delete(&self, user_id: i64) -> Result<(), Error> {
        // likes and friendship edges in both directions cascade
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(Error::not_found(format!(
                "user with id {user_id} not found"
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, Error> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                let mut user = row.into_user();
                user.friends = self.load_friends(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT * FROM users ORDER BY user_id")
            .fetch_all(&self.pool)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let mut user = row.into_user();
            user.friends = self.load_friends(user.id).await?;
            users.push(user);
        }
        Ok(users)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
