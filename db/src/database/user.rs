use async_trait::async_trait;

use abi::errors::Error;
use abi::model::User;

/// Storage contract for user aggregates, friendship edges included.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn create(&self, user: User) -> Result<User, Error>;

    /// overwrite scalar fields and fully replace the friendship edges;
    /// NotFound when no row matches the id
    async fn update(&self, user: User) -> Result<User, Error>;

    /// remove a user; their likes and the edges pointing at them go too
    async fn delete(&self, user_id: i64) -> Result<(), Error>;

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, Error>;

    async fn find_all(&self) -> Result<Vec<User>, Error>;

    /// the authority for the email-uniqueness rule; enforcement is done
    /// by the caller
    async fn exists_by_email(&self, email: &str) -> Result<bool, Error>;
}
