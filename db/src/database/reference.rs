use async_trait::async_trait;

use abi::errors::Error;
use abi::model::{Genre, MpaRating};

/// Read-only lookup over the seeded genre table.
#[async_trait]
pub trait GenreRepo: Send + Sync {
    /// every seeded genre, ordered by id
    async fn find_all(&self) -> Result<Vec<Genre>, Error>;

    /// NotFound when the id falls outside the seeded set
    async fn find_by_id(&self, genre_id: i32) -> Result<Genre, Error>;

    async fn exists(&self, genre_id: i32) -> Result<bool, Error>;
}

/// Read-only lookup over the seeded MPA rating table.
#[async_trait]
pub trait MpaRepo: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MpaRating>, Error>;

    async fn find_by_id(&self, mpa_id: i32) -> Result<MpaRating, Error>;

    async fn exists(&self, mpa_id: i32) -> Result<bool, Error>;
}
