use async_trait::async_trait;
use sqlx::PgPool;

use abi::errors::Error;
use abi::model::{Genre, MpaRating};

use crate::database::reference::{GenreRepo, MpaRepo};

pub struct PostgresGenre {
    pool: PgPool,
}

impl PostgresGenre {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepo for PostgresGenre {
    async fn find_all(&self) -> Result<Vec<Genre>, Error> {
        let genres = sqlx::query_as(
            "SELECT genre_id AS id, genre_name AS name FROM genres ORDER BY genre_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    async fn find_by_id(&self, genre_id: i32) -> Result<Genre, Error> {
        sqlx::query_as("SELECT genre_id AS id, genre_name AS name FROM genres WHERE genre_id = $1")
            .bind(genre_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found(format!("genre with id {genre_id} not found")))
    }

    async fn exists(&self, genre_id: i32) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE genre_id = $1")
            .bind(genre_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

pub struct PostgresMpa {
    pool: PgPool,
}

impl PostgresMpa {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MpaRepo for PostgresMpa {
    async fn find_all(&self) -> Result<Vec<MpaRating>, Error> {
        let ratings = sqlx::query_as(
            "SELECT mpa_id AS id, mpa_rating AS name FROM mpa_ratings ORDER BY mpa_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ratings)
    }

    async fn find_by_id(&self, mpa_id: i32) -> Result<MpaRating, Error> {
        sqlx::query_as("SELECT mpa_id AS id, mpa_rating AS name FROM mpa_ratings WHERE mpa_id = $1")
            .bind(mpa_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found(format!("mpa rating with id {mpa_id} not found")))
    }

    async fn exists(&self, mpa_id: i32) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mpa_ratings WHERE mpa_id = $1")
            .bind(mpa_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
