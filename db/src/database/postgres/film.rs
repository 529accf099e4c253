use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use abi::errors::Error;
use abi::model::{Film, Genre, MpaRating};

use crate::database::film::FilmRepo;

pub struct PostgresFilm {
    pool: PgPool,
}

impl PostgresFilm {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_genres(&self, film_id: i64) -> Result<Vec<Genre>, Error> {
        let genres = sqlx::query_as(
            "SELECT g.genre_id AS id, g.genre_name AS name
             FROM film_genre fg JOIN genres g ON fg.genre_id = g.genre_id
             WHERE fg.film_id = $1
             ORDER BY g.genre_id",
        )
        .bind(film_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    async fn load_likes(&self, film_id: i64) -> Result<HashSet<i64>, Error> {
        let likes: Vec<i64> =
            sqlx::query_scalar("SELECT user_id FROM film_likes WHERE film_id = $1")
                .bind(film_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(likes.into_iter().collect())
    }

    // dependent rows go in one statement at a time; the composite primary
    // key turns a duplicate insert into a no-op
    async fn save_genres(&self, film: &Film) -> Result<(), Error> {
        for genre in &film.genres {
            sqlx::query(
                "INSERT INTO film_genre (film_id, genre_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(film.id)
            .bind(genre.id)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn save_likes(&self, film: &Film) -> Result<(), Error> {
        for user_id in &film.likes {
            sqlx::query(
                "INSERT INTO film_likes (film_id, user_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(film.id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn assemble(&self, row: FilmRow) -> Result<Film, Error> {
        let mut film = row.into_film();
        film.genres = self.load_genres(film.id).await?;
        film.likes = self.load_likes(film.id).await?;
        Ok(film)
    }
}

/// scalar film row joined with its MPA rating name
#[derive(FromRow)]
struct FilmRow {
    film_id: i64,
    name: String,
    description: String,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: i32,
    mpa_rating: String,
}

impl FilmRow {
    fn into_film(self) -> Film {
        Film {
            id: self.film_id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            likes: HashSet::new(),
            genres: Vec::new(),
            mpa: MpaRating {
                id: self.mpa_id,
                name: self.mpa_rating,
            },
        }
    }
}

const SELECT_FILM: &str = "SELECT f.film_id, f.name, f.description, f.release_date, f.duration,
     f.mpa_id, m.mpa_rating
     FROM films f JOIN mpa_ratings m ON f.mpa_id = m.mpa_id";

#[async_trait]
impl FilmRepo for PostgresFilm {
    async fn create(&self, mut film: Film) -> Result<Film, Error> {
        debug!("creating film {}", film.name);
        let film_id: i64 = sqlx::query_scalar(
            "INSERT INTO films (name, description, release_date, duration, mpa_id)
             VALUES ($1, $2, $3, $4, $5) RETURNING film_id",
        )
        .bind(&film.name)
        .bind(&film.description)
        .bind(film.release_date)
        .bind(film.duration)
        .bind(film.mpa.id)
        .fetch_one(&self.pool)
        .await?;
        film.id = film_id;

        self.save_genres(&film).await?;
        self.save_likes(&film).await?;
        Ok(film)
    }

    async fn update(&self, film: Film) -> Result<Film, Error> {
        debug!("updating film {}", film.id);
        let updated = sqlx::query(
            "UPDATE films SET name = $1, description = $2, release_date = $3,
             duration = $4, mpa_id = $5 WHERE film_id = $6",
        )
        .bind(&film.name)
        .bind(&film.description)
        .bind(film.release_date)
        .bind(film.duration)
        .bind(film.mpa.id)
        .bind(film.id)
        .execute(&self.pool)
        .await?
        .rows_affected();
        if updated == 0 {
            return Err(Error::not_found(format!(
                "film with id {} not found",
                film.id
            )));
        }

        // full replace of the dependent rows, no diffing
        sqlx::query("DELETE FROM film_genre WHERE film_id = $1")
            .bind(film.id)
            .execute(&self.pool)
            .await?;
        self.save_genres(&film).await?;

        sqlx::query("DELETE FROM film_likes WHERE film_id = $1")
            .bind(film.id)
            .execute(&self.pool)
            .await?;
        self.save_likes(&film).await?;

        Ok(film)
    }

    async fn delete(&self, film_id: i64) -> Result<(), Error> {
        // genre links and likes cascade with the row
        let deleted = sqlx::query("DELETE FROM films WHERE film_id = $1")
            .bind(film_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(Error::not_found(format!(
                "film with id {film_id} not found"
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, film_id: i64) -> Result<Option<Film>, Error> {
        let row: Option<FilmRow> = sqlx::query_as(&format!("{SELECT_FILM} WHERE f.film_id = $1"))
            .bind(film_id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(self.assemble(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Film>, Error> {
        let rows: Vec<FilmRow> = sqlx::query_as(&format!("{SELECT_FILM} ORDER BY f.film_id"))
            .fetch_all(&self.pool)
            .await?;

        // one follow-up query pair per film; acceptable at this scale
        let mut films = Vec::with_capacity(rows.len());
        for row in rows {
            films.push(self.assemble(row).await?);
        }
        Ok(films)
    }
}
