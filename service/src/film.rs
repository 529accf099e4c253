use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use abi::errors::Error;
use abi::model::Film;
use abi::validation::validate_film;
use db::DbRepo;

/// Business logic around films: CRUD orchestration, likes and the
/// popularity ranking.
#[derive(Clone)]
pub struct FilmService {
    db: Arc<DbRepo>,
}

impl FilmService {
    pub fn new(db: Arc<DbRepo>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Film>, Error> {
        self.db.film.find_all().await
    }

    pub async fn find_by_id(&self, film_id: i64) -> Result<Film, Error> {
        self.db
            .film
            .find_by_id(film_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("film with id {film_id} not found")))
    }

    pub async fn create(&self, mut film: Film) -> Result<Film, Error> {
        validate_film(&film)?;
        self.resolve_references(&mut film).await?;
        let created = self.db.film.create(film).await?;
        info!("created film {}", created.id);
        Ok(created)
    }

    pub async fn update(&self, mut film: Film) -> Result<Film, Error> {
        if film.id == 0 {
            return Err(Error::validation("film id must be provided"));
        }
        // the target has to exist before anything is overwritten
        self.find_by_id(film.id).await?;
        validate_film(&film)?;
        self.resolve_references(&mut film).await?;
        let updated = self.db.film.update(film).await?;
        info!("updated film {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, film_id: i64) -> Result<(), Error> {
        self.db.film.delete(film_id).await?;
        info!("deleted film {film_id}");
        Ok(())
    }

    pub async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), Error> {
        debug!("adding like: film={film_id}, user={user_id}");
        let mut film = self.find_by_id(film_id).await?;
        self.require_user(user_id).await?;

        // set semantics, liking twice has no extra effect
        film.likes.insert(user_id);
        self.db.film.update(film).await?;
        Ok(())
    }

    pub async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), Error> {
        debug!("removing like: film={film_id}, user={user_id}");
        let mut film = self.find_by_id(film_id).await?;
        self.require_user(user_id).await?;

        // removing an absent like is a silent no-op
        film.likes.remove(&user_id);
        self.db.film.update(film).await?;
        Ok(())
    }

    /// top `count` films by like count, ascending id as the tie-break
    pub async fn get_popular(&self, count: i32) -> Result<Vec<Film>, Error> {
        if count <= 0 {
            return Err(Error::validation("count must be a positive number"));
        }
        let mut films = self.db.film.find_all().await?;
        films.sort_by(|a, b| b.likes.len().cmp(&a.likes.len()).then(a.id.cmp(&b.id)));
        films.truncate(count as usize);
        Ok(films)
    }

    /// Swap the client-supplied reference tags for the seeded rows, which
    /// also fills in their display names. An unknown id is a validation
    /// failure on this path, not a 404.
    async fn resolve_references(&self, film: &mut Film) -> Result<(), Error> {
        film.mpa = match self.db.mpa.find_by_id(film.mpa.id).await {
            Ok(mpa) => mpa,
            Err(e) if e.is_not_found() => {
                return Err(Error::validation(format!(
                    "mpa rating with id {} does not exist",
                    film.mpa.id
                )))
            }
            Err(e) => return Err(e),
        };

        let mut seen = HashSet::new();
        let mut genres = Vec::with_capacity(film.genres.len());
        for genre in &film.genres {
            if !seen.insert(genre.id) {
                continue;
            }
            match self.db.genre.find_by_id(genre.id).await {
                Ok(genre) => genres.push(genre),
                Err(e) if e.is_not_found() => {
                    return Err(Error::validation(format!(
                        "genre with id {} does not exist",
                        genre.id
                    )))
                }
                Err(e) => return Err(e),
            }
        }
        film.genres = genres;
        Ok(())
    }

    async fn require_user(&self, user_id: i64) -> Result<(), Error> {
        self.db
            .user
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }
}
