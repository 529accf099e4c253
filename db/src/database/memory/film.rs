use async_trait::async_trait;

use abi::errors::Error;
use abi::model::Film;

use crate::database::film::FilmRepo;

use super::SharedState;

pub struct MemoryFilm {
    state: SharedState,
}

impl MemoryFilm {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl FilmRepo for MemoryFilm {
    async fn create(&self, mut film: Film) -> Result<Film, Error> {
        let mut state = self.state.write().unwrap();
        state.last_film_id += 1;
        film.id = state.last_film_id;
        state.films.insert(film.id, film.clone());
        Ok(film)
    }

    async fn update(&self, film: Film) -> Result<Film, Error> {
        let mut state = self.state.write().unwrap();
        if !state.films.contains_key(&film.id) {
            return Err(Error::not_found(format!(
                "film with id {} not found",
                film.id
            )));
        }
        state.films.insert(film.id, film.clone());
        Ok(film)
    }

    async fn delete(&self, film_id: i64) -> Result<(), Error> {
        let mut state = self.state.write().unwrap();
        if state.films.remove(&film_id).is_none() {
            return Err(Error::not_found(format!(
                "film with id {film_id} not found"
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, film_id: i64) -> Result<Option<Film>, Error> {
        Ok(self.state.read().unwrap().films.get(&film_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Film>, Error> {
        let mut films: Vec<Film> = self.state.read().unwrap().films.values().cloned().collect();
        films.sort_by_key(|f| f.id);
        Ok(films)
    }
}
