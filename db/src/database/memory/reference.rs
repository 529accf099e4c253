use async_trait::async_trait;

use abi::errors::Error;
use abi::model::{Genre, MpaRating, GENRE_NAMES, MPA_RATING_NAMES};

use crate::database::reference::{GenreRepo, MpaRepo};

fn in_range(id: i32, len: usize) -> bool {
    id >= 1 && (id as usize) <= len
}

/// genre lookup over the fixed seed table
pub struct MemoryGenre;

#[async_trait]
impl GenreRepo for MemoryGenre {
    async fn find_all(&self) -> Result<Vec<Genre>, Error> {
        Ok(GENRE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Genre {
                id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect())
    }

    async fn find_by_id(&self, genre_id: i32) -> Result<Genre, Error> {
        if in_range(genre_id, GENRE_NAMES.len()) {
            Ok(Genre {
                id: genre_id,
                name: GENRE_NAMES[genre_id as usize - 1].to_string(),
            })
        } else {
            Err(Error::not_found(format!(
                "genre with id {genre_id} not found"
            )))
        }
    }

    async fn exists(&self, genre_id: i32) -> Result<bool, Error> {
        Ok(in_range(genre_id, GENRE_NAMES.len()))
    }
}

/// MPA rating lookup over the fixed seed table
pub struct MemoryMpa;

#[async_trait]
impl MpaRepo for MemoryMpa {
    async fn find_all(&self) -> Result<Vec<MpaRating>, Error> {
        Ok(MPA_RATING_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| MpaRating {
                id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect())
    }

    async fn find_by_id(&self, mpa_id: i32) -> Result<MpaRating, Error> {
        if in_range(mpa_id, MPA_RATING_NAMES.len()) {
            Ok(MpaRating {
                id: mpa_id,
                name: MPA_RATING_NAMES[mpa_id as usize - 1].to_string(),
            })
        } else {
            Err(Error::not_found(format!(
                "mpa rating with id {mpa_id} not found"
            )))
        }
    }

    async fn exists(&self, mpa_id: i32) -> Result<bool, Error> {
        Ok(in_range(mpa_id, MPA_RATING_NAMES.len()))
    }
}
