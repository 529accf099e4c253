use async_trait::async_trait;

use abi::errors::Error;
use abi::model::Film;

/// Storage contract for film aggregates. Implementations persist the
/// scalar row plus the dependent genre-link and like rows as one logical
/// record.
#[async_trait]
pub trait FilmRepo: Send + Sync {
    /// insert a new film and return it with the generated id
    async fn create(&self, film: Film) -> Result<Film, Error>;

    /// overwrite an existing film; dependent rows are fully replaced,
    /// not diffed. NotFound when no row matches the id.
    async fn update(&self, film: Film) -> Result<Film, Error>;

    /// remove a film and its dependent rows; NotFound when absent
    async fn delete(&self, film_id: i64) -> Result<(), Error>;

    async fn find_by_id(&self, film_id: i64) -> Result<Option<Film>, Error>;

    /// all films, ordered by ascending id
    async fn find_all(&self) -> Result<Vec<Film>, Error>;
}
