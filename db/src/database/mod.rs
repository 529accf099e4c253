mod film;
mod memory;
mod postgres;
mod reference;
mod user;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use abi::config::Config;
use abi::errors::Error;

pub use film::FilmRepo;
pub use reference::{GenreRepo, MpaRepo};
pub use user::UserRepo;

/// One implementation of every storage capability, behind trait objects
/// so the services stay implementation-agnostic.
pub struct DbRepo {
    pub film: Box<dyn FilmRepo>,
    pub user: Box<dyn UserRepo>,
    pub genre: Box<dyn GenreRepo>,
    pub mpa: Box<dyn MpaRepo>,
}

impl DbRepo {
    pub async fn new(config: &Config) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db.max_connections)
            .connect(&config.db.url())
            .await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            film: Box::new(postgres::PostgresFilm::new(pool.clone())),
            user: Box::new(postgres::PostgresUser::new(pool.clone())),
            genre: Box::new(postgres::PostgresGenre::new(pool.clone())),
            mpa: Box::new(postgres::PostgresMpa::new(pool)),
        }
    }

    /// In-memory variant backed by one shared state; the reference tables
    /// come from the fixed seed constants. Same contract as the postgres
    /// implementation, which is what makes it usable as a test double.
    pub fn in_memory() -> Self {
        let state = memory::SharedState::default();
        Self {
            film: Box::new(memory::MemoryFilm::new(state.clone())),
            user: Box::new(memory::MemoryUser::new(state)),
            genre: Box::new(memory::MemoryGenre),
            mpa: Box::new(memory::MemoryMpa),
        }
    }
}
