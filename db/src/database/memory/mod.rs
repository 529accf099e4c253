mod film;
mod reference;
mod user;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use abi::model::{Film, User};

pub(crate) use film::MemoryFilm;
pub(crate) use reference::{MemoryGenre, MemoryMpa};
pub(crate) use user::MemoryUser;

/// Both entity maps live behind one lock so that cross-entity cleanup on
/// delete stays atomic, matching what the relational cascade does.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub films: HashMap<i64, Film>,
    pub users: HashMap<i64, User>,
    pub last_film_id: i64,
    pub last_user_id: i64,
}

pub(crate) type SharedState = Arc<RwLock<State>>;
