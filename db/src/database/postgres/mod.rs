mod film;
mod reference;
mod user;

pub(crate) use film::PostgresFilm;
pub(crate) use reference::{PostgresGenre, PostgresMpa};
pub(crate) use user::PostgresUser;
