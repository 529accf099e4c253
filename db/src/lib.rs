mod database;

pub use database::{DbRepo, FilmRepo, GenreRepo, MpaRepo, UserRepo};
