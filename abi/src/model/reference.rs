use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Seeded genre names; the id of an entry is its index + 1.
pub const GENRE_NAMES: [&str; 6] = [
    "Комедия",
    "Драма",
    "Мультфильм",
    "Триллер",
    "Документальный",
    "Боевик",
];

/// Seeded MPA tiers; the id of an entry is its index + 1.
pub const MPA_RATING_NAMES: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

/// A genre tag. Request bodies may carry the id alone; responses always
/// carry the seeded name as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    #[serde(default)]
    pub name: String,
}

/// An MPA rating tag, same conventions as [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MpaRating {
    pub id: i32,
    #[serde(default)]
    pub name: String,
}
