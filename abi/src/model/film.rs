use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Genre, MpaRating};

/// Film aggregate: scalar fields plus the like-set and reference tags.
/// `id` is 0 until the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub likes: HashSet<i64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub mpa: MpaRating,
}
