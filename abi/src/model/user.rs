use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Friendship;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: String,
    pub birthday: NaiveDate,
    #[serde(default)]
    pub friends: Vec<Friendship>,
}

/// Partial overwrite payload for user updates; absent fields keep the
/// stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub id: i64,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}
