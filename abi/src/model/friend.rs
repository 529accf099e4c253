use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One directed friendship edge, owned by the user it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub friend_id: i64,
    #[serde(default)]
    pub status: FriendStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FriendStatus {
    #[default]
    Unconfirmed,
    Confirmed,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendStatus::Unconfirmed => "UNCONFIRMED",
            FriendStatus::Confirmed => "CONFIRMED",
        }
    }

    /// inverse of [`FriendStatus::as_str`], for rows read back from storage
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "UNCONFIRMED" => Some(FriendStatus::Unconfirmed),
            "CONFIRMED" => Some(FriendStatus::Confirmed),
            _ => None,
        }
    }
}

impl Display for FriendStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
