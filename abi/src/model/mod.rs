mod film;
mod friend;
mod reference;
mod user;

pub use film::Film;
pub use friend::{FriendStatus, Friendship};
pub use reference::{Genre, MpaRating, GENRE_NAMES, MPA_RATING_NAMES};
pub use user::{User, UserUpdate};
