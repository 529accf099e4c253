use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::films::film_handlers::{
    add_like, create_film, delete_film, get_all_films, get_film_by_id, get_popular_films,
    remove_like, update_film,
};
use crate::handlers::reference::reference_handlers::{
    get_all_genres, get_all_mpa_ratings, get_genre_by_id, get_mpa_rating_by_id,
};
use crate::handlers::users::user_handlers::{
    add_friend, confirm_friend, create_user, delete_user, get_all_users, get_common_friends,
    get_friends, get_user_by_id, remove_friend, update_user,
};
use crate::AppState;

pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .nest("/films", film_routes())
        .nest("/users", user_routes())
        .merge(reference_routes())
        .with_state(state)
}

fn film_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_films))
        .route("/", post(create_film))
        .route("/", put(update_film))
        .route("/popular", get(get_popular_films))
        .route("/:id", get(get_film_by_id))
        .route("/:id", delete(delete_film))
        .route("/:id/like/:user_id", put(add_like))
        .route("/:id/like/:user_id", delete(remove_like))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_users))
        .route("/", post(create_user))
        .route("/", put(update_user))
        .route("/:id", get(get_user_by_id))
        .route("/:id", delete(delete_user))
        .route("/:id/friends", get(get_friends))
        .route("/:id/friends/common/:other_id", get(get_common_friends))
        .route("/:id/friends/:friend_id", put(add_friend))
        .route("/:id/friends/:friend_id", delete(remove_friend))
        .route("/:id/friends/:friend_id/confirm", put(confirm_friend))
}

fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(get_all_genres))
        .route("/genres/:id", get(get_genre_by_id))
        .route("/mpa", get(get_all_mpa_ratings))
        .route("/mpa/:id", get(get_mpa_rating_by_id))
}
