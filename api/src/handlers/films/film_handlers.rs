use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use abi::errors::Error;
use abi::model::Film;

use crate::api_utils::custom_extract::{JsonExtractor, PathExtractor};
use crate::AppState;

pub async fn get_all_films(State(state): State<AppState>) -> Result<Json<Vec<Film>>, Error> {
    let films = state.film.find_all().await?;
    Ok(Json(films))
}

pub async fn get_film_by_id(
    State(state): State<AppState>,
    PathExtractor(film_id): PathExtractor<i64>,
) -> Result<Json<Film>, Error> {
    let film = state.film.find_by_id(film_id).await?;
    Ok(Json(film))
}

pub async fn create_film(
    State(state): State<AppState>,
    JsonExtractor(film): JsonExtractor<Film>,
) -> Result<Json<Film>, Error> {
    let film = state.film.create(film).await?;
    Ok(Json(film))
}

/// full overwrite; the film id comes from the body
pub async fn update_film(
    State(state): State<AppState>,
    JsonExtractor(film): JsonExtractor<Film>,
) -> Result<Json<Film>, Error> {
    let film = state.film.update(film).await?;
    Ok(Json(film))
}

pub async fn delete_film(
    State(state): State<AppState>,
    PathExtractor(film_id): PathExtractor<i64>,
) -> Result<(), Error> {
    state.film.delete(film_id).await
}

pub async fn add_like(
    State(state): State<AppState>,
    PathExtractor((film_id, user_id)): PathExtractor<(i64, i64)>,
) -> Result<(), Error> {
    state.film.add_like(film_id, user_id).await
}

pub async fn remove_like(
    State(state): State<AppState>,
    PathExtractor((film_id, user_id)): PathExtractor<(i64, i64)>,
) -> Result<(), Error> {
    state.film.remove_like(film_id, user_id).await
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    #[serde(default = "default_count")]
    count: i32,
}

fn default_count() -> i32 {
    10
}

pub async fn get_popular_films(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<Vec<Film>>, Error> {
    let films = state.film.get_popular(query.count).await?;
    Ok(Json(films))
}
