use axum::extract::State;
use axum::Json;

use abi::errors::Error;
use abi::model::{Genre, MpaRating};

use crate::api_utils::custom_extract::PathExtractor;
use crate::AppState;

// reference data bypasses the services and reads the lookups directly

pub async fn get_all_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, Error> {
    let genres = state.db.genre.find_all().await?;
    Ok(Json(genres))
}

pub async fn get_genre_by_id(
    State(state): State<AppState>,
    PathExtractor(genre_id): PathExtractor<i32>,
) -> Result<Json<Genre>, Error> {
    let genre = state.db.genre.find_by_id(genre_id).await?;
    Ok(Json(genre))
}

pub async fn get_all_mpa_ratings(
    State(state): State<AppState>,
) -> Result<Json<Vec<MpaRating>>, Error> {
    let ratings = state.db.mpa.find_all().await?;
    Ok(Json(ratings))
}

pub async fn get_mpa_rating_by_id(
    State(state): State<AppState>,
    PathExtractor(mpa_id): PathExtractor<i32>,
) -> Result<Json<MpaRating>, Error> {
    let rating = state.db.mpa.find_by_id(mpa_id).await?;
    Ok(Json(rating))
}
