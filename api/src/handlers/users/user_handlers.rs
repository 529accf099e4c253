use axum::extract::State;
use axum::Json;

use abi::errors::Error;
use abi::model::{User, UserUpdate};

use crate::api_utils::custom_extract::{JsonExtractor, PathExtractor};
use crate::AppState;

pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, Error> {
    let users = state.user.find_all().await?;
    Ok(Json(users))
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    PathExtractor(user_id): PathExtractor<i64>,
) -> Result<Json<User>, Error> {
    let user = state.user.find_by_id(user_id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonExtractor(user): JsonExtractor<User>,
) -> Result<Json<User>, Error> {
    let user = state.user.create(user).await?;
    Ok(Json(user))
}

/// partial overwrite; the user id comes from the body
pub async fn update_user(
    State(state): State<AppState>,
    JsonExtractor(update): JsonExtractor<UserUpdate>,
) -> Result<Json<User>, Error> {
    let user = state.user.update(update).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    PathExtractor(user_id): PathExtractor<i64>,
) -> Result<(), Error> {
    state.user.delete(user_id).await
}

pub async fn add_friend(
    State(state): State<AppState>,
    PathExtractor((user_id, friend_id)): PathExtractor<(i64, i64)>,
) -> Result<(), Error> {
    state.user.add_friend(user_id, friend_id).await
}

pub async fn confirm_friend(
    State(state): State<AppState>,
    PathExtractor((user_id, friend_id)): PathExtractor<(i64, i64)>,
) -> Result<(), Error> {
    state.user.confirm_friend(user_id, friend_id).await
}

pub async fn remove_friend(
    State(state): State<AppState>,
    PathExtractor((user_id, friend_id)): PathExtractor<(i64, i64)>,
) -> Result<(), Error> {
    state.user.remove_friend(user_id, friend_id).await
}

pub async fn get_friends(
    State(state): State<AppState>,
    PathExtractor(user_id): PathExtractor<i64>,
) -> Result<Json<Vec<User>>, Error> {
    let friends = state.user.get_friends(user_id).await?;
    Ok(Json(friends))
}

pub async fn get_common_friends(
    State(state): State<AppState>,
    PathExtractor((user_id, other_id)): PathExtractor<(i64, i64)>,
) -> Result<Json<Vec<User>>, Error> {
    let friends = state.user.get_common_friends(user_id, other_id).await?;
    Ok(Json(friends))
}
