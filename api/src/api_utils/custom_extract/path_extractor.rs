use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use abi::errors::Error;

// We define our own `Path` extractor that customizes the errors from
// `axum::extract::Path`
pub struct PathExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathExtractor<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            // a non-numeric id and the like; a client error
            Err(PathRejection::FailedToDeserializePathParams(inner)) => {
                Err(Error::path_parsing(inner))
            }
            // anything else means the route table and the handler disagree
            Err(rejection) => Err(Error::internal_with_details(format!(
                "unhandled path rejection: {rejection}"
            ))),
        }
    }
}
