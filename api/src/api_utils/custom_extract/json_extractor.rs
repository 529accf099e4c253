use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
};

use abi::errors::Error;

// the fixed message every unreadable body maps to
const BODY_PARSING_MESSAGE: &str = "request body is missing or malformed";

/// Our own `Json` that customizes the rejection from `axum::Json`: every
/// unreadable or empty body becomes the same validation-class error.
pub struct JsonExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                tracing::debug!("json body rejected: {}", rejection.body_text());
                Err(Error::body_parsing(BODY_PARSING_MESSAGE))
            }
        }
    }
}
