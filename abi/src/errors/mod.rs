use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use std::error::Error as StdError;
use std::fmt;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DuplicatedData,
    BodyParsing,
    PathParsing,
    DbError,
    ConfigReadError,
    ConfigParseError,
    IOError,
    InternalServer,
}

impl ErrorKind {
    /// wire category; clients match on these exact strings
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::Validation | ErrorKind::BodyParsing | ErrorKind::PathParsing => {
                "Validation error"
            }
            ErrorKind::NotFound => "Not found",
            ErrorKind::DuplicatedData => "Duplicated data",
            _ => "Internal server error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::Validation
            | ErrorKind::BodyParsing
            | ErrorKind::PathParsing
            | ErrorKind::DuplicatedData => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    details: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    #[inline]
    pub fn new(
        kind: ErrorKind,
        details: impl Into<String>,
        source: impl StdError + 'static + Send + Sync,
    ) -> Self {
        Self {
            kind,
            details: Some(details.into()),
            source: Some(Box::new(source)),
        }
    }

    #[inline]
    pub fn with_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            details: None,
            source: None,
        }
    }

    #[inline]
    pub fn with_details(kind: ErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            details: Some(details.into()),
            source: None,
        }
    }

    #[inline]
    pub fn validation(details: impl Into<String>) -> Self {
        Self::with_details(ErrorKind::Validation, details)
    }

    #[inline]
    pub fn not_found(details: impl Into<String>) -> Self {
        Self::with_details(ErrorKind::NotFound, details)
    }

    #[inline]
    pub fn duplicated(details: impl Into<String>) -> Self {
        Self::with_details(ErrorKind::DuplicatedData, details)
    }

    #[inline]
    pub fn body_parsing(details: impl Into<String>) -> Self {
        Self::with_details(ErrorKind::BodyParsing, details)
    }

    #[inline]
    pub fn path_parsing(err: impl StdError + 'static + Send + Sync) -> Self {
        Self::new(ErrorKind::PathParsing, err.to_string(), err)
    }

    #[inline]
    pub fn internal(error: impl StdError + 'static + Send + Sync) -> Self {
        Self {
            kind: ErrorKind::InternalServer,
            details: Some(error.to_string()),
            source: Some(Box::new(error)),
        }
    }

    #[inline]
    pub fn internal_with_details(details: impl Into<String>) -> Self {
        Self::with_details(ErrorKind::InternalServer, details)
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{:?}: {}", self.kind, details),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("request failed: {:?}", self);
        let message = self
            .details
            .clone()
            .unwrap_or_else(|| self.kind.category().to_string());
        let body = json!({
            "error": self.kind.category(),
            "message": message,
        });
        (self.kind.status_code(), Json(body)).into_response()
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value.to_string(), value)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self::new(ErrorKind::ConfigParseError, value.to_string(), value)
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        // a violated unique index is a client error, not a server one
        if let sqlx::Error::Database(ref e) = value {
            if e.is_unique_violation() {
                return Self::with_details(ErrorKind::DuplicatedData, e.to_string());
            }
        }
        Self::new(ErrorKind::DbError, value.to_string(), value)
    }
}
