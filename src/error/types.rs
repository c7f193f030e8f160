// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Which kind of entity a lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Item,
    User,
}

/// Error classification callers can match on, independent of wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound(Resource),
    InvalidInput,
    Unauthorized,
    Internal,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },

    /// Reserved; no operation raises it yet
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn item_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            resource: Resource::Item,
            id: id.into(),
        }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            resource: Resource::User,
            id: id.into(),
        }
    }

    /// Kind of the innermost error, looking through any `Context` layers
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(_) => ErrorKind::InvalidInput,
            AppError::NotFound { resource, .. } => ErrorKind::NotFound(*resource),
            AppError::Unauthorized => ErrorKind::Unauthorized,
            AppError::LockPoisoned(_) | AppError::Io(_) | AppError::Config(_) => {
                ErrorKind::Internal
            }
            AppError::Context { source, .. } => source.kind(),
        }
    }

    /// The innermost error, looking through any `Context` layers
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Item => write!(f, "Item"),
            Resource::User => write!(f, "User"),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Attach a human-readable prefix to an error while keeping its kind
pub trait AppResultExt<T> {
    fn context(self, context: impl Into<String>) -> AppResult<T>;
}

impl<T, E> AppResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, context: impl Into<String>) -> AppResult<T> {
        self.map_err(|e| AppError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
