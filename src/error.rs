// To-Do Lists - Error Types
// Failures that escape a handler; validation failures never reach this type

/// Errors raised by the storage layer and the page handlers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested list id has no row in `lists`
    #[error("list {0} not found")]
    ListNotFound(String),

    /// The list already holds an item with this exact text
    #[error("duplicate item in list {list_id}")]
    DuplicateItem { list_id: i64 },

    /// SQLite failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A request panicked while holding the connection
    #[error("database connection lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "server")]
mod response {
    use super::Error;
    use axum::{
        http::StatusCode,
        response::{Html, IntoResponse, Response},
    };

    impl IntoResponse for Error {
        fn into_response(self) -> Response {
            match self {
                Error::ListNotFound(id) => {
                    tracing::debug!(list_id = %id, "list not found");
                    (
                        StatusCode::NOT_FOUND,
                        Html(crate::pages::render_not_found()),
                    )
                        .into_response()
                }
                other => {
                    tracing::error!(error = %other, "request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
                }
            }
        }
    }
}
