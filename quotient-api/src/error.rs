use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::render::{self, Flash};

#[derive(Debug)]
pub enum AppError {
    /// Malformed input or a business-rule violation. Rendered into the page
    /// as an error flash, like any other form feedback.
    Validation(String),
    /// Anything unexpected. Logged, and surfaced as a generic message.
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                Html(render::page(Some(&Flash::error(msg)), None)).into_response()
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::page(
                        Some(&Flash::error("An unexpected error occurred; please try again")),
                        None,
                    )),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
