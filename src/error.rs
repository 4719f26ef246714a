//! Application-level errors rendered as HTML pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::repositories::ContentError;

/// Page shown for unknown paths and missing documents.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub message: String,
}

/// Page shown when a request cannot be served.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        if err.is_not_found() {
            AppError::not_found(err.to_string())
        } else {
            AppError::upstream(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::NotFound { message } => {
                tracing::debug!(%message, "Responding with not found page");
                (
                    status,
                    NotFoundTemplate {
                        title: "Page not found".to_string(),
                        message: "The page you were looking for does not exist.".to_string(),
                    },
                )
                    .into_response()
            }
            AppError::Validation { message } => (
                status,
                ErrorTemplate {
                    title: "Bad request".to_string(),
                    message,
                },
            )
                .into_response(),
            AppError::Upstream { message } => {
                error!(%message, "Request failed");
                (
                    status,
                    ErrorTemplate {
                        title: "Error".to_string(),
                        message: "Something went wrong while loading this page.".to_string(),
                    },
                )
                    .into_response()
            }
        }
    }
}
