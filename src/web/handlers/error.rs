//! Error page rendering.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Template for the error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub error: String,
}

/// Converts an [`AppError`] into an HTML error page with its mapped status.
pub fn error_response(err: AppError) -> Response {
    let status = err.status();
    let template = ErrorTemplate {
        error: err.message().to_string(),
    };
    (status, template).into_response()
}
