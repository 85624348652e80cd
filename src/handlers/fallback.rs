use crate::core::error::PanelError;
use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

pub async fn fallback_handler(uri: Uri) -> Response {
    PanelError::NotFound(format!("no route for {}", uri.path())).into_response()
}
