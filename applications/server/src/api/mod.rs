/// API route modules
pub mod accounts;
pub mod health;
pub mod notes;

use crate::error::ServerError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections use the `{error, message}` shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
