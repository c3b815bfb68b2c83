// handlers/mod.rs - request handlers in two tiers
//
// Public (no auth): root, health, signup, login
// Protected (require_auth): /api/breweries
pub mod protected;
pub mod public;

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections render as 400 `{"error": {"message": ...}}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
