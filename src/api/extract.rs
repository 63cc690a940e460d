//! Request Extractors

use axum::extract::FromRequest;

use crate::utils::error::AppError;

/// JSON request body whose rejections render as `AppError::Validation`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
