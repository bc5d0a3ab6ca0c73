//! Extractors whose rejections render through [`AppError`].
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; these wrap
//! them so a malformed body or path yields the standard error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] rejections.
///
/// Invalid JSON syntax is a 400; valid JSON of the wrong shape is a 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with [`AppError`] rejections.
///
/// A path segment that does not parse (e.g. `/venues/abc`) is a 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
