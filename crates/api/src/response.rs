//! Shared response envelope for API handlers.
//!
//! Every JSON endpoint wraps its payload as `{ "success": true, "data": ... }`
//! on success and `{ "success": false, "error": "..." }` on failure (the
//! failure half is produced by [`crate::error::AppError`]).

use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
