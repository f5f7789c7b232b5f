//! Shared types for the Bistro backend
//!
//! Request/response DTOs, the unified error system and BSON → JSON document
//! rendering, used by the server and its integration tests.

pub mod document;
pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
