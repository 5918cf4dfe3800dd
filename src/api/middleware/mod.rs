//! Middleware components for request processing.
//!
//! This module contains middleware for logging and request ID tracking,
//! plus the AppError-to-HTTP-response conversion.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::error_to_status_code;
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
