//! # AidConnect Core
//!
//! Core types, errors, and utilities for the AidConnect API.
//!
//! This crate provides foundational types used throughout the AidConnect application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Pagination utilities for API responses
//!
//! # Example
//!
//! ```ignore
//! use aidconnect_core::errors::AppError;
//! use aidconnect_core::pagination::{PaginationParams, PaginationMeta};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Aid request not found"));
//!
//! // Use pagination
//! let params = PaginationParams::default();
//! let limit = params.limit();
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams};
