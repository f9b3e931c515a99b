//! Service layer for business logic.
//!
//! Separates network and file-system work from UI handlers for better
//! testability and maintainability.

pub mod download_service;
pub mod form_service;

pub use form_service::FormService;
