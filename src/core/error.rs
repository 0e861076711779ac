//! Error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for API requests
//! - [`DisplayError`] - Fullscreen and orientation requests the browser refused
//! - [`StorageError`] - localStorage writes

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Request timed out")]
    Timeout,
}

/// Best-effort display requests (fullscreen, orientation lock).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("display API not available")]
    Unavailable,
    #[error("display request rejected: {0}")]
    Rejected(String),
}

/// localStorage write errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to save to localStorage")]
    SaveFailed,
}
