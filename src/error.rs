// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type. Nothing in this crate is fatal: every failure is
/// recorded by the repository and control returns to the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// Local validation failure, raised before any network call.
    #[error("Invalid workout: {0}")]
    Validation(String),

    /// Network or backend failure, carrying the backend's message.
    #[error("Backend error: {0}")]
    Remote(String),
}

impl AppError {
    /// Whether this error was raised locally, without reaching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for gateway and repository operations.
pub type Result<T> = std::result::Result<T, AppError>;
