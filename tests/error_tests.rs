// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use running_log::error::AppError;

#[test]
fn test_is_validation_matches() {
    let err = AppError::Validation("description must not be empty".to_string());
    assert!(err.is_validation());

    let err = AppError::Remote("HTTP 500: upstream down".to_string());
    assert!(!err.is_validation());
}

#[test]
fn test_messages_carry_backend_detail() {
    let err = AppError::Remote("HTTP 401: invalid apikey".to_string());
    assert_eq!(err.to_string(), "Backend error: HTTP 401: invalid apikey");

    let err = AppError::Validation("description must not be empty".to_string());
    assert_eq!(err.to_string(), "Invalid workout: description must not be empty");
}
