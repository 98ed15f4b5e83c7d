// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Endpoint**: Prediction service location
//! - **Retry**: Attempt count and exponential backoff
//! - **Timeout**: Optional per-attempt request timeout

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Prediction endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://Subhrapratim07-Dog-Emotion-API-Docker.hf.space/predict";

// ==========================================================================
// Retry Defaults
// ==========================================================================

/// Default number of attempts per submission.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Minimum number of attempts (a single try, no retry).
pub const MIN_MAX_ATTEMPTS: u32 = 1;

/// Maximum number of attempts.
pub const MAX_MAX_ATTEMPTS: u32 = 10;

/// Default wait before the first retry (in milliseconds).
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1000;

/// Minimum initial backoff (in milliseconds).
pub const MIN_INITIAL_BACKOFF_MS: u64 = 0;

/// Maximum initial backoff (in milliseconds).
pub const MAX_INITIAL_BACKOFF_MS: u64 = 60_000;

/// Default backoff multiplier.
pub const DEFAULT_BACKOFF_FACTOR: u32 = 2;

/// Minimum backoff multiplier (constant delay).
pub const MIN_BACKOFF_FACTOR: u32 = 1;

/// Maximum backoff multiplier.
pub const MAX_BACKOFF_FACTOR: u32 = 10;

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Minimum per-attempt timeout when one is configured (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum per-attempt timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_ATTEMPTS > 0);
    assert!(MAX_MAX_ATTEMPTS >= MIN_MAX_ATTEMPTS);
    assert!(DEFAULT_MAX_ATTEMPTS >= MIN_MAX_ATTEMPTS);
    assert!(DEFAULT_MAX_ATTEMPTS <= MAX_MAX_ATTEMPTS);

    assert!(MAX_INITIAL_BACKOFF_MS >= MIN_INITIAL_BACKOFF_MS);
    assert!(DEFAULT_INITIAL_BACKOFF_MS >= MIN_INITIAL_BACKOFF_MS);
    assert!(DEFAULT_INITIAL_BACKOFF_MS <= MAX_INITIAL_BACKOFF_MS);

    assert!(MIN_BACKOFF_FACTOR > 0);
    assert!(MAX_BACKOFF_FACTOR >= MIN_BACKOFF_FACTOR);
    assert!(DEFAULT_BACKOFF_FACTOR >= MIN_BACKOFF_FACTOR);
    assert!(DEFAULT_BACKOFF_FACTOR <= MAX_BACKOFF_FACTOR);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
};
