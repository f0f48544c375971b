//! # Error Types
//!
//! Domain-specific error types for clothier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  clothier-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  clothier-store errors (separate crate)                                 │
//! │  └── StoreError       - NotFound + wrapped ValidationError              │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → UI displays the message          │
//! │                                                                         │
//! │  There is deliberately NO fatal error class: the core performs no I/O, │
//! │  so nothing can fail outside of validation and missing ids.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, SKU, id, ...)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They are surfaced synchronously and block the operation entirely:
/// a validation failure never leaves partial mutations behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
