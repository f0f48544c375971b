//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (clothier-core)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds NotFound for direct CRUD misses       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI displays the message                                               │
//! │                                                                         │
//! │  Note the asymmetry: a direct update/delete on an unknown id is an     │
//! │  ERROR, but a sale line referencing a deleted product is a SILENT      │
//! │  SKIP (the sale keeps its snapshot and the stock side effect is        │
//! │  dropped). See the ledger module.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use clothier_core::ValidationError;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found by id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input failed validation; nothing was mutated.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error with context.
    ///
    /// ## Example
    /// ```rust
    /// use clothier_store::StoreError;
    ///
    /// let err = StoreError::not_found("Product", "abc-123");
    /// assert_eq!(err.to_string(), "Product not found: abc-123");
    /// ```
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Customer", "c-42");
        assert_eq!(err.to_string(), "Customer not found: c-42");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required {
            field: "items".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
