//! # Validation Module
//!
//! Input validation rules for Clothier.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - pure per-field rules                           │
//! │  ├── Required / length / range checks                                  │
//! │  └── No store access: anything needing state (SKU uniqueness,          │
//! │      discount vs. computed total) is checked by clothier-store         │
//! │                                                                         │
//! │  A failure at any layer blocks the operation before mutation.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use clothier_core::validation::{validate_sku, validate_quantity};
//!
//! assert!(validate_sku("TS-001").is_ok());
//! assert!(validate_quantity(2).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::SaleItem;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use clothier_core::validation::validate_sku;
///
/// assert!(validate_sku("TS-001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    // Check for valid characters (alphanumeric, hyphen, underscore)
    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name (product, customer, or supplier).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain a '@' with text on both sides
///
/// Intentionally loose: the store is not an email deliverability checker.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, promotional giveaways)
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount against the pre-discount total.
///
/// ## Rules
/// - Must be within `[0, subtotal + tax]`
///
/// This closes the known gap where an oversized discount would drive the
/// sale total negative: the ledger computes `subtotal + tax` first and
/// rejects any discount outside the range before creating the sale.
pub fn validate_discount_cents(discount_cents: i64, pre_discount_cents: i64) -> ValidationResult<()> {
    if discount_cents < 0 || discount_cents > pre_discount_cents {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: pre_discount_cents,
        });
    }

    Ok(())
}

// =============================================================================
// Sale Draft Validators
// =============================================================================

/// Validates the line items of a sale draft.
///
/// ## Rules
/// - At least one item
/// - Every item has a product reference selected (non-empty product_id)
/// - Every quantity is positive and within range
/// - Every unit price is non-negative
///
/// Product EXISTENCE is deliberately not required: a line may reference a
/// product that has since been deleted, and the snapshot fields keep the
/// sale record valid (the stock side effect is skipped later).
pub fn validate_sale_items(items: &[SaleItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for item in items {
        if item.product_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "productId".to_string(),
            });
        }
        validate_quantity(item.quantity)?;
        validate_price_cents("price", item.unit_price_cents)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price_cents: i64, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: product_id.to_string(),
            name_snapshot: "Test".to_string(),
            sku_snapshot: "SKU-1".to_string(),
            quantity,
            unit_price_cents: price_cents,
            size: None,
            color: None,
        }
    }

    #[test]
    fn test_validate_sku() {
        // Valid SKUs
        assert!(validate_sku("TS-001").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("product_1").is_ok());

        // Invalid SKUs
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Premium Cotton T-Shirt").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("emma.j@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("emma@").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("price", 0).is_ok());
        assert!(validate_price_cents("price", 2999).is_ok());
        assert!(validate_price_cents("price", -100).is_err());
    }

    #[test]
    fn test_validate_discount_cents() {
        assert!(validate_discount_cents(0, 12957).is_ok());
        assert!(validate_discount_cents(12957, 12957).is_ok());
        assert!(validate_discount_cents(-1, 12957).is_err());
        assert!(validate_discount_cents(12958, 12957).is_err());
    }

    #[test]
    fn test_validate_sale_items() {
        assert!(validate_sale_items(&[]).is_err());
        assert!(validate_sale_items(&[item("", 2999, 1)]).is_err());
        assert!(validate_sale_items(&[item("p1", 2999, 0)]).is_err());
        assert!(validate_sale_items(&[item("p1", -1, 1)]).is_err());

        assert!(validate_sale_items(&[item("p1", 2999, 2), item("p2", 0, 1)]).is_ok());
    }
}
