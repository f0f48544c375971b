//! # Sale Totals Calculator
//!
//! Pure arithmetic for the subtotal / tax / total contract of a sale.
//!
//! ## The Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ (unit_price_i × quantity_i)     exact integer math        │
//! │  tax      = subtotal × rate                   rounded half-up, ONCE     │
//! │  total    = subtotal + tax − discount                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caller Responsibilities
//! This module does NOT validate. The ledger rejects an empty item list,
//! non-positive quantities, negative prices, and a discount outside
//! `[0, subtotal + tax]` BEFORE calling in here. Given valid inputs, these
//! functions cannot fail and never produce a negative total.

use crate::money::Money;
use crate::types::{SaleItem, TaxRate};

// =============================================================================
// Sale Totals
// =============================================================================

/// The computed money breakdown of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl SaleTotals {
    /// Verifies the arithmetic invariant `total = subtotal + tax − discount`.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.total_cents == self.subtotal_cents + self.tax_cents - self.discount_cents
    }
}

/// Sums line totals into the pre-tax subtotal. Exact, no rounding.
pub fn subtotal(items: &[SaleItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_total())
}

/// Computes the full totals breakdown for a sale.
///
/// ## Example
/// ```rust
/// use clothier_core::totals::compute_totals;
/// use clothier_core::types::{SaleItem, TaxRate};
///
/// let items = vec![SaleItem {
///     product_id: "p1".to_string(),
///     name_snapshot: "Slim Fit Jeans".to_string(),
///     sku_snapshot: "BJ-002".to_string(),
///     quantity: 1,
///     unit_price_cents: 5999,
///     size: None,
///     color: None,
/// }];
///
/// let totals = compute_totals(&items, TaxRate::from_bps(800), 0);
/// assert_eq!(totals.subtotal_cents, 5999);
/// assert_eq!(totals.tax_cents, 480); // 479.92 rounds up
/// assert_eq!(totals.total_cents, 6479);
/// ```
pub fn compute_totals(items: &[SaleItem], tax_rate: TaxRate, discount_cents: i64) -> SaleTotals {
    let subtotal = subtotal(items);
    let tax = subtotal.calculate_tax(tax_rate);
    let total = subtotal + tax - Money::from_cents(discount_cents);

    SaleTotals {
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        discount_cents,
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SALES_TAX_BPS;

    fn item(price_cents: i64, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: "p1".to_string(),
            name_snapshot: "Test Item".to_string(),
            sku_snapshot: "SKU-1".to_string(),
            quantity,
            unit_price_cents: price_cents,
            size: None,
            color: None,
        }
    }

    #[test]
    fn test_subtotal_is_exact_sum() {
        let items = vec![item(2999, 2), item(5999, 1), item(0, 5)];
        assert_eq!(subtotal(&items).cents(), 2999 * 2 + 5999);
    }

    #[test]
    fn test_totals_no_discount() {
        // Two t-shirts + one pair of jeans = $119.97 before tax
        let items = vec![item(2999, 2), item(5999, 1)];
        let totals = compute_totals(&items, TaxRate::from_bps(SALES_TAX_BPS), 0);

        assert_eq!(totals.subtotal_cents, 11997);
        // 11997 × 8% = 959.76 → 960
        assert_eq!(totals.tax_cents, 960);
        assert_eq!(totals.total_cents, 12957);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_totals_with_discount() {
        let items = vec![item(2999, 3), item(7999, 1)];
        let totals = compute_totals(&items, TaxRate::from_bps(SALES_TAX_BPS), 1000);

        assert_eq!(totals.subtotal_cents, 16996);
        // 16996 × 8% = 1359.68 → 1360
        assert_eq!(totals.tax_cents, 1360);
        assert_eq!(totals.discount_cents, 1000);
        assert_eq!(totals.total_cents, 16996 + 1360 - 1000);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_discount_equal_to_subtotal_plus_tax_gives_zero_total() {
        let items = vec![item(1000, 1)];
        let totals = compute_totals(&items, TaxRate::from_bps(SALES_TAX_BPS), 1080);
        assert_eq!(totals.total_cents, 0);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_single_rounding_point() {
        // Rounding happens on the SUMMED subtotal, never per line. Three
        // $0.56 lines: 168 × 8% = 13.44 → 13, not 3 × round(4.48) = 12.
        let items = vec![item(56, 1), item(56, 1), item(56, 1)];
        let totals = compute_totals(&items, TaxRate::from_bps(SALES_TAX_BPS), 0);
        assert_eq!(totals.tax_cents, 13);
    }

    #[test]
    fn test_free_items_are_allowed() {
        let items = vec![item(0, 3)];
        let totals = compute_totals(&items, TaxRate::from_bps(SALES_TAX_BPS), 0);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }
}
