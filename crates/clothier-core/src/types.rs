//! # Domain Types
//!
//! Core domain types used throughout Clothier.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  sku (business) │   │  items          │   │  email          │       │
//! │  │  name           │   │  status         │   │  total_purchases│       │
//! │  │  price_cents    │   │  total_cents    │   │  last_purchase  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Supplier     │   │   SaleStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Completed      │   │  Cash           │       │
//! │  │  product_ids    │   │  Returned       │   │  Card           │       │
//! │  │  last_order     │   │  Cancelled      │   │  Mobile         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  DashboardSummary is DERIVED - recomputed on demand, never stored.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Products have:
//! - `id`: UUID v4 - immutable, assigned by the store
//! - `sku`: business identifier - human-readable, unique, potentially mutable
//!
//! ## Snapshot Pattern
//! `SaleItem` is an owned value embedded in `Sale`. It carries frozen copies
//! of the product's name/sku/price at the moment of sale, so later product
//! edits (or deletion) never rewrite sales history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the store-wide sales tax, see [`crate::SALES_TAX_BPS`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A clothing product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,

    /// Display name shown in inventory and on sale records.
    pub name: String,

    /// Longer description for product detail views.
    pub description: String,

    /// Top-level category ("Tops", "Bottoms", "Dresses", ...).
    pub category: String,

    /// Optional finer category ("T-Shirts", "Jeans", ...).
    pub subcategory: Option<String>,

    /// Stock Keeping Unit - unique business identifier.
    pub sku: String,

    /// Retail price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Cost price in cents (for margin calculations).
    pub cost_price_cents: i64,

    /// Current stock level. Non-negative once committed; the ledger does
    /// not block oversells, so a transient negative value is possible.
    pub stock_quantity: i64,

    /// Product image URLs.
    pub images: Vec<String>,

    /// Available size variants ("S", "M", "32", ...).
    pub sizes: Vec<String>,

    /// Available color variants.
    pub colors: Vec<String>,

    /// Fabric composition ("100% Cotton", ...).
    pub material: Option<String>,

    /// Brand name.
    pub brand: Option<String>,

    /// Supplier display name (denormalized, not an id).
    pub supplier: Option<String>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (edits and stock decrements).
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the retail price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the cost price as a Money type.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_price_cents)
    }

    /// Checks if the product counts toward the dashboard low-stock metric.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < crate::LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// `total_purchases_cents` and `last_purchase` are ledger-owned balances:
/// they are only ever written by the ledger when a sale referencing this
/// customer is recorded, and `total_purchases_cents` never decreases.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Loyalty program balance, if enrolled.
    pub loyalty_points: Option<i64>,
    /// Lifetime purchase accumulator (monotonically non-decreasing).
    pub total_purchases_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent sale referencing this customer.
    #[ts(as = "Option<String>")]
    pub last_purchase: Option<DateTime<Utc>>,
}

impl Customer {
    /// Returns lifetime purchases as Money.
    #[inline]
    pub fn total_purchases(&self) -> Money {
        Money::from_cents(self.total_purchases_cents)
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a sale transaction.
///
/// Status is the only field of a created sale that administrative edits may
/// change. Monetary fields and line items are frozen at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Sale went through and counts toward revenue.
    Completed,
    /// Goods came back; excluded from revenue.
    Returned,
    /// Sale was cancelled; excluded from revenue.
    Cancelled,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Completed
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Mobile wallet payment.
    Mobile,
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a sale.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Product reference. May dangle after the product is deleted; the
    /// snapshot fields below keep the sale record self-contained.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name_snapshot: String,
    /// SKU at time of sale (frozen).
    pub sku_snapshot: String,
    /// Quantity sold.
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Size variant sold, if the product has sizes.
    pub size: Option<String>,
    /// Color variant sold, if the product has colors.
    pub color: Option<String>,
}

impl SaleItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction.
///
/// ## Invariant
/// `total_cents == subtotal_cents + tax_cents - discount_cents`, established
/// by the ledger at creation time and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Ordered line items (owned snapshots, see [`SaleItem`]).
    pub items: Vec<SaleItem>,
    /// Customer reference, absent for guest sales. May dangle after the
    /// customer is deleted.
    pub customer_id: Option<String>,
    /// Customer name at time of sale (frozen).
    pub customer_name: Option<String>,
    /// Staff member who rang up the sale (denormalized attribution).
    pub staff_id: String,
    pub staff_name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
}

impl Sale {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the pre-tax subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Checks whether the sale counts toward revenue.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == SaleStatus::Completed
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A wholesale supplier.
///
/// `product_ids` is a by-value list of product ids with NO enforced
/// referential integrity: deleting a product leaves its id behind here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    /// Ids of products sourced from this supplier.
    pub product_ids: Vec<String>,
    /// When the store last placed an order with this supplier.
    #[ts(as = "Option<String>")]
    pub last_order: Option<DateTime<Utc>>,
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// One row in the dashboard's top-products ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    /// Name from the latest sale snapshot of this product.
    pub name: String,
    /// Units sold across all completed sales.
    pub quantity: i64,
    /// Revenue in cents across all completed sales.
    pub amount_cents: i64,
}

/// A point-in-time snapshot of dashboard aggregates.
///
/// Derived, never stored: recomputed from the Sales and Products collections
/// on every read. Callers re-invoke after any mutation to see fresh data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Revenue from completed sales in the last 24 hours.
    pub daily_sales_cents: i64,
    /// Revenue from completed sales in the last 7 days.
    pub weekly_sales_cents: i64,
    /// Revenue from completed sales in the last 30 days.
    pub monthly_sales_cents: i64,
    /// Count of products below the low-stock threshold.
    pub low_stock_items: i64,
    /// Best sellers by cumulative completed-sale amount, highest first.
    pub top_selling_products: Vec<TopProduct>,
    /// Most recent sales by creation time, newest first (any status).
    pub recent_sales: Vec<Sale>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_sale_status_default() {
        assert_eq!(SaleStatus::default(), SaleStatus::Completed);
    }

    #[test]
    fn test_enum_wire_values_match_frontend() {
        // The TypeScript UI stores these as plain lowercase strings.
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mobile).unwrap(),
            "\"mobile\""
        );
        assert_eq!(
            serde_json::to_string(&SaleStatus::Returned).unwrap(),
            "\"returned\""
        );
        let status: SaleStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, SaleStatus::Cancelled);
    }

    #[test]
    fn test_sale_item_line_total() {
        let item = SaleItem {
            product_id: "p1".to_string(),
            name_snapshot: "Premium Cotton T-Shirt".to_string(),
            sku_snapshot: "TS-001".to_string(),
            quantity: 2,
            unit_price_cents: 2999,
            size: Some("M".to_string()),
            color: Some("White".to_string()),
        };
        assert_eq!(item.line_total().cents(), 5998);
    }
}
