//! # Input Drafts and Patches
//!
//! Request payloads the UI sends into the store:
//!
//! - `New*` types carry every caller-supplied field of an entity; the store
//!   adds the id and timestamps on create.
//! - `*Patch` types are all-`Option` partial field sets merged into an
//!   existing record; `None` means "leave unchanged".
//! - [`SaleDraft`] is the input to `record_sale`. Its items are full
//!   [`SaleItem`] snapshots: the UI resolves the product at selection time
//!   and copies name/sku/price, exactly like the sale form it replaces.
//!
//! `CustomerPatch` deliberately has no `total_purchases_cents` or
//! `last_purchase` field: those balances belong to the ledger, and exposing
//! them here would break the monotonic accumulator invariant.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{PaymentMethod, SaleItem};

// =============================================================================
// Product Inputs
// =============================================================================

/// Caller-supplied fields for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub sku: String,
    pub price_cents: i64,
    pub cost_price_cents: i64,
    pub stock_quantity: i64,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub material: Option<String>,
    pub brand: Option<String>,
    pub supplier: Option<String>,
}

/// Partial update for a product. `stock_quantity` is editable here because
/// restocking is a direct inventory edit, not a ledger operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<Option<String>>,
    pub sku: Option<String>,
    pub price_cents: Option<i64>,
    pub cost_price_cents: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub images: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub material: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub supplier: Option<Option<String>>,
}

// =============================================================================
// Customer Inputs
// =============================================================================

/// Caller-supplied fields for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub loyalty_points: Option<i64>,
}

/// Partial update for a customer.
///
/// Ledger-owned balances (`total_purchases_cents`, `last_purchase`) are
/// intentionally absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub loyalty_points: Option<Option<i64>>,
}

// =============================================================================
// Supplier Inputs
// =============================================================================

/// Caller-supplied fields for creating a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub product_ids: Vec<String>,
}

/// Partial update for a supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Option<String>>,
    pub product_ids: Option<Vec<String>>,
    #[ts(as = "Option<Option<String>>")]
    pub last_order: Option<Option<chrono::DateTime<chrono::Utc>>>,
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The input to `record_sale`.
///
/// The ledger computes totals, assigns identity and timestamp, resolves the
/// customer name, and applies all side effects. Nothing here is trusted:
/// the draft is validated in full before any mutation happens.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    /// Line items with product snapshots already filled in by the UI.
    pub items: Vec<SaleItem>,
    /// Customer reference; `None` records a guest sale.
    pub customer_id: Option<String>,
    /// Staff attribution (denormalized, copied onto the sale).
    pub staff_id: String,
    pub staff_name: String,
    pub payment_method: PaymentMethod,
    /// Absolute discount in cents; `None` means no discount.
    pub discount_cents: Option<i64>,
}
