//! # clothier-core: Pure Business Logic for Clothier
//!
//! This crate is the **heart** of Clothier, a retail management core for a
//! clothing store. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Clothier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript UI)                       │   │
//! │  │   Inventory UI ──► Sale Form ──► Customers UI ──► Dashboard    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             clothier-store (Entity Store + Ledger)              │   │
//! │  │   record_sale, create_product, dashboard_summary, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ clothier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ SaleTotals│  │   rules   │  │   │
//! │  │   │   Sale    │  │  TaxRate  │  │  tax math │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Sale, Supplier, ...)
//! - [`drafts`] - Input types (NewProduct, ProductPatch, SaleDraft, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - Sale totals calculator (subtotal / tax / total)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use clothier_core::money::Money;
//! use clothier_core::types::TaxRate;
//! use clothier_core::SALES_TAX_BPS;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(2999); // $29.99
//!
//! // Calculate tax at the store-wide rate
//! let tax_rate = TaxRate::from_bps(SALES_TAX_BPS); // 8%
//! let tax = price.calculate_tax(tax_rate);
//!
//! // Tax on $29.99 at 8% = $2.40 (rounded)
//! assert_eq!(tax.cents(), 240);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod drafts;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use clothier_core::Money` instead of
// `use clothier_core::money::Money`

pub use drafts::*;
pub use error::ValidationError;
pub use money::Money;
pub use totals::SaleTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Store-wide sales tax rate in basis points (800 = 8%).
///
/// ## Why a constant?
/// The store operates in a single jurisdiction with a flat 8% sales tax.
/// Per-product or per-region rates would become configuration in a later
/// version; today every sale is taxed at this rate.
pub const SALES_TAX_BPS: u32 = 800;

/// Stock level below which a product counts as "low stock" on the dashboard.
///
/// ## Business Reason
/// Ten units is the store's reorder point: enough runway to restock a
/// clothing item before it sells out entirely.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Number of top-selling products shown on the dashboard.
pub const TOP_PRODUCTS_LIMIT: usize = 3;

/// Number of recent sales shown on the dashboard.
pub const RECENT_SALES_LIMIT: usize = 3;

/// Maximum quantity of a single line item in a sale.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
