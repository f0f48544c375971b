//! # clothier-store: In-Memory Entity Store for Clothier
//!
//! Owns all application state and the operations the UI layer calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          clothier-store                                 │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐         │
//! │   │   store   │  │  ledger   │  │ dashboard  │  │   seed    │         │
//! │   │  entity   │  │record_sale│  │ summarize  │  │demo data  │         │
//! │   │   CRUD    │  │status/del │  │ (derived)  │  │           │         │
//! │   └───────────┘  └───────────┘  └────────────┘  └───────────┘         │
//! │                                                                         │
//! │   State: four Vec collections inside one Store struct.                 │
//! │   Everything is process memory; nothing survives restart.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! None, on purpose. Every mutating operation takes `&mut Store` and runs to
//! completion before the next begins; the single caller (the UI event loop)
//! dispatches one action at a time. "Atomicity" of the ledger is sequential
//! execution, not a rollback mechanism - validation happens before mutation,
//! and there is no I/O that could fail midway.
//!
//! ## Example
//! ```rust
//! use clothier_store::Store;
//! use clothier_core::{PaymentMethod, SaleDraft, SaleItem};
//!
//! let mut store = Store::with_seed_data()?;
//! let tshirt = store.product_by_sku("TS-001").unwrap().clone();
//!
//! let sale = store.record_sale(SaleDraft {
//!     items: vec![SaleItem {
//!         product_id: tshirt.id.clone(),
//!         name_snapshot: tshirt.name.clone(),
//!         sku_snapshot: tshirt.sku.clone(),
//!         quantity: 1,
//!         unit_price_cents: tshirt.price_cents,
//!         size: Some("M".to_string()),
//!         color: Some("White".to_string()),
//!     }],
//!     customer_id: None,
//!     staff_id: "staff-3".to_string(),
//!     staff_name: "Sales Staff".to_string(),
//!     payment_method: PaymentMethod::Cash,
//!     discount_cents: None,
//! })?;
//!
//! assert_eq!(sale.total_cents, sale.subtotal_cents + sale.tax_cents);
//! let summary = store.dashboard_summary();
//! assert!(summary.daily_sales_cents >= sale.total_cents);
//! # Ok::<(), clothier_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dashboard;
pub mod error;
pub mod ledger;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dashboard::summarize;
pub use error::{StoreError, StoreResult};
pub use store::Store;
