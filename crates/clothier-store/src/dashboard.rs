//! # Dashboard Aggregator
//!
//! Derives the dashboard summary from the current Sales and Products
//! collections.
//!
//! ## Derived, Never Stored
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Sales ──┐                                                             │
//! │           ├──► summarize(sales, products, now) ──► DashboardSummary    │
//! │ Products ─┘         (pure function)                                    │
//! │                                                                         │
//! │  No cache, no invalidation signal, no subscription: callers re-invoke  │
//! │  after any mutation to see fresh numbers. Two calls with no mutation   │
//! │  in between (and the same `now`) return equal summaries.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Revenue Buckets
//! Rolling windows ending at `now`: last 1 day, last 7 days, last 30 days.
//! Only COMPLETED sales count toward revenue; returned and cancelled sales
//! drop out of the buckets the moment their status changes. The recent-sales
//! table shows any status, matching what the staff sees at the register.

use chrono::{DateTime, Duration, Utc};

use clothier_core::{
    DashboardSummary, Product, Sale, TopProduct, RECENT_SALES_LIMIT, TOP_PRODUCTS_LIMIT,
};

use crate::store::Store;

impl Store {
    /// Computes a point-in-time dashboard summary.
    ///
    /// Window boundaries are relative to the wall clock at call time; tests
    /// use [`summarize`] directly to pin `now`.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        summarize(&self.sales, &self.products, Utc::now())
    }
}

/// Pure aggregation over the given sales and products.
pub fn summarize(sales: &[Sale], products: &[Product], now: DateTime<Utc>) -> DashboardSummary {
    let revenue_within = |window: Duration| -> i64 {
        sales
            .iter()
            .filter(|s| s.is_completed())
            .filter(|s| s.created_at > now - window && s.created_at <= now)
            .map(|s| s.total_cents)
            .sum()
    };

    DashboardSummary {
        daily_sales_cents: revenue_within(Duration::days(1)),
        weekly_sales_cents: revenue_within(Duration::days(7)),
        monthly_sales_cents: revenue_within(Duration::days(30)),
        low_stock_items: products.iter().filter(|p| p.is_low_stock()).count() as i64,
        top_selling_products: top_products(sales),
        recent_sales: recent_sales(sales),
    }
}

/// Ranks products by cumulative completed-sale amount, highest first.
///
/// Quantity and amount are summed per product id across all recorded sales
/// (line totals; the sale-level discount is not allocated back to lines).
/// The display name comes from the latest snapshot, so a renamed product
/// shows its current name without rewriting history. Ties break on product
/// id for a deterministic order.
fn top_products(sales: &[Sale]) -> Vec<TopProduct> {
    let mut ranking: Vec<TopProduct> = Vec::new();

    for sale in sales.iter().filter(|s| s.is_completed()) {
        for item in &sale.items {
            match ranking.iter_mut().find(|t| t.product_id == item.product_id) {
                Some(entry) => {
                    entry.quantity += item.quantity;
                    entry.amount_cents += item.line_total().cents();
                    entry.name = item.name_snapshot.clone();
                }
                None => ranking.push(TopProduct {
                    product_id: item.product_id.clone(),
                    name: item.name_snapshot.clone(),
                    quantity: item.quantity,
                    amount_cents: item.line_total().cents(),
                }),
            }
        }
    }

    ranking.sort_by(|a, b| {
        b.amount_cents
            .cmp(&a.amount_cents)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranking.truncate(TOP_PRODUCTS_LIMIT);
    ranking
}

/// The most recent sales by creation time, newest first, any status.
fn recent_sales(sales: &[Sale]) -> Vec<Sale> {
    let mut recent: Vec<Sale> = sales.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_SALES_LIMIT);
    recent
}

// =============================================================================
// Unit Tests
// =============================================================================
