//! # Ledger
//!
//! The transactional heart of the store: recording a sale updates several
//! entities together under one arithmetic contract.
//!
//! ## Recording Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       record_sale(draft)                                │
//! │                                                                         │
//! │  1. VALIDATE                                                            │
//! │     ├── items non-empty, product selected, qty > 0, price >= 0          │
//! │     └── discount within [0, subtotal + tax]                             │
//! │     Any failure returns here - NOTHING has been mutated.                │
//! │                                                                         │
//! │  2. COMPUTE TOTALS (clothier-core::totals, 8% tax)                      │
//! │                                                                         │
//! │  3. APPEND SALE          sales.push(Sale { status: Completed, ... })    │
//! │                                                                         │
//! │  4. DECREMENT STOCK      for each line: product.stock_quantity -= qty   │
//! │     └── product deleted? SKIP silently, snapshot keeps the sale valid   │
//! │                                                                         │
//! │  5. ACCRUE CUSTOMER      total_purchases += total, last_purchase = now  │
//! │     └── guest sale or customer deleted? SKIP silently                   │
//! │                                                                         │
//! │  All of 3-5 are visible before the call returns; &mut self means no    │
//! │  reader can observe a partial state in between.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What "Atomic" Means Here
//! Ordinary sequential execution, not a rollback mechanism. Validation is
//! fully front-loaded, so once mutation begins nothing can fail; there is
//! no I/O that could abort the operation halfway.
//!
//! ## Oversell Policy
//! Stock is decremented without a floor. Selling 5 units of a product with
//! 3 in stock leaves `stock_quantity = -2`; the dashboard's low-stock count
//! surfaces it for restocking. The store front blocks this in practice, so
//! the ledger records what actually happened at the till rather than
//! refusing the sale.

use chrono::Utc;
use tracing::{debug, info};

use clothier_core::{
    totals, validation, Money, Sale, SaleDraft, SaleStatus, TaxRate, SALES_TAX_BPS,
};

use crate::error::{StoreError, StoreResult};
use crate::store::{generate_id, Store};

impl Store {
    /// Records a completed sale and applies its ledger side effects.
    ///
    /// Returns the created [`Sale`]. On a validation error, the store is
    /// exactly as it was before the call.
    ///
    /// ## Example
    /// ```text
    /// Sale form submit
    ///      │
    ///      ▼
    /// record_sale(draft) ← THIS FUNCTION
    ///      │
    ///      ├── Sales      : +1 entry, status Completed
    ///      ├── Products   : stock decremented per line
    ///      └── Customers  : lifetime purchases accrued (if not a guest)
    /// ```
    pub fn record_sale(&mut self, draft: SaleDraft) -> StoreResult<Sale> {
        // ---- Step 1: validate everything up front ---------------------------
        validation::validate_sale_items(&draft.items)?;

        let tax_rate = TaxRate::from_bps(SALES_TAX_BPS);
        let discount_cents = draft.discount_cents.unwrap_or(0);

        // Discount bounds need the computed pre-discount total, so totals
        // math runs before the final validation gate. Still pure: nothing
        // has been written yet.
        let subtotal = totals::subtotal(&draft.items);
        let pre_discount = subtotal + subtotal.calculate_tax(tax_rate);
        validation::validate_discount_cents(discount_cents, pre_discount.cents())?;

        // ---- Step 2: compute the money breakdown ----------------------------
        let sale_totals = totals::compute_totals(&draft.items, tax_rate, discount_cents);

        // ---- Step 3: assign identity, resolve snapshots, append -------------
        let now = Utc::now();
        let customer_name = draft
            .customer_id
            .as_deref()
            .and_then(|id| self.customer(id))
            .map(|c| c.name.clone());

        let sale = Sale {
            id: generate_id(),
            items: draft.items,
            customer_id: draft.customer_id,
            customer_name,
            staff_id: draft.staff_id,
            staff_name: draft.staff_name,
            created_at: now,
            subtotal_cents: sale_totals.subtotal_cents,
            tax_cents: sale_totals.tax_cents,
            discount_cents: sale_totals.discount_cents,
            total_cents: sale_totals.total_cents,
            payment_method: draft.payment_method,
            status: SaleStatus::Completed,
        };
        self.sales.push(sale.clone());

        // ---- Step 4: decrement stock per line --------------------------------
        for item in &sale.items {
            match self.products.iter_mut().find(|p| p.id == item.product_id) {
                Some(product) => {
                    product.stock_quantity -= item.quantity;
                    product.updated_at = now;
                }
                None => {
                    // Product was deleted; the line's snapshot keeps the
                    // sale record valid, so the stock effect is dropped.
                    debug!(product_id = %item.product_id, "Sale line references missing product, skipping stock update");
                }
            }
        }

        // ---- Step 5: accrue customer balances ---------------------------------
        if let Some(customer_id) = &sale.customer_id {
            match self.customers.iter_mut().find(|c| &c.id == customer_id) {
                Some(customer) => {
                    customer.total_purchases_cents += sale.total_cents;
                    customer.last_purchase = Some(now);
                }
                None => {
                    debug!(customer_id = %customer_id, "Sale references missing customer, skipping accrual");
                }
            }
        }

        info!(
            sale_id = %sale.id,
            total = %Money::from_cents(sale.total_cents),
            items = sale.items.len(),
            "Sale recorded"
        );

        Ok(sale)
    }

    /// Changes a sale's status (completed ⇄ returned / cancelled).
    ///
    /// This is the only administrative edit a created sale admits; its
    /// items and money fields stay frozen. Derived balances are NOT rolled
    /// back on return - the dashboard excludes non-completed sales from
    /// revenue, which is where status changes take effect.
    pub fn set_sale_status(&mut self, id: &str, status: SaleStatus) -> StoreResult<Sale> {
        let sale = self
            .sales
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Sale", id))?;

        debug!(sale_id = %id, ?status, "Updating sale status");
        sale.status = status;
        Ok(sale.clone())
    }

    /// Removes a sale record outright (administrative correction).
    ///
    /// Stock and customer balances the sale affected are left as they are.
    pub fn delete_sale(&mut self, id: &str) -> StoreResult<()> {
        let before = self.sales.len();
        self.sales.retain(|s| s.id != id);
        if self.sales.len() == before {
            return Err(StoreError::not_found("Sale", id));
        }
        debug!(sale_id = %id, "Deleted sale");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clothier_core::{
        NewCustomer, NewProduct, PaymentMethod, SaleItem, ValidationError,
    };

    fn test_product(sku: &str, price_cents: i64, stock: i64) -> NewProduct {
        NewProduct {
            name: format!("Product {sku}"),
            description: "".to_string(),
            category: "Tops".to_string(),
            subcategory: None,
            sku: sku.to_string(),
            price_cents,
            cost_price_cents: price_cents / 2,
            stock_quantity: stock,
            images: vec![],
            sizes: vec![],
            colors: vec![],
            material: None,
            brand: None,
            supplier: None,
        }
    }

    fn line(product_id: &str, price_cents: i64, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: product_id.to_string(),
            name_snapshot: "Snapshot Name".to_string(),
            sku_snapshot: "SNAP-1".to_string(),
            quantity,
            unit_price_cents: price_cents,
            size: Some("M".to_string()),
            color: None,
        }
    }

    fn draft(items: Vec<SaleItem>, customer_id: Option<String>) -> SaleDraft {
        SaleDraft {
            items,
            customer_id,
            staff_id: "staff-3".to_string(),
            staff_name: "Sales Staff".to_string(),
            payment_method: PaymentMethod::Card,
            discount_cents: None,
        }
    }

    #[test]
    fn test_record_sale_decrements_stock_and_appends() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();

        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 2)], None))
            .unwrap();

        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(store.sales().len(), 1);

        let stored = store.product(&product.id).unwrap();
        assert_eq!(stored.stock_quantity, 148);
        assert_eq!(stored.updated_at, sale.created_at);
    }

    #[test]
    fn test_record_sale_totals_contract() {
        let mut store = Store::new();
        let shirt = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let jeans = store.create_product(test_product("BJ-002", 5999, 85)).unwrap();

        let sale = store
            .record_sale(draft(
                vec![line(&shirt.id, 2999, 2), line(&jeans.id, 5999, 1)],
                None,
            ))
            .unwrap();

        assert_eq!(sale.subtotal_cents, 11997);
        assert_eq!(sale.tax_cents, 960); // 11997 × 8% = 959.76 → 960
        assert_eq!(sale.discount_cents, 0);
        assert_eq!(
            sale.total_cents,
            sale.subtotal_cents + sale.tax_cents - sale.discount_cents
        );
    }

    #[test]
    fn test_record_sale_accrues_customer() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let customer = store
            .create_customer(NewCustomer {
                name: "Emma Johnson".to_string(),
                email: "emma.j@example.com".to_string(),
                phone: None,
                address: None,
                loyalty_points: None,
            })
            .unwrap();
        // Established customer with prior history
        store
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .unwrap()
            .total_purchases_cents = 125075;

        let sale = store
            .record_sale(draft(
                vec![line(&product.id, 2999, 2), line(&product.id, 5999, 1)],
                Some(customer.id.clone()),
            ))
            .unwrap();

        let stored = store.customer(&customer.id).unwrap();
        assert_eq!(stored.total_purchases_cents, 125075 + sale.total_cents);
        assert_eq!(stored.last_purchase, Some(sale.created_at));
        assert_eq!(sale.customer_name.as_deref(), Some("Emma Johnson"));
    }

    #[test]
    fn test_record_sale_guest_leaves_customers_alone() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let customer = store
            .create_customer(NewCustomer {
                name: "Emma Johnson".to_string(),
                email: "emma.j@example.com".to_string(),
                phone: None,
                address: None,
                loyalty_points: None,
            })
            .unwrap();

        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 1)], None))
            .unwrap();

        assert_eq!(sale.customer_id, None);
        assert_eq!(sale.customer_name, None);
        let stored = store.customer(&customer.id).unwrap();
        assert_eq!(stored.total_purchases_cents, 0);
        assert_eq!(stored.last_purchase, None);
    }

    #[test]
    fn test_record_sale_empty_items_mutates_nothing() {
        let mut store = Store::new();
        store.create_product(test_product("TS-001", 2999, 150)).unwrap();

        let err = store.record_sale(draft(vec![], None)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { .. })
        ));

        assert!(store.sales().is_empty());
        assert_eq!(store.product_by_sku("TS-001").unwrap().stock_quantity, 150);
    }

    #[test]
    fn test_record_sale_oversized_discount_rejected() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 1000, 10)).unwrap();

        let mut d = draft(vec![line(&product.id, 1000, 1)], None);
        // Pre-discount total is 1080 cents; one more is too much
        d.discount_cents = Some(1081);

        let err = store.record_sale(d).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(store.sales().is_empty());
        assert_eq!(store.product(&product.id).unwrap().stock_quantity, 10);
    }

    #[test]
    fn test_record_sale_discount_at_limit_gives_zero_total() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 1000, 10)).unwrap();

        let mut d = draft(vec![line(&product.id, 1000, 1)], None);
        d.discount_cents = Some(1080);

        let sale = store.record_sale(d).unwrap();
        assert_eq!(sale.total_cents, 0);
    }

    #[test]
    fn test_record_sale_missing_product_is_silently_skipped() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();

        let sale = store
            .record_sale(draft(
                vec![line("ghost-product", 4999, 1), line(&product.id, 2999, 1)],
                None,
            ))
            .unwrap();

        // Sale created with the supplied snapshot intact
        assert_eq!(sale.items[0].name_snapshot, "Snapshot Name");
        assert_eq!(sale.items[0].unit_price_cents, 4999);
        // Only the resolvable product was touched
        assert_eq!(store.product(&product.id).unwrap().stock_quantity, 149);
    }

    #[test]
    fn test_record_sale_missing_customer_is_silently_skipped() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();

        let sale = store
            .record_sale(draft(
                vec![line(&product.id, 2999, 1)],
                Some("ghost-customer".to_string()),
            ))
            .unwrap();

        // The dangling reference is kept, the name stays unresolved
        assert_eq!(sale.customer_id.as_deref(), Some("ghost-customer"));
        assert_eq!(sale.customer_name, None);
    }

    #[test]
    fn test_oversell_goes_negative() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 3)).unwrap();

        store
            .record_sale(draft(vec![line(&product.id, 2999, 5)], None))
            .unwrap();

        assert_eq!(store.product(&product.id).unwrap().stock_quantity, -2);
    }

    #[test]
    fn test_deleting_product_preserves_sale_snapshots() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 2)], None))
            .unwrap();

        store.delete_product(&product.id).unwrap();
        // Later edits to the catalog never rewrite the ledger
        let stored = store.sale(&sale.id).unwrap();
        assert_eq!(stored.items[0].name_snapshot, "Snapshot Name");
        assert_eq!(stored.items[0].sku_snapshot, "SNAP-1");
        assert_eq!(stored.items[0].unit_price_cents, 2999);
    }

    #[test]
    fn test_price_change_does_not_alter_past_sales() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 1)], None))
            .unwrap();

        store
            .update_product(
                &product.id,
                clothier_core::ProductPatch {
                    price_cents: Some(9999),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.sale(&sale.id).unwrap().items[0].unit_price_cents, 2999);
    }

    #[test]
    fn test_set_sale_status() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 1)], None))
            .unwrap();

        let returned = store.set_sale_status(&sale.id, SaleStatus::Returned).unwrap();
        assert_eq!(returned.status, SaleStatus::Returned);
        // Money fields stay frozen
        assert_eq!(returned.total_cents, sale.total_cents);

        assert!(matches!(
            store.set_sale_status("nope", SaleStatus::Cancelled),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_status_edits_move_revenue_between_dashboard_buckets() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 2)], None))
            .unwrap();

        // Just recorded, so the sale sits in every revenue window
        let before = store.dashboard_summary();
        assert_eq!(before.daily_sales_cents, sale.total_cents);
        assert_eq!(before.monthly_sales_cents, sale.total_cents);

        // A return takes it out of revenue - the STORED sale changes, not
        // just the value the call returns
        store.set_sale_status(&sale.id, SaleStatus::Returned).unwrap();
        assert_eq!(store.sale(&sale.id).unwrap().status, SaleStatus::Returned);
        let returned = store.dashboard_summary();
        assert_eq!(returned.daily_sales_cents, 0);
        assert_eq!(returned.monthly_sales_cents, 0);
        // ... but it still shows in the recent-sales table
        assert_eq!(returned.recent_sales.len(), 1);

        // Completing it again puts the revenue back
        store.set_sale_status(&sale.id, SaleStatus::Completed).unwrap();
        assert_eq!(store.sale(&sale.id).unwrap().status, SaleStatus::Completed);
        let completed = store.dashboard_summary();
        assert_eq!(completed.daily_sales_cents, sale.total_cents);
        assert_eq!(completed.monthly_sales_cents, sale.total_cents);
    }

    #[test]
    fn test_delete_sale_leaves_balances_alone() {
        let mut store = Store::new();
        let product = store.create_product(test_product("TS-001", 2999, 150)).unwrap();
        let sale = store
            .record_sale(draft(vec![line(&product.id, 2999, 2)], None))
            .unwrap();

        store.delete_sale(&sale.id).unwrap();

        assert!(store.sales().is_empty());
        // No rollback of the stock decrement
        assert_eq!(store.product(&product.id).unwrap().stock_quantity, 148);
    }
}
