//! # Seed Data
//!
//! Builds the demo clothing-store dataset: a small catalog, a handful of
//! customers and suppliers, and a few sales recorded through the ledger so
//! every derived balance (stock levels, customer purchase totals) is
//! consistent by construction rather than hand-written.

use tracing::info;

use clothier_core::{
    NewCustomer, NewProduct, NewSupplier, PaymentMethod, Product, SaleDraft, SaleItem,
};

use crate::error::StoreResult;
use crate::store::Store;

impl Store {
    /// Creates a store populated with the demo dataset.
    ///
    /// Sales are recorded through [`Store::record_sale`], so seeded stock
    /// and customer balances reflect the seeded sales exactly.
    pub fn with_seed_data() -> StoreResult<Store> {
        let mut store = Store::new();
        seed(&mut store)?;
        Ok(store)
    }
}

/// One sale line against a seeded product, snapshotting its current state.
fn item(product: &Product, quantity: i64, size: &str, color: &str) -> SaleItem {
    SaleItem {
        product_id: product.id.clone(),
        name_snapshot: product.name.clone(),
        sku_snapshot: product.sku.clone(),
        quantity,
        unit_price_cents: product.price_cents,
        size: Some(size.to_string()),
        color: Some(color.to_string()),
    }
}

fn seed(store: &mut Store) -> StoreResult<()> {
    // ---- Catalog -------------------------------------------------------------
    let tshirt = store.create_product(NewProduct {
        name: "Premium Cotton T-Shirt".to_string(),
        description: "Soft and comfortable premium cotton t-shirt, perfect for everyday wear."
            .to_string(),
        category: "Tops".to_string(),
        subcategory: Some("T-Shirts".to_string()),
        sku: "TS-001".to_string(),
        price_cents: 2999,
        cost_price_cents: 1250,
        stock_quantity: 150,
        images: vec![],
        sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
        colors: vec!["White", "Black", "Navy", "Gray"].into_iter().map(String::from).collect(),
        material: Some("100% Cotton".to_string()),
        brand: Some("ClothBrand".to_string()),
        supplier: Some("Cotton Suppliers Inc.".to_string()),
    })?;

    let jeans = store.create_product(NewProduct {
        name: "Slim Fit Jeans".to_string(),
        description: "Modern slim fit jeans with stretch comfort technology.".to_string(),
        category: "Bottoms".to_string(),
        subcategory: Some("Jeans".to_string()),
        sku: "BJ-002".to_string(),
        price_cents: 5999,
        cost_price_cents: 2500,
        stock_quantity: 85,
        images: vec![],
        sizes: vec!["30", "32", "34", "36"].into_iter().map(String::from).collect(),
        colors: vec!["Blue", "Black", "Gray"].into_iter().map(String::from).collect(),
        material: Some("98% Cotton, 2% Elastane".to_string()),
        brand: Some("DenimCo".to_string()),
        supplier: Some("Fashion Denim Ltd.".to_string()),
    })?;

    let sweater = store.create_product(NewProduct {
        name: "Wool Blend Sweater".to_string(),
        description: "Warm and stylish wool blend sweater for colder weather.".to_string(),
        category: "Tops".to_string(),
        subcategory: Some("Sweaters".to_string()),
        sku: "TS-003".to_string(),
        price_cents: 7999,
        cost_price_cents: 3500,
        stock_quantity: 60,
        images: vec![],
        sizes: vec!["S", "M", "L", "XL"].into_iter().map(String::from).collect(),
        colors: vec!["Cream", "Gray", "Burgundy"].into_iter().map(String::from).collect(),
        material: Some("70% Wool, 30% Polyester".to_string()),
        brand: Some("CozyKnit".to_string()),
        supplier: Some("Premium Woolens Co.".to_string()),
    })?;

    let dress = store.create_product(NewProduct {
        name: "Summer Floral Dress".to_string(),
        description: "Light and breezy floral print dress, perfect for summer days.".to_string(),
        category: "Dresses".to_string(),
        subcategory: Some("Casual".to_string()),
        sku: "WD-004".to_string(),
        price_cents: 4999,
        cost_price_cents: 2200,
        stock_quantity: 75,
        images: vec![],
        sizes: vec!["XS", "S", "M", "L"].into_iter().map(String::from).collect(),
        colors: vec!["Blue Floral", "Pink Floral"].into_iter().map(String::from).collect(),
        material: Some("100% Rayon".to_string()),
        brand: Some("SummerStyle".to_string()),
        supplier: Some("Global Textiles Inc.".to_string()),
    })?;

    let oxford = store.create_product(NewProduct {
        name: "Classic Oxford Shirt".to_string(),
        description: "Timeless oxford shirt suitable for both casual and semi-formal occasions."
            .to_string(),
        category: "Tops".to_string(),
        subcategory: Some("Shirts".to_string()),
        sku: "MS-005".to_string(),
        price_cents: 4499,
        cost_price_cents: 1800,
        stock_quantity: 95,
        images: vec![],
        sizes: vec!["S", "M", "L", "XL", "XXL"].into_iter().map(String::from).collect(),
        colors: vec!["White", "Blue", "Pink", "Gray"].into_iter().map(String::from).collect(),
        material: Some("100% Cotton".to_string()),
        brand: Some("ClassicWear".to_string()),
        supplier: Some("Cotton Suppliers Inc.".to_string()),
    })?;

    // Two accessories deliberately below the low-stock threshold so the
    // dashboard metric has something to show out of the box.
    let belt = store.create_product(NewProduct {
        name: "Leather Belt".to_string(),
        description: "Full-grain leather belt with brushed steel buckle.".to_string(),
        category: "Accessories".to_string(),
        subcategory: Some("Belts".to_string()),
        sku: "AC-006".to_string(),
        price_cents: 2499,
        cost_price_cents: 900,
        stock_quantity: 8,
        images: vec![],
        sizes: vec!["S", "M", "L"].into_iter().map(String::from).collect(),
        colors: vec!["Brown", "Black"].into_iter().map(String::from).collect(),
        material: Some("Full-grain Leather".to_string()),
        brand: Some("ClassicWear".to_string()),
        supplier: Some("Global Textiles Inc.".to_string()),
    })?;

    store.create_product(NewProduct {
        name: "Silk Scarf".to_string(),
        description: "Lightweight printed silk scarf.".to_string(),
        category: "Accessories".to_string(),
        subcategory: Some("Scarves".to_string()),
        sku: "AC-007".to_string(),
        price_cents: 1999,
        cost_price_cents: 700,
        stock_quantity: 5,
        images: vec![],
        sizes: vec![],
        colors: vec!["Red", "Teal"].into_iter().map(String::from).collect(),
        material: Some("100% Silk".to_string()),
        brand: Some("SummerStyle".to_string()),
        supplier: Some("Global Textiles Inc.".to_string()),
    })?;

    // ---- Customers -------------------------------------------------------------
    let emma = store.create_customer(NewCustomer {
        name: "Emma Johnson".to_string(),
        email: "emma.j@example.com".to_string(),
        phone: Some("+1-555-123-4567".to_string()),
        address: Some("123 Main St, Anytown, AN 12345".to_string()),
        loyalty_points: Some(250),
    })?;
    let michael = store.create_customer(NewCustomer {
        name: "Michael Chen".to_string(),
        email: "michael.c@example.com".to_string(),
        phone: Some("+1-555-987-6543".to_string()),
        address: Some("456 Oak Ave, Somewhere, SM 67890".to_string()),
        loyalty_points: Some(180),
    })?;
    let sophia = store.create_customer(NewCustomer {
        name: "Sophia Rodriguez".to_string(),
        email: "sophia.r@example.com".to_string(),
        phone: Some("+1-555-456-7890".to_string()),
        address: Some("789 Elm Blvd, Elsewhere, EL 13579".to_string()),
        loyalty_points: Some(320),
    })?;
    let james = store.create_customer(NewCustomer {
        name: "James Wilson".to_string(),
        email: "james.w@example.com".to_string(),
        phone: Some("+1-555-789-0123".to_string()),
        address: Some("321 Pine St, Nowhere, NW 97531".to_string()),
        loyalty_points: Some(90),
    })?;
    let olivia = store.create_customer(NewCustomer {
        name: "Olivia Kim".to_string(),
        email: "olivia.k@example.com".to_string(),
        phone: Some("+1-555-234-5678".to_string()),
        address: Some("654 Maple Dr, Anywhere, AW 24680".to_string()),
        loyalty_points: Some(210),
    })?;

    // ---- Suppliers -------------------------------------------------------------
    store.create_supplier(NewSupplier {
        name: "Cotton Suppliers Inc.".to_string(),
        contact_person: "David Miller".to_string(),
        email: "david@cottonsuppliers.com".to_string(),
        phone: "+1-555-111-2222".to_string(),
        address: Some("789 Textile Ave, Fabricville, FB 12345".to_string()),
        product_ids: vec![tshirt.id.clone(), oxford.id.clone()],
    })?;
    store.create_supplier(NewSupplier {
        name: "Fashion Denim Ltd.".to_string(),
        contact_person: "Sarah Johnson".to_string(),
        email: "sarah@fashiondenim.com".to_string(),
        phone: "+1-555-333-4444".to_string(),
        address: Some("456 Denim Way, Jeanton, JT 67890".to_string()),
        product_ids: vec![jeans.id.clone()],
    })?;
    store.create_supplier(NewSupplier {
        name: "Premium Woolens Co.".to_string(),
        contact_person: "Robert Chang".to_string(),
        email: "robert@premiumwoolens.com".to_string(),
        phone: "+1-555-555-6666".to_string(),
        address: Some("123 Wool St, Knitville, KV 45678".to_string()),
        product_ids: vec![sweater.id.clone()],
    })?;
    store.create_supplier(NewSupplier {
        name: "Global Textiles Inc.".to_string(),
        contact_person: "Maria Garcia".to_string(),
        email: "maria@globaltextiles.com".to_string(),
        phone: "+1-555-777-8888".to_string(),
        address: Some("321 Global Blvd, Textiletown, TT 98765".to_string()),
        product_ids: vec![dress.id.clone(), belt.id.clone()],
    })?;

    // ---- Sales (through the ledger) ----------------------------------------------
    store.record_sale(SaleDraft {
        items: vec![item(&tshirt, 2, "M", "White"), item(&jeans, 1, "32", "Blue")],
        customer_id: Some(emma.id),
        staff_id: "staff-3".to_string(),
        staff_name: "Sales Staff".to_string(),
        payment_method: PaymentMethod::Card,
        discount_cents: None,
    })?;
    store.record_sale(SaleDraft {
        items: vec![item(&sweater, 1, "L", "Gray")],
        customer_id: Some(michael.id),
        staff_id: "staff-3".to_string(),
        staff_name: "Sales Staff".to_string(),
        payment_method: PaymentMethod::Cash,
        discount_cents: None,
    })?;
    store.record_sale(SaleDraft {
        items: vec![
            item(&dress, 1, "S", "Blue Floral"),
            item(&oxford, 2, "M", "White"),
        ],
        customer_id: Some(sophia.id),
        staff_id: "staff-2".to_string(),
        staff_name: "Store Manager".to_string(),
        payment_method: PaymentMethod::Card,
        discount_cents: None,
    })?;
    store.record_sale(SaleDraft {
        items: vec![item(&jeans, 1, "34", "Black")],
        customer_id: Some(james.id),
        staff_id: "staff-3".to_string(),
        staff_name: "Sales Staff".to_string(),
        payment_method: PaymentMethod::Mobile,
        discount_cents: None,
    })?;
    store.record_sale(SaleDraft {
        items: vec![
            item(&tshirt, 3, "L", "Navy"),
            item(&sweater, 1, "M", "Burgundy"),
        ],
        customer_id: Some(olivia.id),
        staff_id: "staff-2".to_string(),
        staff_name: "Store Manager".to_string(),
        payment_method: PaymentMethod::Card,
        discount_cents: Some(1000),
    })?;

    info!(
        products = store.products().len(),
        customers = store.customers().len(),
        suppliers = store.suppliers().len(),
        sales = store.sales().len(),
        "Seeded demo store"
    );

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_store_shape() {
        let store = Store::with_seed_data().unwrap();
        assert_eq!(store.products().len(), 7);
        assert_eq!(store.customers().len(), 5);
        assert_eq!(store.suppliers().len(), 4);
        assert_eq!(store.sales().len(), 5);
    }

    #[test]
    fn test_seeded_skus_are_unique() {
        let store = Store::with_seed_data().unwrap();
        let skus: HashSet<&str> = store.products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus.len(), store.products().len());
    }

    #[test]
    fn test_seeded_sales_satisfy_total_invariant() {
        let store = Store::with_seed_data().unwrap();
        for sale in store.sales() {
            assert_eq!(
                sale.total_cents,
                sale.subtotal_cents + sale.tax_cents - sale.discount_cents,
                "invariant broken for sale {}",
                sale.id
            );
        }
    }

    #[test]
    fn test_seeded_balances_are_ledger_consistent() {
        let store = Store::with_seed_data().unwrap();

        // Stock = initial quantity minus everything the seeded sales sold
        let tshirt = store.product_by_sku("TS-001").unwrap();
        assert_eq!(tshirt.stock_quantity, 150 - 2 - 3);
        let jeans = store.product_by_sku("BJ-002").unwrap();
        assert_eq!(jeans.stock_quantity, 85 - 1 - 1);

        // Each customer's lifetime total equals the sum of their sales
        for customer in store.customers() {
            let expected: i64 = store
                .sales()
                .iter()
                .filter(|s| s.customer_id.as_deref() == Some(customer.id.as_str()))
                .map(|s| s.total_cents)
                .sum();
            assert_eq!(customer.total_purchases_cents, expected);
        }
    }

    #[test]
    fn test_seeded_supplier_product_ids_resolve() {
        let store = Store::with_seed_data().unwrap();
        for supplier in store.suppliers() {
            for product_id in &supplier.product_ids {
                assert!(store.product(product_id).is_some());
            }
        }
    }

    #[test]
    fn test_seeded_dashboard_has_low_stock_and_top_sellers() {
        let store = Store::with_seed_data().unwrap();
        let summary = store.dashboard_summary();

        // Belt (8) and scarf (5) sit below the threshold
        assert_eq!(summary.low_stock_items, 2);
        assert_eq!(summary.top_selling_products.len(), 3);
        assert_eq!(summary.recent_sales.len(), 3);
        // Everything was just recorded, so it all lands in the daily bucket
        assert_eq!(
            summary.daily_sales_cents,
            store.sales().iter().map(|s| s.total_cents).sum::<i64>()
        );
    }
}
