//! # Demo Runner
//!
//! Exercises the store end-to-end from the command line:
//!
//! 1. Builds the seeded demo store
//! 2. Records one more sale through the public interface
//! 3. Prints the resulting dashboard summary as JSON
//!
//! ## Usage
//! ```bash
//! cargo run -p clothier-store --bin demo
//!
//! # With debug logging from the store
//! RUST_LOG=clothier=debug cargo run -p clothier-store --bin demo
//! ```

use tracing_subscriber::EnvFilter;

use clothier_core::{Money, PaymentMethod, SaleDraft, SaleItem};
use clothier_store::Store;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,clothier=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut store = Store::with_seed_data()?;

    // Ring up a walk-in customer buying a t-shirt and a belt
    let tshirt = store
        .product_by_sku("TS-001")
        .ok_or("seed data missing TS-001")?
        .clone();
    let belt = store
        .product_by_sku("AC-006")
        .ok_or("seed data missing AC-006")?
        .clone();

    let sale = store.record_sale(SaleDraft {
        items: vec![
            SaleItem {
                product_id: tshirt.id.clone(),
                name_snapshot: tshirt.name.clone(),
                sku_snapshot: tshirt.sku.clone(),
                quantity: 1,
                unit_price_cents: tshirt.price_cents,
                size: Some("M".to_string()),
                color: Some("Black".to_string()),
            },
            SaleItem {
                product_id: belt.id.clone(),
                name_snapshot: belt.name.clone(),
                sku_snapshot: belt.sku.clone(),
                quantity: 1,
                unit_price_cents: belt.price_cents,
                size: Some("M".to_string()),
                color: Some("Brown".to_string()),
            },
        ],
        customer_id: None,
        staff_id: "staff-3".to_string(),
        staff_name: "Sales Staff".to_string(),
        payment_method: PaymentMethod::Cash,
        discount_cents: None,
    })?;

    println!(
        "Recorded sale {}: {} ({} items)",
        sale.id,
        Money::from_cents(sale.total_cents),
        sale.items.len()
    );

    let summary = store.dashboard_summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
