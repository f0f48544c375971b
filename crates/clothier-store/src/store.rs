//! # Entity Store
//!
//! Owns the four entity collections and all CRUD on them.
//!
//! ## Collection Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Store                                        │
//! │                                                                         │
//! │   products: Vec<Product>      ◄── create / patch / delete, and the     │
//! │                                   ledger's stock decrements            │
//! │   customers: Vec<Customer>    ◄── create / patch / delete, and the     │
//! │                                   ledger's purchase accruals           │
//! │   sales: Vec<Sale>            ◄── append-only via the ledger, plus     │
//! │                                   status edits and admin deletes       │
//! │   suppliers: Vec<Supplier>    ◄── create / patch / delete              │
//! │                                                                         │
//! │   Identity: UUID v4 strings, assigned here on create.                  │
//! │   Timestamps: Utc::now() at the moment of the operation.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deletion Policy
//! Deletes remove by id with NO cascading integrity checks. Deleting a
//! product referenced by past sales leaves those sales intact (their items
//! are snapshots) and leaves supplier `product_ids` lists stale. Deleting a
//! customer leaves past sales pointing at a dangling `customer_id` with the
//! name snapshot still readable. This mirrors how the store actually
//! operates: sales history is the ledger of record and must never be
//! rewritten by inventory edits.
//!
//! ## Mutation Model
//! Every mutating method takes `&mut self`. The borrow checker is the
//! concurrency story: there is exactly one writer at a time by construction,
//! and an operation completes before the next one starts.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use clothier_core::{
    validation, Customer, CustomerPatch, NewCustomer, NewProduct, NewSupplier, Product,
    ProductPatch, Sale, Supplier, SupplierPatch, ValidationError,
};

use crate::error::{StoreError, StoreResult};

/// Generates a fresh entity id.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Store
// =============================================================================

/// The in-memory store of all retail state.
///
/// Construct one explicitly ([`Store::new`] or [`Store::with_seed_data`])
/// and pass it by reference to whatever needs it. There is no global
/// singleton.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) products: Vec<Product>,
    pub(crate) customers: Vec<Customer>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) suppliers: Vec<Supplier>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by its business key.
    pub fn product_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// All customers, in insertion order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// All recorded sales, in recording order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Looks up a sale by id.
    pub fn sale(&self, id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    /// All suppliers, in insertion order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Looks up a supplier by id.
    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Creates a product.
    ///
    /// Assigns a fresh id and creation/update timestamps. Rejects an empty
    /// name, a malformed or duplicate SKU, negative prices, and negative
    /// starting stock.
    pub fn create_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        validation::validate_name("name", &new.name)?;
        validation::validate_sku(&new.sku)?;
        validation::validate_price_cents("price", new.price_cents)?;
        validation::validate_price_cents("costPrice", new.cost_price_cents)?;
        self.ensure_sku_available(&new.sku, None)?;

        if new.stock_quantity < 0 {
            return Err(ValidationError::OutOfRange {
                field: "stockQuantity".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }

        let now = Utc::now();
        let product = Product {
            id: generate_id(),
            name: new.name,
            description: new.description,
            category: new.category,
            subcategory: new.subcategory,
            sku: new.sku,
            price_cents: new.price_cents,
            cost_price_cents: new.cost_price_cents,
            stock_quantity: new.stock_quantity,
            images: new.images,
            sizes: new.sizes,
            colors: new.colors,
            material: new.material,
            brand: new.brand,
            supplier: new.supplier,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %product.id, sku = %product.sku, "Creating product");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Merges a partial field set into an existing product.
    ///
    /// Refreshes `updated_at`. Re-checks SKU uniqueness when the patch
    /// changes the SKU.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        if let Some(name) = &patch.name {
            validation::validate_name("name", name)?;
        }
        if let Some(sku) = &patch.sku {
            validation::validate_sku(sku)?;
            self.ensure_sku_available(sku, Some(id))?;
        }
        if let Some(price) = patch.price_cents {
            validation::validate_price_cents("price", price)?;
        }
        if let Some(cost) = patch.cost_price_cents {
            validation::validate_price_cents("costPrice", cost)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        debug!(id = %id, "Updating product");

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(subcategory) = patch.subcategory {
            product.subcategory = subcategory;
        }
        if let Some(sku) = patch.sku {
            product.sku = sku;
        }
        if let Some(price) = patch.price_cents {
            product.price_cents = price;
        }
        if let Some(cost) = patch.cost_price_cents {
            product.cost_price_cents = cost;
        }
        if let Some(stock) = patch.stock_quantity {
            product.stock_quantity = stock;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(sizes) = patch.sizes {
            product.sizes = sizes;
        }
        if let Some(colors) = patch.colors {
            product.colors = colors;
        }
        if let Some(material) = patch.material {
            product.material = material;
        }
        if let Some(brand) = patch.brand {
            product.brand = brand;
        }
        if let Some(supplier) = patch.supplier {
            product.supplier = supplier;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    /// Deletes a product by id. No cascade: see the module docs.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::not_found("Product", id));
        }
        debug!(id = %id, "Deleted product");
        Ok(())
    }

    /// Checks that no product other than `exclude_id` already uses `sku`.
    fn ensure_sku_available(&self, sku: &str, exclude_id: Option<&str>) -> StoreResult<()> {
        let taken = self
            .products
            .iter()
            .any(|p| p.sku == sku && Some(p.id.as_str()) != exclude_id);
        if taken {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: sku.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Creates a customer with zero purchase history.
    ///
    /// `total_purchases_cents` starts at 0 and `last_purchase` at `None`;
    /// only the ledger ever advances them.
    pub fn create_customer(&mut self, new: NewCustomer) -> StoreResult<Customer> {
        validation::validate_name("name", &new.name)?;
        validation::validate_email(&new.email)?;

        let customer = Customer {
            id: generate_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            loyalty_points: new.loyalty_points,
            total_purchases_cents: 0,
            created_at: Utc::now(),
            last_purchase: None,
        };

        debug!(id = %customer.id, "Creating customer");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Merges a partial field set into an existing customer.
    ///
    /// The patch type carries no ledger-owned fields, so purchase balances
    /// cannot be edited through here.
    pub fn update_customer(&mut self, id: &str, patch: CustomerPatch) -> StoreResult<Customer> {
        if let Some(name) = &patch.name {
            validation::validate_name("name", name)?;
        }
        if let Some(email) = &patch.email {
            validation::validate_email(email)?;
        }

        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Customer", id))?;

        debug!(id = %id, "Updating customer");

        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(phone) = patch.phone {
            customer.phone = phone;
        }
        if let Some(address) = patch.address {
            customer.address = address;
        }
        if let Some(points) = patch.loyalty_points {
            customer.loyalty_points = points;
        }

        Ok(customer.clone())
    }

    /// Deletes a customer by id. Past sales keep their dangling
    /// `customer_id` and frozen `customer_name`.
    pub fn delete_customer(&mut self, id: &str) -> StoreResult<()> {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        if self.customers.len() == before {
            return Err(StoreError::not_found("Customer", id));
        }
        debug!(id = %id, "Deleted customer");
        Ok(())
    }

    // =========================================================================
    // Suppliers
    // =========================================================================

    /// Creates a supplier.
    ///
    /// `product_ids` is stored as given; the store does not verify the ids
    /// resolve to live products.
    pub fn create_supplier(&mut self, new: NewSupplier) -> StoreResult<Supplier> {
        validation::validate_name("name", &new.name)?;
        validation::validate_name("contactPerson", &new.contact_person)?;
        validation::validate_email(&new.email)?;

        let supplier = Supplier {
            id: generate_id(),
            name: new.name,
            contact_person: new.contact_person,
            email: new.email,
            phone: new.phone,
            address: new.address,
            product_ids: new.product_ids,
            last_order: None,
        };

        debug!(id = %supplier.id, "Creating supplier");
        self.suppliers.push(supplier.clone());
        Ok(supplier)
    }

    /// Merges a partial field set into an existing supplier.
    pub fn update_supplier(&mut self, id: &str, patch: SupplierPatch) -> StoreResult<Supplier> {
        if let Some(name) = &patch.name {
            validation::validate_name("name", name)?;
        }
        if let Some(email) = &patch.email {
            validation::validate_email(email)?;
        }

        let supplier = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Supplier", id))?;

        debug!(id = %id, "Updating supplier");

        if let Some(name) = patch.name {
            supplier.name = name;
        }
        if let Some(contact) = patch.contact_person {
            supplier.contact_person = contact;
        }
        if let Some(email) = patch.email {
            supplier.email = email;
        }
        if let Some(phone) = patch.phone {
            supplier.phone = phone;
        }
        if let Some(address) = patch.address {
            supplier.address = address;
        }
        if let Some(product_ids) = patch.product_ids {
            supplier.product_ids = product_ids;
        }
        if let Some(last_order) = patch.last_order {
            supplier.last_order = last_order;
        }

        Ok(supplier.clone())
    }

    /// Deletes a supplier by id.
    pub fn delete_supplier(&mut self, id: &str) -> StoreResult<()> {
        let before = self.suppliers.len();
        self.suppliers.retain(|s| s.id != id);
        if self.suppliers.len() == before {
            return Err(StoreError::not_found("Supplier", id));
        }
        debug!(id = %id, "Deleted supplier");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
