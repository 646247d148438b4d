//! Cart Data Structures
//!
//! The serializable cart model: products offered for sale, the line items
//! they become once added, and the cart document that is exchanged with the
//! remote store. Field names are renamed to camelCase on the wire so the
//! JSON document matches the shape already stored remotely.

use serde::{Deserialize, Serialize};

/// A product offered in the catalog, the candidate shape passed to
/// [`add_item`](crate::store::CartStore::add_item).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-unique product ID
    pub id: String,
    /// Display title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Optional marketing blurb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One product entry in the cart with its quantity and computed subtotal.
///
/// Unique per `item_id` within a cart. Created when an absent product is
/// added, destroyed when its quantity drops to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID this line refers to
    pub item_id: String,
    /// Product title at the time it was added
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Number of units, always >= 1 while the line exists
    pub quantity: u32,
    /// `price * quantity`
    pub total_price: f64,
}

impl LineItem {
    /// Create a fresh line for a product entering the cart.
    pub fn from_product(product: &Product) -> Self {
        Self {
            item_id: product.id.clone(),
            name: product.title.clone(),
            price: product.price,
            quantity: 1,
            total_price: product.price,
        }
    }
}

/// The full cart document: ordered line items plus derived totals.
///
/// `total_quantity` is the sum of all quantities and `total_amount` the sum
/// of all line subtotals; both are recomputed after every mutation rather
/// than patched incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Ordered line items, insertion order preserved
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Sum of all item quantities
    #[serde(default)]
    pub total_quantity: u32,
    /// Sum of all item subtotals
    #[serde(default)]
    pub total_amount: f64,
}

impl CartState {
    /// Empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a line item by product ID.
    pub fn find(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    /// Recompute `total_quantity` and `total_amount` from the items.
    pub fn recompute_totals(&mut self) {
        self.total_quantity = self.items.iter().map(|item| item.quantity).sum();
        self.total_amount = self.items.iter().map(|item| item.total_price).sum();
    }
}
