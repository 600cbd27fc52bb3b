//! Customers and the shopping-cart lines they own.
//!
//! Cart lines live on the customer, so adding a winning bid to a cart is an
//! action on the [`Customer`] entity (see [`crate::customer_actor`]).

use super::{AuctionId, LanguageId, StoreId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

entity_id!(CustomerId, "customer");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub username: String,
    pub active: bool,
    pub deleted: bool,
    pub language_id: Option<LanguageId>,
    pub shopping_cart_items: Vec<ShoppingCartItem>,
}

impl Customer {
    /// Cart lines of the given type for one store.
    pub fn cart_items(&self, cart_type: ShoppingCartType, store_id: &str) -> impl Iterator<Item = &ShoppingCartItem> {
        let store_id = store_id.to_string();
        self.shopping_cart_items
            .iter()
            .filter(move |item| item.cart_type == cart_type && item.store_id == store_id)
    }
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub email: String,
    pub username: String,
    pub language_id: Option<LanguageId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub email: Option<String>,
    pub active: Option<bool>,
    pub deleted: Option<bool>,
    pub language_id: Option<LanguageId>,
}

/// Which list a cart line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoppingCartType {
    ShoppingCart,
    Wishlist,
    /// Lines created from a winning bid rather than a direct purchase.
    Auctions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCartItem {
    pub product_id: AuctionId,
    pub cart_type: ShoppingCartType,
    pub store_id: StoreId,
    pub quantity: u32,
    pub customer_entered_price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Everything the cart needs to turn a bid into a line item.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartRequest {
    pub product_id: AuctionId,
    pub cart_type: ShoppingCartType,
    pub store_id: StoreId,
    pub customer_entered_price: Decimal,
    pub quantity: u32,
}

/// A business-rule violation that blocks adding a line to the cart.
///
/// Warnings are expected outcomes, not faults; callers inspect the list and
/// decide what to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartWarning {
    CustomerDeleted,
    CustomerInactive,
    ProductNotFound(AuctionId),
    ProductNotPublished,
    OutOfStock,
    InvalidPrice,
    InvalidQuantity,
}

impl fmt::Display for CartWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartWarning::CustomerDeleted => write!(f, "Customer is deleted"),
            CartWarning::CustomerInactive => write!(f, "Customer is not active"),
            CartWarning::ProductNotFound(id) => write!(f, "Product {} not found", id),
            CartWarning::ProductNotPublished => write!(f, "Product is not published"),
            CartWarning::OutOfStock => write!(f, "Out of stock"),
            CartWarning::InvalidPrice => write!(f, "Entered price must be greater than zero"),
            CartWarning::InvalidQuantity => write!(f, "Quantity must be positive"),
        }
    }
}
