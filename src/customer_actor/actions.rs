use crate::model::{AddToCartRequest, CartWarning};

/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Validates and appends a cart line.
    AddToCart(AddToCartRequest),
}

/// Results from [`CustomerAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerActionResult {
    /// Empty when the line was added.
    AddToCart(Vec<CartWarning>),
}
