//! Stock actions for the Auction actor.

/// Custom actions for Auction entities.
#[derive(Debug, Clone)]
pub enum AuctionAction {
    /// Reads the remaining stock without modifying it.
    CheckStock,
    /// Takes units out of stock for a cart line. Fails if not enough remain.
    ReserveStock(u32),
}

/// Results from [`AuctionAction`]; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum AuctionActionResult {
    CheckStock(u32),
    ReserveStock(()),
}
