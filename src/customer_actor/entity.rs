//! [`ActorEntity`] implementation for [`Customer`].
//!
//! The interesting part is [`CustomerAction::AddToCart`]: it collects every
//! applicable [`CartWarning`], and only when there are none does it reserve
//! stock on the auction and append the line.

use super::actions::{CustomerAction, CustomerActionResult};
use crate::auction_actor::AuctionError;
use crate::clients::{ActorClient, AuctionClient};
use crate::framework::ActorEntity;
use crate::model::{AddToCartRequest, CartWarning, Customer, CustomerCreate, CustomerId, CustomerUpdate, ShoppingCartItem};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type CreateParams = CustomerCreate;
    type UpdateParams = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = AuctionClient;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, String> {
        if !params.email.contains('@') {
            return Err(format!("Invalid email: {}", params.email));
        }
        Ok(Self {
            id,
            email: params.email,
            username: params.username,
            active: true,
            deleted: false,
            language_id: params.language_id,
            shopping_cart_items: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &AuctionClient) -> Result<(), String> {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(deleted) = update.deleted {
            self.deleted = deleted;
        }
        if let Some(language_id) = update.language_id {
            self.language_id = Some(language_id);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CustomerAction, ctx: &AuctionClient) -> Result<CustomerActionResult, String> {
        match action {
            CustomerAction::AddToCart(request) => {
                let warnings = self.add_to_cart(request, ctx).await.map_err(|e| e.to_string())?;
                Ok(CustomerActionResult::AddToCart(warnings))
            }
        }
    }
}

impl Customer {
    async fn add_to_cart(&mut self, request: AddToCartRequest, auctions: &AuctionClient) -> Result<Vec<CartWarning>, AuctionError> {
        let mut warnings = Vec::new();

        if self.deleted {
            warnings.push(CartWarning::CustomerDeleted);
        } else if !self.active {
            warnings.push(CartWarning::CustomerInactive);
        }

        match auctions.get(request.product_id).await? {
            None => warnings.push(CartWarning::ProductNotFound(request.product_id)),
            Some(auction) => {
                if !auction.published {
                    warnings.push(CartWarning::ProductNotPublished);
                }
                if auction.stock_quantity < request.quantity {
                    warnings.push(CartWarning::OutOfStock);
                }
            }
        }

        if request.quantity == 0 {
            warnings.push(CartWarning::InvalidQuantity);
        }
        if request.customer_entered_price <= Decimal::ZERO {
            warnings.push(CartWarning::InvalidPrice);
        }

        if !warnings.is_empty() {
            debug!(customer_id = %self.id, ?warnings, "Cart line rejected");
            return Ok(warnings);
        }

        match auctions.reserve_stock(request.product_id, request.quantity).await {
            Ok(()) => {}
            // Stock changed between the check and the reservation.
            Err(AuctionError::InsufficientStock(_)) => return Ok(vec![CartWarning::OutOfStock]),
            Err(e) => return Err(e),
        }

        self.shopping_cart_items.push(ShoppingCartItem {
            product_id: request.product_id,
            cart_type: request.cart_type,
            store_id: request.store_id,
            quantity: request.quantity,
            customer_entered_price: request.customer_entered_price,
            created_at: Utc::now(),
        });
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction_actor::AuctionActionResult;
    use crate::clients::BidClient;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Auction, AuctionId, Bid, ShoppingCartType};
    use rust_decimal_macros::dec;

    fn customer() -> Customer {
        Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                email: "ann@example.com".into(),
                username: "ann".into(),
                language_id: None,
            },
        )
        .unwrap()
    }

    fn auction(stock_quantity: u32, published: bool) -> Auction {
        Auction {
            id: AuctionId(3),
            name: "Brass compass".into(),
            store_id: "store_1".into(),
            ends_at: Utc::now(),
            ended: false,
            published,
            stock_quantity,
        }
    }

    fn request(price: Decimal) -> AddToCartRequest {
        AddToCartRequest {
            product_id: AuctionId(3),
            cart_type: ShoppingCartType::Auctions,
            store_id: "store_1".into(),
            customer_entered_price: price,
            quantity: 1,
        }
    }

    fn catalog(auctions: &MockClient<Auction>) -> AuctionClient {
        let bids = MockClient::<Bid>::new();
        AuctionClient::new(auctions.client(), BidClient::new(bids.client()))
    }

    #[tokio::test]
    async fn test_add_to_cart_reserves_stock_and_stores_line() {
        let mut auctions = MockClient::<Auction>::new();
        auctions.expect_get(AuctionId(3)).return_ok(Some(auction(1, true)));
        auctions
            .expect_action(AuctionId(3))
            .return_ok(AuctionActionResult::ReserveStock(()));
        let ctx = catalog(&auctions);

        let mut customer = customer();
        let result = customer
            .handle_action(CustomerAction::AddToCart(request(dec!(42))), &ctx)
            .await
            .unwrap();

        assert_eq!(result, CustomerActionResult::AddToCart(vec![]));
        let lines: Vec<_> = customer.cart_items(ShoppingCartType::Auctions, "store_1").collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].customer_entered_price, dec!(42));
        auctions.verify();
    }

    #[tokio::test]
    async fn test_add_to_cart_out_of_stock_warns_without_reserving() {
        let mut auctions = MockClient::<Auction>::new();
        auctions.expect_get(AuctionId(3)).return_ok(Some(auction(0, true)));
        let ctx = catalog(&auctions);

        let mut customer = customer();
        let result = customer
            .handle_action(CustomerAction::AddToCart(request(dec!(42))), &ctx)
            .await
            .unwrap();

        assert_eq!(result, CustomerActionResult::AddToCart(vec![CartWarning::OutOfStock]));
        assert!(customer.shopping_cart_items.is_empty());
        auctions.verify();
    }

    #[tokio::test]
    async fn test_add_to_cart_collects_every_warning() {
        let mut auctions = MockClient::<Auction>::new();
        auctions.expect_get(AuctionId(3)).return_ok(Some(auction(0, false)));
        let ctx = catalog(&auctions);

        let mut customer = customer();
        customer.active = false;
        let result = customer
            .handle_action(CustomerAction::AddToCart(request(Decimal::ZERO)), &ctx)
            .await
            .unwrap();

        assert_eq!(
            result,
            CustomerActionResult::AddToCart(vec![
                CartWarning::CustomerInactive,
                CartWarning::ProductNotPublished,
                CartWarning::OutOfStock,
                CartWarning::InvalidPrice,
            ])
        );
    }

    #[tokio::test]
    async fn test_add_to_cart_lost_reservation_race_is_a_warning() {
        let mut auctions = MockClient::<Auction>::new();
        auctions.expect_get(AuctionId(3)).return_ok(Some(auction(1, true)));
        auctions
            .expect_action(AuctionId(3))
            .return_err(FrameworkError::Custom("requested 1, available 0".into()));
        let ctx = catalog(&auctions);

        let mut customer = customer();
        let result = customer
            .handle_action(CustomerAction::AddToCart(request(dec!(5))), &ctx)
            .await
            .unwrap();

        assert_eq!(result, CustomerActionResult::AddToCart(vec![CartWarning::OutOfStock]));
        assert!(customer.shopping_cart_items.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_catalog_failure_is_an_error() {
        let mut auctions = MockClient::<Auction>::new();
        auctions.expect_get(AuctionId(3)).return_err(FrameworkError::ActorClosed);
        let ctx = catalog(&auctions);

        let mut customer = customer();
        let result = customer
            .handle_action(CustomerAction::AddToCart(request(dec!(5))), &ctx)
            .await;
        assert!(result.is_err());
    }
}
