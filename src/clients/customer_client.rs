use crate::clients::actor_client::ActorClient;
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AddToCartRequest, CartWarning, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::tasks::collaborators::{CustomerLookup, ShoppingCart};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => CustomerError::ValidationError(msg),
            other => Self::map_error(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn update_customer(&self, id: CustomerId, update: CustomerUpdate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Adds a cart line for `customer_id`; returns the warnings that blocked it, if any.
    #[instrument(skip(self))]
    pub async fn add_cart_item(&self, customer_id: CustomerId, request: AddToCartRequest) -> Result<Vec<CartWarning>, CustomerError> {
        debug!("Adding cart line");
        match self
            .inner
            .perform_action(customer_id, CustomerAction::AddToCart(request))
            .await
        {
            Ok(CustomerActionResult::AddToCart(warnings)) => Ok(warnings),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    async fn customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id).await
    }
}

#[async_trait]
impl ShoppingCart for CustomerClient {
    async fn add_to_cart(&self, customer: &Customer, request: AddToCartRequest) -> Result<Vec<CartWarning>, CustomerError> {
        self.add_cart_item(customer.id, request).await
    }
}
