use crate::framework::ActorEntity;
use crate::model::{QueuedEmail, QueuedEmailCreate, QueuedEmailId};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for QueuedEmail {
    type Id = QueuedEmailId;
    type CreateParams = QueuedEmailCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: QueuedEmailId, params: QueuedEmailCreate) -> Result<Self, String> {
        if params.to.trim().is_empty() {
            return Err(format!("{} has no recipient", params.template));
        }
        Ok(Self {
            id,
            template: params.template,
            to: params.to,
            language_id: params.language_id,
            subject: params.subject,
            auction_id: params.auction_id,
            bid_id: params.bid_id,
            amount: params.amount,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
