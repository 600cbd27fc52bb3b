use crate::framework::ActorEntity;
use crate::model::{LogEntry, LogEntryCreate, LogEntryId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for LogEntry {
    type Id = LogEntryId;
    type CreateParams = LogEntryCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: LogEntryId, params: LogEntryCreate) -> Result<Self, String> {
        Ok(Self::from_params(id, params))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Err(format!("Log entry {} is immutable", self.id))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
