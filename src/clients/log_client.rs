use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::log_actor::LogError;
use crate::model::{LogEntry, LogEntryCreate, LogEntryId, LogLevel};
use crate::tasks::collaborators::EventLog;
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

/// Client for the persistent activity log.
///
/// Every stored entry is mirrored as a `tracing` event at the matching level.
#[derive(Clone)]
pub struct LogClient {
    inner: ResourceClient<LogEntry>,
}

impl LogClient {
    pub fn new(inner: ResourceClient<LogEntry>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, full_message))]
    pub async fn insert(&self, level: LogLevel, short_message: &str, full_message: &str) -> Result<LogEntryId, LogError> {
        match level {
            LogLevel::Debug => debug!(full_message, "{}", short_message),
            LogLevel::Information => info!(full_message, "{}", short_message),
            LogLevel::Warning => warn!(full_message, "{}", short_message),
            LogLevel::Error | LogLevel::Fatal => error!(full_message, "{}", short_message),
        }

        self.inner
            .create(LogEntryCreate {
                level,
                short_message: short_message.to_string(),
                full_message: full_message.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// All stored entries, oldest first.
    pub async fn entries(&self) -> Result<Vec<LogEntry>, LogError> {
        self.inner.list(|_: &LogEntry| true).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<LogEntry> for LogClient {
    type Error = LogError;

    fn inner(&self) -> &ResourceClient<LogEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LogError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl EventLog for LogClient {
    async fn insert_log(&self, level: LogLevel, short_message: &str, full_message: &str) -> Result<(), LogError> {
        self.insert(level, short_message, full_message).await?;
        Ok(())
    }
}
