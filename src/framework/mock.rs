//! # Mock Framework
//!
//! Utilities for testing clients without spawning real actors.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, hand out the client, then
//!   call [`MockClient::verify`]. Requests are answered in FIFO order and a
//!   request that does not match the next expectation's kind fails the test.
//! - [`create_mock_client`] + the `expect_*` helpers: drive the receiving end
//!   by hand when a test needs to inspect the payload that was sent.
//!
//! ```rust,ignore
//! let mut auctions = MockClient::<Auction>::new();
//! auctions.expect_list().return_ok(vec![expired_auction]);
//! auctions.expect_update(auction_id).return_ok(ended_auction);
//!
//! let client = AuctionClient::new(auctions.client(), bid_client);
//! // drive code under test...
//! auctions.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the canned response for it.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "Get",
            Expectation::Create(_) => "Create",
            Expectation::List(_) => "List",
            Expectation::Update(_) => "Update",
            Expectation::Delete(_) => "Delete",
            Expectation::Action(_) => "Action",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// A mismatched or unexpected request is recorded and the response channel is
/// dropped, so the caller sees [`FrameworkError::ActorDropped`]. [`verify`]
/// then panics with the recorded mismatch.
///
/// [`verify`]: MockClient::verify
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let errors = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { filter, respond_to }, Some(Expectation::List(r))) => {
                        // Canned rows still pass through the caller's predicate.
                        let _ = respond_to.send(r.map(|rows| rows.into_iter().filter(|row| filter(row)).collect()));
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, next) => {
                        let expected = next.as_ref().map(Expectation::kind).unwrap_or("nothing");
                        errors
                            .lock()
                            .unwrap()
                            .push(format!("expected {}, got {}", expected, request_kind(&request)));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Delete)
    }

    pub fn expect_action(&mut self, _id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Expectation::Action)
    }

    fn builder<R>(&self, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation is left over or any request did not match.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            panic!("Not all expectations were met. {} remaining", remaining.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finishes an expectation with its canned response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::UpdateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Next message must be a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogEntry, LogEntryCreate, LogEntryId, LogLevel};

    fn entry(id: u32, level: LogLevel) -> LogEntry {
        LogEntry::from_params(
            LogEntryId(id),
            LogEntryCreate {
                level,
                short_message: format!("entry {}", id),
                full_message: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<LogEntry>::new();
        mock.expect_create().return_ok(LogEntryId(7));
        mock.expect_get(LogEntryId(7)).return_ok(Some(entry(7, LogLevel::Error)));

        let client = mock.client();
        let id = client
            .create(LogEntryCreate {
                level: LogLevel::Error,
                short_message: "boom".into(),
                full_message: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(id, LogEntryId(7));

        let fetched = client.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.level, LogLevel::Error);

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_expectation_applies_filter() {
        let mut mock = MockClient::<LogEntry>::new();
        mock.expect_list()
            .return_ok(vec![entry(1, LogLevel::Information), entry(2, LogLevel::Error)]);

        let errors = mock
            .client()
            .list(|e: &LogEntry| e.level == LogLevel::Error)
            .await
            .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].id, LogEntryId(2));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_is_reported() {
        let mut mock = MockClient::<LogEntry>::new();
        mock.expect_create().return_ok(LogEntryId(1));

        let result = mock.client().get(LogEntryId(1)).await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
    }

    #[tokio::test]
    async fn test_manual_helpers_expose_payload() {
        let (client, mut receiver) = create_mock_client::<LogEntry>(4);
        let task = tokio::spawn(async move {
            client
                .create(LogEntryCreate {
                    level: LogLevel::Warning,
                    short_message: "low stock".into(),
                    full_message: "3 left".into(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.short_message, "low stock");
        responder.send(Ok(LogEntryId(3))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(LogEntryId(3)));
    }
}
