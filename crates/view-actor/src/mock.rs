//! # Mock Clients
//!
//! Test helpers that stand in for a running [`ViewActor`](crate::ViewActor).
//!
//! Two styles are supported:
//!
//! - **Fluent expectations** with [`MockClient`]: queue the responses the
//!   "actor" should give, hand [`MockClient::client`] to the code under test,
//!   then call [`MockClient::verify`].
//! - **Manual channel** with [`create_mock_client`]: the test receives every
//!   request itself (via [`expect_create`], [`expect_action`], ...) and
//!   answers it, which lets it inspect payloads or hold a response back to
//!   simulate a slow actor.
//!
//! ```rust
//! use view_actor::mock::MockClient;
//! use view_actor::{ViewEntity, ViewError};
//!
//! #[derive(Clone, Debug)] struct Row { id: u32 }
//! #[derive(Debug)] enum RowAction {}
//! #[derive(Debug, thiserror::Error)] #[error("row error")] struct RowError;
//!
//! impl ViewEntity for Row {
//!     type Id = u32; type Create = u32; type Action = RowAction;
//!     type ActionResult = (); type Error = RowError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create(id: u32) -> Result<Self, RowError> { Ok(Self { id }) }
//!     fn handle_action(&mut self, action: RowAction) -> Result<(), RowError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Row>::new();
//!     mock.expect_get(1).return_err(ViewError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(ViewError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ViewClient;
use crate::entity::ViewEntity;
use crate::error::ViewError;
use crate::message::ViewRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ViewEntity> {
    Get(Result<Option<T>, ViewError>),
    Create(Result<T::Id, ViewError>),
    List(Result<Vec<T>, ViewError>),
    Action(Result<T::ActionResult, ViewError>),
    Remove(Result<(), ViewError>),
}

impl<T: ViewEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "Get",
            Expectation::Create(_) => "Create",
            Expectation::List(_) => "List",
            Expectation::Action(_) => "Action",
            Expectation::Remove(_) => "Remove",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<(Option<<T as ViewEntity>::Id>, Expectation<T>)>>>;

/// A mock client with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the mock task, which surfaces
/// in the test as [`ViewError::ActorDropped`] and as a failed
/// [`MockClient::verify`].
pub struct MockClient<T: ViewEntity> {
    client: ViewClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ViewEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ViewEntity> MockClient<T> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ViewRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                let Some((expected_id, expectation)) = next else {
                    panic!("Unexpected request: no expectations left");
                };
                let check_id = |id: &T::Id| {
                    if let Some(expected) = &expected_id {
                        assert_eq!(expected, id, "Request for unexpected id");
                    }
                };
                match (request, expectation) {
                    (ViewRequest::Get { id, respond_to }, Expectation::Get(response)) => {
                        check_id(&id);
                        let _ = respond_to.send(response);
                    }
                    (ViewRequest::Create { respond_to, .. }, Expectation::Create(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (ViewRequest::List { respond_to }, Expectation::List(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ViewRequest::Action { id, respond_to, .. },
                        Expectation::Action(response),
                    ) => {
                        check_id(&id);
                        let _ = respond_to.send(response);
                    }
                    (ViewRequest::Remove { id, respond_to }, Expectation::Remove(response)) => {
                        check_id(&id);
                        let _ = respond_to.send(response);
                    }
                    (_, expectation) => {
                        panic!(
                            "Expectation mismatch: expected {} request",
                            expectation.kind()
                        );
                    }
                }
            }
        });

        Self {
            client: ViewClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ViewClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Expectation::Get)
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, Expectation::Create)
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Expectation::List)
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Expectation::Action)
    }

    /// Expects a `remove` of `id`.
    pub fn expect_remove(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Expectation::Remove)
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<R, ViewError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: ViewEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, ViewError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: ViewEntity, R> ExpectationBuilder<T, R> {
    /// Respond with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Respond with an error.
    pub fn return_err(self, error: ViewError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, ViewError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.id, expectation));
    }
}

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client<T: ViewEntity>(
    buffer_size: usize,
) -> (ViewClient<T>, mpsc::Receiver<ViewRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ViewClient::new(sender), receiver)
}

/// Receives the next request if it is a Create.
pub async fn expect_create<T: ViewEntity>(
    receiver: &mut mpsc::Receiver<ViewRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, ViewError>>)> {
    match receiver.recv().await {
        Some(ViewRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request if it is a List.
pub async fn expect_list<T: ViewEntity>(
    receiver: &mut mpsc::Receiver<ViewRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, ViewError>>> {
    match receiver.recv().await {
        Some(ViewRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Receives the next request if it is an Action.
pub async fn expect_action<T: ViewEntity>(
    receiver: &mut mpsc::Receiver<ViewRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, ViewError>>,
)> {
    match receiver.recv().await {
        Some(ViewRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    enum TagAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    impl ViewEntity for Tag {
        type Id = u32;
        type Create = (u32, String);
        type Action = TagAction;
        type ActionResult = String;
        type Error = TagError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create((id, label): (u32, String)) -> Result<Self, TagError> {
            Ok(Self { id, label })
        }

        fn handle_action(&mut self, action: TagAction) -> Result<String, TagError> {
            match action {
                TagAction::Rename(label) => {
                    self.label = label;
                    Ok(self.label.clone())
                }
            }
        }
    }

    #[tokio::test]
    async fn test_manual_channel_create() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let task = tokio::spawn(async move { client.create((5, "red".to_string())).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, (5, "red".to_string()));
        responder.send(Ok(5)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_expectations_in_order() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_create().return_ok(1);
        mock.expect_action(1).return_ok("blue".to_string());
        mock.expect_list().return_ok(vec![Tag {
            id: 1,
            label: "blue".to_string(),
        }]);

        let client = mock.client();
        assert_eq!(client.create((1, "red".to_string())).await.unwrap(), 1);
        let label = client
            .perform_action(1, TagAction::Rename("blue".to_string()))
            .await
            .unwrap();
        assert_eq!(label, "blue");
        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_response() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_remove(1).return_ok(());

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(ViewError::ActorDropped)));
    }
}
