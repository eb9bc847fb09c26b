//! # View Actor
//!
//! The server half of the runtime. A `ViewActor<T>` owns every `T` it manages
//! and processes requests one at a time, which is what makes it safe to treat
//! as the single "UI thread" for that state: no locks, no interleaved
//! mutations, and every change is a reaction to one message.

use crate::client::ViewClient;
use crate::entity::ViewEntity;
use crate::error::ViewError;
use crate::message::ViewRequest;
use std::collections::{HashMap, VecDeque};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of view entities.
///
/// Entities are kept in insertion order with the newest entity first, which
/// is the order [`ViewClient::list`] returns them in. Display orders (sorted
/// views) are derived from that list by the caller and never stored here.
///
/// # Usage Pattern
///
/// 1. **Create**: `ViewActor::new()` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3. **Use**: clone the client freely; drop all clones to stop the actor.
///
/// ```rust
/// use view_actor::{ViewActor, ViewEntity};
///
/// #[derive(Clone, Debug)]
/// struct Counter { id: u32, hits: u32 }
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// impl ViewEntity for Counter {
///     type Id = u32;
///     type Create = u32;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Error = CounterError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create(id: u32) -> Result<Self, CounterError> { Ok(Self { id, hits: 0 }) }
///     fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
///         match action {
///             CounterAction::Hit => { self.hits += 1; Ok(self.hits) }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ViewActor::<Counter>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create(7).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Hit).await.unwrap(), 1);
/// }
/// ```
pub struct ViewActor<T: ViewEntity> {
    receiver: mpsc::Receiver<ViewRequest<T>>,
    store: HashMap<T::Id, T>,
    order: VecDeque<T::Id>,
}

impl<T: ViewEntity> ViewActor<T> {
    /// Creates a new `ViewActor` and its associated `ViewClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, ViewClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: VecDeque::new(),
        };
        (actor, ViewClient::new(sender))
    }

    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self) {
        // Short type name ("Product" rather than the full module path).
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ViewRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(entity_type, params));
                }
                ViewRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ViewRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ViewRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => {
                            let result = item
                                .handle_action(action)
                                .map_err(|e| ViewError::Entity(Box::new(e)));
                            match &result {
                                Ok(_) => debug!(entity_type, %id, "Action ok"),
                                Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                            }
                            result
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(ViewError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ViewRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    if self.store.remove(&id).is_some() {
                        self.order.retain(|existing| existing != &id);
                        info!(entity_type, %id, size = self.store.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ViewError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, entity_type: &str, params: T::Create) -> Result<T::Id, ViewError> {
        let item = T::from_create(params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            ViewError::Entity(Box::new(e))
        })?;
        let id = item.id().clone();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate id");
            return Err(ViewError::Duplicate(id.to_string()));
        }
        self.store.insert(id.clone(), item);
        self.order.push_front(id.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    #[derive(Debug)]
    enum NoteAction {
        Append(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("empty note")]
    struct EmptyNote;

    impl ViewEntity for Note {
        type Id = String;
        type Create = (String, String);
        type Action = NoteAction;
        type ActionResult = usize;
        type Error = EmptyNote;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create((id, text): (String, String)) -> Result<Self, EmptyNote> {
            if text.is_empty() {
                return Err(EmptyNote);
            }
            Ok(Self { id, text })
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<usize, EmptyNote> {
            match action {
                NoteAction::Append(more) => {
                    self.text.push_str(&more);
                    Ok(self.text.len())
                }
            }
        }
    }

    fn note(id: &str, text: &str) -> (String, String) {
        (id.to_string(), text.to_string())
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (actor, client) = ViewActor::<Note>::new(10);
        tokio::spawn(actor.run());

        client.create(note("a", "first")).await.unwrap();
        client.create(note("b", "second")).await.unwrap();
        client.create(note("c", "third")).await.unwrap();

        let ids: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_rejected_create_stores_nothing() {
        let (actor, client) = ViewActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let err = client.create(note("a", "")).await.unwrap_err();
        assert!(err.entity_error::<EmptyNote>().is_some());
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let (actor, client) = ViewActor::<Note>::new(10);
        tokio::spawn(actor.run());

        client.create(note("a", "one")).await.unwrap();
        let err = client.create(note("a", "two")).await.unwrap_err();
        assert!(matches!(err, ViewError::Duplicate(id) if id == "a"));

        let stored = client.get("a".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.text, "one");
    }

    #[tokio::test]
    async fn test_action_and_remove() {
        let (actor, client) = ViewActor::<Note>::new(10);
        let handle = tokio::spawn(actor.run());

        client.create(note("a", "ab")).await.unwrap();
        let len = client
            .perform_action("a".to_string(), NoteAction::Append("cd".into()))
            .await
            .unwrap();
        assert_eq!(len, 4);

        client.remove("a".to_string()).await.unwrap();
        assert!(client.get("a".to_string()).await.unwrap().is_none());
        assert!(matches!(
            client.remove("a".to_string()).await,
            Err(ViewError::NotFound(_))
        ));
        assert!(matches!(
            client
                .perform_action("a".to_string(), NoteAction::Append("x".into()))
                .await,
            Err(ViewError::NotFound(_))
        ));

        drop(client);
        handle.await.unwrap();
    }
}
