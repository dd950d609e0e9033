//! # Screen Actor
//!
//! The `ScreenActor` owns the [`ScreenState`] and is the only place it changes.
//! It loads the initial data once, then processes [`ScreenEvent`]s one at a
//! time from an mpsc channel, replying to each with a snapshot of the new state
//! (the input for the next redraw).
//!
//! Because events are handled sequentially, a `Submit` that is waiting on the
//! backend holds back every later event until the create request settles. The
//! draft is therefore never touched by two events at once.
//!
//! Every state the actor enters is also published on a `watch` channel, which
//! is how observers see frames that no reply carries: the loading screen before
//! the first fetch settles, and the in-flight submit.
//!
//! ```rust
//! use order_entry::clients::mock::MockOrderApi;
//! use order_entry::model::Customer;
//! use order_entry::screen::{Phase, ScreenActor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderApi::new();
//!     mock.expect_list_products().return_ok(Vec::new());
//!     mock.expect_list_orders().return_ok(Vec::new());
//!
//!     let (actor, client) = ScreenActor::new(16);
//!     let handle = tokio::spawn(actor.run(mock.clone(), Customer::default()));
//!
//!     let state = client.snapshot().await.unwrap();
//!     assert_eq!(state.phase, Phase::Ready);
//!
//!     drop(client);
//!     handle.await.unwrap();
//!     mock.verify();
//! }
//! ```

use crate::clients::OrderApi;
use crate::model::{Customer, ProductId};
use crate::screen::{ScreenError, ScreenState};
use chrono::Utc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// A user action on the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// Picks a product in the form, or clears the pick with `None`.
    SelectProduct(Option<ProductId>),
    /// Raw quantity input, coerced to a whole number `>= 1`.
    SetQuantity(String),
    AddItem,
    Submit,
    Dismiss,
    /// No change; just returns the current state.
    Refresh,
}

/// Internal message sent to the actor.
#[derive(Debug)]
pub struct ScreenRequest {
    event: ScreenEvent,
    respond_to: oneshot::Sender<ScreenState>,
}

pub struct ScreenActor {
    receiver: mpsc::Receiver<ScreenRequest>,
    state: ScreenState,
    publisher: watch::Sender<ScreenState>,
}

impl ScreenActor {
    /// Creates a new `ScreenActor` and its associated `ScreenClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the event channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ScreenClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, updates) = watch::channel(ScreenState::loading());
        let actor = Self {
            receiver,
            state: ScreenState::loading(),
            publisher,
        };
        (actor, ScreenClient { sender, updates })
    }

    /// Loads the initial data, then runs the event loop until every client is dropped.
    ///
    /// `api` and `customer` are injected here rather than in [`new`](Self::new),
    /// so the client half can be handed out before the backend is wired.
    pub async fn run<A: OrderApi>(mut self, api: A, customer: Customer) {
        info!(customer_id = %customer.id, "Screen started");

        self.mount(&api).await;

        while let Some(ScreenRequest { event, respond_to }) = self.receiver.recv().await {
            debug!(?event, "Event");
            self.handle(event, &api, &customer).await;
            self.publish();
            let _ = respond_to.send(self.state.clone());
        }

        info!(
            orders = self.state.orders.len(),
            draft_items = self.state.draft.items.len(),
            "Screen closed"
        );
    }

    async fn mount<A: OrderApi>(&mut self, api: &A) {
        let result = tokio::try_join!(api.list_products(), api.list_orders());
        self.state = std::mem::take(&mut self.state).loaded(result);
        self.publish();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    async fn handle<A: OrderApi>(&mut self, event: ScreenEvent, api: &A, customer: &Customer) {
        let state = std::mem::take(&mut self.state);
        self.state = match event {
            ScreenEvent::SelectProduct(product) => state.select_product(product),
            ScreenEvent::SetQuantity(raw) => state.set_quantity(&raw),
            ScreenEvent::AddItem => state.add_item(),
            ScreenEvent::Dismiss => state.dismiss(),
            ScreenEvent::Refresh => state,
            ScreenEvent::Submit => return self.submit(state, api, customer).await,
        };
    }

    /// Publishes the in-flight state, then waits for the create request.
    async fn submit<A: OrderApi>(&mut self, state: ScreenState, api: &A, customer: &Customer) {
        let (state, payload) = state.begin_submit(customer.id, Utc::now());
        self.state = state;
        let Some(payload) = payload else {
            debug!("Submit ignored");
            return;
        };
        self.publish();

        let result = api.create_order(payload).await;
        if let Err(e) = &result {
            warn!(error = %e, "Submit failed");
        }
        self.state = std::mem::take(&mut self.state).submitted(result);
    }
}

/// A cloneable handle for sending events to a [`ScreenActor`].
#[derive(Debug, Clone)]
pub struct ScreenClient {
    sender: mpsc::Sender<ScreenRequest>,
    updates: watch::Receiver<ScreenState>,
}

impl ScreenClient {
    /// Sends `event` and waits for the state it produced.
    pub async fn send(&self, event: ScreenEvent) -> Result<ScreenState, ScreenError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest { event, respond_to })
            .await
            .map_err(|_| ScreenError::Closed)?;
        response.await.map_err(|_| ScreenError::Dropped)
    }

    /// The most recently published state, without waiting on the actor.
    ///
    /// Before the initial load settles this is the loading state.
    pub fn current(&self) -> ScreenState {
        self.updates.borrow().clone()
    }

    /// A receiver that sees every state the actor publishes, including the
    /// in-flight submit that [`send`](Self::send) never returns.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.updates.clone()
    }

    /// Waits for the actor to reach the current end of its queue and returns its state.
    pub async fn snapshot(&self) -> Result<ScreenState, ScreenError> {
        self.send(ScreenEvent::Refresh).await
    }

    pub async fn select_product(&self, product: ProductId) -> Result<ScreenState, ScreenError> {
        self.send(ScreenEvent::SelectProduct(Some(product))).await
    }

    pub async fn set_quantity(&self, raw: impl Into<String>) -> Result<ScreenState, ScreenError> {
        self.send(ScreenEvent::SetQuantity(raw.into())).await
    }

    pub async fn add_item(&self) -> Result<ScreenState, ScreenError> {
        self.send(ScreenEvent::AddItem).await
    }

    pub async fn submit(&self) -> Result<ScreenState, ScreenError> {
        self.send(ScreenEvent::Submit).await
    }
}
