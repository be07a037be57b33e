//! # Mock Gateway & Testing Guide
//!
//! Pages and typed clients only ever talk to a [`ResourceClient`], so tests
//! can serve that client by hand instead of running an [`HttpGateway`]
//! against a real backend.
//!
//! ## When to use which
//!
//! | Need | Tool |
//! |------|------|
//! | Scripted answers, in order | [`MockClient`] (`expect_*().return_ok/return_err`) |
//! | Control *when* each answer arrives | [`create_mock_client`] + `expect_*` helpers |
//! | Real HTTP | [`HttpGateway`] |
//!
//! ## Pattern 0: Scripted answers
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Client>::new();
//! mock.expect_list().return_ok(vec![ana.clone()]);
//! mock.expect_delete(ana.id).return_err(TransportError::Network("reset".into()));
//!
//! let client = mock.client();
//! assert_eq!(client.list(ListQuery::new()).await?, vec![ana.clone()]);
//! assert!(client.delete(ana.id).await.is_err());
//! mock.verify();
//! ```
//!
//! ## Pattern 1: Hand-timed answers
//!
//! Out-of-order arrivals are the interesting cases for a page. Keep the
//! receiver, pull each request with a helper and answer it whenever the test
//! wants:
//!
//! ```rust,ignore
//! let (rooms, mut rooms_rx) = create_mock_client::<Room>(8);
//! page.load()?;
//! let (_query, respond_to) = expect_list(&mut rooms_rx).await.unwrap();
//! // ... answer the clients lookup first, then:
//! respond_to.send(Ok(vec![room])).unwrap();
//! ```
//!
//! [`HttpGateway`]: crate::HttpGateway

use crate::client::ResourceClient;
use crate::error::TransportError;
use crate::message::{ListQuery, ResourceRequest, Response};
use crate::resource::{RecordId, Resource};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation<T: Resource> {
    List {
        response: Result<Vec<T>, TransportError>,
    },
    Create {
        response: Result<T, TransportError>,
    },
    Update {
        id: RecordId,
        response: Result<T, TransportError>,
    },
    Delete {
        id: RecordId,
        response: Result<(), TransportError>,
    },
    Action {
        id: RecordId,
        response: Result<T, TransportError>,
    },
}

struct Script<T: Resource> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<Script<T>>>;

fn lock<T: Resource>(script: &Shared<T>) -> MutexGuard<'_, Script<T>> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock gateway answering from a queue of expectations.
///
/// Requests are matched in order. A request that does not match the next
/// expectation is answered with [`TransportError::Invariant`] and recorded;
/// [`verify`](Self::verify) then fails the test.
pub struct MockClient<T: Resource> {
    client: ResourceClient<T>,
    script: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockClient<T> {
    /// Creates a new mock with no expectations. Must run inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: Shared<T> = Arc::new(Mutex::new(Script {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let script_clone = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&script_clone).expectations.pop_front();
                answer(&script_clone, request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: RecordId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: RecordId) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: RecordId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Panics if an expectation is left over or a request did not match.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", script.mismatches);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, TransportError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            script: self.script.clone(),
            make: Box::new(make),
            _answer: PhantomData,
        }
    }
}

/// Builder for one expectation; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: Resource, R> {
    script: Shared<T>,
    make: Box<dyn FnOnce(Result<R, TransportError>) -> Expectation<T> + Send>,
    _answer: PhantomData<R>,
}

impl<T: Resource, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, TransportError>) {
        let expectation = (self.make)(response);
        lock(&self.script).expectations.push_back(expectation);
    }
}

fn check_id(expected: RecordId, got: RecordId, what: &str) -> Option<String> {
    (expected != got).then(|| format!("{what} on {got}, expected {expected}"))
}

/// Answers `request`. Mismatches are recorded before the answer is sent, so
/// a test that awaited the call can `verify()` right away.
fn answer<T: Resource>(
    script: &Shared<T>,
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) {
    let record = |mismatch: Option<String>| {
        if let Some(mismatch) = mismatch {
            lock(script).mismatches.push(mismatch);
        }
    };

    match (request, expectation) {
        (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update {
                id: expected,
                response,
            }),
        ) => {
            record(check_id(expected, id, "update"));
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete {
                id: expected,
                response,
            }),
        ) => {
            record(check_id(expected, id, "delete"));
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action {
                id: expected,
                response,
            }),
        ) => {
            record(check_id(expected, id, "action"));
            let _ = respond_to.send(response);
        }
        (request, _) => {
            record(Some(format!("{request:?}")));
            let error = TransportError::Invariant("unexpected request".into());
            match request {
                ResourceRequest::List { respond_to, .. } => {
                    let _ = respond_to.send(Err(error));
                }
                ResourceRequest::Create { respond_to, .. }
                | ResourceRequest::Update { respond_to, .. }
                | ResourceRequest::Action { respond_to, .. } => {
                    let _ = respond_to.send(Err(error));
                }
                ResourceRequest::Delete { respond_to, .. } => {
                    let _ = respond_to.send(Err(error));
                }
            }
        }
    }
}

// =============================================================================
// HAND-TIMED HELPERS
// =============================================================================

/// Creates a client and the receiver serving it.
///
/// The test plays the gateway: it pulls requests from `receiver`, asserts on
/// them, and answers whenever it wants, which makes arrival order fully
/// deterministic.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(ListQuery, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
pub async fn expect_update<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request.
pub async fn expect_delete<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, T::Action, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
