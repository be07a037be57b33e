//! # Page Controller
//!
//! A [`PageController`] holds everything one list page needs: the
//! authoritative records, the lookups they join against, the derived and
//! filtered view-models, the form, and the in-flight flags.
//!
//! ## Event Loop
//!
//! Requests run on spawned tasks. Their completions come back as events on
//! the page's own channel and are applied one at a time, in arrival order,
//! by [`next_event`](PageController::next_event). The controller itself is
//! owned by a single task, so no state is shared and nothing is locked.
//!
//! ```rust,ignore
//! let mut page = PageController::<ReservationView>::new(client, sources);
//! page.load()?;
//! while let Some(update) = page.next_event().await {
//!     render(page.filtered());
//! }
//! ```
//!
//! ## Optimistic State
//!
//! The page keeps the confirmed *base* (the last load plus every confirmed
//! mutation) apart from the visible records, which are the base with the
//! outstanding mutations replayed on top in dispatch order. Answers may
//! arrive in any order: a confirmation is folded into the base, a failure
//! only drops its own change. See [`crate::mutation`].
//!
//! ## Staleness
//!
//! `load()` and `close()` bump the page generation. Every event carries the
//! generation it was issued under. A stale load or lookup is dropped.
//! A mutation is detached once a load issued after it has arrived, since
//! that load replaced the base it was applied to; its answer still
//! releases the flags it holds, but its data is dropped. The error of a
//! detached mutation is still surfaced unless the page is closed.

use crate::client::ResourceClient;
use crate::error::{Operation, PageError, TransportError};
use crate::message::ListQuery;
use crate::mutation::{rebase, reconcile, Change, Mutation, MutationKind, MutationPhase, Reply};
use crate::resource::{RecordId, Resource, ResourceAction};
use crate::view::{build_views, filter_views, LookupApply, Lookups, ViewModel};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type Record<V> = <V as ViewModel>::Record;
type Sources<V> = <<V as ViewModel>::Lookups as Lookups>::Sources;

/// Handle identifying one dispatched mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What applying one event changed.
#[derive(Debug, Clone, PartialEq)]
pub enum PageUpdate {
    Loaded { count: usize },
    LoadFailed,
    LookupArrived { source: &'static str },
    LookupFailed { source: &'static str },
    Confirmed { ticket: Ticket, kind: MutationKind },
    RolledBack { ticket: Ticket, kind: MutationKind },
    /// Stale event. Only its flags were released.
    Ignored,
}

/// In-flight flags. They disable the controls that would trigger a second,
/// conflicting request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    loads: usize,
    lookups: usize,
    saving: bool,
    busy: HashSet<RecordId>,
}

impl InFlight {
    pub fn loading(&self) -> bool {
        self.loads > 0
    }

    pub fn loading_lookups(&self) -> bool {
        self.lookups > 0
    }

    /// A create or update is in flight; the form is locked.
    pub fn saving(&self) -> bool {
        self.saving
    }

    /// A mutation on this row is in flight.
    pub fn is_busy(&self, id: RecordId) -> bool {
        self.busy.contains(&id)
    }
}

/// Form draft and edit target.
#[derive(Debug, Clone)]
pub struct FormState<R: Resource> {
    draft: R::Create,
    editing: Option<RecordId>,
}

impl<R: Resource> Default for FormState<R> {
    fn default() -> Self {
        Self {
            draft: Default::default(),
            editing: None,
        }
    }
}

impl<R: Resource> FormState<R> {
    pub fn draft(&self) -> &R::Create {
        &self.draft
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }
}

struct Pending<R: Resource> {
    mutation: Mutation<R>,
    generation: u64,
    from_form: bool,
}

enum PageEvent<V: ViewModel> {
    Records {
        generation: u64,
        result: Result<Vec<Record<V>>, TransportError>,
    },
    Lookup {
        generation: u64,
        source: &'static str,
        result: Result<LookupApply<V::Lookups>, TransportError>,
    },
    Settled {
        generation: u64,
        ticket: Ticket,
        result: Result<Reply<Record<V>>, TransportError>,
    },
}

pub struct PageController<V: ViewModel> {
    client: ResourceClient<Record<V>>,
    sources: Sources<V>,
    query: ListQuery,

    base: Vec<Record<V>>,
    records: Vec<Record<V>>,
    lookups: V::Lookups,
    views: Vec<V>,
    filtered: Vec<V>,
    filter: String,

    form: FormState<Record<V>>,
    flags: InFlight,
    /// Outstanding mutations, in dispatch order.
    pending: BTreeMap<Ticket, Pending<Record<V>>>,
    last_error: Option<PageError>,

    generation: u64,
    /// Generation of the last load that arrived.
    loaded_generation: u64,
    next_ticket: u64,
    next_provisional: i64,
    outstanding: usize,
    closed: bool,

    events_tx: mpsc::UnboundedSender<PageEvent<V>>,
    events_rx: mpsc::UnboundedReceiver<PageEvent<V>>,
}

impl<V: ViewModel> PageController<V> {
    pub fn new(client: ResourceClient<Record<V>>, sources: Sources<V>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            sources,
            query: ListQuery::new(),
            base: Vec::new(),
            records: Vec::new(),
            lookups: Default::default(),
            views: Vec::new(),
            filtered: Vec::new(),
            filter: String::new(),
            form: FormState::default(),
            flags: InFlight::default(),
            pending: BTreeMap::new(),
            last_error: None,
            generation: 0,
            loaded_generation: 0,
            next_ticket: 1,
            next_provisional: -1,
            outstanding: 0,
            closed: false,
            events_tx,
            events_rx,
        }
    }

    /// Query parameters sent with every list request of this page.
    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = query;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn records(&self) -> &[Record<V>] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&Record<V>> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn views(&self) -> &[V] {
        &self.views
    }

    pub fn filtered(&self) -> &[V] {
        &self.filtered
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn lookups(&self) -> &V::Lookups {
        &self.lookups
    }

    pub fn flags(&self) -> &InFlight {
        &self.flags
    }

    pub fn form(&self) -> &FormState<Record<V>> {
        &self.form
    }

    pub fn client(&self) -> &ResourceClient<Record<V>> {
        &self.client
    }

    pub fn last_error(&self) -> Option<&PageError> {
        self.last_error.as_ref()
    }

    /// Takes the error, so it is shown once.
    pub fn take_error(&mut self) -> Option<PageError> {
        self.last_error.take()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Requests issued and not yet applied.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    // =========================================================================
    // Load & filter
    // =========================================================================

    /// Fetches the records and, independently, every lookup list.
    pub fn load(&mut self) -> Result<(), PageError> {
        self.ensure_open()?;
        self.generation += 1;
        let generation = self.generation;
        let resource = <Record<V> as Resource>::PATH;
        debug!(resource, generation, "Load");

        self.flags.loads += 1;
        let client = self.client.clone();
        let query = self.query.clone();
        self.spawn(async move {
            PageEvent::Records {
                generation,
                result: client.list(query).await,
            }
        });

        for fetch in <V::Lookups as Lookups>::fetches(&self.sources) {
            self.flags.lookups += 1;
            let source = fetch.source;
            let future = fetch.future;
            self.spawn(async move {
                PageEvent::Lookup {
                    generation,
                    source,
                    result: future.await,
                }
            });
        }
        Ok(())
    }

    pub fn set_filter(&mut self, query: &str) -> &[V] {
        self.filter = query.to_owned();
        self.filtered = filter_views(&self.views, &self.filter);
        &self.filtered
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn create(&mut self, params: <Record<V> as Resource>::Create) -> Result<Ticket, PageError> {
        self.create_inner(params, false)
    }

    pub fn update(
        &mut self,
        id: RecordId,
        update: <Record<V> as Resource>::Update,
    ) -> Result<Ticket, PageError> {
        self.update_inner(id, update, false)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        self.ensure_open()?;
        if self.flags.is_busy(id) {
            return Err(PageError::Busy);
        }
        if self.record(id).is_none() {
            return Err(PageError::NotFound(id));
        }

        let mut mutation = Mutation::new(MutationKind::Delete, id);
        self.records = mutation.apply(&self.records, Change::Remove(id));
        self.rebuild();
        self.flags.busy.insert(id);

        let client = self.client.clone();
        Ok(self.dispatch(mutation, false, async move {
            client.delete(id).await.map(|()| Reply::Deleted)
        }))
    }

    /// Runs a status action on one record.
    pub fn act(
        &mut self,
        id: RecordId,
        action: <Record<V> as Resource>::Action,
    ) -> Result<Ticket, PageError> {
        self.ensure_open()?;
        if self.flags.is_busy(id) {
            return Err(PageError::Busy);
        }
        let mut predicted = self.record(id).cloned().ok_or(PageError::NotFound(id))?;
        predicted.apply_action(&action);

        let mut mutation = Mutation::new(MutationKind::Action(action.segment()), id);
        self.records = mutation.apply(&self.records, Change::Replace(predicted));
        self.rebuild();
        self.flags.busy.insert(id);

        let client = self.client.clone();
        Ok(self.dispatch(mutation, false, async move {
            client.perform_action(id, action).await.map(Reply::Record)
        }))
    }

    fn create_inner(
        &mut self,
        params: <Record<V> as Resource>::Create,
        from_form: bool,
    ) -> Result<Ticket, PageError> {
        self.ensure_open()?;
        if self.flags.saving {
            return Err(PageError::Busy);
        }
        <Record<V> as Resource>::validate_create(&params)?;

        let id = RecordId(self.next_provisional);
        self.next_provisional -= 1;
        let record = <Record<V> as Resource>::provisional(id, &params);

        let mut mutation = Mutation::new(MutationKind::Create, id);
        self.records = mutation.apply(&self.records, Change::Insert(record));
        self.rebuild();
        self.flags.saving = true;
        self.flags.busy.insert(id);

        let client = self.client.clone();
        Ok(self.dispatch(mutation, from_form, async move {
            client.create(params).await.map(Reply::Record)
        }))
    }

    fn update_inner(
        &mut self,
        id: RecordId,
        update: <Record<V> as Resource>::Update,
        from_form: bool,
    ) -> Result<Ticket, PageError> {
        self.ensure_open()?;
        if self.flags.saving || self.flags.is_busy(id) {
            return Err(PageError::Busy);
        }
        <Record<V> as Resource>::validate_update(&update)?;
        let mut predicted = self.record(id).cloned().ok_or(PageError::NotFound(id))?;
        predicted.apply_update(&update);

        let mut mutation = Mutation::new(MutationKind::Update, id);
        self.records = mutation.apply(&self.records, Change::Replace(predicted));
        self.rebuild();
        self.flags.saving = true;
        self.flags.busy.insert(id);

        let client = self.client.clone();
        Ok(self.dispatch(mutation, from_form, async move {
            client.update(id, update).await.map(Reply::Record)
        }))
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Loads a record into the form and makes it the edit target.
    pub fn edit(&mut self, id: RecordId) -> Result<(), PageError> {
        let record = self.record(id).ok_or(PageError::NotFound(id))?;
        self.form.draft = record.draft();
        self.form.editing = Some(id);
        Ok(())
    }

    pub fn clear_form(&mut self) {
        self.form = FormState::default();
    }

    pub fn draft_mut(&mut self) -> &mut <Record<V> as Resource>::Create {
        &mut self.form.draft
    }

    /// Creates or updates from the form. The form is cleared once the
    /// backend confirms.
    pub fn submit(&mut self) -> Result<Ticket, PageError>
    where
        <Record<V> as Resource>::Update: From<<Record<V> as Resource>::Create>,
    {
        let draft = self.form.draft.clone();
        match self.form.editing {
            Some(id) => self.update_inner(id, draft.into(), true),
            None => self.create_inner(draft, true),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Waits for the next completion and applies it.
    ///
    /// Returns `None` once nothing is outstanding.
    pub async fn next_event(&mut self) -> Option<PageUpdate> {
        if self.outstanding == 0 {
            return None;
        }
        let event = self.events_rx.recv().await?;
        self.outstanding -= 1;
        Some(self.apply(event))
    }

    /// Applies completions until nothing is outstanding.
    pub async fn settle(&mut self) -> Vec<PageUpdate> {
        let mut updates = Vec::new();
        while let Some(update) = self.next_event().await {
            updates.push(update);
        }
        updates
    }

    /// Tears the page down. Completions still in flight are dropped.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
        info!(
            resource = <Record<V> as Resource>::PATH,
            outstanding = self.outstanding,
            "Page closed"
        );
    }

    fn apply(&mut self, event: PageEvent<V>) -> PageUpdate {
        let resource = <Record<V> as Resource>::PATH;
        match event {
            PageEvent::Records { generation, result } => {
                self.flags.loads = self.flags.loads.saturating_sub(1);
                if self.is_stale(generation) {
                    debug!(resource, generation, "Stale records dropped");
                    return PageUpdate::Ignored;
                }
                match result {
                    Ok(records) => {
                        let count = records.len();
                        self.base = records;
                        self.loaded_generation = generation;
                        self.replay();
                        info!(resource, generation, count, "Loaded");
                        PageUpdate::Loaded { count }
                    }
                    Err(e) => {
                        warn!(resource, generation, error = %e, "Load failed");
                        self.base.clear();
                        self.loaded_generation = generation;
                        self.replay();
                        self.last_error = Some(PageError::transport(Operation::Load, e));
                        PageUpdate::LoadFailed
                    }
                }
            }
            PageEvent::Lookup {
                generation,
                source,
                result,
            } => {
                self.flags.lookups = self.flags.lookups.saturating_sub(1);
                if self.is_stale(generation) {
                    debug!(resource, source, generation, "Stale lookup dropped");
                    return PageUpdate::Ignored;
                }
                match result {
                    Ok(apply) => {
                        apply(&mut self.lookups);
                        self.rebuild();
                        info!(resource, source, generation, "Lookup arrived");
                        PageUpdate::LookupArrived { source }
                    }
                    Err(e) => {
                        warn!(resource, source, generation, error = %e, "Lookup failed");
                        self.last_error =
                            Some(PageError::transport(Operation::Lookup(source), e));
                        PageUpdate::LookupFailed { source }
                    }
                }
            }
            PageEvent::Settled {
                generation,
                ticket,
                result,
            } => self.settle_mutation(generation, ticket, result),
        }
    }

    fn settle_mutation(
        &mut self,
        generation: u64,
        ticket: Ticket,
        result: Result<Reply<Record<V>>, TransportError>,
    ) -> PageUpdate {
        let resource = <Record<V> as Resource>::PATH;
        let Some(mut pending) = self.pending.remove(&ticket) else {
            warn!(resource, %ticket, "Completion for unknown mutation");
            return PageUpdate::Ignored;
        };
        let kind = pending.mutation.kind();
        let target = pending.mutation.target();

        if matches!(kind, MutationKind::Create | MutationKind::Update) {
            self.flags.saving = false;
        }
        self.flags.busy.remove(&target);

        if self.is_detached(generation) {
            match result {
                Ok(Reply::Record(server)) => info!(
                    resource,
                    %ticket,
                    %target,
                    server_id = %server.id(),
                    generation,
                    "Confirmation arrived after reload, dropped"
                ),
                Ok(Reply::Deleted) => {
                    info!(resource, %ticket, %target, generation, "Delete confirmed after reload")
                }
                Err(e) => {
                    debug!(resource, %ticket, %target, generation, "Stale failure dropped");
                    if !self.closed {
                        self.last_error = Some(PageError::transport(kind.operation(), e));
                    }
                }
            }
            return PageUpdate::Ignored;
        }

        let reconciled = reconcile(&self.base, &pending.mutation, &result);
        pending.mutation.settle(reconciled.phase);
        self.base = reconciled.records;
        self.replay();

        match reconciled.phase {
            MutationPhase::Confirmed => {
                info!(resource, %ticket, %target, ?kind, "Confirmed");
                if pending.from_form {
                    self.clear_form();
                }
                PageUpdate::Confirmed { ticket, kind }
            }
            _ => {
                let error = match result {
                    Err(e) => e,
                    Ok(_) => TransportError::Invariant(format!(
                        "unexpected reply to {:?} on {}",
                        kind, target
                    )),
                };
                warn!(resource, %ticket, %target, ?kind, error = %error, "Rolled back");
                self.last_error = Some(PageError::transport(kind.operation(), error));
                PageUpdate::RolledBack { ticket, kind }
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_open(&self) -> Result<(), PageError> {
        if self.closed {
            return Err(PageError::Closed);
        }
        Ok(())
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.closed || generation != self.generation
    }

    /// Recomputes the visible records from the base and the outstanding
    /// mutations still attached to it.
    fn replay(&mut self) {
        let loaded = self.loaded_generation;
        self.records = rebase(
            &self.base,
            self.pending
                .values()
                .filter(|p| p.generation >= loaded)
                .map(|p| &p.mutation),
        );
        self.rebuild();
    }

    /// The mutation was applied to a base that a later load replaced.
    fn is_detached(&self, generation: u64) -> bool {
        self.closed || generation < self.loaded_generation
    }

    fn rebuild(&mut self) {
        self.views = build_views(&self.records, &self.lookups);
        self.filtered = filter_views(&self.views, &self.filter);
    }

    fn dispatch<F>(&mut self, mutation: Mutation<Record<V>>, from_form: bool, request: F) -> Ticket
    where
        F: Future<Output = Result<Reply<Record<V>>, TransportError>> + Send + 'static,
    {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let generation = self.generation;
        debug!(
            resource = <Record<V> as Resource>::PATH,
            %ticket,
            target = %mutation.target(),
            kind = ?mutation.kind(),
            generation,
            "Dispatch"
        );

        self.pending.insert(
            ticket,
            Pending {
                mutation,
                generation,
                from_form,
            },
        );
        self.spawn(async move {
            PageEvent::Settled {
                generation,
                ticket,
                result: request.await,
            }
        });
        ticket
    }

    fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = PageEvent<V>> + Send + 'static,
    {
        self.outstanding += 1;
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = events.send(future.await);
        });
    }
}
