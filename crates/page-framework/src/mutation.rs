//! # Optimistic Mutations
//!
//! Every create, update, delete or status action goes through the same
//! small state machine:
//!
//! ```text
//! Idle --apply--> Applied --reconcile(Ok)--> Confirmed
//!                    \------reconcile(Err)--> RolledBack
//! ```
//!
//! A page keeps two sets. The *base* is server truth: the last load with
//! every confirmed mutation folded in. The visible set is the base with the
//! change of each outstanding mutation replayed on top, in dispatch order
//! ([`rebase`]).
//!
//! [`reconcile`] is the pure reducer run when the backend answers. It only
//! ever touches the base: a confirmation folds the server record in, a
//! failure leaves the base as it is. Rebuilding the visible set afterwards
//! drops the failed change while keeping every other one, whatever order
//! the answers arrive in.

use crate::error::{Operation, TransportError};
use crate::resource::{RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    /// A status action, with its endpoint segment.
    Action(&'static str),
}

impl MutationKind {
    pub fn operation(self) -> Operation {
        match self {
            Self::Create => Operation::Create,
            Self::Update => Operation::Update,
            Self::Delete => Operation::Delete,
            Self::Action(segment) => Operation::Action(segment),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Idle,
    Applied,
    Confirmed,
    RolledBack,
}

/// The optimistic change applied by a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    /// New provisional record, shown at the top.
    Insert(T),
    /// Predicted state of an existing record.
    Replace(T),
    Remove(RecordId),
}

impl<T: Resource> Change<T> {
    /// Returns `records` with this change applied. A `Replace` or `Remove`
    /// whose record is gone changes nothing.
    pub fn applied_to(&self, records: &[T]) -> Vec<T> {
        match self {
            Change::Insert(record) => {
                let mut next = Vec::with_capacity(records.len() + 1);
                next.push(record.clone());
                next.extend(records.iter().filter(|r| r.id() != record.id()).cloned());
                next
            }
            Change::Replace(record) => records
                .iter()
                .map(|r| {
                    if r.id() == record.id() {
                        record.clone()
                    } else {
                        r.clone()
                    }
                })
                .collect(),
            Change::Remove(id) => records.iter().filter(|r| r.id() != *id).cloned().collect(),
        }
    }
}

/// What the backend answered for a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Record(T),
    Deleted,
}

#[derive(Debug, Clone)]
pub struct Mutation<T: Resource> {
    kind: MutationKind,
    target: RecordId,
    change: Option<Change<T>>,
    phase: MutationPhase,
}

impl<T: Resource> Mutation<T> {
    /// `target` is the provisional id for creates, the real id otherwise.
    pub fn new(kind: MutationKind, target: RecordId) -> Self {
        Self {
            kind,
            target,
            change: None,
            phase: MutationPhase::Idle,
        }
    }

    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    pub fn target(&self) -> RecordId {
        self.target
    }

    pub fn phase(&self) -> MutationPhase {
        self.phase
    }

    /// The optimistic change, once applied.
    pub fn change(&self) -> Option<&Change<T>> {
        self.change.as_ref()
    }

    /// Records `change` and returns `records` with it applied.
    pub fn apply(&mut self, records: &[T], change: Change<T>) -> Vec<T> {
        let next = change.applied_to(records);
        self.change = Some(change);
        self.phase = MutationPhase::Applied;
        next
    }

    /// Marks the mutation settled with the phase computed by [`reconcile`].
    pub fn settle(&mut self, phase: MutationPhase) {
        self.phase = phase;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled<T> {
    /// The new base.
    pub records: Vec<T>,
    pub phase: MutationPhase,
}

/// Folds the backend's answer for `mutation` into the confirmed `base`.
///
/// - Any error leaves `base` unchanged.
/// - A confirmed delete drops the target.
/// - A returned record replaces the entry with the target id or the server
///   id, so the id appears exactly once; if neither is present the record
///   is put at the top.
/// - `Deleted` answering anything but a delete is treated as a failure.
///
/// A mutation that was never applied (or already settled) leaves `base`
/// untouched.
pub fn reconcile<T: Resource>(
    base: &[T],
    mutation: &Mutation<T>,
    response: &Result<Reply<T>, TransportError>,
) -> Reconciled<T> {
    if mutation.phase != MutationPhase::Applied {
        return Reconciled {
            records: base.to_vec(),
            phase: mutation.phase,
        };
    }

    let rolled_back = || Reconciled {
        records: base.to_vec(),
        phase: MutationPhase::RolledBack,
    };

    match (mutation.kind, response) {
        (_, Err(_)) => rolled_back(),
        (MutationKind::Delete, Ok(_)) => Reconciled {
            records: Change::Remove(mutation.target).applied_to(base),
            phase: MutationPhase::Confirmed,
        },
        (_, Ok(Reply::Deleted)) => rolled_back(),
        (_, Ok(Reply::Record(server))) => {
            let server_id = server.id();
            let mut placed = false;
            let mut next = Vec::with_capacity(base.len() + 1);
            for record in base {
                let id = record.id();
                if id == mutation.target || id == server_id {
                    if !placed {
                        next.push(server.clone());
                        placed = true;
                    }
                } else {
                    next.push(record.clone());
                }
            }
            if !placed {
                next.insert(0, server.clone());
            }
            Reconciled {
                records: next,
                phase: MutationPhase::Confirmed,
            }
        }
    }
}

/// The visible set: `base` with the change of every applied mutation in
/// `outstanding` replayed in order.
pub fn rebase<'a, T: Resource + 'a>(
    base: &[T],
    outstanding: impl IntoIterator<Item = &'a Mutation<T>>,
) -> Vec<T> {
    outstanding
        .into_iter()
        .filter(|m| m.phase == MutationPhase::Applied)
        .filter_map(|m| m.change.as_ref())
        .fold(base.to_vec(), |records, change| change.applied_to(&records))
}
