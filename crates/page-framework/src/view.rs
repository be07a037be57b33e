//! # View-Model Builder
//!
//! Pages never render raw records. They render view-models: flat projections
//! of a record joined against the lookup lists it references (a reservation
//! shows its client's name, not `cliente_id`).
//!
//! Lookup lists are fetched independently of the main list and may arrive in
//! any order, or not at all. Until a lookup arrives, references render as a
//! deterministic placeholder such as `Cliente #7`. Because [`build_views`] is
//! a pure function of `(records, lookups)`, rebuilding after every arrival
//! gives the same final projection whatever the arrival order.

use crate::client::ResourceClient;
use crate::error::TransportError;
use crate::message::ListQuery;
use crate::resource::{RecordId, Resource};
use futures::future::{BoxFuture, FutureExt};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::Debug;

/// A lookup list indexed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T: Resource> {
    items: Vec<T>,
    index: HashMap<RecordId, usize>,
    loaded: bool,
}

impl<T: Resource> Default for Lookup<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            loaded: false,
        }
    }
}

impl<T: Resource> Lookup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an already-loaded lookup.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut lookup = Self::new();
        lookup.replace(items);
        lookup
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.index.clear();
        for (position, item) in items.iter().enumerate() {
            // first occurrence wins on duplicate ids
            self.index.entry(item.id()).or_insert(position);
        }
        self.items = items;
        self.loaded = true;
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Label of the referenced record, or its placeholder when unknown.
    pub fn label(&self, id: RecordId, f: impl FnOnce(&T) -> String) -> String {
        self.get(id).map(f).unwrap_or_else(|| Self::placeholder(id))
    }

    pub fn placeholder(id: RecordId) -> String {
        format!("{} #{}", T::LABEL, id)
    }
}

/// Deferred write of a fetched lookup list into a page's lookups.
pub type LookupApply<L> = Box<dyn FnOnce(&mut L) + Send>;

/// One independent lookup fetch issued by a page load.
pub struct LookupFetch<L> {
    /// Path of the fetched resource, for logs and error reporting.
    pub source: &'static str,
    pub future: BoxFuture<'static, Result<LookupApply<L>, TransportError>>,
}

impl<L: 'static> LookupFetch<L> {
    /// Lists every record of `T` and stores it in the slot picked by `slot`.
    pub fn of<T: Resource>(client: &ResourceClient<T>, slot: fn(&mut L) -> &mut Lookup<T>) -> Self {
        let client = client.clone();
        let future = async move {
            let items = client.list(ListQuery::new()).await?;
            let apply: LookupApply<L> = Box::new(move |lookups: &mut L| slot(lookups).replace(items));
            Ok(apply)
        }
        .boxed();
        Self {
            source: T::PATH,
            future,
        }
    }
}

/// The set of lookup lists a view-model joins against.
pub trait Lookups: Default + Send + 'static {
    /// Clients needed to fetch the lists.
    type Sources: Clone + Send + Sync + 'static;

    fn fetches(sources: &Self::Sources) -> Vec<LookupFetch<Self>>;
}

/// For pages that join against nothing.
impl Lookups for () {
    type Sources = ();

    fn fetches(_sources: &()) -> Vec<LookupFetch<Self>> {
        Vec::new()
    }
}

/// A renderable projection of one record.
pub trait ViewModel: Clone + Debug + PartialEq + Send + 'static {
    type Record: Resource;
    type Lookups: Lookups;

    fn build(record: &Self::Record, lookups: &Self::Lookups) -> Self;

    fn id(&self) -> RecordId;

    /// Text matched by the page filter.
    fn searchable(&self) -> String;
}

/// Provisional rows first (newest first), then persisted rows by descending id.
fn sort_key(id: RecordId) -> (bool, Reverse<u64>) {
    (!id.is_provisional(), Reverse(id.0.unsigned_abs()))
}

pub fn build_views<V: ViewModel>(records: &[V::Record], lookups: &V::Lookups) -> Vec<V> {
    let mut views: Vec<V> = records
        .iter()
        .map(|record| V::build(record, lookups))
        .collect();
    views.sort_by_key(|view| sort_key(view.id()));
    views
}

/// Case-insensitive substring filter. A blank query keeps every view, in order.
pub fn filter_views<V: ViewModel>(views: &[V], query: &str) -> Vec<V> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return views.to_vec();
    }
    views
        .iter()
        .filter(|view| view.searchable().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Author, Note, NoteLookups, NoteView};

    fn note(id: i64, title: &str, author: i64) -> Note {
        Note {
            id: RecordId(id),
            title: title.into(),
            author_id: RecordId(author),
            pinned: false,
        }
    }

    #[test]
    fn missing_reference_renders_placeholder() {
        let lookups = NoteLookups::default();
        let views: Vec<NoteView> = build_views(&[note(1, "Llegada", 7)], &lookups);
        assert_eq!(views[0].author, "Autor #7");
    }

    #[test]
    fn loaded_reference_renders_label() {
        let lookups = NoteLookups {
            authors: Lookup::from_items(vec![Author {
                id: RecordId(7),
                name: "Marta".into(),
            }]),
        };
        let views: Vec<NoteView> = build_views(&[note(1, "Llegada", 7)], &lookups);
        assert_eq!(views[0].author, "Marta");
        assert!(lookups.authors.is_loaded());
    }

    #[test]
    fn provisional_first_then_descending_ids() {
        let records = vec![note(2, "b", 1), note(-1, "p1", 1), note(9, "c", 1), note(-2, "p2", 1)];
        let views: Vec<NoteView> = build_views(&records, &NoteLookups::default());
        let ids: Vec<i64> = views.iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![-2, -1, 9, 2]);
    }

    #[test]
    fn build_is_idempotent() {
        let records = vec![note(3, "a", 1), note(4, "b", 2)];
        let lookups = NoteLookups::default();
        let first: Vec<NoteView> = build_views(&records, &lookups);
        let second: Vec<NoteView> = build_views(&records, &lookups);
        assert_eq!(first, second);
    }

    #[test]
    fn blank_filter_is_identity() {
        let views: Vec<NoteView> =
            build_views(&[note(1, "Limpieza", 1), note(2, "Check-in", 1)], &NoteLookups::default());
        assert_eq!(filter_views(&views, ""), views);
        assert_eq!(filter_views(&views, "   "), views);
    }

    #[test]
    fn filter_is_case_insensitive_subsequence_and_idempotent() {
        let views: Vec<NoteView> = build_views(
            &[note(1, "Limpieza hab 12", 1), note(2, "Check-in", 1), note(3, "LIMPIEZA lobby", 1)],
            &NoteLookups::default(),
        );
        let once = filter_views(&views, " limpieza ");
        let ids: Vec<i64> = once.iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(filter_views(&once, "limpieza"), once);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let lookup = Lookup::from_items(vec![
            Author { id: RecordId(1), name: "first".into() },
            Author { id: RecordId(1), name: "second".into() },
        ]);
        assert_eq!(lookup.get(RecordId(1)).map(|a| a.name.as_str()), Some("first"));
    }
}
