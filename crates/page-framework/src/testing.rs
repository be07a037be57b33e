//! Minimal resources used by the unit tests of this crate.

use crate::error::ValidationError;
use crate::resource::{RecordId, Resource, ResourceAction};
use crate::validate;
use crate::view::{LookupFetch, Lookup, Lookups, ViewModel};
use crate::ResourceClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub author_id: RecordId,
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub author_id: Option<RecordId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteAction {
    Pin,
}

impl ResourceAction for NoteAction {
    fn segment(&self) -> &'static str {
        match self {
            Self::Pin => "pin",
        }
    }
}

impl Resource for Note {
    type Create = NoteDraft;
    type Update = NoteDraft;
    type Action = NoteAction;

    const PATH: &'static str = "/api/notes";
    const LABEL: &'static str = "Nota";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &NoteDraft) -> Self {
        Self {
            id,
            title: params.title.clone(),
            author_id: params.author_id.unwrap_or_default(),
            pinned: false,
        }
    }

    fn apply_update(&mut self, update: &NoteDraft) {
        self.title = update.title.clone();
        if let Some(author_id) = update.author_id {
            self.author_id = author_id;
        }
    }

    fn apply_action(&mut self, action: &NoteAction) {
        match action {
            NoteAction::Pin => self.pinned = true,
        }
    }

    fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            author_id: Some(self.author_id),
        }
    }

    fn validate_create(params: &NoteDraft) -> Result<(), ValidationError> {
        validate::required("title", &params.title)?;
        validate::required_ref("author_id", params.author_id)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: RecordId,
    pub name: String,
}

impl Resource for Author {
    type Create = AuthorDraft;
    type Update = AuthorDraft;
    type Action = crate::NoAction;

    const PATH: &'static str = "/api/authors";
    const LABEL: &'static str = "Autor";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &AuthorDraft) -> Self {
        Self {
            id,
            name: params.name.clone(),
        }
    }

    fn apply_update(&mut self, update: &AuthorDraft) {
        self.name = update.name.clone();
    }

    fn draft(&self) -> AuthorDraft {
        AuthorDraft {
            name: self.name.clone(),
        }
    }

    fn validate_create(params: &AuthorDraft) -> Result<(), ValidationError> {
        validate::required("name", &params.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorDraft {
    pub name: String,
}

#[derive(Debug, Default)]
pub struct NoteLookups {
    pub authors: Lookup<Author>,
}

impl Lookups for NoteLookups {
    type Sources = ResourceClient<Author>;

    fn fetches(sources: &Self::Sources) -> Vec<LookupFetch<Self>> {
        vec![LookupFetch::<Self>::of(sources, |l| &mut l.authors)]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteView {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub pinned: bool,
}

impl ViewModel for NoteView {
    type Record = Note;
    type Lookups = NoteLookups;

    fn build(record: &Note, lookups: &NoteLookups) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            author: lookups.authors.label(record.author_id, |a| a.name.clone()),
            pinned: record.pinned,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!("{} {} {}", self.id, self.title, self.author)
    }
}
