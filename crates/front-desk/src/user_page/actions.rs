use super::view::UserView;
use crate::model::User;
use page_framework::{PageController, PageError, RecordId, Resource, ResourceAction, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Activate,
    Deactivate,
}

impl ResourceAction for UserAction {
    fn segment(&self) -> &'static str {
        match self {
            Self::Activate => "activar",
            Self::Deactivate => "desactivar",
        }
    }
}

pub trait UsersPageExt {
    fn activate(&mut self, id: RecordId) -> Result<Ticket, PageError>;

    fn deactivate(&mut self, id: RecordId) -> Result<Ticket, PageError>;

    /// Activates an inactive account and deactivates an active one.
    fn toggle(&mut self, id: RecordId) -> Result<Ticket, PageError>;
}

impl UsersPageExt for PageController<UserView> {
    fn activate(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        self.act(id, UserAction::Activate)
    }

    fn deactivate(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        self.act(id, UserAction::Deactivate)
    }

    fn toggle(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        let user = self.record(id).ok_or(PageError::NotFound(id))?;
        let action = if user.active {
            UserAction::Deactivate
        } else {
            UserAction::Activate
        };
        tracing::debug!(resource = User::PATH, %id, ?action, "Toggle");
        self.act(id, action)
    }
}
