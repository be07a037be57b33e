use crate::model::{role_badge, role_label, User};
use page_framework::{RecordId, ViewModel};

#[derive(Debug, Clone, PartialEq)]
pub struct UserView {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub role: String,
    pub role_label: String,
    pub badge: &'static str,
    pub email: String,
    pub active: bool,
}

impl ViewModel for UserView {
    type Record = User;
    type Lookups = ();

    fn build(user: &User, _lookups: &()) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
            role_label: role_label(&user.role).to_owned(),
            badge: role_badge(&user.role),
            email: user.email.clone().unwrap_or_default(),
            active: user.active,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id, self.name, self.username, self.role, self.email
        )
    }
}
