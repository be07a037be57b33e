use page_framework::RecordId;
use serde::{Deserialize, Serialize};

/// Staff roles: `(value, label, badge class)`.
pub const ROLES: &[(&str, &str, &str)] = &[
    ("admin", "Administrador", "bg-danger"),
    ("manager", "Manager", "bg-primary"),
    ("recepcionista", "Recepcionista", "bg-success"),
    ("supervisor", "Supervisor", "bg-info"),
    ("limpieza", "Limpieza", "bg-warning"),
    ("mantenimiento", "Mantenimiento", "bg-secondary"),
    ("seguridad", "Seguridad", "bg-dark"),
    ("cocina", "Cocina", "bg-orange"),
];

/// Accepted values of `rol`.
pub fn role_values() -> Vec<&'static str> {
    ROLES.iter().map(|(value, _, _)| *value).collect()
}

pub fn role_label(role: &str) -> &str {
    ROLES
        .iter()
        .find(|(value, _, _)| *value == role)
        .map(|(_, label, _)| *label)
        .unwrap_or(role)
}

pub fn role_badge(role: &str) -> &'static str {
    ROLES
        .iter()
        .find(|(value, _, _)| *value == role)
        .map(|(_, _, class)| *class)
        .unwrap_or("bg-secondary")
}

/// A staff account. The password never comes back from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "estado", default)]
    pub active: bool,
}

/// User form. A blank password is left out of the body, so an update keeps
/// the stored one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub password: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub email: String,
    #[serde(rename = "estado")]
    pub active: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            password: String::new(),
            role: "recepcionista".into(),
            email: String::new(),
            active: true,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
