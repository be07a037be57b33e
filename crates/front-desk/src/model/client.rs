use page_framework::RecordId;
use serde::{Deserialize, Serialize};

/// A hotel guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "correo", default)]
    pub email: String,
    #[serde(rename = "nacionalidad", default)]
    pub nationality: String,
}

/// Body of `POST /api/clientes/` and `PUT /api/clientes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "nacionalidad")]
    pub nationality: String,
}
