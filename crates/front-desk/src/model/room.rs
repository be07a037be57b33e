use page_framework::RecordId;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    /// Door label. Some backends send it as a number.
    #[serde(rename = "numero", deserialize_with = "text_or_number")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "disponible")]
    pub available: bool,
}

impl Room {
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "disponible"
        } else {
            "ocupada"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPayload {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "disponible")]
    pub available: bool,
}

impl Default for RoomPayload {
    fn default() -> Self {
        Self {
            number: String::new(),
            kind: String::new(),
            price: 0.0,
            available: true,
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
