use crate::model::Room;
use page_framework::{RecordId, ViewModel};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomView {
    pub id: RecordId,
    pub number: String,
    pub kind: String,
    pub price: f64,
    pub available: bool,
    /// `disponible` or `ocupada`.
    pub availability: &'static str,
}

impl ViewModel for RoomView {
    type Record = Room;
    type Lookups = ();

    fn build(room: &Room, _lookups: &()) -> Self {
        Self {
            id: room.id,
            number: room.number.clone(),
            kind: room.kind.clone(),
            price: room.price,
            available: room.available,
            availability: room.availability_label(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!("{} {} {} {}", self.number, self.kind, self.price, self.availability)
    }
}
