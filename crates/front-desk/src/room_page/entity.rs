use crate::model::{Room, RoomPayload};
use page_framework::{validate, NoAction, RecordId, Resource, ValidationError};

impl Resource for Room {
    type Create = RoomPayload;
    type Update = RoomPayload;
    type Action = NoAction;

    const PATH: &'static str = "/api/habitaciones";
    const LABEL: &'static str = "Hab";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &RoomPayload) -> Self {
        Self {
            id,
            number: params.number.trim().to_owned(),
            kind: params.kind.trim().to_owned(),
            price: params.price,
            available: params.available,
        }
    }

    fn apply_update(&mut self, update: &RoomPayload) {
        *self = Self::provisional(self.id, update);
    }

    fn draft(&self) -> RoomPayload {
        RoomPayload {
            number: self.number.clone(),
            kind: self.kind.clone(),
            price: self.price,
            available: self.available,
        }
    }

    fn validate_create(params: &RoomPayload) -> Result<(), ValidationError> {
        validate::required("numero", &params.number)?;
        validate::required("tipo", &params.kind)?;
        validate::at_least("precio", params.price, 0.0)
    }

    fn validate_update(update: &RoomPayload) -> Result<(), ValidationError> {
        Self::validate_create(update)
    }
}
