//! [`Resource`] implementation for [`Client`].

use crate::model::{Client, ClientPayload};
use page_framework::{validate, NoAction, RecordId, Resource, ValidationError};

impl Resource for Client {
    type Create = ClientPayload;
    type Update = ClientPayload;
    type Action = NoAction;

    const PATH: &'static str = "/api/clientes";
    const LABEL: &'static str = "Cliente";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &ClientPayload) -> Self {
        Self {
            id,
            name: params.name.clone(),
            identification: params.identification.clone(),
            phone: params.phone.clone(),
            email: params.email.clone(),
            nationality: params.nationality.clone(),
        }
    }

    fn apply_update(&mut self, update: &ClientPayload) {
        *self = Self::provisional(self.id, update);
    }

    fn draft(&self) -> ClientPayload {
        ClientPayload {
            name: self.name.clone(),
            identification: self.identification.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            nationality: self.nationality.clone(),
        }
    }

    /// Every field is required and the email must be well formed.
    fn validate_create(params: &ClientPayload) -> Result<(), ValidationError> {
        validate::required("nombre", &params.name)?;
        validate::required("identificacion", &params.identification)?;
        validate::required("telefono", &params.phone)?;
        validate::required("correo", &params.email)?;
        validate::email("correo", &params.email)?;
        validate::required("nacionalidad", &params.nationality)
    }

    fn validate_update(update: &ClientPayload) -> Result<(), ValidationError> {
        Self::validate_create(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ClientPayload {
        ClientPayload {
            name: "Lucía Andrade".into(),
            identification: "0912345678".into(),
            phone: "0991234567".into(),
            email: "lucia@example.com".into(),
            nationality: "Ecuatoriana".into(),
        }
    }

    #[test]
    fn complete_payload_is_valid() {
        assert_eq!(Client::validate_create(&payload()), Ok(()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let params = ClientPayload {
            email: "lucia@".into(),
            ..payload()
        };
        assert_eq!(
            Client::validate_create(&params),
            Err(ValidationError::InvalidEmail("correo"))
        );
    }

    #[test]
    fn update_replaces_every_field() {
        let mut client = Client::provisional(RecordId(5), &payload());
        client.apply_update(&ClientPayload {
            name: "Lucía A.".into(),
            ..payload()
        });
        assert_eq!(client.id, RecordId(5));
        assert_eq!(client.name, "Lucía A.");
        assert_eq!(client.draft().name, "Lucía A.");
    }
}
