use crate::model::Client;
use page_framework::{RecordId, ViewModel};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientView {
    pub id: RecordId,
    pub name: String,
    pub identification: String,
    pub phone: String,
    pub email: String,
    pub nationality: String,
}

impl ViewModel for ClientView {
    type Record = Client;
    type Lookups = ();

    fn build(client: &Client, _lookups: &()) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            identification: client.identification.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            nationality: client.nationality.clone(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.name, self.identification, self.phone, self.email, self.nationality
        )
    }
}
