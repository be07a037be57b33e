use crate::model::{User, UserDraft};
use crate::user_page::{UserAction, UserError};
use async_trait::async_trait;
use page_framework::{RecordId, Resource, ResourceApi, ResourceClient, TransportError};
use tracing::{debug, instrument};

/// Client for staff accounts.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    // the draft carries the password, keep it out of the span
    #[instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn create_user(&self, draft: UserDraft) -> Result<User, UserError> {
        User::validate_create(&draft)?;
        debug!("Sending request");
        self.inner.create(draft).await.map_err(UserError::from)
    }

    #[instrument(skip(self, draft))]
    pub async fn update_user(&self, id: RecordId, draft: UserDraft) -> Result<User, UserError> {
        User::validate_update(&draft)?;
        debug!("Sending request");
        self.inner
            .update(id, draft)
            .await
            .map_err(|e| UserError::for_record(id, e))
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: RecordId) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Activate)
            .await
            .map_err(|e| UserError::for_record(id, e))
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: RecordId) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Deactivate)
            .await
            .map_err(|e| UserError::for_record(id, e))
    }
}

#[async_trait]
impl ResourceApi<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: TransportError) -> Self::Error {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_framework::mock::{create_mock_client, expect_action, MockClient};
    use page_framework::ResourceAction;

    fn user(active: bool) -> User {
        User {
            id: RecordId(9),
            name: "Carla Ruiz".into(),
            username: "cruiz".into(),
            role: "limpieza".into(),
            email: None,
            active,
        }
    }

    #[tokio::test]
    async fn deactivate_uses_its_segment() {
        let (client, mut rx) = create_mock_client::<User>(4);
        let users = UserClient::new(client);

        let call = tokio::spawn(async move { users.deactivate(RecordId(9)).await });
        let (id, action, respond_to) = expect_action(&mut rx).await.expect("no action sent");
        assert_eq!(id, RecordId(9));
        assert_eq!(action.segment(), "desactivar");
        respond_to.send(Ok(user(false))).unwrap();

        assert!(!call.await.unwrap().unwrap().active);
    }

    #[tokio::test]
    async fn create_without_password_is_refused_locally() {
        let mock = MockClient::<User>::new();
        let users = UserClient::new(mock.client());
        let err = users
            .create_user(UserDraft {
                name: "Carla Ruiz".into(),
                username: "cruiz".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Invalid(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn delete_through_shared_trait() {
        let mut mock = MockClient::<User>::new();
        mock.expect_delete(RecordId(9)).return_ok(());
        let users = UserClient::new(mock.client());
        users.delete(RecordId(9)).await.unwrap();
        mock.verify();
    }
}
