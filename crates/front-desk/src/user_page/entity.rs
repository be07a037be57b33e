use super::actions::UserAction;
use crate::model::{role_values, User, UserDraft};
use page_framework::{validate, RecordId, Resource, ValidationError};

impl Resource for User {
    type Create = UserDraft;
    type Update = UserDraft;
    type Action = UserAction;

    const PATH: &'static str = "/api/usuarios";
    const LABEL: &'static str = "Usuario";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &UserDraft) -> Self {
        let email = params.email.trim();
        Self {
            id,
            name: params.name.clone(),
            username: params.username.clone(),
            role: params.role.clone(),
            email: (!email.is_empty()).then(|| email.to_owned()),
            active: params.active,
        }
    }

    fn apply_update(&mut self, update: &UserDraft) {
        *self = Self::provisional(self.id, update);
    }

    fn apply_action(&mut self, action: &UserAction) {
        self.active = matches!(action, UserAction::Activate);
    }

    /// The password is never loaded back into the form.
    fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            password: String::new(),
            role: self.role.clone(),
            email: self.email.clone().unwrap_or_default(),
            active: self.active,
        }
    }

    fn validate_create(params: &UserDraft) -> Result<(), ValidationError> {
        Self::validate_update(params)?;
        validate::required("password", &params.password)
    }

    fn validate_update(update: &UserDraft) -> Result<(), ValidationError> {
        validate::required("nombre", &update.name)?;
        validate::required("username", &update.username)?;
        validate::required("rol", &update.role)?;
        validate::one_of("rol", &update.role, &role_values())?;
        if !update.email.trim().is_empty() {
            validate::email("email", &update.email)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ROLES;

    fn draft() -> UserDraft {
        UserDraft {
            name: "Jorge Paz".into(),
            username: "jpaz".into(),
            password: "s3creto".into(),
            ..Default::default()
        }
    }

    #[test]
    fn password_is_required_only_on_create() {
        let params = UserDraft {
            password: String::new(),
            ..draft()
        };
        assert_eq!(
            User::validate_create(&params),
            Err(ValidationError::Required("password"))
        );
        assert_eq!(User::validate_update(&params), Ok(()));
    }

    #[test]
    fn email_is_optional_but_checked() {
        assert_eq!(User::validate_create(&draft()), Ok(()));
        let params = UserDraft {
            email: "jpaz@".into(),
            ..draft()
        };
        assert_eq!(
            User::validate_create(&params),
            Err(ValidationError::InvalidEmail("email"))
        );
    }

    #[test]
    fn role_must_be_known() {
        let params = UserDraft {
            role: "hacker".into(),
            ..draft()
        };
        assert_eq!(
            User::validate_update(&params),
            Err(ValidationError::NotAllowed {
                field: "rol",
                value: "hacker".into()
            })
        );
        for (role, _, _) in ROLES {
            let params = UserDraft {
                role: role.to_string(),
                ..draft()
            };
            assert_eq!(User::validate_create(&params), Ok(()));
        }
    }

    #[test]
    fn form_never_holds_the_password() {
        let user = User::provisional(RecordId(3), &draft());
        assert!(user.draft().password.is_empty());
        assert_eq!(user.email, None);
    }
}
