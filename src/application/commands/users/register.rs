use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FieldErrors, RegistrationForm, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, Pseudonym, Roles, User},
    },
};
use std::net::IpAddr;

pub struct RegisterUserCommand {
    pub form: RegistrationForm,
    pub remote_ip: Option<IpAddr>,
}

#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    Registered(UserDto),
    /// The caller is already signed in; nothing was created.
    AlreadyAuthenticated,
}

impl UserCommandService {
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<RegistrationOutcome> {
        if actor.is_some() {
            return Ok(RegistrationOutcome::AlreadyAuthenticated);
        }

        let RegisterUserCommand { form, remote_ip } = command;
        let captcha_ok = self
            .captcha
            .verify(form.captcha_response.as_deref(), remote_ip)
            .await?;

        let parsed = form.parse();
        let mut errors = match &parsed {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors.clone(),
        };
        if !captcha_ok {
            errors.add("form", "please complete the security captcha");
        }
        let (email, pseudonym) = match parsed {
            Ok(values) if errors.is_empty() => values,
            _ => return Err(ApplicationError::validation(errors)),
        };

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(email, pseudonym, &form.plain_password)
            .await?;
        tracing::info!(user_id = i64::from(user.id), "user registered");

        Ok(RegistrationOutcome::Registered(user.into()))
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(email_taken());
        }
        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        email: Email,
        pseudonym: Pseudonym,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            email,
            pseudonym,
            password_hash,
            roles: Roles::user(),
            registration_date: self.clock.now(),
        };

        match self.user_repo.insert_registered(new_user).await {
            Ok(user) => Ok(user),
            Err(DomainError::Conflict(_)) => Err(email_taken()),
            Err(other) => Err(other.into()),
        }
    }
}

fn email_taken() -> ApplicationError {
    ApplicationError::validation(FieldErrors::single(
        "email",
        "an account already exists with this email address",
    ))
}
