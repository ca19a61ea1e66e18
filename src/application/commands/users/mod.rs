mod login;
mod password;
mod photo;
mod register;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub(crate) use password::validate_password;
pub use photo::ChangePhotoCommand;
pub use register::{RegisterUserCommand, RegistrationOutcome};
pub use service::UserCommandService;
