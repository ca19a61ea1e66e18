use std::sync::Arc;

use crate::application::ports::{
    captcha::CaptchaVerifier,
    security::{PasswordHasher, TokenManager},
    storage::PhotoStorage,
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) captcha: Arc<dyn CaptchaVerifier>,
    pub(super) photo_storage: Arc<dyn PhotoStorage>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) photo_max_bytes: usize,
}

impl UserCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        captcha: Arc<dyn CaptchaVerifier>,
        photo_storage: Arc<dyn PhotoStorage>,
        clock: Arc<dyn Clock>,
        photo_max_bytes: usize,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            captcha,
            photo_storage,
            clock,
            photo_max_bytes,
        }
    }
}
