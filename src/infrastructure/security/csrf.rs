use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::{CsrfIntent, CsrfTokenManager},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Stateless CSRF tokens: an HMAC over the intent and the caller's identity,
/// so a token is only valid for one action by one user in one session.
#[derive(Clone)]
pub struct HmacCsrfTokenManager {
    keyed: HmacSha256,
}

impl HmacCsrfTokenManager {
    pub fn new(secret: &[u8]) -> ApplicationResult<Self> {
        let keyed = HmacSha256::new_from_slice(secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { keyed })
    }

    fn mac(&self, intent: CsrfIntent, actor: &AuthenticatedUser) -> HmacSha256 {
        let mut mac = self.keyed.clone();
        mac.update(intent.to_string().as_bytes());
        mac.update(b"|");
        mac.update(i64::from(actor.id).to_string().as_bytes());
        mac.update(b"|");
        mac.update(actor.session_id.as_deref().unwrap_or_default().as_bytes());
        mac
    }
}

impl CsrfTokenManager for HmacCsrfTokenManager {
    fn issue(&self, intent: CsrfIntent, actor: &AuthenticatedUser) -> String {
        URL_SAFE_NO_PAD.encode(self.mac(intent, actor).finalize().into_bytes())
    }

    fn verify(&self, intent: CsrfIntent, actor: &AuthenticatedUser, token: &str) -> bool {
        let Ok(provided) = URL_SAFE_NO_PAD.decode(token) else {
            return false;
        };
        self.mac(intent, actor).verify_slice(&provided).is_ok()
    }
}
