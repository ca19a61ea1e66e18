// src/application/ports/mod.rs
pub mod captcha;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type CsrfTokenManagerPort = dyn security::CsrfTokenManager;
pub type CaptchaVerifierPort = dyn captcha::CaptchaVerifier;
pub type PhotoStoragePort = dyn storage::PhotoStorage;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
