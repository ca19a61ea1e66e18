// tests/support/mocks/mod.rs
pub mod captcha;
pub mod security;
pub mod storage;
pub mod time;

pub use captcha::ScriptedCaptcha;
pub use security::{ADMIN_TOKEN, DummyTokenManager, StrictPasswordHasher, USER_TOKEN};
pub use storage::InMemoryPhotoStorage;
pub use time::{SteppingClock, fixed_now};
