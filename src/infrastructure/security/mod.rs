// src/infrastructure/security/mod.rs
pub mod captcha;
pub mod claims;
pub mod csrf;
pub mod password;
pub mod token;
