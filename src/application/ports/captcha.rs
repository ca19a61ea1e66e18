// src/application/ports/captcha.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::net::IpAddr;

/// Human-verification service consulted during registration.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(
        &self,
        response: Option<&str>,
        remote_ip: Option<IpAddr>,
    ) -> ApplicationResult<bool>;
}
