use async_trait::async_trait;
use quill_blog::application::{ApplicationResult, ports::captcha::CaptchaVerifier};
use std::net::IpAddr;

/// Accepts only the response `"ok"`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedCaptcha;

#[async_trait]
impl CaptchaVerifier for ScriptedCaptcha {
    async fn verify(
        &self,
        response: Option<&str>,
        _remote_ip: Option<IpAddr>,
    ) -> ApplicationResult<bool> {
        Ok(response == Some("ok"))
    }
}
