use actix_web::cookie::Cookie;

use crate::error::{Error, Result};
use crate::token;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookies handed out by the auth service for one account.
#[derive(Clone, Debug, Default)]
pub struct Session {
    cookies: Vec<Cookie<'static>>,
}

impl Session {
    pub fn new(cookies: Vec<Cookie<'static>>) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &[Cookie<'static>] {
        &self.cookies
    }

    pub fn access_token(&self) -> Result<&str> {
        self.cookies
            .iter()
            .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE && !cookie.value().is_empty())
            .map(|cookie| cookie.value())
            .ok_or(Error::MissingAccessToken)
    }

    /// Identity carried by the access token, read without signature checks.
    pub fn user_id(&self) -> Result<Option<String>> {
        token::user_id(self.access_token()?)
    }
}
