use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use awc::ClientRequest;

use crate::config::{HttpConfig, ServicesConfig};
use crate::error::{Error, Result};
use crate::requests::v1::auth::SignupRequest;
use crate::requests::v1::profile::ProfileRequest;
use crate::session::Session;

/// Thin wrapper over `awc` that knows the routes of both services.
pub struct Client {
    http: awc::Client,
    auth_url: String,
    profile_url: String,
}

/// Outcome of a signup call.
pub struct Signup {
    pub status: StatusCode,
    pub session: Session,
}

/// Outcome of a profile read. The body is only meaningful on `200`.
pub struct ProfileResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Client {
    pub fn new(services: &ServicesConfig, http: &HttpConfig) -> Self {
        let client = awc::Client::builder().timeout(http.timeout()).finish();

        Self {
            http: client,
            auth_url: services.auth_url.trim_end_matches('/').to_string(),
            profile_url: services.profile_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn signup_url(&self) -> String {
        format!("{}/api/auth/signup", self.auth_url)
    }

    pub fn profile_url(&self, uuid: &str) -> String {
        format!("{}/api/profile/{}", self.profile_url, uuid)
    }

    #[::tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<Signup> {
        let url = self.signup_url();
        let response = self
            .http
            .post(&url)
            .send_json(request)
            .await
            .map_err(|e| transport(&url, e))?;

        let status = response.status();

        // A rejected signup carries no session worth reading.
        if !status.is_success() {
            ::tracing::debug!(%status, "signup rejected");

            return Ok(Signup {
                status,
                session: Session::default(),
            });
        }

        let cookies: Vec<_> = response
            .cookies()
            .map_err(|e| Error::Cookie(e.to_string()))?
            .iter()
            .cloned()
            .collect();

        ::tracing::debug!(%status, cookies = cookies.len(), "signup answered");

        Ok(Signup {
            status,
            session: Session::new(cookies),
        })
    }

    #[::tracing::instrument(skip(self, session, request))]
    pub async fn update_profile(
        &self,
        session: &Session,
        uuid: &str,
        request: &ProfileRequest,
    ) -> Result<StatusCode> {
        let url = self.profile_url(uuid);
        let response = authenticated(self.http.put(&url), session)
            .send_json(request)
            .await
            .map_err(|e| transport(&url, e))?;

        ::tracing::debug!(status = %response.status(), "profile write answered");

        Ok(response.status())
    }

    #[::tracing::instrument(skip(self, session))]
    pub async fn get_profile(&self, session: &Session, uuid: &str) -> Result<ProfileResponse> {
        let url = self.profile_url(uuid);
        let mut response = authenticated(self.http.get(&url), session)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        let status = response.status();
        let body = response.body().await.map_err(|e| Error::Payload {
            url: url.clone(),
            message: e.to_string(),
        })?;

        ::tracing::debug!(%status, bytes = body.len(), "profile read answered");

        Ok(ProfileResponse { status, body })
    }
}

fn authenticated(mut request: ClientRequest, session: &Session) -> ClientRequest {
    for cookie in session.cookies() {
        request = request.cookie(cookie.clone());
    }

    request
}

fn transport(url: &str, error: impl std::fmt::Display) -> Error {
    Error::Transport {
        url: url.to_string(),
        message: error.to_string(),
    }
}
