use actix_web::cookie::Cookie;
use actix_web::http::header::{HeaderValue, SET_COOKIE};
use actix_web::{HttpRequest, HttpResponse, post, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::StubState;
use crate::requests::v1::auth::SignupRequest;
use crate::session::ACCESS_TOKEN_COOKIE;

pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
const ISSUER: &str = "lighter-e2e-stub";

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "UserID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

fn issue(state: &StubState, user_id: &str, subject: &str, ttl: Duration) -> jsonwebtoken::errors::Result<String> {
    let now = Utc::now();
    let claims = AccessClaims {
        user_id: (!state.behavior.omit_user_id).then(|| user_id.to_string()),
        sub: subject.to_string(),
        iss: ISSUER.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.secret.as_bytes()),
    )
}

/// Resolves the caller from its `access_token` cookie.
pub(crate) fn identity(req: &HttpRequest, state: &StubState) -> Result<String, HttpResponse> {
    let cookie = req
        .cookie(ACCESS_TOKEN_COOKIE)
        .ok_or_else(|| HttpResponse::BadRequest().body("error obtaining cookie"))?;

    let token = decode::<AccessClaims>(
        cookie.value(),
        &DecodingKey::from_secret(state.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| HttpResponse::Unauthorized().body(format!("error validating token: {e}")))?;

    token
        .claims
        .user_id
        .ok_or_else(|| HttpResponse::Unauthorized().body("token carries no identity"))
}

#[post("/api/auth/signup")]
pub async fn signup(state: web::Data<StubState>, request: web::Json<SignupRequest>) -> HttpResponse {
    let response = create_account(&state, request.into_inner());

    with_faults(&state, response)
}

fn create_account(state: &StubState, request: SignupRequest) -> HttpResponse {
    if state.behavior.reject_signups.contains(&request.username) {
        return HttpResponse::InternalServerError().body("error in storing the credentials");
    }

    let Some(user_id) = state.register(&request.username) else {
        return HttpResponse::Conflict().body("username taken");
    };

    ::tracing::debug!(username = %request.username, %user_id, "stub account created");

    if state.behavior.omit_cookies {
        return HttpResponse::Created().finish();
    }

    let access = issue(state, &user_id, "access", Duration::minutes(15));
    let refresh = issue(state, &user_id, "refresh", Duration::days(7));

    match (access, refresh) {
        (Ok(access), Ok(refresh)) => HttpResponse::Created()
            .cookie(Cookie::build(ACCESS_TOKEN_COOKIE, access).path("/").finish())
            .cookie(Cookie::build(REFRESH_TOKEN_COOKIE, refresh).path("/").finish())
            .finish(),
        (Err(e), _) | (_, Err(e)) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

fn with_faults(state: &StubState, mut response: HttpResponse) -> HttpResponse {
    if state.behavior.malformed_cookie {
        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static("garbage"));
    }

    response
}
