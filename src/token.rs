//! Access token introspection.
//!
//! **Unverified.** [`decode_unverified`] reads a JWT payload without checking
//! its signature. It exists so the runner can learn which identity the auth
//! service assigned to a freshly created account. Never use it to make a
//! trust decision about a token received from anyone other than a local
//! service under test.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Name of the claim carrying the account identity.
pub const USER_ID_CLAIM: &str = "UserID";

/// Decodes the claims of a compact JWT without verifying the signature.
///
/// Only the structure is checked: three segments, a header naming a known
/// algorithm, and a JSON object payload. Expiry and audience are ignored.
pub fn decode_unverified(token: &str) -> Result<Map<String, Value>> {
    let mut validation = Validation::default();
    #[allow(deprecated)]
    validation.insecure_disable_signature_validation();
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_aud = false;

    decode::<Map<String, Value>>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::Token(e.to_string()))
}

/// Reads the `UserID` claim from an unverified token.
///
/// Returns `Ok(None)` when the token decodes but carries no usable identity.
pub fn user_id(token: &str) -> Result<Option<String>> {
    let claims = decode_unverified(token)?;

    Ok(match claims.get(USER_ID_CLAIM) {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        _ => None,
    })
}
