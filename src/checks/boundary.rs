use actix_web::http::StatusCode;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Account;
use super::read::parse_object;
use crate::client::Client;
use crate::report::{Failure, Report, Step};

/// Reads the profile of a freshly generated identity as `reader` and makes
/// sure none of the written profiles comes back.
///
/// Any non-`200` answer passes: the profile does not exist.
#[::tracing::instrument(skip_all, fields(username = %reader.username()))]
pub async fn unknown_profile(client: &Client, reader: &Account, accounts: &[Account], report: &mut Report) {
    let user = reader.username().to_string();
    let uuid = Uuid::new_v4().to_string();

    let response = match client.get_profile(&reader.session, &uuid).await {
        Ok(response) => response,
        Err(e) => {
            report.push(Failure::Transport {
                user,
                step: Step::UnknownProfileRead,
                message: e.to_string(),
            });

            return;
        }
    };

    if response.status != StatusCode::OK {
        ::tracing::debug!(status = %response.status, %uuid, "unknown profile not served");

        return;
    }

    // A 200 that is not an object cannot carry anyone's profile.
    let Ok(body) = parse_object(&response.body) else {
        return;
    };

    for owner in accounts.iter().filter(|owner| belongs_to(&body, owner)) {
        report.push(Failure::LeakedProfile {
            user: user.clone(),
            owner: owner.username().to_string(),
        });
    }
}

/// Whether `body` carries `owner`'s identity or the profile it wrote.
fn belongs_to(body: &Map<String, Value>, owner: &Account) -> bool {
    let field = |name: &str| body.get(name).and_then(Value::as_str);

    if !owner.uuid.is_empty() && field("uuid") == Some(owner.uuid.as_str()) {
        return true;
    }

    let written = owner.fixture.profile(&owner.uuid);

    field("firstName") == Some(written.first_name.as_str())
        && field("lastName") == Some(written.last_name.as_str())
        && field("email") == Some(written.email.as_str())
}
