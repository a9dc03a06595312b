use actix_web::http::StatusCode;
use serde_json::{Map, Value};

use super::Account;
use crate::client::Client;
use crate::report::{Failure, Report, Step};
use crate::responses::v1::profile::Profile;

/// Reads the account's profile back and checks every field against what was
/// written.
#[::tracing::instrument(skip_all, fields(username = %account.username()))]
pub async fn read(client: &Client, account: &Account, report: &mut Report) {
    let user = account.username().to_string();

    let response = match client.get_profile(&account.session, &account.uuid).await {
        Ok(response) => response,
        Err(e) => {
            report.push(Failure::Transport {
                user,
                step: Step::ProfileRead,
                message: e.to_string(),
            });

            return;
        }
    };

    if response.status != StatusCode::OK {
        report.push(Failure::Status {
            user,
            step: Step::ProfileRead,
            expected: StatusCode::OK.as_u16(),
            actual: response.status.as_u16(),
        });

        return;
    }

    let body = match parse_object(&response.body) {
        Ok(body) => body,
        Err(message) => {
            report.push(Failure::MalformedBody {
                user,
                step: Step::ProfileRead,
                message,
            });

            return;
        }
    };

    let expected = Profile::from(account.fixture.profile(&account.uuid));

    for failure in compare(&user, &body, &expected) {
        report.push(failure);
    }
}

pub(crate) fn parse_object(body: &[u8]) -> Result<Map<String, Value>, String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(format!("expected a JSON object but got {other}")),
        Err(e) => Err(e.to_string()),
    }
}

/// Checks each profile field independently. A missing field and a differing
/// value produce different failures.
pub fn compare(user: &str, body: &Map<String, Value>, expected: &Profile) -> Vec<Failure> {
    expected
        .fields()
        .into_iter()
        .filter_map(|(field, want)| match body.get(field) {
            None => Some(Failure::FieldMissing {
                user: user.to_string(),
                field: field.to_string(),
            }),
            Some(Value::String(actual)) if actual == want => None,
            Some(actual) => Some(Failure::FieldMismatch {
                user: user.to_string(),
                field: field.to_string(),
                expected: want.to_string(),
                actual: render(actual),
            }),
        })
        .collect()
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
