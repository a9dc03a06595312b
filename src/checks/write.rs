use actix_web::http::StatusCode;

use super::Account;
use crate::client::Client;
use crate::report::{Failure, Report, Step};

/// Writes the fixture's profile under the account's identity and expects `200`.
#[::tracing::instrument(skip_all, fields(username = %account.username()))]
pub async fn write(client: &Client, account: &Account, report: &mut Report) {
    let user = account.username().to_string();
    let payload = account.fixture.profile(&account.uuid);

    match client
        .update_profile(&account.session, &account.uuid, &payload)
        .await
    {
        Ok(StatusCode::OK) => (),
        Ok(status) => report.push(Failure::Status {
            user,
            step: Step::ProfileWrite,
            expected: StatusCode::OK.as_u16(),
            actual: status.as_u16(),
        }),
        Err(e) => report.push(Failure::Transport {
            user,
            step: Step::ProfileWrite,
            message: e.to_string(),
        }),
    }
}
