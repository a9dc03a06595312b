use crate::client::Client;
use crate::error::Error;
use crate::fixtures::UserFixture;
use crate::report::{Failure, Report, Step};
use crate::session::Session;

/// An account that made it through signup.
#[derive(Clone, Debug)]
pub struct Account {
    pub fixture: UserFixture,
    pub session: Session,
    /// Empty when the access token carried no usable identity.
    pub uuid: String,
}

impl Account {
    pub fn username(&self) -> &str {
        &self.fixture.username
    }
}

/// Creates the account for `fixture` and reads its identity.
///
/// Returns `None` when the auth service could not be reached or refused the
/// signup; nothing further can be checked for that user. A session without a
/// readable identity is kept with an empty uuid so later steps still report.
#[::tracing::instrument(skip_all, fields(username = %fixture.username))]
pub async fn bootstrap(client: &Client, fixture: &UserFixture, report: &mut Report) -> Option<Account> {
    let user = fixture.username.clone();

    let signup = match client.signup(&fixture.signup()).await {
        Ok(signup) => signup,
        // Cookies are only parsed once the signup was accepted.
        Err(Error::Cookie(message)) => {
            report.push(Failure::Setup {
                user,
                message: format!("unable to read session cookies: {message}"),
            });

            return Some(Account {
                fixture: fixture.clone(),
                session: Session::default(),
                uuid: String::new(),
            });
        }
        Err(e) => {
            report.push(Failure::Transport {
                user,
                step: Step::Signup,
                message: e.to_string(),
            });

            return None;
        }
    };

    if !signup.status.is_success() {
        report.push(Failure::SignupRejected {
            user,
            status: signup.status.as_u16(),
        });

        return None;
    }

    let uuid = match signup.session.user_id() {
        Ok(Some(uuid)) => uuid,
        Ok(None) => {
            report.push(Failure::Setup {
                user,
                message: "unable to find UUID in access token".to_string(),
            });

            String::new()
        }
        Err(e) => {
            report.push(Failure::Setup {
                user,
                message: e.to_string(),
            });

            String::new()
        }
    };

    ::tracing::debug!(%uuid, "account created");

    Some(Account {
        fixture: fixture.clone(),
        session: signup.session,
        uuid,
    })
}

/// Records a setup failure for every account whose identity was already
/// handed to an earlier account.
pub fn ensure_distinct(accounts: &[Account], report: &mut Report) {
    for (index, account) in accounts.iter().enumerate() {
        if account.uuid.is_empty() {
            continue;
        }

        if let Some(owner) = accounts[..index].iter().find(|other| other.uuid == account.uuid) {
            report.push(Failure::Setup {
                user: account.username().to_string(),
                message: format!(
                    "identity {} was already assigned to {}",
                    account.uuid,
                    owner.username()
                ),
            });
        }
    }
}
