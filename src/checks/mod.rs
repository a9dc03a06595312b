//! The end-to-end check sequence.
//!
//! bootstrap → write every profile → read every profile → optional extra
//! checks. Every read happens after every write, so reading the first user
//! also proves later writes did not bleed into it.

pub mod bootstrap;
pub mod boundary;
pub mod read;
pub mod write;

pub use bootstrap::Account;

use crate::client::Client;
use crate::config::{AppConfig, ChecksConfig};
use crate::fixtures::UserFixture;
use crate::report::Report;

/// Result of a full run.
pub struct Run {
    pub report: Report,
    /// Accounts that made it through signup, in fixture order.
    pub accounts: Vec<Account>,
}

pub struct Runner {
    client: Client,
    fixtures: Vec<UserFixture>,
    checks: ChecksConfig,
}

impl Runner {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(&config.services, &config.http),
            fixtures: config.fixtures.users.clone(),
            checks: config.checks.clone(),
        }
    }

    pub async fn run(&self) -> Run {
        let mut report = Report::new();

        ::tracing::info!("Creating test accounts...");
        let mut accounts = Vec::with_capacity(self.fixtures.len());
        for fixture in &self.fixtures {
            if let Some(account) = bootstrap::bootstrap(&self.client, fixture, &mut report).await {
                accounts.push(account);
            }
        }
        bootstrap::ensure_distinct(&accounts, &mut report);
        ::tracing::info!(created = accounts.len(), "Finished creating test accounts");

        self.write_all(&accounts, &mut report).await;
        self.read_all(&accounts, &mut report).await;

        if self.checks.idempotence {
            ::tracing::info!("Running profile idempotence tests...");
            for account in &accounts {
                write::write(&self.client, account, &mut report).await;
            }
            for account in &accounts {
                read::read(&self.client, account, &mut report).await;
            }
            ::tracing::info!("Finished profile idempotence tests");
        }

        if self.checks.unknown_profile {
            if let Some(reader) = accounts.first() {
                ::tracing::info!("Running unknown profile tests...");
                boundary::unknown_profile(&self.client, reader, &accounts, &mut report).await;
                ::tracing::info!("Finished unknown profile tests");
            }
        }

        Run { report, accounts }
    }

    async fn write_all(&self, accounts: &[Account], report: &mut Report) {
        ::tracing::info!("Running profile set tests...");
        for account in accounts {
            write::write(&self.client, account, report).await;
        }
        ::tracing::info!("Finished profile set tests");
    }

    async fn read_all(&self, accounts: &[Account], report: &mut Report) {
        ::tracing::info!("Running profile get tests...");
        for account in accounts {
            read::read(&self.client, account, report).await;
        }
        ::tracing::info!("Finished profile get tests");
    }
}
