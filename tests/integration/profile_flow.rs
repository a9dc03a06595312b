//! Happy path: the runner against well-behaved services
//!
//! These tests cover the scenarios the runner exists for:
//! - Signup yields a decodable, distinct identity per user
//! - Each user's profile write is accepted
//! - Each user's profile read returns exactly what was written
//! - Writing the second profile leaves the first untouched

use lighter_e2e::Runner;
use lighter_e2e::responses::v1::profile::Profile;
use lighter_e2e::testing::{self, StubBehavior, StubServices};

#[actix_web::test]
async fn test_default_run_passes() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;

    assert!(run.report.passed(), "Unexpected failures:\n{}", run.report);
    assert_eq!(run.accounts.len(), 2, "Both accounts should be created");

    stub.stop().await;
}

#[actix_web::test]
async fn test_identities_are_non_empty_and_distinct() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;

    let first = &run.accounts[0];
    let second = &run.accounts[1];

    assert!(!first.uuid.is_empty());
    assert!(!second.uuid.is_empty());
    assert_ne!(first.uuid, second.uuid);

    // The runner read the identities the auth service actually assigned
    assert_eq!(stub.state().account("test_user"), Some(first.uuid.clone()));
    assert_eq!(stub.state().account("test_user2"), Some(second.uuid.clone()));

    stub.stop().await;
}

#[actix_web::test]
async fn test_profiles_are_stored_as_written() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;
    let first = &run.accounts[0];
    let second = &run.accounts[1];

    assert_eq!(
        stub.state().profile(&first.uuid),
        Some(Profile {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            uuid: first.uuid.clone(),
            email: "contact_email@berkeley.edu".to_string(),
        }),
        "User 1 profile should be unaffected by user 2's write"
    );
    assert_eq!(
        stub.state().profile(&second.uuid),
        Some(Profile {
            first_name: "Test".to_string(),
            last_name: "User2".to_string(),
            uuid: second.uuid.clone(),
            email: "contact_email2@berkeley.edu".to_string(),
        })
    );
    assert_eq!(stub.state().writes(), 2);

    stub.stop().await;
}

#[actix_web::test]
async fn test_idempotent_rewrite_passes() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();
    let mut config = testing::config(&stub);
    config.checks.idempotence = true;

    let run = Runner::new(&config).run().await;

    assert!(run.report.passed(), "Unexpected failures:\n{}", run.report);
    assert_eq!(stub.state().writes(), 4, "Every profile should be written twice");

    stub.stop().await;
}

#[actix_web::test]
async fn test_unknown_profile_is_not_served() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();
    let mut config = testing::config(&stub);
    config.checks.unknown_profile = true;

    let run = Runner::new(&config).run().await;

    assert!(run.report.passed(), "Unexpected failures:\n{}", run.report);

    stub.stop().await;
}

#[actix_web::test]
async fn test_single_fixture_run_passes() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();
    let mut config = testing::config(&stub);
    config.fixtures.users.truncate(1);

    let run = Runner::new(&config).run().await;

    assert!(run.report.passed(), "Unexpected failures:\n{}", run.report);
    assert_eq!(run.accounts.len(), 1);
    assert_eq!(stub.state().account("test_user2"), None);

    stub.stop().await;
}
