//! Failure reporting: the runner against misbehaving services
//!
//! Every test asserts the run completes and the report names the failure,
//! never that the runner stops early.

use lighter_e2e::config::ServicesConfig;
use lighter_e2e::testing::{self, StubBehavior, StubServices};
use lighter_e2e::{Failure, Report, Runner, Step};

async fn run_with(behavior: StubBehavior) -> Report {
    let stub = StubServices::start(behavior).await.unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;

    stub.stop().await;

    run.report
}

fn has(report: &Report, predicate: impl Fn(&Failure) -> bool) -> bool {
    report.failures().iter().any(predicate)
}

#[actix_web::test]
async fn test_missing_identity_claim_is_reported_for_each_user() {
    let report = run_with(StubBehavior {
        omit_user_id: true,
        ..StubBehavior::default()
    })
    .await;

    for user in ["test_user", "test_user2"] {
        assert!(
            report.for_user(user).any(|f| matches!(
                f,
                Failure::Setup { message, .. } if message.contains("unable to find UUID")
            )),
            "Missing setup failure for {user}:\n{report}"
        );
        // Later steps still ran and failed on their own terms
        assert!(
            report
                .for_user(user)
                .any(|f| matches!(f, Failure::Status { step: Step::ProfileWrite, .. })),
            "Write should still be attempted for {user}:\n{report}"
        );
    }
}

#[actix_web::test]
async fn test_missing_cookies_are_a_setup_failure() {
    let report = run_with(StubBehavior {
        omit_cookies: true,
        ..StubBehavior::default()
    })
    .await;

    assert!(has(&report, |f| matches!(
        f,
        Failure::Setup { user, message } if user == "test_user" && message.contains("access token missing")
    )));
    assert!(has(&report, |f| matches!(
        f,
        Failure::Setup { user, .. } if user == "test_user2"
    )));
}

#[actix_web::test]
async fn test_rejected_signup_skips_only_that_user() {
    let stub = StubServices::start(StubBehavior {
        reject_signups: vec!["test_user2".to_string()],
        ..StubBehavior::default()
    })
    .await
    .unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;

    assert_eq!(
        run.report.failures(),
        &[Failure::SignupRejected {
            user: "test_user2".to_string(),
            status: 500,
        }]
    );
    assert_eq!(run.accounts.len(), 1);
    assert_eq!(run.accounts[0].username(), "test_user");
    assert_eq!(stub.state().writes(), 1);

    stub.stop().await;
}

#[actix_web::test]
async fn test_rejected_signup_with_bad_cookie_is_still_a_rejection() {
    let stub = StubServices::start(StubBehavior {
        reject_signups: vec!["test_user2".to_string()],
        malformed_cookie: true,
        ..StubBehavior::default()
    })
    .await
    .unwrap();
    let mut config = testing::config(&stub);
    config.fixtures.users.retain(|u| u.username == "test_user2");

    let run = Runner::new(&config).run().await;

    // The status decides before any cookie is read
    assert_eq!(
        run.report.failures(),
        &[Failure::SignupRejected {
            user: "test_user2".to_string(),
            status: 500,
        }]
    );
    assert!(run.accounts.is_empty());

    stub.stop().await;
}

#[actix_web::test]
async fn test_unreadable_cookies_are_a_setup_failure() {
    let stub = StubServices::start(StubBehavior {
        malformed_cookie: true,
        ..StubBehavior::default()
    })
    .await
    .unwrap();

    let run = Runner::new(&testing::config(&stub)).run().await;

    for user in ["test_user", "test_user2"] {
        assert!(
            run.report.for_user(user).any(|f| matches!(
                f,
                Failure::Setup { message, .. } if message.contains("unable to read session cookies")
            )),
            "Missing cookie failure for {user}:\n{}",
            run.report
        );
    }
    // Accounts are kept so later steps still report
    assert_eq!(run.accounts.len(), 2);
    assert!(run.accounts.iter().all(|a| a.uuid.is_empty()));
    assert_eq!(run.report.exit_status(), 1);

    stub.stop().await;
}

#[actix_web::test]
async fn test_rejected_writes_are_reported_and_reads_still_run() {
    let report = run_with(StubBehavior {
        reject_writes: true,
        ..StubBehavior::default()
    })
    .await;

    for user in ["test_user", "test_user2"] {
        let failures: Vec<_> = report.for_user(user).cloned().collect();

        assert_eq!(
            failures,
            vec![
                Failure::Status {
                    user: user.to_string(),
                    step: Step::ProfileWrite,
                    expected: 200,
                    actual: 500,
                },
                Failure::Status {
                    user: user.to_string(),
                    step: Step::ProfileRead,
                    expected: 200,
                    actual: 404,
                },
            ]
        );
    }
}

#[actix_web::test]
async fn test_non_object_body_is_reported_as_malformed() {
    let report = run_with(StubBehavior {
        non_object_body: true,
        ..StubBehavior::default()
    })
    .await;

    assert_eq!(report.len(), 2, "One failure per user:\n{report}");
    for user in ["test_user", "test_user2"] {
        assert!(
            report.for_user(user).any(|f| matches!(
                f,
                Failure::MalformedBody { step: Step::ProfileRead, .. }
            )),
            "Missing malformed body for {user}:\n{report}"
        );
    }
}

#[actix_web::test]
async fn test_dropped_field_is_reported_as_missing() {
    let report = run_with(StubBehavior {
        drop_field: Some("email".to_string()),
        ..StubBehavior::default()
    })
    .await;

    assert_eq!(report.len(), 2, "One failure per user:\n{report}");
    assert!(report.failures().iter().all(|f| matches!(
        f,
        Failure::FieldMissing { field, .. } if field == "email"
    )));
}

#[actix_web::test]
async fn test_corrupted_field_is_reported_as_mismatch() {
    let report = run_with(StubBehavior {
        corrupt_field: Some("lastName".to_string()),
        ..StubBehavior::default()
    })
    .await;

    assert_eq!(
        report.failures(),
        &[
            Failure::FieldMismatch {
                user: "test_user".to_string(),
                field: "lastName".to_string(),
                expected: "User".to_string(),
                actual: "corrupted".to_string(),
            },
            Failure::FieldMismatch {
                user: "test_user2".to_string(),
                field: "lastName".to_string(),
                expected: "User2".to_string(),
                actual: "corrupted".to_string(),
            },
        ]
    );
}

#[actix_web::test]
async fn test_cross_user_contamination_is_detected() {
    let stub = StubServices::start(StubBehavior {
        shared_profiles: true,
        ..StubBehavior::default()
    })
    .await
    .unwrap();
    let mut config = testing::config(&stub);
    config.checks.unknown_profile = true;

    let run = Runner::new(&config).run().await;
    let report = &run.report;

    // User 2 wrote last, so user 1 reads user 2's profile back
    let fields: Vec<_> = report
        .for_user("test_user")
        .filter_map(|f| match f {
            Failure::FieldMismatch { field, .. } => Some(field.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(fields, ["lastName", "uuid", "email"]);

    assert!(has(report, |f| matches!(
        f,
        Failure::LeakedProfile { user, owner } if user == "test_user" && owner == "test_user2"
    )));
    assert!(
        !report
            .for_user("test_user2")
            .any(|f| matches!(f, Failure::FieldMismatch { .. })),
        "User 2 reads its own write:\n{report}"
    );

    stub.stop().await;
}

#[actix_web::test]
async fn test_non_idempotent_rewrite_is_detected() {
    let stub = StubServices::start(StubBehavior {
        drift_on_rewrite: true,
        ..StubBehavior::default()
    })
    .await
    .unwrap();
    let mut config = testing::config(&stub);
    config.checks.idempotence = true;

    let run = Runner::new(&config).run().await;

    assert_eq!(
        run.report.failures(),
        &[
            Failure::FieldMismatch {
                user: "test_user".to_string(),
                field: "lastName".to_string(),
                expected: "User".to_string(),
                actual: "User (rewritten)".to_string(),
            },
            Failure::FieldMismatch {
                user: "test_user2".to_string(),
                field: "lastName".to_string(),
                expected: "User2".to_string(),
                actual: "User2 (rewritten)".to_string(),
            },
        ]
    );

    stub.stop().await;
}

#[actix_web::test]
async fn test_unreachable_services_are_transport_failures() {
    let mut config = lighter_e2e::config::AppConfig::default();
    config.services = ServicesConfig {
        auth_url: "http://127.0.0.1:9".to_string(),
        profile_url: "http://127.0.0.1:9".to_string(),
    };
    config.http.timeout = 2;

    let run = Runner::new(&config).run().await;

    assert!(run.accounts.is_empty());
    assert_eq!(run.report.len(), 2);
    assert!(run.report.failures().iter().all(|f| matches!(
        f,
        Failure::Transport { step: Step::Signup, .. }
    )));
}

#[actix_web::test]
async fn test_profile_service_going_down_is_a_transport_failure() {
    let stub = StubServices::start(StubBehavior::default()).await.unwrap();
    let gone = StubServices::start(StubBehavior::default()).await.unwrap();
    let dead_url = gone.profile_url.clone();
    gone.stop().await;

    let mut config = testing::config(&stub);
    config.services.profile_url = dead_url;
    config.http.timeout = 2;

    let run = Runner::new(&config).run().await;

    assert_eq!(run.accounts.len(), 2, "Signups still succeed:\n{}", run.report);
    for user in ["test_user", "test_user2"] {
        let steps: Vec<_> = run
            .report
            .for_user(user)
            .filter_map(|f| match f {
                Failure::Transport { step, .. } => Some(*step),
                _ => None,
            })
            .collect();

        assert_eq!(steps, [Step::ProfileWrite, Step::ProfileRead], "{user}:\n{}", run.report);
    }
    assert_eq!(stub.state().writes(), 0);

    stub.stop().await;
}
