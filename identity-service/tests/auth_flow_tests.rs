mod common;

use chrono::Utc;
use common::decode_claims;
use common::email;
use common::test_service;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::IdentityId;
use identity_service::domain::identity::models::LoginCommand;
use identity_service::domain::identity::models::RegisterCommand;
use identity_service::identity::errors::AuthError;
use identity_service::identity::ports::AuthServicePort;
use identity_service::identity::ports::CredentialStore;

#[tokio::test]
async fn test_register_issues_fresh_token_for_new_identity() {
    let (service, _store) = test_service();

    let result = service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    assert_eq!(result.identity.email.as_str(), "a@x.com");
    assert_eq!(result.identity.full_name.as_deref(), Some("Ada Lovelace"));
    assert!(!result.token.as_str().is_empty());

    // Token asserts the new identity with a fresh validity window
    let claims = decode_claims(&result.token);
    assert_eq!(claims.sub, result.identity.id.to_string());
    assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    assert!((claims.iat - Utc::now().timestamp()).abs() < 5);
}

#[tokio::test]
async fn test_register_duplicate_email_leaves_store_unchanged() {
    let (service, store) = test_service();

    service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("First registration failed");

    let result = service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "other_password".to_string(),
            "Someone Else".to_string(),
        ))
        .await;

    assert_eq!(
        result.unwrap_err(),
        AuthError::EmailAlreadyExists("a@x.com".to_string())
    );
    assert_eq!(store.count(), 1);
}

#[tokio::test]
async fn test_login_roundtrip() {
    let (service, _store) = test_service();

    let registered = service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    let result = service
        .login(LoginCommand::new(email("a@x.com"), "secret123".to_string()))
        .await
        .expect("Login failed");

    assert_eq!(result.identity.id, registered.identity.id);
    assert_eq!(result.identity.email.as_str(), "a@x.com");
    // Login fetches only the credential projection, never the full profile
    assert_eq!(result.identity.full_name, None);

    let claims = decode_claims(&result.token);
    assert_eq!(claims.sub, registered.identity.id.to_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, _store) = test_service();

    service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    let result = service
        .login(LoginCommand::new(email("a@x.com"), "wrong".to_string()))
        .await;

    assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_login_unknown_email_is_indistinguishable_from_wrong_password() {
    let (service, _store) = test_service();

    service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    let wrong_password = service
        .login(LoginCommand::new(email("a@x.com"), "wrong".to_string()))
        .await
        .unwrap_err();

    let unknown_email = service
        .login(LoginCommand::new(
            email("nobody@x.com"),
            "secret123".to_string(),
        ))
        .await
        .unwrap_err();

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(unknown_email.to_string(), "Credentials are not valid");
}

#[tokio::test]
async fn test_login_with_malformed_stored_hash_fails_as_unauthorized() {
    let (service, store) = test_service();

    // A corrupted record must read as an authentication failure, not a fault
    store
        .insert(Identity {
            id: IdentityId::new(),
            email: email("a@x.com"),
            password_hash: "not-a-phc-string".to_string(),
            full_name: "Ada Lovelace".to_string(),
            created_at: Utc::now(),
        })
        .await
        .expect("Seeding store failed");

    let result = service
        .login(LoginCommand::new(email("a@x.com"), "secret123".to_string()))
        .await;

    assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_reissue_returns_fresh_token_without_store_access() {
    let (service, _store) = test_service();

    let registered = service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    // The service holding an empty store would also work here: reissue never
    // touches it
    let reissued = service
        .reissue(registered.identity.clone())
        .await
        .expect("Reissue failed");

    assert_eq!(reissued.identity, registered.identity);

    let claims = decode_claims(&reissued.token);
    assert_eq!(claims.sub, registered.identity.id.to_string());
}

#[tokio::test]
async fn test_reissue_tokens_differ_across_seconds() {
    let (service, _store) = test_service();

    let registered = service
        .register(RegisterCommand::new(
            email("a@x.com"),
            "secret123".to_string(),
            "Ada Lovelace".to_string(),
        ))
        .await
        .expect("Registration failed");

    let first = service
        .reissue(registered.identity.clone())
        .await
        .expect("First reissue failed");

    // iat has second resolution; cross a second boundary to observe a new token
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let second = service
        .reissue(registered.identity.clone())
        .await
        .expect("Second reissue failed");

    assert_ne!(first.token, second.token);
}
