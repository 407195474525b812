mod common;

use auth::Role;
use identity_service::identity::errors::IdentityError;
use identity_service::identity::ports::IdentityPort;

use crate::common::config_with_ttl;
use crate::common::register_command;
use crate::common::service;
use crate::common::service_with_config;

#[tokio::test]
async fn test_end_to_end_register_login_whoami_authorize() {
    let service = service();

    let record = service
        .register(register_command("a@b.com", Role::Customer))
        .await
        .expect("registration failed");

    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.role, Role::Customer);
    assert!(record.is_active);
    assert!(record.last_login.is_none());

    // Returned record exposes no password field in any form
    let json = serde_json::to_value(&record).unwrap();
    assert!(json
        .as_object()
        .unwrap()
        .keys()
        .all(|field| !field.contains("password")));

    let token = service.login("a@b.com", "Test123!").await.expect("login failed");

    let me = service.current_user(&token).await.expect("current_user failed");
    assert_eq!(me.id, record.id);
    assert_eq!(me.email, record.email);
    // Login stamped last_login; the re-fetched view reflects it
    assert!(me.last_login.is_some());

    assert!(matches!(
        service.current_user("garbage").await,
        Err(IdentityError::Unauthenticated)
    ));

    // A customer token does not pass an admin-only check
    assert!(matches!(
        service.authorize(&token, &[Role::Admin]).await,
        Err(IdentityError::Forbidden)
    ));

    // ... but does pass one that includes its own role
    let authorized = service
        .authorize(&token, &[Role::Admin, Role::Customer])
        .await
        .unwrap();
    assert_eq!(authorized.id, record.id);

    // Logout is a documented no-op success; the token still works after
    service.logout(&token).await.unwrap();
    assert!(service.current_user(&token).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_yields_one_success() {
    let service = service();

    let first = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .register(register_command("race@example.com", Role::Customer))
                .await
        }
    });
    let second = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .register(register_command("race@example.com", Role::ShopOwner))
                .await
        }
    });

    let (first, second) = tokio::join!(first, second);
    let results = [first.unwrap(), second.unwrap()];

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(IdentityError::DuplicateEmail)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 1);
}

#[tokio::test]
async fn test_duplicate_email_detected_across_case_variants() {
    let service = service();

    service
        .register(register_command("Jo.Doe@Example.com", Role::Customer))
        .await
        .unwrap();

    let result = service
        .register(register_command("jo.doe@example.com", Role::Customer))
        .await;

    assert!(matches!(result, Err(IdentityError::DuplicateEmail)));
}

#[tokio::test]
async fn test_login_error_is_identical_for_unknown_and_wrong_password() {
    let service = service();

    service
        .register(register_command("present@example.com", Role::Customer))
        .await
        .unwrap();

    let unknown = service
        .login("absent@example.com", "Test123!")
        .await
        .unwrap_err();
    let wrong = service
        .login("present@example.com", "WrongPass1")
        .await
        .unwrap_err();

    assert!(matches!(unknown, IdentityError::InvalidCredentials));
    assert!(matches!(wrong, IdentityError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let service = service_with_config(&config_with_ttl(-1));

    service
        .register(register_command("a@b.com", Role::Customer))
        .await
        .unwrap();
    let token = service.login("a@b.com", "Test123!").await.unwrap();

    assert!(matches!(
        service.current_user(&token).await,
        Err(IdentityError::Unauthenticated)
    ));
    assert!(matches!(
        service.authorize(&token, &[Role::Customer]).await,
        Err(IdentityError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_login_normalizes_email_like_registration() {
    let service = service();

    service
        .register(register_command("Mixed.Case@Example.COM", Role::DeliveryAgent))
        .await
        .unwrap();

    let token = service
        .login("  mixed.case@example.com ", "Test123!")
        .await
        .expect("normalized login failed");

    let me = service.current_user(&token).await.unwrap();
    assert_eq!(me.email, "mixed.case@example.com");
    assert_eq!(me.role, Role::DeliveryAgent);
}
