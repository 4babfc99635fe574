//! In-memory integration tests for login and token verification.

use std::sync::Arc;

use super::helpers::{TestLoginService, login_service, token_service};
use mockable::DefaultClock;
use rstest::rstest;
use taskmaster::{
    auth::services::{LoginError, TokenService, TokenServiceError},
    config::JwtSettings,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_login_yields_verifiable_token(
    login_service: TestLoginService,
    token_service: TokenService<DefaultClock>,
) {
    let issued = login_service
        .login("admin")
        .await
        .expect("login should succeed");

    let claims = token_service
        .verify_token(issued.as_str())
        .expect("token should verify");
    assert_eq!(claims.subject, "u1");
    assert!(claims.has_role("Admin"));
    assert!(claims.has_role("User"));
    assert_eq!(claims.exp - claims.iat, 120 * 60);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guest_login_carries_no_roles(
    login_service: TestLoginService,
    token_service: TokenService<DefaultClock>,
) {
    let issued = login_service
        .login("guest")
        .await
        .expect("login should succeed");

    let claims = token_service
        .verify_token(issued.as_str())
        .expect("token should verify");
    assert!(claims.roles.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_principal_gets_no_token(login_service: TestLoginService) {
    let result = login_service.login("nobody").await;
    assert!(matches!(result, Err(LoginError::UnknownPrincipal(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn token_from_other_deployment_is_rejected(login_service: TestLoginService) {
    let issued = login_service
        .login("admin")
        .await
        .expect("login should succeed");
    let foreign = TokenService::new(
        JwtSettings::new("other-deployment", 120),
        Arc::new(DefaultClock),
    );

    let result = foreign.verify_token(issued.as_str());

    assert!(matches!(result, Err(TokenServiceError::Verification(_))));
}
