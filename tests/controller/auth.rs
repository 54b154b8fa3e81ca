use super::*;

mod login {
    use super::*;

    /// Expect 200 with a token and the candidate including its address
    #[tokio::test]
    async fn candidate_login_returns_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;
        let router = test.router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/auth/candidate/login",
            None,
            Some(json!({ "email": "ana@example.com", "password": TEST_PASSWORD })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
        assert_eq!(body["candidate"]["id"], test.candidates[0].id);
        assert!(body["candidate"]["address"]["postal_code"].is_string());

        Ok(())
    }

    /// Expect a wrong password & an unknown email to produce the same 401 body
    #[tokio::test]
    async fn login_failures_are_indistinguishable() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let router = test.router();

        let (wrong_password_status, wrong_password) = send(
            &router,
            Method::POST,
            "/api/auth/company/login",
            None,
            Some(json!({ "email": "acme@example.com", "password": "not-the-password" })),
        )
        .await;
        let (unknown_email_status, unknown_email) = send(
            &router,
            Method::POST,
            "/api/auth/company/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": TEST_PASSWORD })),
        )
        .await;

        assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password["error"], "Invalid email or password");

        Ok(())
    }

    /// Expect a candidate's credentials to be rejected on the company login route
    #[tokio::test]
    async fn company_login_rejects_candidate_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;

        let (status, _) = send(
            &test.router(),
            Method::POST,
            "/api/auth/company/login",
            None,
            Some(json!({ "email": "ana@example.com", "password": TEST_PASSWORD })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod me {
    use chrono::{Duration, Utc};
    use jobboard::model::auth::IdentityKind;

    use super::*;

    /// Expect 200 with the company of the bearer token
    #[tokio::test]
    async fn company_me_returns_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_company("acme@example.com")
            .build()
            .await?;
        let token = test.company_token(0);

        let (status, body) = send(&test.router(), Method::GET, "/api/auth/company/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"]["email"], "acme@example.com");
        assert!(!crate::util::contains_password_field(&body));

        Ok(())
    }

    /// Expect 401 without an Authorization header
    #[tokio::test]
    async fn unauthenticated_without_header() -> Result<(), TestError> {
        let test = TestBuilder::new().with_job_board_tables().build().await?;

        let (status, body) = send(&test.router(), Method::GET, "/api/auth/candidate/me", None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authentication required");

        Ok(())
    }

    /// Expect 403 for a token signed with another secret
    #[tokio::test]
    async fn forbidden_with_foreign_signature() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;
        let foreign = jobboard::server::service::auth::token::TokenKeys::new("another-secret", 1)
            .issue(test.candidates[0].id, IdentityKind::Candidate, "ana@example.com", Utc::now())
            .expect("token is signed");

        let (status, _) = send(&test.router(), Method::GET, "/api/auth/candidate/me", Some(&foreign), None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 403 for a token whose expiry has passed
    #[tokio::test]
    async fn forbidden_with_expired_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;
        let expired = test
            .into_app_state()
            .tokens
            .issue(
                test.candidates[0].id,
                IdentityKind::Candidate,
                "ana@example.com",
                Utc::now() - Duration::hours(48),
            )
            .expect("token is signed");

        let (status, body) = send(&test.router(), Method::GET, "/api/auth/candidate/me", Some(&expired), None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Invalid or expired token");

        Ok(())
    }

    /// Expect 403 when a candidate token is used on a company route
    #[tokio::test]
    async fn forbidden_with_wrong_identity_kind() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_job_board_tables()
            .with_candidate("ana@example.com")
            .build()
            .await?;
        let token = test.candidate_token(0);

        let (status, _) = send(&test.router(), Method::GET, "/api/auth/company/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }
}
