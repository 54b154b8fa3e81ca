use chrono::Utc;
use jobboard::{
    model::{
        auth::{IdentityKind, LoginDto},
        identity::{AddressInputDto, RegisterCandidateDto, RegisterCompanyDto},
    },
    server::{
        error::{auth::AuthError, Error},
        service::auth::{credential::CredentialService, token::TokenKeys},
    },
};

use super::*;

fn address() -> AddressInputDto {
    AddressInputDto {
        postal_code: "70040-010".to_string(),
        street: "Esplanada".to_string(),
        number: 5,
        complement: Some("Bloco A".to_string()),
        neighborhood: "Zona Civico-Administrativa".to_string(),
        city: "Brasilia".to_string(),
        state: "DF".to_string(),
    }
}

/// Expect the same email to be usable once per identity kind
#[tokio::test]
async fn email_is_unique_per_identity_kind() -> Result<(), TestError> {
    let test = TestBuilder::new().with_job_board_tables().build().await?;
    let tokens = TokenKeys::new(TEST_JWT_SECRET, 1);
    let service = CredentialService::new(&test.db, &tokens);

    let candidate = service
        .register_candidate(&RegisterCandidateDto {
            name: "Carla".to_string(),
            email: "shared@example.com".to_string(),
            password: "secret123".to_string(),
            phone: None,
            resume: None,
            address: address(),
        })
        .await;
    let company = service
        .register_company(&RegisterCompanyDto {
            name: "Carla Consultoria".to_string(),
            cnpj: "11222333000181".to_string(),
            email: "shared@example.com".to_string(),
            password: "secret123".to_string(),
            phone: None,
            segment: "Consulting".to_string(),
            size_category: "Micro".to_string(),
            address: address(),
        })
        .await;

    assert!(candidate.is_ok());
    assert!(company.is_ok());

    Ok(())
}

/// Expect the login token to verify to the candidate's ID and kind
#[tokio::test]
async fn login_token_identifies_candidate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_candidate("ana@example.com")
        .build()
        .await?;
    let tokens = TokenKeys::new(TEST_JWT_SECRET, 1);
    let now = Utc::now();

    let login = CredentialService::new(&test.db, &tokens)
        .login_candidate(
            &LoginDto {
                email: "ana@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            now,
        )
        .await
        .expect("credentials are valid");

    let claims = tokens.verify(&login.token, now).expect("token verifies");
    assert_eq!(claims.sub, test.candidates[0].id);
    assert_eq!(claims.kind, IdentityKind::Candidate);
    assert_eq!(claims.exp - claims.iat, 3600);

    Ok(())
}

/// Expect unknown emails and wrong passwords to fail with the same error & message
#[tokio::test]
async fn login_failures_share_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_job_board_tables()
        .with_candidate("ana@example.com")
        .build()
        .await?;
    let tokens = TokenKeys::new(TEST_JWT_SECRET, 1);
    let service = CredentialService::new(&test.db, &tokens);

    let wrong_password = service
        .login_candidate(
            &LoginDto {
                email: "ana@example.com".to_string(),
                password: "wrong-password".to_string(),
            },
            Utc::now(),
        )
        .await;
    let unknown_email = service
        .login_candidate(
            &LoginDto {
                email: "ghost@example.com".to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            Utc::now(),
        )
        .await;

    let (Err(wrong_password), Err(unknown_email)) = (wrong_password, unknown_email) else {
        panic!("both logins must fail");
    };
    assert!(matches!(
        wrong_password,
        Error::AuthError(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        Error::AuthError(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());

    Ok(())
}
