use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        auth::{CandidateLoginDto, CompanyLoginDto, IdentityKind, LoginDto},
        identity::{CandidateDto, CompanyDto, RegisterCandidateDto, RegisterCompanyDto},
        validate::normalize_cnpj,
    },
    server::{
        data::{
            address::AddressRepository, candidate::CandidateRepository,
            company::CompanyRepository,
        },
        error::{auth::AuthError, identity::IdentityError, unique_violation, Error},
        service::{
            auth::{
                password::{hash_password, verify_password},
                token::TokenKeys,
            },
            view::{candidate_dto, company_dto},
        },
    },
};

/// Service for registering identities and exchanging credentials for bearer tokens.
pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> CredentialService<'a> {
    /// Creates a new instance of [`CredentialService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Registers a candidate along with their address.
    ///
    /// The address and candidate rows are written in one transaction, address first.
    ///
    /// # Returns
    /// - `Ok(CandidateDto)` - Newly registered candidate, without the password hash
    /// - `Err(Error::IdentityError(DuplicateEmail))` - Another candidate uses the email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register_candidate(
        &self,
        registration: &RegisterCandidateDto,
    ) -> Result<CandidateDto, Error> {
        if CandidateRepository::new(self.db)
            .email_exists(&registration.email)
            .await?
        {
            return Err(IdentityError::DuplicateEmail.into());
        }

        let password_hash = hash_password(&registration.password).await?;

        let txn = self.db.begin().await?;

        let address = AddressRepository::new(&txn)
            .create(&registration.address)
            .await?;
        let candidate = CandidateRepository::new(&txn)
            .create(registration, password_hash, address.id)
            .await
            .map_err(|err| match unique_violation(&err) {
                Some(_) => IdentityError::DuplicateEmail.into(),
                None => Error::from(err),
            })?;

        txn.commit().await?;

        tracing::info!(candidate_id = candidate.id, "Registered candidate");

        Ok(candidate_dto(candidate, address))
    }

    /// Registers a company along with its address.
    ///
    /// The CNPJ is stored as its 14 digits regardless of the punctuation supplied.
    ///
    /// # Returns
    /// - `Ok(CompanyDto)` - Newly registered company, without the password hash
    /// - `Err(Error::IdentityError(DuplicateEmail))` - Another company uses the email
    /// - `Err(Error::IdentityError(DuplicateTaxId))` - Another company uses the CNPJ
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register_company(
        &self,
        registration: &RegisterCompanyDto,
    ) -> Result<CompanyDto, Error> {
        let cnpj = normalize_cnpj(&registration.cnpj);
        let company_repo = CompanyRepository::new(self.db);

        if company_repo.email_exists(&registration.email).await? {
            return Err(IdentityError::DuplicateEmail.into());
        }
        if company_repo.cnpj_exists(&cnpj).await? {
            return Err(IdentityError::DuplicateTaxId.into());
        }

        let password_hash = hash_password(&registration.password).await?;

        let txn = self.db.begin().await?;

        let address = AddressRepository::new(&txn)
            .create(&registration.address)
            .await?;
        let company = CompanyRepository::new(&txn)
            .create(registration, cnpj, password_hash, address.id)
            .await
            .map_err(company_conflict)?;

        txn.commit().await?;

        tracing::info!(company_id = company.id, "Registered company");

        Ok(company_dto(company, address))
    }

    /// Exchanges a candidate's email & password for a token issued at `now`.
    ///
    /// # Arguments
    /// - `credentials` - Email & plaintext password from the request
    /// - `now` - Issuance instant of the returned token
    ///
    /// # Returns
    /// - `Ok(CandidateLoginDto)` - Signed token and the candidate's profile
    /// - `Err(Error::AuthError(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login_candidate(
        &self,
        credentials: &LoginDto,
        now: DateTime<Utc>,
    ) -> Result<CandidateLoginDto, Error> {
        let Some((candidate, address)) = CandidateRepository::new(self.db)
            .find_by_email(&credentials.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &candidate.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let address = address.ok_or_else(|| {
            Error::InternalError(format!(
                "Address ID {} of candidate ID {} not found",
                candidate.address_id, candidate.id
            ))
        })?;

        let token = self
            .tokens
            .issue(candidate.id, IdentityKind::Candidate, &candidate.email, now)?;

        Ok(CandidateLoginDto {
            token,
            candidate: candidate_dto(candidate, address),
        })
    }

    /// Exchanges a company's email & password for a token issued at `now`.
    ///
    /// # Arguments
    /// - `credentials` - Email & plaintext password from the request
    /// - `now` - Issuance instant of the returned token
    ///
    /// # Returns
    /// - `Ok(CompanyLoginDto)` - Signed token and the company's profile
    /// - `Err(Error::AuthError(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login_company(
        &self,
        credentials: &LoginDto,
        now: DateTime<Utc>,
    ) -> Result<CompanyLoginDto, Error> {
        let Some((company, address)) = CompanyRepository::new(self.db)
            .find_by_email(&credentials.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &company.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let address = address.ok_or_else(|| {
            Error::InternalError(format!(
                "Address ID {} of company ID {} not found",
                company.address_id, company.id
            ))
        })?;

        let token = self
            .tokens
            .issue(company.id, IdentityKind::Company, &company.email, now)?;

        Ok(CompanyLoginDto {
            token,
            company: company_dto(company, address),
        })
    }
}

/// Maps a unique violation on the company table to the column that conflicted
pub(crate) fn company_conflict(err: DbErr) -> Error {
    match unique_violation(&err) {
        Some(message) if message.contains("cnpj") => IdentityError::DuplicateTaxId.into(),
        Some(_) => IdentityError::DuplicateEmail.into(),
        None => err.into(),
    }
}
