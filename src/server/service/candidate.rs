use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::identity::{CandidateDto, UpdateCandidateDto},
    server::{
        data::{address::AddressRepository, candidate::CandidateRepository},
        error::{identity::IdentityError, unique_violation, Error},
        service::view::candidate_dto,
    },
};

/// Service for reading and editing candidate profiles.
pub struct CandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateService<'a> {
    /// Creates a new instance of [`CandidateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a candidate's profile with their address.
    ///
    /// # Returns
    /// - `Ok(CandidateDto)` - Candidate found
    /// - `Err(Error::IdentityError(CandidateNotFound))` - No candidate with the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_candidate(&self, candidate_id: i32) -> Result<CandidateDto, Error> {
        let Some((candidate, address)) = CandidateRepository::new(self.db)
            .get_by_id(candidate_id)
            .await?
        else {
            return Err(IdentityError::CandidateNotFound(candidate_id).into());
        };

        let address = address.ok_or_else(|| {
            Error::InternalError(format!(
                "Address ID {} of candidate ID {} not found",
                candidate.address_id, candidate.id
            ))
        })?;

        Ok(candidate_dto(candidate, address))
    }

    /// Replaces the candidate's profile fields and address.
    ///
    /// # Arguments
    /// - `candidate_id` - ID of the candidate, already checked against the token
    /// - `profile` - New profile & address fields
    ///
    /// # Returns
    /// - `Ok(CandidateDto)` - Updated candidate
    /// - `Err(Error::IdentityError(CandidateNotFound))` - No candidate with the ID
    /// - `Err(Error::IdentityError(DuplicateEmail))` - The new email belongs to another candidate
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_candidate(
        &self,
        candidate_id: i32,
        profile: &UpdateCandidateDto,
    ) -> Result<CandidateDto, Error> {
        let txn = self.db.begin().await?;

        let candidate = CandidateRepository::new(&txn)
            .update(candidate_id, profile)
            .await
            .map_err(|err| match unique_violation(&err) {
                Some(_) => IdentityError::DuplicateEmail.into(),
                None => Error::from(err),
            })?
            .ok_or(IdentityError::CandidateNotFound(candidate_id))?;

        let address = AddressRepository::new(&txn)
            .update(candidate.address_id, &profile.address)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Address ID {} of candidate ID {} not found",
                    candidate.address_id, candidate.id
                ))
            })?;

        txn.commit().await?;

        Ok(candidate_dto(candidate, address))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, Error> {
        Ok(CandidateRepository::new(self.db).email_exists(email).await?)
    }
}
