use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        identity::{CompanyDto, UpdateCompanyDto},
        validate::normalize_cnpj,
    },
    server::{
        data::{address::AddressRepository, company::CompanyRepository},
        error::{identity::IdentityError, Error},
        service::{auth::credential::company_conflict, view::company_dto},
    },
};

/// Service for reading and editing company profiles.
pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a company's profile with its address.
    ///
    /// # Returns
    /// - `Ok(CompanyDto)` - Company found
    /// - `Err(Error::IdentityError(CompanyNotFound))` - No company with the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_company(&self, company_id: i32) -> Result<CompanyDto, Error> {
        let Some((company, address)) = CompanyRepository::new(self.db)
            .get_by_id(company_id)
            .await?
        else {
            return Err(IdentityError::CompanyNotFound(company_id).into());
        };

        let address = address.ok_or_else(|| {
            Error::InternalError(format!(
                "Address ID {} of company ID {} not found",
                company.address_id, company.id
            ))
        })?;

        Ok(company_dto(company, address))
    }

    /// Replaces the company's profile fields and address, the CNPJ is kept.
    ///
    /// # Returns
    /// - `Ok(CompanyDto)` - Updated company
    /// - `Err(Error::IdentityError(CompanyNotFound))` - No company with the ID
    /// - `Err(Error::IdentityError(DuplicateEmail))` - The new email belongs to another company
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_company(
        &self,
        company_id: i32,
        profile: &UpdateCompanyDto,
    ) -> Result<CompanyDto, Error> {
        let txn = self.db.begin().await?;

        let company = CompanyRepository::new(&txn)
            .update(company_id, profile)
            .await
            .map_err(company_conflict)?
            .ok_or(IdentityError::CompanyNotFound(company_id))?;

        let address = AddressRepository::new(&txn)
            .update(company.address_id, &profile.address)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Address ID {} of company ID {} not found",
                    company.address_id, company.id
                ))
            })?;

        txn.commit().await?;

        Ok(company_dto(company, address))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, Error> {
        Ok(CompanyRepository::new(self.db).email_exists(email).await?)
    }

    /// Whether the CNPJ is registered, punctuation in the input is ignored
    pub async fn cnpj_exists(&self, cnpj: &str) -> Result<bool, Error> {
        Ok(CompanyRepository::new(self.db)
            .cnpj_exists(&normalize_cnpj(cnpj))
            .await?)
    }
}
