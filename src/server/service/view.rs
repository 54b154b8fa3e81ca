//! Read-only composition of entity models into the DTOs returned to clients.
//!
//! Password hashes never leave this module: every identity DTO is built field by field.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::{
    model::{
        application::ApplicationDto,
        identity::{AddressDto, CandidateDto, CandidateSummaryDto, CompanyDto, CompanySummaryDto},
        listing::ListingDto,
    },
    server::{
        data::{
            candidate::CandidateRepository, company::CompanyRepository,
            listing::ListingRepository,
        },
        error::Error,
        model::db::{
            AddressModel, ApplicationModel, CandidateModel, CompanyModel, ListingModel,
        },
        util::convert::json_strings,
    },
};

pub fn address_dto(address: AddressModel) -> AddressDto {
    AddressDto {
        id: address.id,
        postal_code: address.postal_code,
        street: address.street,
        number: address.number,
        complement: address.complement,
        neighborhood: address.neighborhood,
        city: address.city,
        state: address.state,
    }
}

pub fn candidate_dto(candidate: CandidateModel, address: AddressModel) -> CandidateDto {
    CandidateDto {
        id: candidate.id,
        name: candidate.name,
        email: candidate.email,
        phone: candidate.phone,
        resume: candidate.resume,
        address: address_dto(address),
        created_at: candidate.created_at,
    }
}

pub fn company_dto(company: CompanyModel, address: AddressModel) -> CompanyDto {
    CompanyDto {
        id: company.id,
        name: company.name,
        cnpj: company.cnpj,
        email: company.email,
        phone: company.phone,
        segment: company.segment,
        size_category: company.size_category,
        address: address_dto(address),
        created_at: company.created_at,
    }
}

pub fn candidate_summary(candidate: &CandidateModel) -> CandidateSummaryDto {
    CandidateSummaryDto {
        id: candidate.id,
        name: candidate.name.clone(),
        email: candidate.email.clone(),
        phone: candidate.phone.clone(),
        resume: candidate.resume.clone(),
    }
}

pub fn company_summary(company: &CompanyModel) -> CompanySummaryDto {
    CompanySummaryDto {
        id: company.id,
        name: company.name.clone(),
        email: company.email.clone(),
        phone: company.phone.clone(),
        segment: company.segment.clone(),
        size_category: company.size_category.clone(),
    }
}

pub fn listing_dto(listing: ListingModel, company: Option<CompanySummaryDto>) -> ListingDto {
    ListingDto {
        id: listing.id,
        company_id: listing.company_id,
        title: listing.title,
        description: listing.description,
        requirements: listing.requirements,
        salary: listing.salary,
        contract_type: listing.contract_type.into(),
        modality: listing.modality.into(),
        location: listing.location,
        skills: json_strings(&listing.skills),
        benefits: json_strings(&listing.benefits),
        published_at: listing.published_at,
        company,
    }
}

/// Loads the related rows needed to present listings and applications
pub struct ViewService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViewService<'a, C> {
    /// Creates a new instance of [`ViewService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Joins each listing with its company, preserving the input order
    ///
    /// # Returns
    /// - `Ok(Vec<ListingDto>)` - Listings each carrying their company summary
    /// - `Err(Error::DbErr)` - Loading the companies failed
    pub async fn listings(&self, listings: Vec<ListingModel>) -> Result<Vec<ListingDto>, Error> {
        let mut company_ids: Vec<i32> = listings.iter().map(|l| l.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let companies: HashMap<i32, CompanySummaryDto> = CompanyRepository::new(self.db)
            .get_many_by_ids(company_ids)
            .await?
            .iter()
            .map(|company| (company.id, company_summary(company)))
            .collect();

        Ok(listings
            .into_iter()
            .map(|listing| {
                let company = companies.get(&listing.company_id).cloned();
                listing_dto(listing, company)
            })
            .collect())
    }

    /// Joins each application with its listing (and the listing's company), and optionally
    /// with the applicant's contact details, preserving the input order
    ///
    /// # Returns
    /// - `Ok(Vec<ApplicationDto>)` - Joined applications
    /// - `Err(Error::InternalError)` - An application references a listing that no longer exists
    /// - `Err(Error::DbErr)` - Loading the related rows failed
    pub async fn applications(
        &self,
        applications: Vec<ApplicationModel>,
        include_candidate: bool,
    ) -> Result<Vec<ApplicationDto>, Error> {
        let mut listing_ids: Vec<i32> = applications.iter().map(|a| a.listing_id).collect();
        listing_ids.sort_unstable();
        listing_ids.dedup();

        let listings = ListingRepository::new(self.db)
            .get_many_by_ids(listing_ids)
            .await?;
        let listings: HashMap<i32, ListingDto> = self
            .listings(listings)
            .await?
            .into_iter()
            .map(|listing| (listing.id, listing))
            .collect();

        let candidates: HashMap<i32, CandidateSummaryDto> = if include_candidate {
            let mut candidate_ids: Vec<i32> =
                applications.iter().map(|a| a.candidate_id).collect();
            candidate_ids.sort_unstable();
            candidate_ids.dedup();

            CandidateRepository::new(self.db)
                .get_many_by_ids(candidate_ids)
                .await?
                .iter()
                .map(|candidate| (candidate.id, candidate_summary(candidate)))
                .collect()
        } else {
            HashMap::new()
        };

        applications
            .into_iter()
            .map(|application| {
                let listing = listings.get(&application.listing_id).cloned().ok_or_else(|| {
                    // Only reachable if the listing foreign key is not enforced
                    Error::InternalError(format!(
                        "Listing ID {} of application ID {} not found",
                        application.listing_id, application.id
                    ))
                })?;
                let candidate = candidates.get(&application.candidate_id).cloned();

                Ok(ApplicationDto {
                    id: application.id,
                    listing_id: application.listing_id,
                    candidate_id: application.candidate_id,
                    status: application.status.into(),
                    applied_at: application.applied_at,
                    listing,
                    candidate,
                })
            })
            .collect()
    }
}
