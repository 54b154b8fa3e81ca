use sea_orm::DatabaseConnection;

use crate::{
    model::application::{ApplicationDto, ApplicationStatusDto},
    server::{
        data::{application::ApplicationRepository, listing::ListingRepository},
        error::{application::ApplicationError, auth::AuthError, unique_violation, Error},
        model::db::ApplicationModel,
        service::view::ViewService,
    },
};

/// Service for the application lifecycle.
///
/// Applications start `Pending` and are moved to `Approved` or `Rejected` by the company that
/// owns the listing. At most one application exists per candidate & listing pair, guaranteed
/// by the storage unique index.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies the candidate to a listing.
    ///
    /// An existing application is checked first so the common duplicate case performs no
    /// write; a concurrent duplicate that slips past the check is rejected by the unique index
    /// and reported the same way.
    ///
    /// # Arguments
    /// - `candidate_id` - ID of the authenticated candidate
    /// - `listing_id` - ID of the listing to apply to
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Pending application joined with listing, company & candidate
    /// - `Err(Error::ApplicationError(ListingNotFound))` - No listing with the ID
    /// - `Err(Error::ApplicationError(AlreadyApplied))` - The candidate already applied
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn apply(&self, candidate_id: i32, listing_id: i32) -> Result<ApplicationDto, Error> {
        if ListingRepository::new(self.db)
            .get_by_id(listing_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::ListingNotFound(listing_id).into());
        }

        if ApplicationRepository::new(self.db)
            .find_by_candidate_and_listing(candidate_id, listing_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::AlreadyApplied {
                candidate_id,
                listing_id,
            }
            .into());
        }

        let application = self
            .create_or_already_applied(candidate_id, listing_id)
            .await?;

        tracing::info!(
            application_id = application.id,
            candidate_id,
            listing_id,
            "Candidate applied to listing"
        );

        self.present(application, true).await
    }

    /// Moves an application to `Approved` or `Rejected` on behalf of the listing's company.
    ///
    /// Already reviewed applications may be reviewed again.
    ///
    /// # Arguments
    /// - `requester_company_id` - ID of the authenticated company
    /// - `application_id` - ID of the application to review
    /// - `status` - `Approved` or `Rejected`
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application with its new status
    /// - `Err(Error::ApplicationError(InvalidTargetStatus))` - Target status is `Pending`
    /// - `Err(Error::ApplicationError(NotFound))` - No application with the ID
    /// - `Err(Error::ApplicationError(NotListingOwner))` - Listing belongs to another company
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_status(
        &self,
        requester_company_id: i32,
        application_id: i32,
        status: ApplicationStatusDto,
    ) -> Result<ApplicationDto, Error> {
        if status == ApplicationStatusDto::Pending {
            return Err(ApplicationError::InvalidTargetStatus.into());
        }

        let application_repo = ApplicationRepository::new(self.db);

        let application = application_repo
            .get_by_id(application_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        let listing = ListingRepository::new(self.db)
            .get_by_id(application.listing_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Listing ID {} of application ID {} not found",
                    application.listing_id, application.id
                ))
            })?;

        if listing.company_id != requester_company_id {
            return Err(ApplicationError::NotListingOwner {
                application_id,
                company_id: requester_company_id,
            }
            .into());
        }

        let application = application_repo
            .update_status(application_id, status.into())
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        tracing::info!(application_id, status = ?status, "Application reviewed");

        self.present(application, true).await
    }

    /// Lists the candidate's applications, newest first, joined with listing & company
    pub async fn list_for_candidate(&self, candidate_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .get_many_by_candidate_id(candidate_id)
            .await?;

        ViewService::new(self.db)
            .applications(applications, false)
            .await
    }

    /// Lists applications to every listing of the company, newest first, joined with the
    /// listing and the applicant's contact details.
    ///
    /// # Arguments
    /// - `requester_company_id` - ID of the authenticated company
    /// - `company_id` - ID of the company whose applicants are requested
    ///
    /// # Returns
    /// - `Ok(Vec<ApplicationDto>)` - Applications received by the company
    /// - `Err(Error::AuthError(NotResourceOwner))` - The requester is another company
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_for_company(
        &self,
        requester_company_id: i32,
        company_id: i32,
    ) -> Result<Vec<ApplicationDto>, Error> {
        if requester_company_id != company_id {
            return Err(AuthError::NotResourceOwner {
                subject: requester_company_id,
                owner: company_id,
            }
            .into());
        }

        let listing_ids = ListingRepository::new(self.db)
            .get_many_by_company_id(company_id)
            .await?
            .into_iter()
            .map(|listing| listing.id)
            .collect();

        let applications = ApplicationRepository::new(self.db)
            .get_many_by_listing_ids(listing_ids)
            .await?;

        ViewService::new(self.db)
            .applications(applications, true)
            .await
    }

    /// Inserts a pending application, reporting a unique index violation as `AlreadyApplied`
    ///
    /// Concurrent applications by the same candidate can both pass the existence check in
    /// [`Self::apply`]; the unique index lets only one of them insert.
    ///
    /// # Arguments
    /// - `candidate_id` - ID of the applying candidate
    /// - `listing_id` - ID of the listing, which must exist
    ///
    /// # Returns
    /// - `Ok(ApplicationModel)` - Newly inserted pending application
    /// - `Err(Error::ApplicationError(AlreadyApplied))` - A row for the pair already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    async fn create_or_already_applied(
        &self,
        candidate_id: i32,
        listing_id: i32,
    ) -> Result<ApplicationModel, Error> {
        match ApplicationRepository::new(self.db)
            .create(candidate_id, listing_id)
            .await
        {
            Ok(application) => Ok(application),
            Err(err) if unique_violation(&err).is_some() => {
                tracing::debug!(
                    candidate_id,
                    listing_id,
                    "Duplicate application rejected by unique index"
                );

                Err(ApplicationError::AlreadyApplied {
                    candidate_id,
                    listing_id,
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn present(
        &self,
        application: ApplicationModel,
        include_candidate: bool,
    ) -> Result<ApplicationDto, Error> {
        let application_id = application.id;

        ViewService::new(self.db)
            .applications(vec![application], include_candidate)
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to present application ID {}",
                    application_id
                ))
            })
    }
}
