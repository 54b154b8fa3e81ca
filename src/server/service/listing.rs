use sea_orm::DatabaseConnection;

use crate::{
    model::listing::{ListingDto, ListingInputDto},
    server::{
        data::listing::ListingRepository,
        error::{listing::ListingError, Error},
        model::db::ListingModel,
        service::view::ViewService,
    },
};

/// Service for publishing and browsing job listings.
///
/// Mutations are restricted to the company that owns the listing.
pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a listing for the company, stamped with the current time
    pub async fn create_listing(
        &self,
        company_id: i32,
        listing: &ListingInputDto,
    ) -> Result<ListingDto, Error> {
        let listing = ListingRepository::new(self.db)
            .create(company_id, listing)
            .await?;

        tracing::info!(listing_id = listing.id, company_id, "Published listing");

        self.present(listing).await
    }

    /// Retrieves a listing joined with its company
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - Listing found
    /// - `Err(Error::ListingError(NotFound))` - No listing with the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_listing(&self, listing_id: i32) -> Result<ListingDto, Error> {
        let listing = ListingRepository::new(self.db)
            .get_by_id(listing_id)
            .await?
            .ok_or(ListingError::NotFound(listing_id))?;

        self.present(listing).await
    }

    /// Lists every listing, newest first
    pub async fn list_all(&self) -> Result<Vec<ListingDto>, Error> {
        let listings = ListingRepository::new(self.db).get_all().await?;

        ViewService::new(self.db).listings(listings).await
    }

    /// Lists the listings published by a company, newest first
    ///
    /// An unknown company simply has no listings.
    pub async fn list_by_company(&self, company_id: i32) -> Result<Vec<ListingDto>, Error> {
        let listings = ListingRepository::new(self.db)
            .get_many_by_company_id(company_id)
            .await?;

        ViewService::new(self.db).listings(listings).await
    }

    /// Replaces a listing's fields on behalf of the company
    ///
    /// # Arguments
    /// - `company_id` - ID of the authenticated company
    /// - `listing_id` - ID of the listing to replace
    /// - `listing` - New values for every editable field
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - Updated listing
    /// - `Err(Error::ListingError(NotFound))` - No listing with the ID
    /// - `Err(Error::ListingError(NotOwner))` - The listing belongs to another company
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_listing(
        &self,
        company_id: i32,
        listing_id: i32,
        listing: &ListingInputDto,
    ) -> Result<ListingDto, Error> {
        self.get_owned(company_id, listing_id).await?;

        let listing = ListingRepository::new(self.db)
            .update(listing_id, listing)
            .await?
            .ok_or(ListingError::NotFound(listing_id))?;

        self.present(listing).await
    }

    /// Deletes a listing, and the applications made to it, on behalf of the company
    ///
    /// # Arguments
    /// - `company_id` - ID of the authenticated company
    /// - `listing_id` - ID of the listing to delete
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted
    /// - `Err(Error::ListingError(NotFound))` - No listing with the ID
    /// - `Err(Error::ListingError(NotOwner))` - The listing belongs to another company
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_listing(&self, company_id: i32, listing_id: i32) -> Result<(), Error> {
        self.get_owned(company_id, listing_id).await?;

        let result = ListingRepository::new(self.db).delete(listing_id).await?;
        if result.rows_affected == 0 {
            return Err(ListingError::NotFound(listing_id).into());
        }

        tracing::info!(listing_id, company_id, "Deleted listing");

        Ok(())
    }

    async fn get_owned(&self, company_id: i32, listing_id: i32) -> Result<ListingModel, Error> {
        let listing = ListingRepository::new(self.db)
            .get_by_id(listing_id)
            .await?
            .ok_or(ListingError::NotFound(listing_id))?;

        if listing.company_id != company_id {
            return Err(ListingError::NotOwner {
                listing_id,
                company_id,
            }
            .into());
        }

        Ok(listing)
    }

    async fn present(&self, listing: ListingModel) -> Result<ListingDto, Error> {
        let listing_id = listing.id;

        ViewService::new(self.db)
            .listings(vec![listing])
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to present listing ID {}", listing_id))
            })
    }
}
