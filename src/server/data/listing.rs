use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::listing::ListingInputDto;

pub struct ListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    /// Creates a new instance of [`ListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a listing owned by the company, published now
    pub async fn create(
        &self,
        company_id: i32,
        listing: &ListingInputDto,
    ) -> Result<entity::listing::Model, DbErr> {
        let listing = entity::listing::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(listing.title.clone()),
            description: ActiveValue::Set(listing.description.clone()),
            requirements: ActiveValue::Set(listing.requirements.clone()),
            salary: ActiveValue::Set(listing.salary.clone()),
            contract_type: ActiveValue::Set(listing.contract_type.into()),
            modality: ActiveValue::Set(listing.modality.into()),
            location: ActiveValue::Set(listing.location.clone()),
            skills: ActiveValue::Set(serde_json::json!(listing.skills)),
            benefits: ActiveValue::Set(serde_json::json!(listing.benefits)),
            published_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    pub async fn get_by_id(&self, listing_id: i32) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await
    }

    /// Gets all listings, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .order_by_desc(entity::listing::Column::PublishedAt)
            .order_by_desc(entity::listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all listings published by a company, newest first
    pub async fn get_many_by_company_id(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::listing::Column::PublishedAt)
            .order_by_desc(entity::listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all listings matching the provided IDs, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        listing_ids: Vec<i32>,
    ) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::Id.is_in(listing_ids))
            .all(self.db)
            .await
    }

    /// Replaces the listing's editable fields, `company_id` & `published_at` are kept
    ///
    /// Returns `None` if the listing does not exist.
    pub async fn update(
        &self,
        listing_id: i32,
        listing: &ListingInputDto,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        let existing = match entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut listing_am = existing.into_active_model();
        listing_am.title = ActiveValue::Set(listing.title.clone());
        listing_am.description = ActiveValue::Set(listing.description.clone());
        listing_am.requirements = ActiveValue::Set(listing.requirements.clone());
        listing_am.salary = ActiveValue::Set(listing.salary.clone());
        listing_am.contract_type = ActiveValue::Set(listing.contract_type.into());
        listing_am.modality = ActiveValue::Set(listing.modality.into());
        listing_am.location = ActiveValue::Set(listing.location.clone());
        listing_am.skills = ActiveValue::Set(serde_json::json!(listing.skills));
        listing_am.benefits = ActiveValue::Set(serde_json::json!(listing.benefits));

        Ok(Some(listing_am.update(self.db).await?))
    }

    /// Deletes a listing, its applications are removed by the foreign key cascade
    ///
    /// Returns OK regardless of the listing existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, listing_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Listing::delete_by_id(listing_id)
            .exec(self.db)
            .await
    }
}
