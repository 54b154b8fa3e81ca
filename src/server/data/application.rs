use chrono::Utc;
use entity::application::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending application applied now
    ///
    /// Fails with a unique constraint violation if the candidate already applied to the listing.
    pub async fn create(
        &self,
        candidate_id: i32,
        listing_id: i32,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            listing_id: ActiveValue::Set(listing_id),
            candidate_id: ActiveValue::Set(candidate_id),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            applied_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Gets an application by ID
    pub async fn get_by_id(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Finds the application a candidate made to a listing
    ///
    /// # Arguments
    /// - `candidate_id`: ID of the applying candidate
    /// - `listing_id`: ID of the listing applied to
    pub async fn find_by_candidate_and_listing(
        &self,
        candidate_id: i32,
        listing_id: i32,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::CandidateId.eq(candidate_id))
            .filter(entity::application::Column::ListingId.eq(listing_id))
            .one(self.db)
            .await
    }

    /// Gets all applications made by a candidate, newest first
    pub async fn get_many_by_candidate_id(
        &self,
        candidate_id: i32,
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::CandidateId.eq(candidate_id))
            .order_by_desc(entity::application::Column::AppliedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all applications made to any of the listings, newest first
    pub async fn get_many_by_listing_ids(
        &self,
        listing_ids: Vec<i32>,
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::ListingId.is_in(listing_ids))
            .order_by_desc(entity::application::Column::AppliedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of an application
    ///
    /// Returns `None` if the application does not exist.
    pub async fn update_status(
        &self,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let application = match entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };

        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status);

        Ok(Some(application_am.update(self.db).await?))
    }
}
