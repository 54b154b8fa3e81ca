use chrono::Utc;
use entity::application::ApplicationStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn application<'a>(&'a self) -> ApplicationFixtures<'a> {
        ApplicationFixtures { context: self }
    }
}

pub struct ApplicationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    pub async fn insert_application(
        &self,
        candidate_id: i32,
        listing_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::application::Model, TestError> {
        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                listing_id: ActiveValue::Set(listing_id),
                candidate_id: ActiveValue::Set(candidate_id),
                status: ActiveValue::Set(status),
                applied_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
