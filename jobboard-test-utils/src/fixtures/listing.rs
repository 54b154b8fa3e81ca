use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn listing<'a>(&'a self) -> ListingFixtures<'a> {
        ListingFixtures { context: self }
    }
}

pub struct ListingFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ListingFixtures<'a> {
    /// Inserts a remote CLT listing published now
    pub async fn insert_listing(
        &self,
        company_id: i32,
        title: &str,
    ) -> Result<entity::listing::Model, TestError> {
        Ok(
            entity::prelude::Listing::insert(entity::listing::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set("Build and maintain our APIs".to_string()),
                requirements: ActiveValue::Set("3 years of experience".to_string()),
                salary: ActiveValue::Set("R$ 8.000".to_string()),
                contract_type: ActiveValue::Set(entity::listing::ContractType::Clt),
                modality: ActiveValue::Set(entity::listing::Modality::Remote),
                location: ActiveValue::Set("Sao Paulo - SP".to_string()),
                skills: ActiveValue::Set(serde_json::json!(["Rust", "SQL"])),
                benefits: ActiveValue::Set(serde_json::json!(["Health insurance"])),
                published_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
