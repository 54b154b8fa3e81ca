use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::model::identity::{RegisterCompanyDto, UpdateCompanyDto};

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a company referencing an already created address
    ///
    /// # Arguments
    /// - `company`: Registration fields, the plaintext password and raw CNPJ are ignored
    /// - `cnpj`: CNPJ reduced to its 14 digits
    /// - `password_hash`: PHC string of the hashed password
    /// - `address_id`: ID of the company's address entry
    pub async fn create(
        &self,
        company: &RegisterCompanyDto,
        cnpj: String,
        password_hash: String,
        address_id: i32,
    ) -> Result<entity::company::Model, DbErr> {
        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(company.name.clone()),
            cnpj: ActiveValue::Set(cnpj),
            email: ActiveValue::Set(company.email.clone()),
            password_hash: ActiveValue::Set(password_hash),
            phone: ActiveValue::Set(company.phone.clone()),
            segment: ActiveValue::Set(company.segment.clone()),
            size_category: ActiveValue::Set(company.size_category.clone()),
            address_id: ActiveValue::Set(address_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        company.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        company_id: i32,
    ) -> Result<Option<(entity::company::Model, Option<entity::address::Model>)>, DbErr> {
        entity::prelude::Company::find_by_id(company_id)
            .find_also_related(entity::address::Entity)
            .one(self.db)
            .await
    }

    /// Finds a company by exact email, joined with its address for login
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(entity::company::Model, Option<entity::address::Model>)>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Email.eq(email))
            .find_also_related(entity::address::Entity)
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Company::find()
            .filter(entity::company::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether a company with the normalized 14 digit CNPJ exists
    pub async fn cnpj_exists(&self, cnpj: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Company::find()
            .filter(entity::company::Column::Cnpj.eq(cnpj))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all companies matching the provided IDs, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        company_ids: Vec<i32>,
    ) -> Result<Vec<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(company_ids))
            .all(self.db)
            .await
    }

    /// Updates the company's profile fields
    ///
    /// Returns `None` if the company does not exist.
    pub async fn update(
        &self,
        company_id: i32,
        profile: &UpdateCompanyDto,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        let company = match entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await?
        {
            Some(company) => company,
            None => return Ok(None),
        };

        let mut company_am = company.into_active_model();
        company_am.name = ActiveValue::Set(profile.name.clone());
        company_am.email = ActiveValue::Set(profile.email.clone());
        company_am.phone = ActiveValue::Set(profile.phone.clone());
        company_am.segment = ActiveValue::Set(profile.segment.clone());
        company_am.size_category = ActiveValue::Set(profile.size_category.clone());

        Ok(Some(company_am.update(self.db).await?))
    }
}
