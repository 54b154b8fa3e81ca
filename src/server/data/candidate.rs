use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::model::identity::{RegisterCandidateDto, UpdateCandidateDto};

pub struct CandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidateRepository<'a, C> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a candidate referencing an already created address
    ///
    /// # Arguments
    /// - `candidate`: Registration fields, the plaintext password is ignored
    /// - `password_hash`: PHC string of the hashed password
    /// - `address_id`: ID of the candidate's address entry
    pub async fn create(
        &self,
        candidate: &RegisterCandidateDto,
        password_hash: String,
        address_id: i32,
    ) -> Result<entity::candidate::Model, DbErr> {
        let candidate = entity::candidate::ActiveModel {
            name: ActiveValue::Set(candidate.name.clone()),
            email: ActiveValue::Set(candidate.email.clone()),
            password_hash: ActiveValue::Set(password_hash),
            phone: ActiveValue::Set(candidate.phone.clone()),
            resume: ActiveValue::Set(candidate.resume.clone()),
            address_id: ActiveValue::Set(address_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        candidate.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        candidate_id: i32,
    ) -> Result<Option<(entity::candidate::Model, Option<entity::address::Model>)>, DbErr> {
        entity::prelude::Candidate::find_by_id(candidate_id)
            .find_also_related(entity::address::Entity)
            .one(self.db)
            .await
    }

    /// Finds a candidate by exact email, joined with its address for login
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(entity::candidate::Model, Option<entity::address::Model>)>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::Email.eq(email))
            .find_also_related(entity::address::Entity)
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all candidates matching the provided IDs, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        candidate_ids: Vec<i32>,
    ) -> Result<Vec<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::Id.is_in(candidate_ids))
            .all(self.db)
            .await
    }

    /// Updates the candidate's profile fields
    ///
    /// Returns `None` if the candidate does not exist.
    pub async fn update(
        &self,
        candidate_id: i32,
        profile: &UpdateCandidateDto,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let candidate = match entity::prelude::Candidate::find_by_id(candidate_id)
            .one(self.db)
            .await?
        {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        let mut candidate_am = candidate.into_active_model();
        candidate_am.name = ActiveValue::Set(profile.name.clone());
        candidate_am.email = ActiveValue::Set(profile.email.clone());
        candidate_am.phone = ActiveValue::Set(profile.phone.clone());
        candidate_am.resume = ActiveValue::Set(profile.resume.clone());

        Ok(Some(candidate_am.update(self.db).await?))
    }
}
