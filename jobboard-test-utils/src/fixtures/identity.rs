use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

/// Argon2 hash of [`TEST_PASSWORD`], computed once per test binary
pub static TEST_PASSWORD_HASH: LazyLock<String> = LazyLock::new(|| {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .expect("hashing the test password succeeds")
        .to_string()
});

impl TestContext {
    pub fn identity<'a>(&'a self) -> IdentityFixtures<'a> {
        IdentityFixtures { context: self }
    }
}

pub struct IdentityFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> IdentityFixtures<'a> {
    pub async fn insert_address(
        &self,
        postal_code: &str,
        number: i32,
    ) -> Result<entity::address::Model, TestError> {
        Ok(
            entity::prelude::Address::insert(entity::address::ActiveModel {
                postal_code: ActiveValue::Set(postal_code.to_string()),
                street: ActiveValue::Set("Avenida Paulista".to_string()),
                number: ActiveValue::Set(number),
                complement: ActiveValue::Set(None),
                neighborhood: ActiveValue::Set("Bela Vista".to_string()),
                city: ActiveValue::Set("Sao Paulo".to_string()),
                state: ActiveValue::Set("SP".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a candidate whose password is [`TEST_PASSWORD`]
    pub async fn insert_candidate(
        &self,
        email: &str,
    ) -> Result<entity::candidate::Model, TestError> {
        let address = self.insert_address("01310-100", 1000).await?;

        Ok(
            entity::prelude::Candidate::insert(entity::candidate::ActiveModel {
                name: ActiveValue::Set("Test Candidate".to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.clone()),
                phone: ActiveValue::Set(Some("(11) 98765-4321".to_string())),
                resume: ActiveValue::Set(None),
                address_id: ActiveValue::Set(address.id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a company whose password is [`TEST_PASSWORD`]
    pub async fn insert_company(
        &self,
        email: &str,
        cnpj: &str,
    ) -> Result<entity::company::Model, TestError> {
        let address = self.insert_address("04538-133", 3477).await?;

        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                name: ActiveValue::Set("Test Company".to_string()),
                cnpj: ActiveValue::Set(cnpj.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.clone()),
                phone: ActiveValue::Set(None),
                segment: ActiveValue::Set("Technology".to_string()),
                size_category: ActiveValue::Set("Medium".to_string()),
                address_id: ActiveValue::Set(address.id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
