use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::model::identity::AddressInputDto;

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an address, storing the state abbreviation uppercased
    ///
    /// # Arguments
    /// - `address`: Validated address fields from a registration request
    pub async fn create(&self, address: &AddressInputDto) -> Result<entity::address::Model, DbErr> {
        let address = entity::address::ActiveModel {
            postal_code: ActiveValue::Set(address.postal_code.clone()),
            street: ActiveValue::Set(address.street.clone()),
            number: ActiveValue::Set(address.number),
            complement: ActiveValue::Set(address.complement.clone()),
            neighborhood: ActiveValue::Set(address.neighborhood.clone()),
            city: ActiveValue::Set(address.city.clone()),
            state: ActiveValue::Set(address.state.to_uppercase()),
            ..Default::default()
        };

        address.insert(self.db).await
    }

    /// Gets an address by ID
    pub async fn get_by_id(&self, address_id: i32) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find_by_id(address_id)
            .one(self.db)
            .await
    }

    /// Overwrites every field of an existing address
    ///
    /// Returns `None` if the address does not exist.
    pub async fn update(
        &self,
        address_id: i32,
        address: &AddressInputDto,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        let existing = match entity::prelude::Address::find_by_id(address_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut address_am = existing.into_active_model();
        address_am.postal_code = ActiveValue::Set(address.postal_code.clone());
        address_am.street = ActiveValue::Set(address.street.clone());
        address_am.number = ActiveValue::Set(address.number);
        address_am.complement = ActiveValue::Set(address.complement.clone());
        address_am.neighborhood = ActiveValue::Set(address.neighborhood.clone());
        address_am.city = ActiveValue::Set(address.city.clone());
        address_am.state = ActiveValue::Set(address.state.to_uppercase());

        Ok(Some(address_am.update(self.db).await?))
    }

    /// Whether any address with the postal code & number combination exists
    pub async fn exists(&self, postal_code: &str, number: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Address::find()
            .filter(entity::address::Column::PostalCode.eq(postal_code))
            .filter(entity::address::Column::Number.eq(number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
