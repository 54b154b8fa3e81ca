use sea_orm::DatabaseConnection;

use crate::{
    model::identity::CheckAddressDto,
    server::{data::address::AddressRepository, error::Error},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    /// Creates a new instance of [`AddressService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether an address with the same postal code & number is already registered
    pub async fn check_address(&self, address: &CheckAddressDto) -> Result<bool, Error> {
        Ok(AddressRepository::new(self.db)
            .exists(&address.postal_code, address.number)
            .await?)
    }
}
