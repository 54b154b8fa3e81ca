//! SeaORM entities for the job board tables.

pub mod prelude;

pub mod address;
pub mod application;
pub mod candidate;
pub mod company;
pub mod listing;
