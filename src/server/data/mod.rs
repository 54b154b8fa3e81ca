//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! `ConnectionTrait`, so services can run them against the pool or inside a transaction.

pub mod address;
pub mod application;
pub mod candidate;
pub mod company;
pub mod listing;
