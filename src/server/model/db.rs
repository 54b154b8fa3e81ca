//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server.

/// Postal address owned by exactly one candidate or company.
pub type AddressModel = entity::address::Model;

/// Registered candidate, including the stored password hash.
///
/// Never serialized directly, responses are built from `CandidateDto`.
pub type CandidateModel = entity::candidate::Model;

/// Registered company, including the stored password hash.
pub type CompanyModel = entity::company::Model;

/// Job listing published by a company.
///
/// # Fields (from `entity::listing::Model`)
/// - `skills` / `benefits` - JSON arrays of strings
/// - `published_at` - Set once on creation
pub type ListingModel = entity::listing::Model;

/// A candidate's application to a listing with its review status.
pub type ApplicationModel = entity::application::Model;
