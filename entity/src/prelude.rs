pub use super::address::Entity as Address;
pub use super::application::Entity as Application;
pub use super::candidate::Entity as Candidate;
pub use super::company::Entity as Company;
pub use super::listing::Entity as Listing;
