//! Business logic services.
//!
//! Services enforce the job board's rules (uniqueness, ownership, status transitions) on top
//! of the data repositories and compose the joined views returned to clients.

pub mod address;
pub mod application;
pub mod auth;
pub mod candidate;
pub mod company;
pub mod listing;
pub mod view;
