//! Job board API: candidates and companies register, companies publish
//! listings, candidates apply, and companies approve or reject applications.

pub mod model;
pub mod server;
