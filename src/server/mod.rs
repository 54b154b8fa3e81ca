//! Server application core modules.
//!
//! HTTP routing, bearer-token authentication, business rules and database access for the
//! job board. Requests flow controller -> service -> data, with domain errors converted to
//! JSON responses in [`error`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
