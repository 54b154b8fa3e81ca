//! Credential handling: password hashing, bearer token signing and the registration &
//! login flows built on them.

pub mod credential;
pub mod password;
pub mod token;
