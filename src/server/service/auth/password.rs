use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a plaintext password with Argon2id and a random salt, returning the PHC string
///
/// Hashing runs on the blocking thread pool so it does not stall the async workers.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC string of the hash
/// - `Err(Error::PasswordHashError)` - Hashing failed
/// - `Err(Error::InternalError)` - The blocking task panicked or was cancelled
pub async fn hash_password(password: &str) -> Result<String, Error> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|err| Error::InternalError(format!("Password hashing task failed: {}", err)))?
}

/// Checks a plaintext password against a stored PHC string on the blocking thread pool
///
/// # Arguments
/// - `password` - Plaintext password supplied by the client
/// - `password_hash` - Stored PHC string
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(Error::PasswordHashError)` - Stored hash could not be parsed
/// - `Err(Error::InternalError)` - The blocking task panicked or was cancelled
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || verify(&password, &password_hash))
        .await
        .map_err(|err| Error::InternalError(format!("Password verification task failed: {}", err)))?
}

fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(password_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
