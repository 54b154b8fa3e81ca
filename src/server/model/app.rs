use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::{TokenKeys, DEFAULT_TOKEN_TTL_HOURS};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenKeys,
}

/// Builds state from a database connection and signing secret using the default token lifetime
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(&secret, DEFAULT_TOKEN_TTL_HOURS),
        }
    }
}
