use std::env;

use business::domain::auth::model::ConfiguredCredentials;

/// Authentication configuration
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Optional single non-admin credential
    pub credentials: ConfiguredCredentials,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: token signing key (required)
    /// - LOGIN / PASSWORD: the single environment-provided credential;
    ///   when either is unset no environment login exists
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            credentials: ConfiguredCredentials {
                username: env::var("LOGIN").ok(),
                password: env::var("PASSWORD").ok(),
            },
        }
    }
}
