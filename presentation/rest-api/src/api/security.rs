use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem::http::StatusCode;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::Identity;

/// Token lifetime. Tokens are not refreshable and there is no revocation
/// list; expiry is the only cutoff.
const TOKEN_TTL_MINUTES: i64 = 15;

/// Claims embedded in every issued token.
///
/// `permissions` stays optional on decode: a token signed without the claim
/// still authenticates, but the permission gate answers 401 for it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub permissions: Option<Vec<String>>,
    pub exp: i64,
    pub iat: i64,
}

/// Verified identity attached to a request after the bearer check.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub permissions: Option<Vec<String>>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            permissions: claims.permissions,
        }
    }
}

/// Signs a token for the given identity, valid for [`TOKEN_TTL_MINUTES`].
pub fn issue_token(
    identity: &Identity,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        id: identity.id,
        username: identity.username.clone(),
        permissions: Some(identity.permissions.clone()),
        exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies signature and expiry, returning the embedded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Gate executed after authentication: a token without any permission set
/// is rejected with [`AuthError::MissingPermissions`] (401); a set lacking
/// the required tag with [`AuthError::PermissionDenied`] (403).
pub fn require_permission(user: &AuthenticatedUser, required: &str) -> Result<(), AuthError> {
    let Some(permissions) = &user.permissions else {
        return Err(AuthError::MissingPermissions);
    };

    if !permissions.iter().any(|p| p == required) {
        return Err(AuthError::PermissionDenied);
    }

    Ok(())
}

/// JWT Bearer token authentication.
///
/// Authentication failures answer 403, not 401: the contract this service
/// replaces used 403 for "unauthenticated" and clients depend on it.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub AuthenticatedUser);

fn unauthenticated_error() -> poem::Error {
    let body = serde_json::json!({
        "error": "Usuário não está autorizado a acessar esta rota"
    });
    poem::Error::from_response(
        poem::Response::builder()
            .status(StatusCode::FORBIDDEN)
            .content_type("application/json; charset=utf-8")
            .body(body.to_string()),
    )
}

async fn bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> poem::Result<AuthenticatedUser> {
    let secret = std::env::var("JWT_SECRET").unwrap_or_default();
    if secret.is_empty() {
        tracing::error!("JWT_SECRET not configured");
        return Err(unauthenticated_error());
    }

    match decode_token(&bearer.token, &secret) {
        Ok(claims) => Ok(claims.into()),
        Err(e) => {
            tracing::warn!("Token rejected: {e}");
            Err(unauthenticated_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::auth::model::permissions;

    const SECRET: &str = "test-secret";

    fn admin_identity() -> Identity {
        Identity {
            id: 99,
            username: "admin".to_string(),
            permissions: permissions::all(),
        }
    }

    #[test]
    fn should_round_trip_claims_when_token_is_fresh() {
        let token = issue_token(&admin_identity(), SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();

        assert_eq!(claims.id, 99);
        assert_eq!(claims.username, "admin");
        let perms = claims.permissions.unwrap();
        assert!(perms.contains(&permissions::PRODUCTS_CREATE.to_string()));
        assert!(perms.contains(&permissions::PRODUCTS_UPDATE.to_string()));
        assert!(perms.contains(&permissions::PRODUCTS_DELETE.to_string()));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn should_reject_token_when_signed_with_other_secret() {
        let token = issue_token(&admin_identity(), "outro-segredo").unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn should_reject_token_when_expired() {
        let now = Utc::now();
        let claims = Claims {
            id: 1,
            username: "user".to_string(),
            permissions: Some(vec![]),
            // Past the default validation leeway.
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn should_reject_token_when_malformed() {
        assert!(decode_token("not-a-jwt", SECRET).is_err());
    }

    #[test]
    fn should_answer_missing_permissions_when_token_has_no_set() {
        let user = AuthenticatedUser {
            id: 1,
            username: "user".to_string(),
            permissions: None,
        };
        assert!(matches!(
            require_permission(&user, permissions::PRODUCTS_CREATE).unwrap_err(),
            AuthError::MissingPermissions
        ));
    }

    #[test]
    fn should_answer_permission_denied_when_tag_is_absent() {
        let user = AuthenticatedUser {
            id: 1,
            username: "user".to_string(),
            permissions: Some(vec![]),
        };
        assert!(matches!(
            require_permission(&user, permissions::PRODUCTS_DELETE).unwrap_err(),
            AuthError::PermissionDenied
        ));
    }

    #[test]
    fn should_allow_request_when_permission_is_carried() {
        let user = AuthenticatedUser {
            id: 99,
            username: "admin".to_string(),
            permissions: Some(permissions::all()),
        };
        assert!(require_permission(&user, permissions::PRODUCTS_UPDATE).is_ok());
    }
}
