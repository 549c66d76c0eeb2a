//! Cookie-borne JWT authentication.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Cookie carrying the credential.
pub const TOKEN_COOKIE: &str = "token";

/// Credential lifetime: one day.
const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Signed credential claims: an identity bound to an expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated identity
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Issues and verifies HS256-signed credentials.
pub struct CredentialService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl CredentialService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a credential for the given identity, expiring in one day.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("failed to sign credential: {e}")))
    }

    /// Verify signature and expiry. Side effect-free.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Credential verification failed: {e}");
                ApiError::Forbidden
            })
    }
}

/// Build the credential cookie. Always HTTP-only; in production the
/// cookie is cross-site (frontend on another origin) and secure.
pub fn credential_cookie(token: String, production: bool) -> Cookie<'static> {
    scoped_cookie(token, production)
}

/// Cookie that clears the credential on logout. Attributes must match the
/// issuing cookie for browsers to drop it.
pub fn removal_cookie(production: bool) -> Cookie<'static> {
    scoped_cookie(String::new(), production)
}

fn scoped_cookie(value: String, production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build()
}

/// Authenticated user extracted from the credential cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    /// Handler-local ownership check: gated routes compare the resolved
    /// identity against a path-supplied email.
    pub fn require_owner(&self, email: &str) -> Result<(), ApiError> {
        if self.email != email {
            return Err(ApiError::Forbidden);
        }
        Ok(())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar.get(TOKEN_COOKIE).ok_or(ApiError::Unauthorized)?;

        let claims = state.credentials.verify(token.value())?;

        Ok(AuthUser {
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CredentialService {
        CredentialService::new("unit-test-secret")
    }

    #[test]
    fn issue_verify_round_trip() {
        let service = service();
        let token = service.issue("a@x.com").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_credential_is_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            email: "a@x.com".to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(&Header::default(), &claims, &service.encoding).unwrap();
        assert!(matches!(service.verify(&token), Err(ApiError::Forbidden)));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = service().issue("a@x.com").unwrap();
        let other = CredentialService::new("another-secret");
        assert!(matches!(other.verify(&token), Err(ApiError::Forbidden)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(service().verify("not.a.jwt").is_err());
    }

    #[test]
    fn development_cookie_is_strict_and_insecure() {
        let cookie = credential_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn production_cookie_is_cross_site_and_secure() {
        let cookie = credential_cookie("abc".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn ownership_mismatch_is_forbidden() {
        let user = AuthUser {
            email: "a@x.com".to_string(),
        };
        assert!(user.require_owner("a@x.com").is_ok());
        assert!(matches!(
            user.require_owner("b@x.com"),
            Err(ApiError::Forbidden)
        ));
    }
}
