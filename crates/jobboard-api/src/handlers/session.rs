//! Credential issuing and logout.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::auth::{credential_cookie, removal_cookie};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Identity record to sign.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Serialize)]
pub struct CredentialResponse {
    pub success: bool,
}

/// POST /jwt
///
/// Sign a one-day credential for the given identity and deliver it as an
/// HTTP-only cookie.
pub async fn issue_credential(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CredentialRequest>,
) -> ApiResult<(CookieJar, Json<CredentialResponse>)> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let token = state.credentials.issue(&payload.email)?;
    info!(email = %payload.email, "Issued credential");

    let jar = jar.add(credential_cookie(token, state.config.is_production()));
    Ok((jar, Json(CredentialResponse { success: true })))
}

/// GET /logout
///
/// Clear the credential cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<CredentialResponse>) {
    let jar = jar.remove(removal_cookie(state.config.is_production()));
    (jar, Json(CredentialResponse { success: true }))
}
