use crate::{
    AppState,
    errors::{Error, Result},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, instrument, trace};

/// Proof that the request carried the configured admin API key.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

/// Pull the token out of an `Authorization: Bearer <token>` header.
/// Returns:
/// - None: no Authorization header, or not a Bearer token
/// - Some(Ok(token)): a Bearer token was present
/// - Some(Err(error)): the header was not valid ASCII
fn bearer_token(parts: &Parts) -> Option<Result<&str>> {
    let auth_header = parts.headers.get(header::AUTHORIZATION)?;

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(e) => {
            return Some(Err(Error::BadRequest {
                message: format!("Invalid authorization header: {e}"),
            }));
        }
    };

    auth_str.strip_prefix("Bearer ").map(|token| Ok(token.trim()))
}

/// Compare without short-circuiting on the first differing byte.
fn keys_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    provided.len() == expected.len() && provided.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = Error;

    #[instrument(skip(parts, state))]
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let Some(expected) = state.config.admin.api_key.as_deref() else {
            // The router only mounts admin routes when a key is configured
            return Err(Error::Unauthenticated {
                message: Some("Admin API is disabled".to_string()),
            });
        };

        match bearer_token(parts) {
            Some(Ok(token)) if keys_match(token, expected) => {
                trace!("Admin API key accepted");
                Ok(AdminAccess)
            }
            Some(Ok(_)) => {
                debug!("Rejected request with invalid admin API key");
                Err(Error::Unauthenticated {
                    message: Some("Invalid admin API key".to_string()),
                })
            }
            Some(Err(e)) => Err(e),
            None => Err(Error::Unauthenticated { message: None }),
        }
    }
}
