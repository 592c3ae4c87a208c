// ABOUTME: Session verification for identity-provider issued JWTs
// ABOUTME: Reads the session cookie or Bearer header and validates HS256 signature, expiry and audience
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Verification
//!
//! Identity is managed by an external provider that signs session tokens with a shared
//! HS256 secret. This module only verifies them: it never issues tokens and never
//! touches the store. Credential sources are checked in order:
//!
//! 1. the session cookie (`SESSION_COOKIE_NAME`)
//! 2. `Authorization: Bearer <jwt>`

use crate::config::SessionConfig;
use crate::constants::session::LEEWAY_SECS;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::security::cookies::get_cookie_value;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired,
    /// Token signature, audience or subject is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExpired => write!(f, "Session token has expired"),
            Self::TokenInvalid { reason } => write!(f, "Session token is invalid: {reason}"),
            Self::TokenMalformed { details } => write!(f, "Session token is malformed: {details}"),
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired => Self::auth_expired(),
            other => Self::auth_invalid(other.to_string()),
        }
    }
}

/// Claims read from a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (UUID string)
    pub sub: String,
    /// Expiration timestamp
    pub exp: i64,
}

/// Where the session token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Session cookie
    Cookie,
    /// `Authorization: Bearer` header
    BearerHeader,
}

/// Verified caller identity
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID from the `sub` claim
    pub user_id: Uuid,
    /// Where the credential came from
    pub source: CredentialSource,
}

/// Verifies session tokens on incoming requests
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    cookie_name: String,
}

impl SessionVerifier {
    /// Create a verifier for the configured secret, audience and cookie name
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation.leeway = LEEWAY_SECS;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Authenticate a request from its headers
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no credential is present, `AuthExpired` for an
    /// expired token and `AuthInvalid` for any other verification failure
    pub fn authenticate(&self, headers: &HeaderMap) -> AppResult<AuthenticatedUser> {
        let (token, source) = self.extract_token(headers).ok_or_else(|| {
            AppLogger::log_auth_event(None, "session_verify", false, "missing credential");
            AppError::auth_required()
        })?;

        match self.verify_token(&token) {
            Ok(claims) => {
                let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
                    AppLogger::log_auth_event(None, "session_verify", false, "subject is not a UUID");
                    AppError::auth_invalid(format!("Session subject is not a user id: {e}"))
                })?;
                AppLogger::log_auth_event(Some(&user_id), "session_verify", true, "");
                Ok(AuthenticatedUser {
                    user_id,
                    source,
                })
            }
            Err(e) => {
                AppLogger::log_auth_event(None, "session_verify", false, &e.to_string());
                Err(e.into())
            }
        }
    }

    /// Verify a raw session token
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing why verification failed
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, JwtValidationError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    fn extract_token(&self, headers: &HeaderMap) -> Option<(String, CredentialSource)> {
        if let Some(token) = get_cookie_value(headers, &self.cookie_name) {
            debug!("Found session token in cookie");
            return Some((token, CredentialSource::Cookie));
        }

        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| (token.to_owned(), CredentialSource::BearerHeader))
    }

    fn convert_jwt_error(e: &JwtError) -> JwtValidationError {
        match e.kind() {
            ErrorKind::ExpiredSignature => JwtValidationError::TokenExpired,
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidAudience => JwtValidationError::TokenInvalid {
                reason: "Token audience is not accepted".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            ErrorKind::Utf8(utf8_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid UTF-8: {utf8_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use http::header::COOKIE;
    use http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use workout_core::errors::ErrorCode;

    const SECRET: &str = "unit-test-secret";

    fn verifier() -> SessionVerifier {
        SessionVerifier::new(&SessionConfig {
            jwt_secret: SECRET.to_owned(),
            audience: "authenticated".to_owned(),
            cookie_name: "sb-access-token".to_owned(),
        })
    }

    fn token(sub: &str, exp_offset_secs: i64, aud: &str) -> String {
        let claims = json!({
            "sub": sub,
            "aud": aud,
            "exp": Utc::now().timestamp() + exp_offset_secs,
            "email": "athlete@example.com",
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_credentials_is_auth_required() {
        let error = verifier().authenticate(&HeaderMap::new()).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_valid_bearer_token() {
        let user_id = Uuid::new_v4();
        let user = verifier()
            .authenticate(&bearer(&token(&user_id.to_string(), 3600, "authenticated")))
            .unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.source, CredentialSource::BearerHeader);
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let cookie_user = Uuid::new_v4();
        let header_user = Uuid::new_v4();
        let mut headers = bearer(&token(&header_user.to_string(), 3600, "authenticated"));
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!(
                "sb-access-token={}",
                token(&cookie_user.to_string(), 3600, "authenticated")
            ))
            .unwrap(),
        );

        let user = verifier().authenticate(&headers).unwrap();
        assert_eq!(user.user_id, cookie_user);
        assert_eq!(user.source, CredentialSource::Cookie);
    }

    #[test]
    fn test_expired_token() {
        let headers = bearer(&token(&Uuid::new_v4().to_string(), -3600, "authenticated"));
        let error = verifier().authenticate(&headers).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthExpired);
    }

    #[test]
    fn test_wrong_audience_and_non_uuid_subject_are_invalid() {
        let headers = bearer(&token(&Uuid::new_v4().to_string(), 3600, "anon"));
        assert_eq!(
            verifier().authenticate(&headers).unwrap_err().code,
            ErrorCode::AuthInvalid
        );

        let headers = bearer(&token("not-a-uuid", 3600, "authenticated"));
        assert_eq!(
            verifier().authenticate(&headers).unwrap_err().code,
            ErrorCode::AuthInvalid
        );
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let result = verifier().verify_token("not-a-jwt");
        assert!(matches!(
            result,
            Err(JwtValidationError::TokenMalformed { .. })
        ));
    }
}
