//! Admin authentication with bcrypt credentials and signed session tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// The single admin account, loaded from configuration.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub name: String,
    /// bcrypt hash of the admin password.
    pub password_hash: String,
}

/// The authenticated admin, as exposed to handlers and templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: &'static str,
}

/// A freshly issued session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AdminUser,
}

/// JWT claims carried by session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

const ADMIN_ID: &str = "1";
const ADMIN_ROLE: &str = "admin";

/// Service for logging the admin in and validating session tokens.
///
/// Tokens are HS256 JWTs keyed by the server-side session secret, so they
/// survive restarts but are invalidated by rotating `SESSION_SECRET`.
pub struct AuthService {
    admin: AdminCredentials,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(admin: AdminCredentials, session_secret: &str, session_ttl: Duration) -> Self {
        Self {
            admin,
            encoding_key: EncodingKey::from_secret(session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(session_secret.as_bytes()),
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    fn admin_user(&self) -> AdminUser {
        AdminUser {
            id: ADMIN_ID.to_string(),
            email: self.admin.email.clone(),
            name: self.admin.name.clone(),
            role: ADMIN_ROLE,
        }
    }

    /// Case-insensitive match against the configured admin email.
    pub fn is_admin_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(self.admin.email.trim())
    }

    /// Checks credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either field is blank and
    /// [`AppError::Unauthorized`] when the credentials do not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Email and password are required",
                json!({ "fields": ["email", "password"] }),
            ));
        }

        let password_ok = self.verify_password(password).await?;

        if !self.is_admin_email(email) || !password_ok {
            tracing::warn!(email = %email.trim(), "Failed admin login attempt");
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({ "reason": "Email or password is incorrect" }),
            ));
        }

        let session = self.issue_session(Utc::now())?;
        tracing::info!(email = %self.admin.email, "Admin logged in");
        Ok(session)
    }

    async fn verify_password(&self, password: &str) -> Result<bool, AppError> {
        let password = password.to_string();
        let hash = self.admin.password_hash.clone();

        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AppError::internal("Authentication failed", json!({}))
            })?;

        match verified {
            Ok(ok) => Ok(ok),
            Err(e) => {
                tracing::error!(error = %e, "Stored admin password hash is invalid");
                Ok(false)
            }
        }
    }

    fn issue_session(&self, now: DateTime<Utc>) -> Result<Session, AppError> {
        let expires_at = now + self.session_ttl;
        let user = self.admin_user();
        let claims = SessionClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to sign session token");
                AppError::internal("Failed to create session", json!({}))
            })?;

        Ok(Session {
            token,
            expires_at,
            user,
        })
    }

    /// Validates a session token and returns the admin it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, expired,
    /// signed with another secret or issued for a different admin email.
    pub fn authenticate(&self, token: &str) -> Result<AdminUser, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected session token");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired session" }),
                )
            })?;

        if !self.is_admin_email(&data.claims.email) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session does not belong to an admin" }),
            ));
        }

        Ok(self.admin_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "correct horse battery staple";

    fn service_with_secret(secret: &str) -> AuthService {
        let password_hash = bcrypt::hash(PASSWORD, 4).unwrap();
        AuthService::new(
            AdminCredentials {
                email: "admin@fastrocket.com".to_string(),
                name: "Admin User".to_string(),
                password_hash,
            },
            secret,
            Duration::days(30),
        )
    }

    fn service() -> AuthService {
        service_with_secret("test-session-secret")
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = service();

        let session = service.login("admin@fastrocket.com", PASSWORD).await.unwrap();

        assert_eq!(session.user.email, "admin@fastrocket.com");
        assert_eq!(session.user.role, "admin");
        assert!(session.expires_at > Utc::now() + Duration::days(29));
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let service = service();

        assert!(service.login("  Admin@FastRocket.com ", PASSWORD).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service();

        let result = service.login("admin@fastrocket.com", "nope").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service = service();

        let result = service.login("someone@example.com", PASSWORD).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let service = service();

        let result = service.login("", "").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_login_with_corrupt_hash_is_unauthorized() {
        let service = AuthService::new(
            AdminCredentials {
                email: "admin@fastrocket.com".to_string(),
                name: "Admin".to_string(),
                password_hash: "not-a-bcrypt-hash".to_string(),
            },
            "secret",
            Duration::days(1),
        );

        let result = service.login("admin@fastrocket.com", PASSWORD).await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_round_trip() {
        let service = service();
        let session = service.login("admin@fastrocket.com", PASSWORD).await.unwrap();

        let user = service.authenticate(&session.token).unwrap();

        assert_eq!(user, session.user);
    }

    #[test]
    fn test_authenticate_rejects_garbage() {
        let result = service().authenticate("not.a.jwt");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_rejects_other_secret() {
        let issuer = service_with_secret("secret-a");
        let verifier = service_with_secret("secret-b");

        let session = issuer.issue_session(Utc::now()).unwrap();

        assert!(verifier.authenticate(&session.token).is_err());
    }

    #[test]
    fn test_authenticate_rejects_expired() {
        let service = service();
        let session = service
            .issue_session(Utc::now() - Duration::days(31))
            .unwrap();

        assert!(service.authenticate(&session.token).is_err());
    }

    #[test]
    fn test_is_admin_email() {
        let service = service();

        assert!(service.is_admin_email("ADMIN@fastrocket.com"));
        assert!(!service.is_admin_email("user@fastrocket.com"));
    }
}
