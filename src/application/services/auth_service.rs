//! Registration, login, and bearer token verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// JWT claims carried by every issued token.
///
/// `sub` is the numeric user id and the only claim consumed by the
/// application; `iat`/`exp` bound the token lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Input for creating a new account. The password is plaintext here and
/// hashed before it reaches the repository.
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub phone_number: String,
}

/// Service for account registration, login, and token verification.
///
/// Tokens are HS256 JWTs signed with a server-side secret. Expiry is
/// enforced on verification; there is no revocation list, so the TTL is
/// the only bound on a stolen token's lifetime.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for account lookups
    /// - `jwt_secret` - HS256 signing key; must match across restarts for
    ///   outstanding tokens to stay valid
    /// - `token_ttl_hours` - issued token lifetime
    pub fn new(users: Arc<U>, jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            users,
            jwt_secret,
            token_ttl_hours,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Internal`] if hashing or persistence fails.
    pub async fn register(&self, data: RegisterData) -> Result<User, AppError> {
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::bad_request(
                "User already registered, please login",
                json!({ "email": data.email }),
            ));
        }

        let password_hash = hash_password(&data.password)
            .map_err(|e| AppError::internal(e.to_string(), json!({})))?;

        self.users
            .create(NewUser {
                email: data.email,
                first_name: data.first_name,
                last_name: data.last_name,
                password_hash,
                phone_number: data.phone_number,
            })
            .await
    }

    /// Authenticates credentials and issues a signed token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown email and
    /// [`AppError::Forbidden`] for a wrong password. The two cases keep the
    /// original API's distinct status codes (400 vs. 403).
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Login failed, please signup", json!({ "email": email }))
            })?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::forbidden(
                "Login failed, please try again",
                json!({}),
            ));
        }

        self.issue_token(user.id)
    }

    /// Issues a signed token embedding the user id.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_ttl_hours)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|_| AppError::internal("Failed to issue token", json!({})))
    }

    /// Verifies a bearer token and returns the user id it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for a malformed signature, a
    /// wrong signing key, or an expired token.
    pub fn verify_token(&self, token: &str) -> Result<i64, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims.sub)
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired token" }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_user(id: i64, email: &str, password: &str) -> User {
        User {
            id,
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password_hash: hash_password(password).unwrap(),
            phone_number: "0800001066".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn register_data(email: &str) -> RegisterData {
        RegisterData {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "analytical-engine".to_string(),
            phone_number: "0800001066".to_string(),
        }
    }

    fn service(repo: MockUserRepository) -> AuthService<MockUserRepository> {
        AuthService::new(Arc::new(repo), "test-signing-secret".to_string(), 24)
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_email().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .withf(|nu: &NewUser| {
                nu.password_hash != "analytical-engine"
                    && verify_password("analytical-engine", &nu.password_hash)
            })
            .times(1)
            .returning(|nu| {
                let mut user = test_user(1, &nu.email, "unused");
                user.password_hash = nu.password_hash;
                Ok(user)
            });

        let created = service(repo)
            .register(register_data("ada@example.com"))
            .await
            .unwrap();

        assert_eq!(created.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(1, email, "pw"))));

        let err = service(repo)
            .register(register_data("ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_user_id() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(42, email, "correct-horse"))));

        let svc = service(repo);
        let token = svc.login("ada@example.com", "correct-horse").await.unwrap();

        assert_eq!(svc.verify_token(&token).unwrap(), 42);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_forbidden() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(test_user(42, email, "correct-horse"))));

        let err = service(repo)
            .login("ada@example.com", "battery-staple")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_validation_failure() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_email().times(1).returning(|_| Ok(None));

        let err = service(repo)
            .login("nobody@example.com", "whatever")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_verify_rejects_foreign_signature() {
        let ours = service(MockUserRepository::new());
        let theirs = AuthService::new(
            Arc::new(MockUserRepository::new()),
            "different-secret".to_string(),
            24,
        );

        let token = theirs.issue_token(7).unwrap();

        let err = ours.verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_verify_rejects_expired_token() {
        // TTL of -2 hours puts exp well outside the default leeway.
        let svc = AuthService::new(
            Arc::new(MockUserRepository::new()),
            "test-signing-secret".to_string(),
            -2,
        );

        let token = svc.issue_token(7).unwrap();

        let err = svc.verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage() {
        let svc = service(MockUserRepository::new());
        assert!(svc.verify_token("not-a-jwt").is_err());
    }
}
