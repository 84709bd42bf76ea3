use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::users::{InsertUserEntity, UpdateUserEntity};
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::iam::{
    AuthenticatedModel, Claims, LoginModel, RegisterUserModel, UpdateProfileModel,
    UserProfileModel,
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

pub struct AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<U>,
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl<U> AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<U>, jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            user_repository,
            jwt_secret,
            token_ttl_hours,
        }
    }

    pub async fn register(
        &self,
        register_model: RegisterUserModel,
    ) -> UseCaseResult<AuthenticatedModel> {
        let existing = self
            .user_repository
            .find_by_email(&register_model.email)
            .await
            .map_err(AuthError::Internal)?;
        if existing.is_some() {
            warn!(email = %register_model.email, "auth: register with taken email");
            return Err(AuthError::EmailTaken);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(register_model.password.as_bytes(), &salt)
            .map_err(|err| AuthError::Internal(anyhow::anyhow!("password hash: {err}")))?
            .to_string();

        let entity = self
            .user_repository
            .register(InsertUserEntity {
                email: register_model.email,
                password_hash,
                display_name: register_model.display_name,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: register insert failed");
                AuthError::Internal(err)
            })?;

        info!(user_id = %entity.id, "auth: user registered");

        let token = self.issue_token(entity.id, &entity.email)?;
        Ok(AuthenticatedModel {
            token,
            user: UserProfileModel::from(entity),
        })
    }

    pub async fn login(&self, login_model: LoginModel) -> UseCaseResult<AuthenticatedModel> {
        let entity = self
            .user_repository
            .find_by_email(&login_model.email)
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&entity.password_hash)
            .map_err(|err| AuthError::Internal(anyhow::anyhow!("stored hash: {err}")))?;
        if Argon2::default()
            .verify_password(login_model.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            warn!(user_id = %entity.id, "auth: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %entity.id, "auth: login succeeded");

        let token = self.issue_token(entity.id, &entity.email)?;
        Ok(AuthenticatedModel {
            token,
            user: UserProfileModel::from(entity),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> UseCaseResult<UserProfileModel> {
        let entity = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::UserNotFound)?;
        Ok(UserProfileModel::from(entity))
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update_model: UpdateProfileModel,
    ) -> UseCaseResult<UserProfileModel> {
        if let Some(new_email) = update_model.email.as_deref() {
            if let Some(existing) = self
                .user_repository
                .find_by_email(new_email)
                .await
                .map_err(AuthError::Internal)?
            {
                if existing.id != user_id {
                    return Err(AuthError::EmailTaken);
                }
            }
        }

        let entity = self
            .user_repository
            .update_profile(
                user_id,
                UpdateUserEntity {
                    email: update_model.email,
                    display_name: update_model.display_name,
                    updated_at: Some(Utc::now()),
                },
            )
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::UserNotFound)?;
        Ok(UserProfileModel::from(entity))
    }

    fn issue_token(&self, user_id: Uuid, email: &str) -> UseCaseResult<String> {
        let exp = Utc::now() + Duration::hours(self.token_ttl_hours);
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|err| AuthError::Internal(anyhow::anyhow!("token encode: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use crate::domain::entities::users::UserEntity;
    use crate::domain::repositories::users::MockUserRepository;

    const TEST_SECRET: &str = "trailteller-test-secret";

    fn entity_with_hash(email: &str, password: &str) -> UserEntity {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();
        let now = Utc::now();
        UserEntity {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
            display_name: "Nok".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn register_issues_decodable_token() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repo.expect_register().returning(|insert| {
            let now = Utc::now();
            let entity = UserEntity {
                id: Uuid::new_v4(),
                email: insert.email,
                password_hash: insert.password_hash,
                display_name: insert.display_name,
                created_at: now,
                updated_at: now,
            };
            Box::pin(async move { Ok(entity) })
        });

        let usecase = AuthUseCase::new(Arc::new(user_repo), TEST_SECRET.to_string(), 72);
        let authenticated = usecase
            .register(RegisterUserModel {
                email: "nok@example.com".to_string(),
                password: "correct horse".to_string(),
                display_name: "Nok".to_string(),
            })
            .await
            .unwrap();

        let mut validation = Validation::default();
        validation.validate_exp = true;
        let decoded = decode::<Claims>(
            &authenticated.token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, authenticated.user.id.to_string());
        assert_eq!(decoded.claims.email, "nok@example.com");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let entity = entity_with_hash("nok@example.com", "right-password");
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(move |_| {
            let entity = entity.clone();
            Box::pin(async move { Ok(Some(entity)) })
        });

        let usecase = AuthUseCase::new(Arc::new(user_repo), TEST_SECRET.to_string(), 72);
        let result = usecase
            .login(LoginModel {
                email: "nok@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_accepts_correct_password() {
        let entity = entity_with_hash("nok@example.com", "right-password");
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(move |_| {
            let entity = entity.clone();
            Box::pin(async move { Ok(Some(entity)) })
        });

        let usecase = AuthUseCase::new(Arc::new(user_repo), TEST_SECRET.to_string(), 72);
        let authenticated = usecase
            .login(LoginModel {
                email: "nok@example.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(authenticated.user.email, "nok@example.com");
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let entity = entity_with_hash("nok@example.com", "whatever");
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(move |_| {
            let entity = entity.clone();
            Box::pin(async move { Ok(Some(entity)) })
        });
        user_repo.expect_register().times(0);

        let usecase = AuthUseCase::new(Arc::new(user_repo), TEST_SECRET.to_string(), 72);
        let result = usecase
            .register(RegisterUserModel {
                email: "nok@example.com".to_string(),
                password: "pw".to_string(),
                display_name: "Nok".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }
}
