use std::sync::Arc;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::iam::{
    AuthenticatedModel, LoginModel, RegisterUserModel, UpdateProfileModel, UserProfileModel,
};

pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Registers and persists the returned token into the session store.
    pub async fn register(
        &self,
        register_model: &RegisterUserModel,
    ) -> Result<AuthenticatedModel, ApiError> {
        let response = self
            .api
            .post::<_, AuthenticatedModel>("api/v1/auth/register", register_model)
            .await?;
        self.api.session().set(response.data.token.clone());
        Ok(response.data)
    }

    pub async fn login(&self, login_model: &LoginModel) -> Result<AuthenticatedModel, ApiError> {
        let response = self
            .api
            .post::<_, AuthenticatedModel>("api/v1/auth/login", login_model)
            .await?;
        self.api.session().set(response.data.token.clone());
        Ok(response.data)
    }

    pub fn logout(&self) {
        self.api.session().clear();
    }

    pub async fn me(&self) -> Result<UserProfileModel, ApiError> {
        let response = self.api.get::<UserProfileModel>("api/v1/auth/me").await?;
        Ok(response.data)
    }

    pub async fn update_profile(
        &self,
        update_model: &UpdateProfileModel,
    ) -> Result<UserProfileModel, ApiError> {
        let response = self
            .api
            .patch::<_, UserProfileModel>("api/v1/auth/me", update_model)
            .await?;
        Ok(response.data)
    }
}
