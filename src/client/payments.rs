use std::sync::Arc;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::payments::{
    CreatePaymentIntentModel, PaymentIntentModel, PaymentStatusModel,
};

pub struct PaymentsClient {
    api: Arc<ApiClient>,
}

impl PaymentsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create_intent(
        &self,
        create_intent_model: &CreatePaymentIntentModel,
    ) -> Result<PaymentIntentModel, ApiError> {
        let response = self
            .api
            .post::<_, PaymentIntentModel>("api/v1/payments/create-intent", create_intent_model)
            .await?;
        Ok(response.data)
    }

    pub async fn check_status(&self, charge_id: &str) -> Result<PaymentStatusModel, ApiError> {
        let response = self
            .api
            .get::<PaymentStatusModel>(&format!("api/v1/payments/status/{}", charge_id))
            .await?;
        Ok(response.data)
    }
}
