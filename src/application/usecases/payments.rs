use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::repositories::bookings::BookingsRepository;
use crate::domain::value_objects::payments::{
    ChargeMetadataModel, CreatePaymentIntentModel, PaymentIntentModel, PaymentStatusModel,
};
use crate::payments::omise_client::{OmiseCharge, OmiseClient};

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait OmiseGateway: Send + Sync {
    async fn create_charge(
        &self,
        amount_minor: i64,
        metadata: HashMap<String, String>,
    ) -> AnyResult<OmiseCharge>;

    async fn retrieve_charge(&self, charge_id: &str) -> AnyResult<OmiseCharge>;
}

#[async_trait]
impl OmiseGateway for OmiseClient {
    async fn create_charge(
        &self,
        amount_minor: i64,
        metadata: HashMap<String, String>,
    ) -> AnyResult<OmiseCharge> {
        self.create_charge(amount_minor, metadata).await
    }

    async fn retrieve_charge(&self, charge_id: &str) -> AnyResult<OmiseCharge> {
        self.retrieve_charge(charge_id).await
    }
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("bookings not found, not owned, or no longer pending")]
    BookingsUnavailable,
    #[error("no payable bookings in checkout request")]
    NothingToPay,
    #[error("payment gateway returned no authorize_uri")]
    MissingAuthorizeUri,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PaymentError::BookingsUnavailable => StatusCode::NOT_FOUND,
            PaymentError::NothingToPay => StatusCode::BAD_REQUEST,
            PaymentError::MissingAuthorizeUri => StatusCode::BAD_GATEWAY,
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PaymentError>;

pub struct PaymentUseCase<B, O>
where
    B: BookingsRepository + Send + Sync + 'static,
    O: OmiseGateway + Send + Sync + 'static,
{
    bookings_repository: Arc<B>,
    omise_client: Arc<O>,
}

impl<B, O> PaymentUseCase<B, O>
where
    B: BookingsRepository + Send + Sync + 'static,
    O: OmiseGateway + Send + Sync + 'static,
{
    pub fn new(bookings_repository: Arc<B>, omise_client: Arc<O>) -> Self {
        Self {
            bookings_repository,
            omise_client,
        }
    }

    /// Creates a hosted-checkout charge for the payable (price > 0) subset
    /// of the requested pending bookings. Zero-price bookings need no
    /// prepayment and are excluded from the aggregate and the metadata.
    pub async fn create_intent(
        &self,
        user_id: Uuid,
        create_intent_model: CreatePaymentIntentModel,
    ) -> UseCaseResult<PaymentIntentModel> {
        let CreatePaymentIntentModel {
            trip_id,
            booking_ids,
        } = create_intent_model;

        info!(
            %user_id,
            %trip_id,
            requested = booking_ids.len(),
            "payments: create intent requested"
        );

        if booking_ids.is_empty() {
            return Err(PaymentError::NothingToPay);
        }

        let requested_count = booking_ids.len();
        let bookings = self
            .bookings_repository
            .find_pending_for_checkout(user_id, trip_id, booking_ids)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %trip_id,
                    db_error = ?err,
                    "payments: failed to load bookings for checkout"
                );
                PaymentError::Internal(err)
            })?;

        if bookings.len() != requested_count {
            warn!(
                %user_id,
                %trip_id,
                requested = requested_count,
                found = bookings.len(),
                "payments: checkout refers to unavailable bookings"
            );
            return Err(PaymentError::BookingsUnavailable);
        }

        let payable: Vec<_> = bookings
            .iter()
            .filter(|booking| booking.price_minor > 0)
            .collect();
        if payable.is_empty() {
            return Err(PaymentError::NothingToPay);
        }

        let payable_ids: Vec<Uuid> = payable.iter().map(|booking| booking.id).collect();
        let amount_minor: i64 = payable.iter().map(|booking| booking.price_minor).sum();

        let metadata = ChargeMetadataModel::new(trip_id, &payable_ids);
        let metadata_map = HashMap::from([
            ("trip_id".to_string(), metadata.trip_id.clone()),
            ("booking_ids".to_string(), metadata.booking_ids.clone()),
            ("item_count".to_string(), metadata.item_count.clone()),
        ]);

        let charge = self
            .omise_client
            .create_charge(amount_minor, metadata_map)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %trip_id,
                    amount_minor,
                    error = ?err,
                    "payments: charge creation failed"
                );
                PaymentError::Internal(err)
            })?;

        let authorize_uri = match charge.authorize_uri.filter(|uri| !uri.is_empty()) {
            Some(uri) => uri,
            None => {
                warn!(
                    %user_id,
                    charge_id = %charge.id,
                    "payments: charge carries no authorize_uri, bookings stay pending"
                );
                return Err(PaymentError::MissingAuthorizeUri);
            }
        };

        self.bookings_repository
            .set_charge_id(payable_ids.clone(), &charge.id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    charge_id = %charge.id,
                    db_error = ?err,
                    "payments: failed to record charge id on bookings"
                );
                PaymentError::Internal(err)
            })?;

        info!(
            %user_id,
            %trip_id,
            charge_id = %charge.id,
            amount_minor,
            payable = payable_ids.len(),
            "payments: intent created"
        );

        Ok(PaymentIntentModel {
            charge_id: charge.id,
            authorize_uri,
            amount_minor,
            booking_ids: payable_ids,
        })
    }

    /// Retrieves the charge and, when the gateway reports it paid, moves the
    /// bookings named in the charge metadata to confirmed. The status check
    /// is the authoritative confirmation step for the checkout flow.
    pub async fn check_status(&self, charge_id: &str) -> UseCaseResult<PaymentStatusModel> {
        let charge = self
            .omise_client
            .retrieve_charge(charge_id)
            .await
            .map_err(|err| {
                error!(
                    charge_id = %charge_id,
                    error = ?err,
                    "payments: charge retrieval failed"
                );
                PaymentError::Internal(err)
            })?;

        let metadata: Option<ChargeMetadataModel> = charge
            .metadata
            .clone()
            .and_then(|value| serde_json::from_value(value).ok());

        if charge.paid {
            let booking_ids = metadata
                .as_ref()
                .map(ChargeMetadataModel::booking_id_list)
                .unwrap_or_default();
            if booking_ids.is_empty() {
                warn!(
                    charge_id = %charge.id,
                    "payments: paid charge carries no booking metadata"
                );
            } else {
                let confirmed = self
                    .bookings_repository
                    .confirm_paid(booking_ids)
                    .await
                    .map_err(|err| {
                        error!(
                            charge_id = %charge.id,
                            db_error = ?err,
                            "payments: failed to confirm paid bookings"
                        );
                        PaymentError::Internal(err)
                    })?;
                info!(
                    charge_id = %charge.id,
                    confirmed,
                    "payments: bookings confirmed after paid charge"
                );
            }
        }

        Ok(PaymentStatusModel {
            charge_id: charge.id,
            status: charge.status.unwrap_or_else(|| "unknown".to_string()),
            paid: charge.paid,
            amount_minor: charge.amount,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::domain::entities::bookings::BookingEntity;
    use crate::domain::repositories::bookings::MockBookingsRepository;

    fn sample_booking(trip_id: Uuid, price_minor: i64) -> BookingEntity {
        BookingEntity {
            id: Uuid::new_v4(),
            trip_id,
            booking_type: "hotel".to_string(),
            title: "Riverside Hotel".to_string(),
            description: None,
            price_minor,
            start_date: Utc::now().date_naive(),
            end_date: None,
            status: "pending".to_string(),
            details: json!({ "type": "hotel" }),
            notes: None,
            charge_id: None,
            created_at: Utc::now(),
        }
    }

    fn sample_charge(id: &str, amount: i64, paid: bool) -> OmiseCharge {
        OmiseCharge {
            id: id.to_string(),
            amount,
            currency: "thb".to_string(),
            status: Some(if paid { "successful" } else { "pending" }.to_string()),
            authorize_uri: Some("https://pay.omise.co/authorize/chrg_test".to_string()),
            paid,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn aggregate_excludes_zero_price_bookings() {
        let trip_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let bookings = vec![
            sample_booking(trip_id, 0),
            sample_booking(trip_id, 100),
            sample_booking(trip_id, 250),
        ];
        let zero_price_id = bookings[0].id;
        let requested: Vec<Uuid> = bookings.iter().map(|booking| booking.id).collect();

        let mut bookings_repo = MockBookingsRepository::new();
        let loaded = bookings.clone();
        bookings_repo
            .expect_find_pending_for_checkout()
            .returning(move |_, _, _| {
                let loaded = loaded.clone();
                Box::pin(async move { Ok(loaded) })
            });
        bookings_repo
            .expect_set_charge_id()
            .withf(move |ids, charge_id| !ids.contains(&zero_price_id) && charge_id == "chrg_1")
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut omise = MockOmiseGateway::new();
        omise
            .expect_create_charge()
            .withf(move |amount, metadata| {
                *amount == 350
                    && metadata["item_count"] == "2"
                    && !metadata["booking_ids"].contains(&zero_price_id.to_string())
            })
            .returning(|amount, _| {
                Box::pin(async move { Ok(sample_charge("chrg_1", amount, false)) })
            });

        let usecase = PaymentUseCase::new(Arc::new(bookings_repo), Arc::new(omise));
        let intent = usecase
            .create_intent(
                user_id,
                CreatePaymentIntentModel {
                    trip_id,
                    booking_ids: requested,
                },
            )
            .await
            .unwrap();

        assert_eq!(intent.amount_minor, 350);
        assert_eq!(intent.booking_ids.len(), 2);
        assert!(!intent.booking_ids.contains(&zero_price_id));
    }

    #[tokio::test]
    async fn all_zero_price_bookings_have_nothing_to_pay() {
        let trip_id = Uuid::new_v4();
        let bookings = vec![sample_booking(trip_id, 0), sample_booking(trip_id, 0)];
        let requested: Vec<Uuid> = bookings.iter().map(|booking| booking.id).collect();

        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo
            .expect_find_pending_for_checkout()
            .returning(move |_, _, _| {
                let loaded = bookings.clone();
                Box::pin(async move { Ok(loaded) })
            });

        let mut omise = MockOmiseGateway::new();
        omise.expect_create_charge().times(0);

        let usecase = PaymentUseCase::new(Arc::new(bookings_repo), Arc::new(omise));
        let result = usecase
            .create_intent(
                Uuid::new_v4(),
                CreatePaymentIntentModel {
                    trip_id,
                    booking_ids: requested,
                },
            )
            .await;

        assert!(matches!(result, Err(PaymentError::NothingToPay)));
    }

    #[tokio::test]
    async fn missing_authorize_uri_leaves_bookings_pending() {
        let trip_id = Uuid::new_v4();
        let bookings = vec![sample_booking(trip_id, 5000)];
        let requested: Vec<Uuid> = bookings.iter().map(|booking| booking.id).collect();

        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo
            .expect_find_pending_for_checkout()
            .returning(move |_, _, _| {
                let loaded = bookings.clone();
                Box::pin(async move { Ok(loaded) })
            });
        bookings_repo.expect_set_charge_id().times(0);

        let mut omise = MockOmiseGateway::new();
        omise.expect_create_charge().returning(|amount, _| {
            Box::pin(async move {
                let mut charge = sample_charge("chrg_noauth", amount, false);
                charge.authorize_uri = None;
                Ok(charge)
            })
        });

        let usecase = PaymentUseCase::new(Arc::new(bookings_repo), Arc::new(omise));
        let result = usecase
            .create_intent(
                Uuid::new_v4(),
                CreatePaymentIntentModel {
                    trip_id,
                    booking_ids: requested,
                },
            )
            .await;

        assert!(matches!(result, Err(PaymentError::MissingAuthorizeUri)));
    }

    #[tokio::test]
    async fn paid_charge_confirms_metadata_bookings() {
        let trip_id = Uuid::new_v4();
        let booking_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let metadata = ChargeMetadataModel::new(trip_id, &booking_ids);

        let mut bookings_repo = MockBookingsRepository::new();
        let expected_ids = booking_ids.clone();
        bookings_repo
            .expect_confirm_paid()
            .withf(move |ids| *ids == expected_ids)
            .returning(|ids| {
                let count = ids.len();
                Box::pin(async move { Ok(count) })
            });

        let mut omise = MockOmiseGateway::new();
        omise.expect_retrieve_charge().returning(move |charge_id| {
            let mut charge = sample_charge(charge_id, 6000, true);
            charge.metadata = Some(serde_json::to_value(&metadata).unwrap());
            Box::pin(async move { Ok(charge) })
        });

        let usecase = PaymentUseCase::new(Arc::new(bookings_repo), Arc::new(omise));
        let status = usecase.check_status("chrg_paid").await.unwrap();

        assert!(status.paid);
        assert_eq!(status.amount_minor, 6000);
        assert_eq!(
            status.metadata.unwrap().booking_id_list(),
            booking_ids
        );
    }

    #[tokio::test]
    async fn unpaid_charge_confirms_nothing() {
        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo.expect_confirm_paid().times(0);

        let mut omise = MockOmiseGateway::new();
        omise.expect_retrieve_charge().returning(|charge_id| {
            let charge = sample_charge(charge_id, 6000, false);
            Box::pin(async move { Ok(charge) })
        });

        let usecase = PaymentUseCase::new(Arc::new(bookings_repo), Arc::new(omise));
        let status = usecase.check_status("chrg_unpaid").await.unwrap();

        assert!(!status.paid);
        assert_eq!(status.status, "pending");
    }
}
