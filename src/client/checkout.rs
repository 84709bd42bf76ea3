use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::http::ApiError;
use crate::client::{bookings::BookingsClient, payments::PaymentsClient};
use crate::domain::value_objects::bookings::{BookingModel, NewBookingModel};
use crate::domain::value_objects::payments::{
    CreatePaymentIntentModel, PaymentIntentModel, PaymentStatusModel,
};

/// The API surface the checkout flow needs. Split from the resource clients
/// so the state machine can be driven in tests without a server.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait CheckoutGateway: Send + Sync {
    async fn create_booking(&self, new_booking: NewBookingModel)
        -> Result<BookingModel, ApiError>;
    async fn create_payment_intent(
        &self,
        create_intent_model: CreatePaymentIntentModel,
    ) -> Result<PaymentIntentModel, ApiError>;
    async fn check_payment_status(&self, charge_id: &str) -> Result<PaymentStatusModel, ApiError>;
}

pub struct ApiCheckoutGateway {
    bookings: BookingsClient,
    payments: PaymentsClient,
}

impl ApiCheckoutGateway {
    pub fn new(bookings: BookingsClient, payments: PaymentsClient) -> Self {
        Self { bookings, payments }
    }
}

#[async_trait]
impl CheckoutGateway for ApiCheckoutGateway {
    async fn create_booking(
        &self,
        new_booking: NewBookingModel,
    ) -> Result<BookingModel, ApiError> {
        self.bookings.create(&new_booking).await
    }

    async fn create_payment_intent(
        &self,
        create_intent_model: CreatePaymentIntentModel,
    ) -> Result<PaymentIntentModel, ApiError> {
        self.payments.create_intent(&create_intent_model).await
    }

    async fn check_payment_status(&self, charge_id: &str) -> Result<PaymentStatusModel, ApiError> {
        self.payments.check_status(charge_id).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Idle,
    /// Hosted checkout page is open; waiting for the redirect.
    AwaitingCheckout {
        charge_id: String,
        authorize_uri: String,
        booking_ids: Vec<Uuid>,
        amount_minor: i64,
    },
    /// The success redirect arrived but the status check could not be
    /// reached. Retryable: the charge may or may not have gone through.
    Indeterminate {
        charge_id: String,
    },
    Success,
    Cancelled,
    Failed,
}

/// Drives a booking-then-pay checkout: create the bookings in order, open a
/// hosted checkout for the payable aggregate, and treat the post-redirect
/// status check as the only source of truth for payment success.
///
/// There is no rollback: a failure partway leaves the already created
/// bookings pending on the server, and cancelling the checkout page does the
/// same.
pub struct CheckoutFlow<G>
where
    G: CheckoutGateway,
{
    gateway: G,
    state: CheckoutState,
}

impl<G> CheckoutFlow<G>
where
    G: CheckoutGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Creates the bookings sequentially in caller order, then requests a
    /// payment intent for the payable subset (price > 0). A booking-creation
    /// failure aborts and propagates; earlier bookings stay pending. A zero
    /// payable aggregate completes immediately without touching the payment
    /// gateway.
    pub async fn begin(
        &mut self,
        trip_id: Uuid,
        items: Vec<NewBookingModel>,
    ) -> Result<&CheckoutState, ApiError> {
        let mut created: Vec<BookingModel> = Vec::with_capacity(items.len());
        for item in items {
            let booking = self.gateway.create_booking(item).await?;
            created.push(booking);
        }

        let payable: Vec<&BookingModel> = created
            .iter()
            .filter(|booking| booking.price_minor > 0)
            .collect();
        let amount_minor: i64 = payable.iter().map(|booking| booking.price_minor).sum();

        if amount_minor == 0 {
            info!(%trip_id, "checkout: nothing to pay, completing");
            self.state = CheckoutState::Success;
            return Ok(&self.state);
        }

        let booking_ids: Vec<Uuid> = payable.iter().map(|booking| booking.id).collect();
        let intent = self
            .gateway
            .create_payment_intent(CreatePaymentIntentModel {
                trip_id,
                booking_ids: booking_ids.clone(),
            })
            .await?;

        if intent.authorize_uri.is_empty() {
            warn!(%trip_id, charge_id = %intent.charge_id, "checkout: no authorize uri");
            self.state = CheckoutState::Failed;
            return Ok(&self.state);
        }

        self.state = CheckoutState::AwaitingCheckout {
            charge_id: intent.charge_id,
            authorize_uri: intent.authorize_uri,
            booking_ids,
            amount_minor: intent.amount_minor,
        };
        Ok(&self.state)
    }

    /// Reacts to a navigation inside the hosted checkout page. Only the
    /// success and cancel return URLs cause a transition; everything else is
    /// checkout-page-internal navigation and is ignored.
    ///
    /// A success redirect alone never completes the flow: the charge status
    /// is always confirmed with the server first.
    pub async fn handle_navigation(&mut self, url: &str) -> &CheckoutState {
        let CheckoutState::AwaitingCheckout { charge_id, .. } = &self.state else {
            return &self.state;
        };
        let charge_id = charge_id.clone();

        if url.contains("payment-cancel") {
            info!(charge_id = %charge_id, "checkout: cancelled by user");
            self.state = CheckoutState::Cancelled;
            return &self.state;
        }

        if url.contains("payment-success") {
            self.confirm(charge_id).await;
        }

        &self.state
    }

    /// Re-runs the status check after an indeterminate confirmation.
    pub async fn retry_confirmation(&mut self) -> &CheckoutState {
        let CheckoutState::Indeterminate { charge_id } = &self.state else {
            return &self.state;
        };
        let charge_id = charge_id.clone();
        self.confirm(charge_id).await;
        &self.state
    }

    async fn confirm(&mut self, charge_id: String) {
        match self.gateway.check_payment_status(&charge_id).await {
            Ok(status) if status.paid => {
                info!(charge_id = %charge_id, "checkout: payment confirmed");
                self.state = CheckoutState::Success;
            }
            Ok(status) => {
                warn!(
                    charge_id = %charge_id,
                    charge_status = %status.status,
                    "checkout: charge not paid"
                );
                self.state = CheckoutState::Failed;
            }
            Err(err) => {
                warn!(
                    charge_id = %charge_id,
                    error = %err,
                    "checkout: confirmation unreachable, result indeterminate"
                );
                self.state = CheckoutState::Indeterminate { charge_id };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    use crate::domain::value_objects::bookings::{ActivityDetails, BookingDetails};
    use crate::domain::value_objects::enums::{
        booking_statuses::BookingStatus, booking_types::BookingType,
    };

    fn new_booking(trip_id: Uuid, title: &str, price_minor: i64) -> NewBookingModel {
        NewBookingModel {
            trip_id,
            title: title.to_string(),
            description: None,
            price_minor,
            start_date: NaiveDate::from_ymd_opt(2025, 12, 5).unwrap(),
            end_date: None,
            details: BookingDetails::Activity(ActivityDetails::default()),
            notes: None,
            status: None,
        }
    }

    fn created_booking(new_booking: &NewBookingModel) -> BookingModel {
        BookingModel {
            id: Uuid::new_v4(),
            trip_id: new_booking.trip_id,
            booking_type: BookingType::Activity,
            title: new_booking.title.clone(),
            description: None,
            price_minor: new_booking.price_minor,
            start_date: new_booking.start_date,
            end_date: None,
            status: BookingStatus::Pending,
            details: new_booking.details.clone(),
            notes: None,
            charge_id: None,
            created_at: Utc::now(),
        }
    }

    fn intent(charge_id: &str, authorize_uri: &str, amount_minor: i64) -> PaymentIntentModel {
        PaymentIntentModel {
            charge_id: charge_id.to_string(),
            authorize_uri: authorize_uri.to_string(),
            amount_minor,
            booking_ids: vec![],
        }
    }

    fn paid_status(charge_id: &str, paid: bool) -> PaymentStatusModel {
        PaymentStatusModel {
            charge_id: charge_id.to_string(),
            status: if paid { "successful" } else { "failed" }.to_string(),
            paid,
            amount_minor: 600_000,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn bookings_are_created_in_caller_order_and_a_failure_aborts() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        let mut seq = mockall::Sequence::new();
        gateway
            .expect_create_booking()
            .withf(|b| b.title == "Flight to Chiang Mai")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_booking()
            .withf(|b| b.title == "Hotel")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Box::pin(async {
                    Err(ApiError::Api {
                        status: 400,
                        message: "invalid booking".to_string(),
                    })
                })
            });
        gateway.expect_create_payment_intent().times(0);

        let mut flow = CheckoutFlow::new(gateway);
        let result = flow
            .begin(
                trip_id,
                vec![
                    new_booking(trip_id, "Flight to Chiang Mai", 250_000),
                    new_booking(trip_id, "Hotel", 350_000),
                    new_booking(trip_id, "Temple tour", 50_000),
                ],
            )
            .await;

        assert!(matches!(result, Err(ApiError::Api { status: 400, .. })));
        assert_eq!(flow.state(), &CheckoutState::Idle);
    }

    #[tokio::test]
    async fn only_payable_bookings_enter_the_intent() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(3)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .withf(|model| model.booking_ids.len() == 2)
            .times(1)
            .returning(|model| {
                Box::pin(async move {
                    let mut intent = intent("chrg_test_1", "https://pay.omise.co/x", 600_000);
                    intent.booking_ids = model.booking_ids;
                    Ok(intent)
                })
            });

        let mut flow = CheckoutFlow::new(gateway);
        let state = flow
            .begin(
                trip_id,
                vec![
                    new_booking(trip_id, "Free walking tour", 0),
                    new_booking(trip_id, "Flight", 250_000),
                    new_booking(trip_id, "Hotel", 350_000),
                ],
            )
            .await
            .unwrap();

        match state {
            CheckoutState::AwaitingCheckout {
                amount_minor,
                booking_ids,
                ..
            } => {
                assert_eq!(*amount_minor, 600_000);
                assert_eq!(booking_ids.len(), 2);
            }
            other => panic!("expected awaiting checkout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn a_zero_aggregate_completes_without_a_payment_intent() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(2)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway.expect_create_payment_intent().times(0);

        let mut flow = CheckoutFlow::new(gateway);
        let state = flow
            .begin(
                trip_id,
                vec![
                    new_booking(trip_id, "Free museum", 0),
                    new_booking(trip_id, "Free park", 0),
                ],
            )
            .await
            .unwrap();

        assert_eq!(state, &CheckoutState::Success);
    }

    #[tokio::test]
    async fn a_missing_authorize_uri_fails_the_flow() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(1)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .times(1)
            .returning(|_| Box::pin(async { Ok(intent("chrg_test_2", "", 250_000)) }));

        let mut flow = CheckoutFlow::new(gateway);
        let state = flow
            .begin(trip_id, vec![new_booking(trip_id, "Flight", 250_000)])
            .await
            .unwrap();

        assert_eq!(state, &CheckoutState::Failed);
    }

    #[tokio::test]
    async fn a_success_redirect_is_confirmed_before_completing() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(1)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(intent("chrg_test_3", "https://pay.omise.co/x", 600_000)) })
            });
        gateway
            .expect_check_payment_status()
            .withf(|charge_id| charge_id == "chrg_test_3")
            .times(1)
            .returning(|_| Box::pin(async { Ok(paid_status("chrg_test_3", true)) }));

        let mut flow = CheckoutFlow::new(gateway);
        flow.begin(trip_id, vec![new_booking(trip_id, "Flight", 600_000)])
            .await
            .unwrap();

        let state = flow
            .handle_navigation("trailteller://payment-success?charge=chrg_test_3")
            .await;
        assert_eq!(state, &CheckoutState::Success);
    }

    #[tokio::test]
    async fn an_unpaid_charge_fails_despite_the_success_redirect() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(1)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(intent("chrg_test_4", "https://pay.omise.co/x", 250_000)) })
            });
        gateway
            .expect_check_payment_status()
            .times(1)
            .returning(|_| Box::pin(async { Ok(paid_status("chrg_test_4", false)) }));

        let mut flow = CheckoutFlow::new(gateway);
        flow.begin(trip_id, vec![new_booking(trip_id, "Flight", 250_000)])
            .await
            .unwrap();

        let state = flow.handle_navigation("trailteller://payment-success").await;
        assert_eq!(state, &CheckoutState::Failed);
    }

    #[tokio::test]
    async fn a_cancel_redirect_cancels_without_a_status_check() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(1)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(intent("chrg_test_5", "https://pay.omise.co/x", 250_000)) })
            });
        gateway.expect_check_payment_status().times(0);

        let mut flow = CheckoutFlow::new(gateway);
        flow.begin(trip_id, vec![new_booking(trip_id, "Flight", 250_000)])
            .await
            .unwrap();

        // page-internal navigation first: no transition
        let state = flow.handle_navigation("https://pay.omise.co/x/3ds").await;
        assert!(matches!(state, CheckoutState::AwaitingCheckout { .. }));

        let state = flow.handle_navigation("trailteller://payment-cancel").await;
        assert_eq!(state, &CheckoutState::Cancelled);
    }

    #[tokio::test]
    async fn an_unreachable_confirmation_is_indeterminate_and_retryable() {
        let trip_id = Uuid::new_v4();
        let mut gateway = MockCheckoutGateway::new();

        gateway
            .expect_create_booking()
            .times(1)
            .returning(|b| Box::pin(async move { Ok(created_booking(&b)) }));
        gateway
            .expect_create_payment_intent()
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(intent("chrg_test_6", "https://pay.omise.co/x", 250_000)) })
            });

        let mut seq = mockall::Sequence::new();
        gateway
            .expect_check_payment_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Box::pin(async { Err(ApiError::Transport("connection reset".to_string())) })
            });
        gateway
            .expect_check_payment_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(paid_status("chrg_test_6", true)) }));

        let mut flow = CheckoutFlow::new(gateway);
        flow.begin(trip_id, vec![new_booking(trip_id, "Flight", 250_000)])
            .await
            .unwrap();

        let state = flow.handle_navigation("trailteller://payment-success").await;
        assert_eq!(
            state,
            &CheckoutState::Indeterminate {
                charge_id: "chrg_test_6".to_string()
            }
        );

        let state = flow.retry_confirmation().await;
        assert_eq!(state, &CheckoutState::Success);
    }
}
