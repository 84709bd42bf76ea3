use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentModel {
    pub trip_id: Uuid,
    pub booking_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntentModel {
    pub charge_id: String,
    pub authorize_uri: String,
    pub amount_minor: i64,
    pub booking_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentStatusModel {
    pub charge_id: String,
    pub status: String,
    pub paid: bool,
    pub amount_minor: i64,
    pub metadata: Option<ChargeMetadataModel>,
}

/// Metadata attached to a charge at intent time and echoed back on status
/// lookups. Values are strings because the gateway stores metadata as a
/// flat string map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChargeMetadataModel {
    pub trip_id: String,
    pub booking_ids: String,
    pub item_count: String,
}

impl ChargeMetadataModel {
    pub fn new(trip_id: Uuid, booking_ids: &[Uuid]) -> Self {
        Self {
            trip_id: trip_id.to_string(),
            booking_ids: booking_ids
                .iter()
                .map(Uuid::to_string)
                .collect::<Vec<_>>()
                .join(","),
            item_count: booking_ids.len().to_string(),
        }
    }

    pub fn booking_id_list(&self) -> Vec<Uuid> {
        self.booking_ids
            .split(',')
            .filter_map(|raw| Uuid::parse_str(raw.trim()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_round_trips_booking_ids() {
        let trip_id = Uuid::new_v4();
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let metadata = ChargeMetadataModel::new(trip_id, &ids);

        assert_eq!(metadata.item_count, "3");
        assert_eq!(metadata.trip_id, trip_id.to_string());
        assert_eq!(metadata.booking_id_list(), ids);
    }

    #[test]
    fn metadata_skips_malformed_ids() {
        let metadata = ChargeMetadataModel {
            trip_id: Uuid::new_v4().to_string(),
            booking_ids: format!("{},not-a-uuid", Uuid::nil()),
            item_count: "2".to_string(),
        };

        assert_eq!(metadata.booking_id_list(), vec![Uuid::nil()]);
    }
}
