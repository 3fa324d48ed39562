use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStatus {
    Active,
    Frozen,
    Cancelled,
    Inactive,
    Locked,
    Expired,
}

/// Status of the physical card, where one was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhysicalCardStatus {
    Active,
    Inactive,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: String,
    pub created_at: DateTime<Utc>,
    pub last_four_digits: String,
    pub name_on_card: String,
    pub network: CardNetwork,
    pub status: CardStatus,
    #[serde(default)]
    pub physical_card_status: Option<PhysicalCardStatus>,
}

/// Envelope for the cards list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn card_parses() {
        let payload = r#"
        {
          "cardId": "card_01",
          "createdAt": "2023-06-10T08:00:00Z",
          "lastFourDigits": "4242",
          "nameOnCard": "Pat Possum",
          "network": "visa",
          "status": "active",
          "physicalCardStatus": "inactive"
        }"#;

        let card: Card = serde_json::from_str(payload).unwrap();
        assert_eq!(card.card_id, "card_01");
        assert_eq!(card.network, CardNetwork::Visa);
        assert_eq!(card.status, CardStatus::Active);
        assert_eq!(card.physical_card_status, Some(PhysicalCardStatus::Inactive));
    }

    #[test]
    fn virtual_card_has_no_physical_status() {
        let payload = r#"
        {
          "cardId": "card_02",
          "createdAt": "2023-06-10T08:00:00Z",
          "lastFourDigits": "1881",
          "nameOnCard": "Pat Possum",
          "network": "mastercard",
          "status": "frozen"
        }"#;

        let card: Card = serde_json::from_str(payload).unwrap();
        assert_eq!(card.physical_card_status, None);
        assert_eq!(card.network, CardNetwork::Mastercard);
    }
}
