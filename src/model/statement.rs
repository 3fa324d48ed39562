use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLegalAddress {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub name: String,
    pub postal_code: String,
    pub region: String,
}

/// A transaction reference inside a statement; the full record lives on the
/// transaction endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTransaction {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub id: String,
    pub account_number: String,
    pub routing_number: String,
    pub company_legal_address: CompanyLegalAddress,
    pub company_legal_name: String,
    /// Employer Identification Number of the company.
    #[serde(default)]
    pub ein: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub ending_balance: Decimal,
    #[serde(default)]
    pub transactions: Vec<StatementTransaction>,
    pub download_url: Url,
}

/// Envelope for the statements list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementsResponse {
    pub statements: Vec<Statement>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn statement_parses() {
        let payload = r#"
        {
          "id": "stm_01",
          "accountNumber": "9800000001",
          "routingNumber": "084106768",
          "companyLegalAddress": {
            "address1": "312 Marsupial Way",
            "address2": "Suite 200",
            "city": "San Francisco",
            "country": "US",
            "name": "Possum Industries Inc.",
            "postalCode": "94107",
            "region": "CA"
          },
          "companyLegalName": "Possum Industries Inc.",
          "ein": "12-3456789",
          "startDate": "2024-01-01T00:00:00Z",
          "endDate": "2024-01-31T00:00:00Z",
          "endingBalance": 10250.55,
          "transactions": [
            {
              "id": "txn_01",
              "createdAt": "2024-01-12T10:00:00Z",
              "postedAt": null
            }
          ],
          "downloadUrl": "https://mercury.com/statements/stm_01.pdf"
        }"#;

        let statement: Statement = serde_json::from_str(payload).unwrap();
        assert_eq!(statement.id, "stm_01");
        assert_eq!(statement.ein.as_deref(), Some("12-3456789"));
        assert_eq!(statement.ending_balance, Decimal::new(10250_55, 2));
        assert_eq!(statement.company_legal_address.region, "CA");
        assert_eq!(statement.transactions.len(), 1);
        assert_eq!(statement.transactions[0].posted_at, None);
    }

    #[test]
    fn round_trip_preserves_fields() {
        let payload = r#"
        {
          "id": "stm_02",
          "accountNumber": "9800000001",
          "routingNumber": "084106768",
          "companyLegalAddress": {
            "address1": "312 Marsupial Way",
            "address2": "",
            "city": "San Francisco",
            "country": "US",
            "name": "Possum Industries Inc.",
            "postalCode": "94107",
            "region": "CA"
          },
          "companyLegalName": "Possum Industries Inc.",
          "ein": null,
          "startDate": "2024-02-01T00:00:00Z",
          "endDate": "2024-02-29T00:00:00Z",
          "endingBalance": 9000.00,
          "transactions": [],
          "downloadUrl": "https://mercury.com/statements/stm_02.pdf"
        }"#;

        let statement: Statement = serde_json::from_str(payload).unwrap();
        let encoded = serde_json::to_string(&statement).unwrap();
        let decoded: Statement = serde_json::from_str(&encoded).unwrap();
        assert_eq!(statement, decoded);
    }
}
