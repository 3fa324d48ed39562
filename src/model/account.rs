use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountStatus {
    Active,
    Deleted,
    Pending,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Mercury,
    External,
    Recipient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The unique identifier for the account.
    pub id: String,
    pub account_number: String,
    pub routing_number: String,
    /// The balance available for spending, net of pending transactions.
    pub available_balance: Decimal,
    pub current_balance: Decimal,
    pub created_at: DateTime<Utc>,
    /// The kind of account, e.g. `checking` or `savings`. Open on the wire.
    pub kind: String,
    pub name: String,
    pub status: AccountStatus,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub legal_business_name: String,
    pub dashboard_link: Url,
    /// Whether the account can receive incoming transactions.
    #[serde(default)]
    pub can_receive_transactions: Option<bool>,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Envelope for the accounts list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn payload() -> &'static str {
        r#"
        {
          "id": "acc_01",
          "accountNumber": "9800000001",
          "routingNumber": "084106768",
          "availableBalance": 1720.21,
          "currentBalance": 1820.21,
          "createdAt": "2021-03-05T14:30:00Z",
          "kind": "checking",
          "name": "Ops / Payroll",
          "status": "active",
          "type": "mercury",
          "legalBusinessName": "Possum Industries Inc.",
          "dashboardLink": "https://mercury.com/accounts/acc_01",
          "canReceiveTransactions": true,
          "nickname": null
        }"#
    }

    #[test]
    fn account_parses() {
        let account: Account = serde_json::from_str(payload()).unwrap();

        assert_eq!(account.id, "acc_01");
        assert_eq!(account.available_balance, Decimal::new(1720_21, 2));
        assert_eq!(account.current_balance, Decimal::new(1820_21, 2));
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.account_type, AccountType::Mercury);
        assert_eq!(account.kind, "checking");
        assert_eq!(account.can_receive_transactions, Some(true));
        assert_eq!(account.nickname, None);
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let account: Account = serde_json::from_str(payload()).unwrap();
        let encoded = serde_json::to_string(&account).unwrap();
        let decoded: Account = serde_json::from_str(&encoded).unwrap();
        assert_eq!(account, decoded);
    }

    #[test]
    fn absent_optionals_default_to_none() {
        // Same payload minus the optional keys entirely.
        let payload = r#"
        {
          "id": "acc_02",
          "accountNumber": "9800000002",
          "routingNumber": "084106768",
          "availableBalance": 0.0,
          "currentBalance": 0.0,
          "createdAt": "2022-01-01T00:00:00Z",
          "kind": "savings",
          "name": "Reserve",
          "status": "pending",
          "type": "external",
          "legalBusinessName": "Possum Industries Inc.",
          "dashboardLink": "https://mercury.com/accounts/acc_02"
        }"#;

        let account: Account = serde_json::from_str(payload).unwrap();
        assert_eq!(account.can_receive_transactions, None);
        assert_eq!(account.nickname, None);
    }

    #[test]
    fn unknown_status_rejected() {
        let result = serde_json::from_str::<AccountStatus>(r#""dormant""#);
        assert!(result.is_err());
    }
}
