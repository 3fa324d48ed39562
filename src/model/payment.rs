//! Outbound money-movement types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rail a payment travels over. The creation endpoints only accept ACH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    Ach,
}

/// The body of a transaction-creation or send-money request.
///
/// Serializes as a flat camelCase object with every field present; absent
/// optionals are sent as `null`, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionPayload {
    pub recipient_id: String,
    pub amount: Decimal,
    /// Caller-supplied token that keeps a retried submission from being
    /// applied twice.
    pub idempotency_key: String,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
    pub external_memo: Option<String>,
}

impl NewTransactionPayload {
    /// True when no caller-suppliable field carries a value. Such a payload
    /// is rejected before any network call.
    pub fn is_empty(&self) -> bool {
        self.recipient_id.is_empty()
            && self.amount.is_zero()
            && self.idempotency_key.is_empty()
            && self.note.is_none()
            && self.external_memo.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalStatus {
    PendingApproval,
    Approved,
    Rejected,
    Cancelled,
}

/// The approval record a send-money request produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionApprovalRequest {
    pub account_id: String,
    pub request_id: String,
    pub recipient_id: String,
    #[serde(default)]
    pub memo: Option<String>,
    pub payment_method: String,
    pub amount: Decimal,
    pub status: ApprovalStatus,
}
