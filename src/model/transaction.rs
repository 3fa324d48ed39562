use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use url::Url;

use super::routing::{
    Address, CreditCardInfo, DebitCardInfo, DomesticWireRoutingInfo, ElectronicRoutingInfo,
    InternationalWireRoutingInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Pending,
    Sent,
    Cancelled,
    Failed,
}

impl TransactionStatus {
    /// The wire spelling, used when the status appears in a query string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

/// The category of a transaction. The populated member of
/// [`TransactionDetails`], if any, corresponds to this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    ExternalTransfer,
    InternalTransfer,
    OutgoingPayment,
    CreditCardCredit,
    CreditCardTransaction,
    DebitCardTransaction,
    IncomingDomesticWire,
    CheckDeposit,
    IncomingInternationalWire,
    TreasuryTransfer,
    WireFee,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentType {
    CheckImage,
    Receipt,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub url: Url,
    pub attachment_type: AttachmentType,
}

/// Conversion breakdown for a transaction that crossed currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyExchangeInfo {
    pub converted_from_currency: String,
    pub converted_to_currency: String,
    pub converted_from_amount: Decimal,
    pub converted_to_amount: Decimal,
    pub fee_amount: Decimal,
    pub fee_percentage: Decimal,
    pub exchange_rate: Decimal,
    /// The separate fee transaction this exchange produced.
    pub fee_transaction_id: String,
}

/// The routing/address/card information attached to a transaction.
///
/// On the wire this is an object with six mutually-optional members, of
/// which the one matching the transaction's [`TransactionKind`] is
/// populated. Deserializing an object with two or more populated members
/// fails; within a [`Transaction`] an all-null object maps to
/// `details: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DetailsWire", into = "DetailsWire")]
pub enum TransactionDetails {
    Address(Address),
    DomesticWire(DomesticWireRoutingInfo),
    Electronic(ElectronicRoutingInfo),
    InternationalWire(InternationalWireRoutingInfo),
    DebitCard(DebitCardInfo),
    CreditCard(CreditCardInfo),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetailsWire {
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    domestic_wire_routing_info: Option<DomesticWireRoutingInfo>,
    #[serde(default)]
    electronic_routing_info: Option<ElectronicRoutingInfo>,
    #[serde(default)]
    international_wire_routing_info: Option<InternationalWireRoutingInfo>,
    #[serde(default)]
    debit_card_info: Option<DebitCardInfo>,
    #[serde(default)]
    credit_card_info: Option<CreditCardInfo>,
}

impl DetailsWire {
    pub(crate) fn into_variant(self) -> Result<Option<TransactionDetails>, String> {
        let mut variants = [
            self.address.map(TransactionDetails::Address),
            self.domestic_wire_routing_info
                .map(TransactionDetails::DomesticWire),
            self.electronic_routing_info
                .map(TransactionDetails::Electronic),
            self.international_wire_routing_info
                .map(TransactionDetails::InternationalWire),
            self.debit_card_info.map(TransactionDetails::DebitCard),
            self.credit_card_info.map(TransactionDetails::CreditCard),
        ]
        .into_iter()
        .flatten();

        match (variants.next(), variants.next()) {
            (first, None) => Ok(first),
            (_, Some(_)) => Err("transaction details populate more than one member".to_string()),
        }
    }
}

impl TryFrom<DetailsWire> for TransactionDetails {
    type Error = String;

    fn try_from(wire: DetailsWire) -> Result<Self, Self::Error> {
        wire.into_variant()?
            .ok_or_else(|| "transaction details populate no member".to_string())
    }
}

impl From<TransactionDetails> for DetailsWire {
    fn from(details: TransactionDetails) -> Self {
        let mut wire = Self::default();
        match details {
            TransactionDetails::Address(x) => wire.address = Some(x),
            TransactionDetails::DomesticWire(x) => wire.domestic_wire_routing_info = Some(x),
            TransactionDetails::Electronic(x) => wire.electronic_routing_info = Some(x),
            TransactionDetails::InternationalWire(x) => {
                wire.international_wire_routing_info = Some(x)
            }
            TransactionDetails::DebitCard(x) => wire.debit_card_info = Some(x),
            TransactionDetails::CreditCard(x) => wire.credit_card_info = Some(x),
        }
        wire
    }
}

fn deserialize_details<'de, D>(deserializer: D) -> Result<Option<TransactionDetails>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DetailsWire>::deserialize(deserializer)? {
        None => Ok(None),
        Some(wire) => wire.into_variant().map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The unique identifier for this transaction.
    pub id: String,
    /// The transaction amount; negative for money leaving the account.
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub kind: TransactionKind,
    #[serde(default)]
    pub bank_description: Option<String>,
    pub counterparty_id: String,
    pub counterparty_name: String,
    #[serde(default)]
    pub counterparty_nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub dashboard_link: Url,
    /// Routing/address/card details matching `kind`; absent for kinds that
    /// carry none.
    #[serde(default, deserialize_with = "deserialize_details")]
    pub details: Option<TransactionDetails>,
    pub estimated_delivery_date: DateTime<Utc>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reason_for_failure: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Memo visible to the counterparty, for transfer kinds that support it.
    #[serde(default)]
    pub external_memo: Option<String>,
    #[serde(default)]
    pub fee_id: Option<String>,
    #[serde(default)]
    pub currency_exchange_info: Option<CurrencyExchangeInfo>,
    #[serde(default)]
    pub compliant_with_receipt_policy: Option<bool>,
    #[serde(default)]
    pub has_generated_receipt: Option<bool>,
    #[serde(default)]
    pub credit_account_period_id: Option<String>,
    #[serde(default)]
    pub mercury_category: Option<String>,
    #[serde(default)]
    pub general_ledger_code_name: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Envelope for the transaction list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub total: Option<u64>,
    pub transactions: Vec<Transaction>,
}
