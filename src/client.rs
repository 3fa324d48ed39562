//! The API client: authenticates, assembles request URLs, performs one
//! HTTP call per public operation through the [`Transport`] seam, and
//! decodes responses into [`model`](crate::model) records.

use std::{fmt::Display, sync::Arc, time::Duration};

use chrono::NaiveDate;
use nutype::nutype;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    error::{Error, Result},
    model::{
        Account, AccountsResponse, Card, CardsResponse, NewTransactionPayload, Statement,
        StatementsResponse, Transaction, TransactionApprovalRequest, TransactionStatus,
        TransactionsResponse,
    },
    transport::{HttpTransport, Method, Request, Response, Transport},
};

const DEFAULT_BASE_URL: &str = "https://api.mercury.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TRANSACTION_LIMIT: u32 = 500;

/// An opaque bearer credential for the API. Rejects the empty string.
#[nutype(derive(Debug, Clone, AsRef, TryFrom), validate(not_empty))]
pub struct ApiToken(String);

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).unwrap()
}

/// Filter parameters for the transaction list endpoint.
///
/// Falsy values — zero integers, empty strings, unset options — are left
/// out of the query string entirely.
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct TransactionParams {
    /// Maximum number of transactions to return.
    #[builder(default = "DEFAULT_TRANSACTION_LIMIT")]
    pub limit: u32,
    /// Number of transactions to skip from the newest.
    #[builder(default)]
    pub offset: u32,
    #[builder(default, setter(strip_option))]
    pub status: Option<TransactionStatus>,
    /// Earliest date to include, `YYYY-MM-DD`.
    #[builder(default, setter(strip_option))]
    pub start: Option<NaiveDate>,
    /// Latest date to include, `YYYY-MM-DD`.
    #[builder(default, setter(strip_option))]
    pub end: Option<NaiveDate>,
    /// Free-text search over transaction descriptions.
    #[builder(default, setter(strip_option, into))]
    pub search: Option<String>,
}

impl TransactionParams {
    pub fn builder() -> TransactionParamsBuilder {
        TransactionParamsBuilder::default()
    }

    fn to_query(&self) -> String {
        let mut query = QueryString::new();
        query.append("limit", nonzero(self.limit));
        query.append("offset", nonzero(self.offset));
        query.append("status", self.status.map(TransactionStatus::as_str));
        query.append("start", self.start);
        query.append("end", self.end);
        query.append("search", self.search.as_deref().filter(|s| !s.is_empty()));
        query.finish()
    }
}

impl Default for TransactionParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TRANSACTION_LIMIT,
            offset: 0,
            status: None,
            start: None,
            end: None,
            search: None,
        }
    }
}

fn nonzero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

/// Assembles a query string: starts from `?`, appends each present
/// parameter as `&key=value`, then fixes the leading separator. An empty
/// parameter set yields an empty string, so the URL carries no stray `?`.
struct QueryString(String);

impl QueryString {
    fn new() -> Self {
        Self("?".to_string())
    }

    fn append(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.0.push_str(&format!("&{key}={value}"));
        }
    }

    fn finish(self) -> String {
        let query = self.0.replace("?&", "?");
        if query == "?" {
            String::new()
        } else {
            query
        }
    }
}

/// A client for the Mercury API.
///
/// Holds the bearer token and a lazily-populated account cache. The cache
/// makes account lookups mutate the client, so operations that touch it
/// take `&mut self`; share a client across threads only behind external
/// locking.
#[derive(Debug, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct Client {
    token: ApiToken,
    /// Production host unless overridden, e.g. to point at a sandbox.
    #[builder(default = "default_base_url()")]
    base_url: Url,
    /// Per-call timeout applied uniformly to every request.
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
    #[builder(default = "Arc::new(HttpTransport::new())")]
    transport: Arc<dyn Transport>,
    /// Accounts fetched by the first successful `get_accounts` call and
    /// reused for the lifetime of the client. Never invalidated on its
    /// own; `refresh_accounts` discards it explicitly.
    #[builder(setter(skip), default)]
    accounts: Vec<Account>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            transport: Arc::new(HttpTransport::new()),
            accounts: Vec::new(),
        }
    }

    /// Retrieves every account visible to the token. Returns the cached
    /// list when one is present; only the first successful call reaches
    /// the network.
    pub fn get_accounts(&mut self) -> Result<Vec<Account>> {
        if !self.accounts.is_empty() {
            debug!("returning {} cached accounts", self.accounts.len());
            return Ok(self.accounts.clone());
        }

        let url = self.endpoint("accounts")?;
        let response: AccountsResponse = self.get(url)?;
        self.accounts = response.accounts;
        Ok(self.accounts.clone())
    }

    /// Discards the account cache and fetches a fresh list.
    pub fn refresh_accounts(&mut self) -> Result<Vec<Account>> {
        self.accounts.clear();
        self.get_accounts()
    }

    /// Looks up an account by id in the cached list, populating the cache
    /// first if needed. An unknown id is an absence, not an error.
    pub fn get_account_by_id(&mut self, account_id: &str) -> Result<Option<Account>> {
        if self.accounts.is_empty() {
            self.get_accounts()?;
        }

        Ok(self
            .accounts
            .iter()
            .find(|account| account.id == account_id)
            .cloned())
    }

    /// Retrieves the cards issued against an account.
    pub fn get_cards(&self, account_id: &str) -> Result<Vec<Card>> {
        let url = self.endpoint(&format!("account/{account_id}/cards"))?;
        let response: CardsResponse = self.get(url)?;
        Ok(response.cards)
    }

    /// Retrieves transactions for an account, filtered by `params`.
    pub fn get_transactions(
        &self,
        account_id: &str,
        params: &TransactionParams,
    ) -> Result<Vec<Transaction>> {
        let query = params.to_query();
        let url = self.endpoint(&format!("account/{account_id}/transactions{query}"))?;
        let response: TransactionsResponse = self.get(url)?;
        Ok(response.transactions)
    }

    /// Retrieves a single transaction.
    pub fn get_transaction_by_id(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let url = self.endpoint(&format!("account/{account_id}/transaction/{transaction_id}"))?;
        self.get(url)
    }

    /// Retrieves account statements, optionally bounded to a date range.
    pub fn get_statements(
        &self,
        account_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Statement>> {
        let mut query = QueryString::new();
        query.append("start", start);
        query.append("end", end);
        let url = self.endpoint(&format!(
            "account/{account_id}/statements{}",
            query.finish()
        ))?;
        let response: StatementsResponse = self.get(url)?;
        Ok(response.statements)
    }

    /// Creates a transaction from the account. The payload is validated
    /// locally before any network call.
    pub fn create_transaction(
        &self,
        account_id: &str,
        payload: &NewTransactionPayload,
    ) -> Result<Transaction> {
        let url = self.endpoint(&format!("account/{account_id}/transactions"))?;
        self.post(url, payload)
    }

    /// Requests a send-money approval from the account. Only the ACH rail
    /// is supported.
    pub fn request_send_money(
        &self,
        account_id: &str,
        payload: &NewTransactionPayload,
    ) -> Result<TransactionApprovalRequest> {
        let url = self.endpoint(&format!("account/{account_id}/send_money"))?;
        self.post(url, payload)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/v1/{path}"))?)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.perform(Method::Get, url, None)?;
        Self::decode(response)
    }

    fn post<T: DeserializeOwned>(&self, url: Url, payload: &NewTransactionPayload) -> Result<T> {
        if payload.is_empty() {
            return Err(Error::Validation(
                "payload is required for POST requests and cannot be empty".to_string(),
            ));
        }

        let body = serde_json::to_value(payload)?;
        let response = self.perform(Method::Post, url, Some(body))?;
        Self::decode(response)
    }

    fn perform(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        debug!("{method} {url}");
        let request = Request {
            method,
            url,
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.token.as_ref()),
                ),
                ("accept".to_string(), "application/json".to_string()),
            ],
            body,
            timeout: self.timeout,
        };
        Ok(self.transport.perform(&request)?)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !(200..300).contains(&response.status) {
            return Err(Error::Api {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
