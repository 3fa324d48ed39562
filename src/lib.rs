//! A typed client for the [Mercury](https://mercury.com) banking REST API.
//!
//! The crate is a thin request/response binding: [`Client`] performs one
//! synchronous, authenticated HTTP call per operation and decodes the JSON
//! response into the records in [`model`]. There are no retries, no
//! pagination logic, and no background work; failures surface to the caller
//! as a typed [`Error`].
//!
//! ```no_run
//! use mercury_client::{ApiToken, Client};
//!
//! # fn main() -> mercury_client::Result<()> {
//! let token = ApiToken::try_new(std::env::var("MERCURY_API_TOKEN").unwrap())
//!     .expect("token must not be empty");
//! let mut client = Client::new(token);
//!
//! for account in client.get_accounts()? {
//!     println!("{}: {}", account.name, account.available_balance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod transport;

pub use self::{
    client::{ApiToken, Client, ClientBuilder, TransactionParams, TransactionParamsBuilder},
    error::{Error, Result},
};
