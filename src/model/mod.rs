//! Typed records for the API's resources. Pure data; constructed from
//! parsed JSON and compared structurally.

pub mod account;
pub mod card;
pub mod payment;
pub mod routing;
pub mod statement;
pub mod transaction;

pub use self::{account::*, card::*, payment::*, routing::*, statement::*, transaction::*};
