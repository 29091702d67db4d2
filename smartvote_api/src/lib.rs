//! Client for the smartvote election data API.
//!
//! A [`Client`] is bound to one election and one response language. It
//! authenticates on construction and exposes one method per API resource,
//! returning the decoded JSON as-is.

mod client;
pub mod config;
mod errors;
mod pacer;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::pacer::{Pacer, TokioPacer};
pub use self::query::{CandidateQuery, FilterValue, ListQuery, PartyQuery, Query, ResponderQuery};
pub use reqwest::Method;
