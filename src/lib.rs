//! English-Japanese translation service with a local translation history.
//!
//! The crate is split along the request path:
//!
//! - `gateway`: in-process client that validates input and forwards it to
//!   the proxy endpoint
//! - `server`: the axum proxy endpoint brokering requests to the external
//!   translation provider
//! - `provider`: the outbound provider client and its response mapping
//! - `history`: local persistence of past translations
//! - `error`: the fixed error taxonomy shared by every layer
//! - `language`: the two-language pair model

pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod language;
pub mod provider;
pub mod server;
