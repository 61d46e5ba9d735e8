//! Client for the hosted key-value blob store.
//!
//! The portal keeps all of its state in two string values held by a remote
//! KV HTTP API. This crate wraps `get`/`put` of a named value, normalizing
//! the remote "not found" status to an absent result.

mod client;
mod error;

pub use client::KvClient;
pub use error::KvError;
