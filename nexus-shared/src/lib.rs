//! Shared models and the session store core for Community Nexus.
//!
//! Everything in this crate is browser-agnostic: the frontend binds the
//! store to its UI toolkit and supplies a durable storage backend, while
//! tests drive the same code natively.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod store;
